//! Per-axis delimited text files.

use crate::error::{ExportError, ExportResult};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use trajkit_core::Trajectory;

pub const DEFAULT_DELIMITER: char = ',';

const DEFAULT_OUTPUT_DIRECTORY: &str = "Export";

/// Coordinate axis, used to name the per-axis files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}

/// Paths written by one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub x: PathBuf,
    pub y: PathBuf,
    pub z: PathBuf,
    /// Number of values in each row.
    pub points: usize,
}

/// Rejects delimiters that could be confused with numeric text or row breaks.
pub fn validate_delimiter(delimiter: char) -> ExportResult<()> {
    let ambiguous = delimiter.is_ascii_digit()
        || matches!(delimiter, '.' | '-' | '+' | 'e' | 'E' | '\n' | '\r');
    if ambiguous {
        Err(ExportError::InvalidDelimiter(delimiter))
    } else {
        Ok(())
    }
}

fn validate_base_name(base_name: &str) -> ExportResult<()> {
    if base_name.is_empty() || base_name.contains(['/', '\\']) {
        Err(ExportError::InvalidBaseName(base_name.to_string()))
    } else {
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Exports trajectories as one delimited row per axis.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_directory: PathBuf,
    delimiter: char,
}

impl CsvExporter {
    /// Creates an exporter writing into `output_directory` with `,` separators.
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Uses `delimiter` between values instead of `,`.
    pub fn with_delimiter(mut self, delimiter: char) -> ExportResult<Self> {
        validate_delimiter(delimiter)?;
        self.delimiter = delimiter;
        Ok(self)
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Path of the file holding `axis` for `base_name`, e.g. `Export/Circle SetX.csv`.
    pub fn axis_path(&self, base_name: &str, axis: Axis) -> PathBuf {
        self.output_directory.join(format!("{}{}.csv", base_name, axis))
    }

    /// Export a trajectory under `base_name`.
    pub fn export(&self, base_name: &str, trajectory: &Trajectory) -> ExportResult<ExportedFiles> {
        let (xs, ys, zs) = trajectory.to_axes();
        self.export_axes(base_name, &xs, &ys, &zs)
    }

    /// Export three matched axis sequences under `base_name`.
    ///
    /// Sequences of unequal length or containing non-finite values are rejected
    /// before anything is written. Rows are staged in `.tmp` files and only
    /// renamed into place once all three are written, so a failed export
    /// leaves any previous files for `base_name` untouched.
    pub fn export_axes(
        &self,
        base_name: &str,
        xs: &[f64],
        ys: &[f64],
        zs: &[f64],
    ) -> ExportResult<ExportedFiles> {
        validate_base_name(base_name)?;
        Trajectory::from_axes(xs, ys, zs)?.check_finite()?;

        fs::create_dir_all(&self.output_directory)?;

        let files = ExportedFiles {
            x: self.axis_path(base_name, Axis::X),
            y: self.axis_path(base_name, Axis::Y),
            z: self.axis_path(base_name, Axis::Z),
            points: xs.len(),
        };
        let rows = [(&files.x, xs), (&files.y, ys), (&files.z, zs)];
        let staged: Vec<PathBuf> = rows.iter().map(|(path, _)| staging_path(path)).collect();

        let written = rows
            .iter()
            .zip(&staged)
            .try_for_each(|((_, values), tmp)| self.write_row(tmp, values))
            .and_then(|()| {
                rows.iter().zip(&staged).try_for_each(|((path, _), tmp)| {
                    fs::rename(tmp, path).map_err(ExportError::from)
                })
            });
        if let Err(e) = written {
            for tmp in &staged {
                let _ = fs::remove_file(tmp);
            }
            return Err(e);
        }

        info!(
            "Exported {} points as '{}' to {}",
            files.points,
            base_name,
            self.output_directory.display()
        );
        Ok(files)
    }

    /// Reads back a trajectory previously written under `base_name`.
    pub fn import(&self, base_name: &str) -> ExportResult<Trajectory> {
        validate_base_name(base_name)?;

        let xs = self.read_row(&self.axis_path(base_name, Axis::X))?;
        let ys = self.read_row(&self.axis_path(base_name, Axis::Y))?;
        let zs = self.read_row(&self.axis_path(base_name, Axis::Z))?;

        let trajectory = Trajectory::from_axes(&xs, &ys, &zs)?;
        debug!("Imported {} points as '{}'", trajectory.len(), base_name);
        Ok(trajectory)
    }

    fn write_row(&self, path: &Path, values: &[f64]) -> ExportResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                write!(writer, "{}", self.delimiter)?;
            }
            // Display for f64 is the shortest text that parses back to the same value.
            write!(writer, "{}", value)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    fn read_row(&self, path: &Path) -> ExportResult<Vec<f64>> {
        let content = fs::read_to_string(path)?;
        let row = content.trim_end_matches(['\n', '\r']);
        if row.trim().is_empty() {
            return Ok(Vec::new());
        }

        row.split(self.delimiter)
            .enumerate()
            .map(|(field, text)| {
                text.trim()
                    .parse::<f64>()
                    .map_err(|e| ExportError::Parse {
                        path: path.to_path_buf(),
                        field,
                        reason: e.to_string(),
                    })
            })
            .collect()
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIRECTORY)
    }
}
