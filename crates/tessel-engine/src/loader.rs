//! Reading and writing the on-disk simulation formats.
//!
//! A simulation is described by two files:
//!
//! - a `.sim` metadata file with one `Key=Value` pair per line (`#`
//!   comments and blank lines are ignored, keys and values are trimmed);
//! - a CSV grid whose first line is `rows,cols`, followed by `rows` lines
//!   of `cols` comma-separated state codes.
//!
//! The `.sim` file names its grid with the `InitialStates` key, resolved
//! relative to the `.sim` file's directory.
//!
//! ```
//! use tessel_engine::loader::{parse_csv_grid, parse_sim};
//!
//! let meta = parse_sim("# glider\nType = GameOfLife\nEdgePolicy=Wrap\n").unwrap();
//! assert_eq!(meta.type_name().unwrap(), "GameOfLife");
//!
//! let rows = parse_csv_grid("2,3\n0,1,0\n1,1,1\n").unwrap();
//! assert_eq!(rows, vec![vec![0, 1, 0], vec![1, 1, 1]]);
//! ```

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tessel_core::{Metadata, SimulationError, State};
use tessel_grid::GridSnapshot;

use crate::registry::Registry;
use crate::simulation::Simulation;

// ── LoadError ────────────────────────────────────────────────────

/// Errors from reading or writing simulation files.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read or written.
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file contents are not in the expected format.
    Format {
        /// 1-based line number of the problem.
        line: usize,
        /// Description of the problem.
        reason: String,
    },
    /// The parsed configuration was rejected by the registry.
    Simulation(SimulationError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Format { line, reason } => write!(f, "line {line}: {reason}"),
            Self::Simulation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Simulation(e) => Some(e),
            Self::Format { .. } => None,
        }
    }
}

impl From<SimulationError> for LoadError {
    fn from(e: SimulationError) -> Self {
        Self::Simulation(e)
    }
}

fn format_error(line: usize, reason: impl Into<String>) -> LoadError {
    LoadError::Format {
        line,
        reason: reason.into(),
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── .sim metadata ────────────────────────────────────────────────

/// Parse `.sim` contents into [`Metadata`].
pub fn parse_sim(text: &str) -> Result<Metadata, LoadError> {
    let mut meta = Metadata::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(format_error(idx + 1, format!("expected Key=Value, found '{line}'")));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(format_error(idx + 1, "empty key"));
        }
        if meta.insert(key, value.trim()).is_some() {
            return Err(format_error(idx + 1, format!("duplicate key '{key}'")));
        }
    }
    Ok(meta)
}

/// Read and parse a `.sim` file.
pub fn read_sim_file(path: impl AsRef<Path>) -> Result<Metadata, LoadError> {
    parse_sim(&read_file(path.as_ref())?)
}

// ── CSV grids ────────────────────────────────────────────────────

fn parse_row(line_no: usize, line: &str) -> Result<Vec<i64>, LoadError> {
    line.split(',')
        .map(|field| {
            let field = field.trim();
            field
                .parse::<i64>()
                .map_err(|_| format_error(line_no, format!("'{field}' is not an integer")))
        })
        .collect()
}

/// Parse CSV grid contents into rows of state codes.
///
/// The header must match the body exactly: `rows` non-empty lines of
/// `cols` values each. Blank lines are skipped.
pub fn parse_csv_grid(text: &str) -> Result<Vec<Vec<State>>, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, l)| (idx + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| format_error(1, "missing 'rows,cols' header"))?;
    let dims = parse_row(header_no, header)?;
    let (rows, cols) = match dims[..] {
        [r, c] if r > 0 && c > 0 => (r as usize, c as usize),
        _ => {
            return Err(format_error(
                header_no,
                format!("header must be two positive integers 'rows,cols', found '{header}'"),
            ))
        }
    };

    let mut grid = Vec::new();
    let mut last_line = header_no;
    for (line_no, line) in lines {
        last_line = line_no;
        if grid.len() == rows {
            return Err(format_error(line_no, format!("expected {rows} rows, found more")));
        }
        let row = parse_row(line_no, line)?;
        if row.len() != cols {
            return Err(format_error(
                line_no,
                format!("expected {cols} values, found {}", row.len()),
            ));
        }
        let row = row
            .into_iter()
            .map(|v| {
                State::try_from(v)
                    .map_err(|_| format_error(line_no, format!("state {v} out of range")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        grid.push(row);
    }
    if grid.len() != rows {
        return Err(format_error(
            last_line,
            format!("expected {rows} rows, found {}", grid.len()),
        ));
    }
    Ok(grid)
}

/// Read and parse a CSV grid file.
pub fn read_csv_grid(path: impl AsRef<Path>) -> Result<Vec<Vec<State>>, LoadError> {
    parse_csv_grid(&read_file(path.as_ref())?)
}

/// Write a snapshot in the CSV grid format.
pub fn write_grid_csv<W: Write>(mut writer: W, snapshot: &GridSnapshot) -> io::Result<()> {
    writeln!(writer, "{},{}", snapshot.rows(), snapshot.cols())?;
    for row in snapshot.to_rows() {
        let line: Vec<String> = row.iter().map(State::to_string).collect();
        writeln!(writer, "{}", line.join(","))?;
    }
    writer.flush()
}

/// Save a snapshot to `path` in the CSV grid format.
pub fn save_grid_csv(path: impl AsRef<Path>, snapshot: &GridSnapshot) -> Result<(), LoadError> {
    let path = path.as_ref();
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(io_err)?;
    write_grid_csv(io::BufWriter::new(file), snapshot).map_err(io_err)?;
    log::info!(
        "saved generation {} ({}x{}) to {}",
        snapshot.generation(),
        snapshot.rows(),
        snapshot.cols(),
        path.display()
    );
    Ok(())
}

// ── Whole simulations ────────────────────────────────────────────

/// Load a simulation from a `.sim` file.
///
/// Reads the metadata, resolves `InitialStates` relative to the `.sim`
/// file, parses that grid and builds the simulation through `registry`.
pub fn load_simulation(
    path: impl AsRef<Path>,
    registry: &Registry,
) -> Result<Simulation, LoadError> {
    let path = path.as_ref();
    let metadata = read_sim_file(path)?;
    let states = metadata.require(Metadata::INITIAL_STATES)?;
    let grid_path = path
        .parent()
        .map_or_else(|| PathBuf::from(states), |dir| dir.join(states));
    let rows = read_csv_grid(&grid_path)?;
    let sim = registry.load(&metadata, rows)?;
    log::info!(
        "loaded {} from {} ({} grid)",
        sim.type_name(),
        path.display(),
        sim.grid().dims()
    );
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_line(err: LoadError) -> usize {
        match err {
            LoadError::Format { line, .. } => line,
            other => panic!("expected Format, got {other:?}"),
        }
    }

    #[test]
    fn sim_skips_comments_and_blank_lines() {
        let meta = parse_sim("\n# a comment\n  Type =  Percolation \n\nSeed=4\n").unwrap();
        let pairs: Vec<_> = meta.iter().collect();
        assert_eq!(pairs, vec![("Type", "Percolation"), ("Seed", "4")]);
    }

    #[test]
    fn sim_value_may_contain_equals() {
        let meta = parse_sim("Title=a=b").unwrap();
        assert_eq!(meta.get("Title"), Some("a=b"));
    }

    #[test]
    fn sim_rejects_missing_separator() {
        assert_eq!(format_line(parse_sim("Type=GameOfLife\nbogus\n").unwrap_err()), 2);
    }

    #[test]
    fn sim_rejects_duplicate_key() {
        let err = parse_sim("Type=GameOfLife\nType=WaTor\n").unwrap_err();
        assert!(err.to_string().contains("duplicate key 'Type'"));
    }

    #[test]
    fn csv_parses_with_whitespace() {
        let rows = parse_csv_grid("\n 2 , 2 \n1, 0\n0 ,2\n").unwrap();
        assert_eq!(rows, vec![vec![1, 0], vec![0, 2]]);
    }

    #[test]
    fn csv_rejects_bad_header() {
        assert_eq!(format_line(parse_csv_grid("3\n0,0,0\n").unwrap_err()), 1);
        assert_eq!(format_line(parse_csv_grid("0,3\n").unwrap_err()), 1);
        assert!(parse_csv_grid("").is_err());
    }

    #[test]
    fn csv_rejects_wrong_column_count() {
        assert_eq!(format_line(parse_csv_grid("2,2\n0,0\n0,0,0\n").unwrap_err()), 3);
    }

    #[test]
    fn csv_rejects_row_count_mismatch() {
        assert!(parse_csv_grid("3,1\n0\n0\n").is_err());
        assert_eq!(format_line(parse_csv_grid("1,1\n0\n1\n").unwrap_err()), 3);
    }

    #[test]
    fn csv_rejects_non_integer() {
        let err = parse_csv_grid("1,2\n0,x\n").unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn simulation_error_is_source() {
        use std::error::Error;
        let err = LoadError::from(SimulationError::MissingArgument { key: "Rule".into() });
        assert!(err.source().is_some());
    }
}
