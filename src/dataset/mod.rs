//! Plain-text dataset loading.
//!
//! A dataset directory holds whitespace/newline-delimited files:
//!
//! - `c.txt` — one capacity per line (K lines).
//! - `w.txt` — one row per knapsack of N whitespace-separated weights.
//! - `p.txt` — profits, same shape as `w.txt`.
//! - `s.txt` — optional reference solution: a single line of N
//!   1-based knapsack indices.
//!
//! Missing required files, unparseable numbers, and shape mismatches
//! are all hard failures raised before any optimization starts.

use crate::model::{Instance, ModelError};
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a dataset directory.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A dataset file could not be read.
    #[error("failed to read {file}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },

    /// A dataset file contains a token that is not a number.
    #[error("{file}:{line}: invalid number {token:?}")]
    Parse {
        file: String,
        line: usize,
        token: String,
    },

    /// The loaded arrays are dimensionally inconsistent.
    #[error(transparent)]
    Shape(#[from] ModelError),
}

/// Loads an [`Instance`] from a dataset directory.
pub fn load_dir(path: impl AsRef<Path>) -> Result<Instance, DatasetError> {
    let base = path.as_ref();

    let capacities = read_lines(&base.join("c.txt"))?
        .iter()
        .map(|(line, text)| parse_row::<f64>("c.txt", *line, text).map(|row| row[0]))
        .collect::<Result<Vec<_>, _>>()?;
    let weights = read_matrix(base, "w.txt")?;
    let profits = read_matrix(base, "p.txt")?;

    let solution_path = base.join("s.txt");
    let reference = if solution_path.exists() {
        let lines = read_lines(&solution_path)?;
        match lines.first() {
            Some((line, text)) => Some(parse_row::<usize>("s.txt", *line, text)?),
            None => None,
        }
    } else {
        None
    };

    Ok(Instance::new(capacities, weights, profits, reference)?)
}

/// Non-empty lines of a file, with their 1-based line numbers.
fn read_lines(path: &Path) -> Result<Vec<(usize, String)>, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        file: path.display().to_string(),
        source,
    })?;
    Ok(text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l.to_string()))
        .collect())
}

fn read_matrix(base: &Path, name: &str) -> Result<Vec<Vec<f64>>, DatasetError> {
    read_lines(&base.join(name))?
        .iter()
        .map(|(line, text)| parse_row::<f64>(name, *line, text))
        .collect()
}

fn parse_row<T: std::str::FromStr>(
    file: &str,
    line: usize,
    text: &str,
) -> Result<Vec<T>, DatasetError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<T>().map_err(|_| DatasetError::Parse {
                file: file.to_string(),
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::{AnnealConfig, Annealer};
    use std::fs;
    use std::path::PathBuf;

    fn demo_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("datasets/demo")
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "knapsack-anneal-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_demo_dataset() {
        let instance = load_dir(demo_dir()).unwrap();
        assert_eq!(instance.num_knapsacks(), 2);
        assert_eq!(instance.num_objects(), 4);
        assert_eq!(instance.capacities(), &[10.0, 8.0]);
        assert_eq!(instance.reference(), Some(&[2, 1, 2, 1][..]));
        assert_eq!(instance.reference_profit(), Some(28.0));
    }

    #[test]
    fn test_anneal_matches_demo_reference() {
        let instance = load_dir(demo_dir()).unwrap();
        let config = AnnealConfig::default().with_total_steps(10_000).with_seed(42);

        let result = Annealer::run(&instance, &config);

        assert!(instance.is_feasible(&result.best));
        assert!(
            result.best_profit >= instance.reference_profit().unwrap() - 1e-9,
            "expected the anneal to reach the reference profit, got {}",
            result.best_profit
        );
    }

    #[test]
    fn test_missing_capacities_file_is_io_error() {
        let dir = scratch_dir("missing-c");
        fs::write(dir.join("w.txt"), "1 2\n").unwrap();
        fs::write(dir.join("p.txt"), "1 2\n").unwrap();

        let err = load_dir(&dir).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn test_malformed_token_reports_file_and_line() {
        let dir = scratch_dir("bad-token");
        fs::write(dir.join("c.txt"), "10\n").unwrap();
        fs::write(dir.join("w.txt"), "1 2\n").unwrap();
        fs::write(dir.join("p.txt"), "1 oops\n").unwrap();

        let err = load_dir(&dir).unwrap_err();
        match err {
            DatasetError::Parse { file, line, token } => {
                assert_eq!(file, "p.txt");
                assert_eq!(line, 1);
                assert_eq!(token, "oops");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_mismatch_is_surfaced() {
        let dir = scratch_dir("bad-shape");
        fs::write(dir.join("c.txt"), "10\n10\n").unwrap();
        fs::write(dir.join("w.txt"), "1 2\n").unwrap();
        fs::write(dir.join("p.txt"), "1 2\n3 4\n").unwrap();

        let err = load_dir(&dir).unwrap_err();
        assert!(
            matches!(err, DatasetError::Shape(ModelError::WeightRows { .. })),
            "got {err:?}"
        );
    }

    #[test]
    fn test_solution_file_is_optional() {
        let dir = scratch_dir("no-solution");
        fs::write(dir.join("c.txt"), "10\n").unwrap();
        fs::write(dir.join("w.txt"), "1 2\n").unwrap();
        fs::write(dir.join("p.txt"), "3 4\n").unwrap();

        let instance = load_dir(&dir).unwrap();
        assert!(instance.reference().is_none());
        assert!(instance.reference_profit().is_none());
    }
}
