use std::fs;
use std::path::Path;

use crate::domain::Grid;
use crate::error::{Error, Result};

/// Reads a header-less, comma-separated grid of integers.
pub fn load_grid(path: &Path) -> Result<Grid> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    println!("Reading grid: {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_grid(&text, path)
}

/// Parses grid text; `origin` is only used in error messages.
pub fn parse_grid(text: &str, origin: &Path) -> Result<Grid> {
    let mut rows: Vec<Vec<i64>> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;

        let row = line
            .split(',')
            .enumerate()
            .map(|(column, field)| {
                let field = field.trim();
                field.parse::<i64>().map_err(|e| Error::Parse {
                    path: origin.to_path_buf(),
                    line: line_no,
                    column: column + 1,
                    message: format!("invalid integer {field:?}: {e}"),
                })
            })
            .collect::<Result<Vec<i64>>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(Error::Parse {
                    path: origin.to_path_buf(),
                    line: line_no,
                    column: row.len().min(first.len()) + 1,
                    message: format!("row has {} fields, expected {}", row.len(), first.len()),
                });
            }
        }
        rows.push(row);
    }

    Ok(Grid::new(rows))
}
