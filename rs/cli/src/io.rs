use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{anyhow, Context, Result};
use ndarray::{Array1, Array2};

/// Read a text element table. Each line is one element of whitespace separated
/// node indices, lines starting with `#` are skipped. A blank line between elements
/// is an element without nodes; blank lines at the end of the file are ignored.
pub fn read_element_table(path: &str) -> Result<Vec<Vec<i32>>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let lines: Vec<&str> = content.lines().collect();
    let num_lines = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    lines[..num_lines]
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with('#'))
        .map(|(line_no, line)| {
            line.split_whitespace()
                .map(|token| {
                    token.parse::<i32>().map_err(|e| {
                        anyhow!("{}:{}: invalid node index {:?}: {}", path, line_no + 1, token, e)
                    })
                })
                .collect::<Result<Vec<i32>>>()
        })
        .collect()
}

pub fn write_element_table(path: &str, element_table: &[Vec<i32>]) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
    let mut writer = BufWriter::new(&mut file);
    for nodes in element_table {
        let line = nodes
            .iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read an integer matrix. Matrices saved as doubles (the default numeric class of
/// the host environment) are accepted when every value is an integer in `i32` range.
pub fn read_matrix_i32(path: &str) -> Result<Array2<i32>> {
    if let Ok(matrix) = ndarray_npy::read_npy::<_, Array2<i32>>(path) {
        return Ok(matrix);
    }

    let matrix = read_matrix_f64(path)?;
    if let Some(((row, column), value)) = matrix.indexed_iter().find(|(_, &value)| {
        !value.is_finite()
            || value.fract() != 0.0
            || value < i32::MIN as f64
            || value > i32::MAX as f64
    }) {
        return Err(anyhow!(
            "{}: value {} at ({}, {}) is not an integer index",
            path,
            value,
            row,
            column
        ));
    }
    Ok(matrix.mapv(|value| value as i32))
}

pub fn read_matrix_f64(path: &str) -> Result<Array2<f64>> {
    ndarray_npy::read_npy(path).with_context(|| format!("Failed to read {}", path))
}

pub fn read_vector_f64(path: &str) -> Result<Array1<f64>> {
    ndarray_npy::read_npy(path).with_context(|| format!("Failed to read {}", path))
}

pub fn write_matrix_i32(path: &str, matrix: &Array2<i32>) -> Result<()> {
    ndarray_npy::write_npy(path, matrix).with_context(|| format!("Failed to write {}", path))
}

pub fn write_vector_f64(path: &str, vector: &Array1<f64>) -> Result<()> {
    ndarray_npy::write_npy(path, vector).with_context(|| format!("Failed to write {}", path))
}
