use anyhow::{anyhow, Result};
use config::enums::SearchMethod;
use config::job::{ElementMatrixJob, ElementSearchJob, ElementTableJob, FractileJob, JobConfig};
use dfs_util::{to_element_matrix, to_element_table};
use log::info;
use ndarray::{Array1, Array2};

use crate::io::{
    read_element_table, read_matrix_f64, read_matrix_i32, read_vector_f64, write_element_table,
    write_matrix_i32, write_vector_f64,
};

pub fn run_job(job: &JobConfig) -> Result<()> {
    match job {
        JobConfig::ElementMatrix(job) => run_element_matrix_job(job),
        JobConfig::ElementTable(job) => run_element_table_job(job),
        JobConfig::ElementSearch(job) => run_element_search_job(job),
        JobConfig::Fractile(job) => {
            for (fractile, value) in job.fractiles.iter().zip(run_fractile_job(job)?) {
                println!("{}\t{}", fractile, value);
            }
            Ok(())
        }
    }
}

pub fn run_element_matrix_job(job: &ElementMatrixJob) -> Result<()> {
    info!("Converting element table {}", job.input_path);
    let element_table = read_element_table(&job.input_path)?;
    let element_matrix = to_element_matrix(&element_table)?;
    write_matrix_i32(&job.output_path, &element_matrix)?;
    info!(
        "Wrote {}x{} element matrix to {}",
        element_matrix.nrows(),
        element_matrix.ncols(),
        job.output_path
    );
    Ok(())
}

pub fn run_element_table_job(job: &ElementTableJob) -> Result<()> {
    info!("Converting element matrix {}", job.input_path);
    let element_matrix = read_matrix_i32(&job.input_path)?;
    let element_table = to_element_table(element_matrix.view());
    write_element_table(&job.output_path, &element_table)?;
    info!(
        "Wrote {} elements to {}",
        element_table.len(),
        job.output_path
    );
    Ok(())
}

// Coordinates are stored as a two column matrix of x and y
fn read_coordinates(path: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let coordinates: Array2<f64> = read_matrix_f64(path)?;
    if coordinates.ncols() != 2 {
        return Err(anyhow!(
            "Expected 2 coordinate columns in {}, got {}",
            path,
            coordinates.ncols()
        ));
    }
    Ok((
        coordinates.column(0).to_vec(),
        coordinates.column(1).to_vec(),
    ))
}

/// Writes the 1-based element of each point, NaN where no element contains it.
pub fn run_element_search_job(job: &ElementSearchJob) -> Result<()> {
    let (x, y) = read_coordinates(&job.nodes_path)?;
    let elements = read_matrix_i32(&job.elements_path)?;
    let (xi, yi) = read_coordinates(&job.points_path)?;

    info!(
        "Locating {} points in {} elements ({:?})",
        xi.len(),
        elements.nrows(),
        job.method
    );
    let found = match job.method {
        SearchMethod::Triangle => mesh::tri_search(&x, &y, elements.view(), &xi, &yi)?,
        SearchMethod::Element => mesh::elmt_search(&x, &y, elements.view(), &xi, &yi)?,
    };

    let num_found = found.iter().filter(|f| f.is_some()).count();
    info!("Found {} of {} points", num_found, found.len());

    let output: Array1<f64> = found
        .iter()
        .map(|f| f.map_or(f64::NAN, |element| (element + 1) as f64))
        .collect();
    write_vector_f64(&job.output_path, &output)
}

pub fn run_fractile_job(job: &FractileJob) -> Result<Vec<f64>> {
    let values = read_vector_f64(&job.input_path)?;
    let values = values.to_vec();
    job.fractiles
        .iter()
        .map(|&fractile| utils::fractile::fractile(&values, fractile))
        .collect()
}
