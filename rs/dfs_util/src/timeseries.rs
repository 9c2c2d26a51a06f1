use anyhow::anyhow;
use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::dfs_file::{DfsFile, DfsSimpleType, ItemData, ItemValues};
use crate::error::{DfsUtilError, DfsUtilResult};

/// Bulk read the times and data of a dfs0 file into one matrix.
///
/// The first column holds the time of each timestep in seconds, followed by one column
/// per item. There is one row per timestep. All item values are converted to f64, and
/// only the first value of each item is used.
///
/// The read cursor of the file is consumed; call `reset` before reading it again.
pub fn read_dfs0_data_double(file: &mut impl DfsFile) -> DfsUtilResult<Array2<f64>> {
    let item_count = file.item_count();
    let timestep_count = file.timestep_count();
    debug!(
        "Reading {} timesteps of {} items",
        timestep_count, item_count
    );

    let mut res = Array2::<f64>::zeros((timestep_count, item_count + 1));

    // Preload one buffer per item
    let mut item_datas: Vec<ItemData> = (0..item_count)
        .map(|j| file.create_empty_item_data(j))
        .collect();
    file.reset()?;

    for i in 0..timestep_count {
        for (j, item_data) in item_datas.iter_mut().enumerate() {
            file.read_item_timestep(item_data, i)?;
            // Time is the same for all items of a timestep
            if j == 0 {
                res[[i, 0]] = item_data.time_in_seconds;
            }
            res[[i, j + 1]] = item_data.values.first_as_f64().ok_or_else(|| {
                DfsUtilError::Dataset(anyhow!("Item {} has no value at timestep {}", j, i))
            })?;
        }
    }
    Ok(res)
}

/// Bulk write the times and data of a dfs0 file.
///
/// `data` has one column per item in the file and one row per entry in `times`. Both
/// dimensions are checked before anything is written. Values of `Float` items are
/// narrowed to f32.
///
/// Writes are not transactional: if the file fails halfway, the timesteps written so
/// far stay in the file.
pub fn write_dfs0_data_double(
    file: &mut impl DfsFile,
    times: &[f64],
    data: ArrayView2<f64>,
) -> DfsUtilResult<()> {
    let item_count = file.item_count();
    let (num_rows, num_columns) = data.dim();

    if times.len() != num_rows {
        return Err(DfsUtilError::TimestepCountMismatch {
            times: times.len(),
            rows: num_rows,
        });
    }
    if item_count != num_columns {
        return Err(DfsUtilError::ItemCountMismatch {
            items: item_count,
            columns: num_columns,
        });
    }

    let is_float_item: Vec<bool> = (0..item_count)
        .map(|j| file.item_data_type(j) == DfsSimpleType::Float)
        .collect();
    debug!(
        "Writing {} timesteps of {} items ({} float items)",
        times.len(),
        item_count,
        is_float_item.iter().filter(|f| **f).count()
    );

    let mut fdata = ItemValues::Float(vec![0.0]);
    let mut ddata = ItemValues::Double(vec![0.0]);

    for (i, &time) in times.iter().enumerate() {
        for (j, &is_float) in is_float_item.iter().enumerate() {
            let values = if is_float {
                if let ItemValues::Float(v) = &mut fdata {
                    v[0] = data[[i, j]] as f32;
                }
                &fdata
            } else {
                if let ItemValues::Double(v) = &mut ddata {
                    v[0] = data[[i, j]];
                }
                &ddata
            };
            file.write_item_timestep_next(time, values)?;
        }
    }
    Ok(())
}
