pub mod memory;

use anyhow::Result;
use strum::{Display, EnumIter};

/// Storage width of the values of a single item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
pub enum DfsSimpleType {
    Float,
    #[default]
    Double,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemValues {
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl ItemValues {
    pub fn empty(data_type: DfsSimpleType) -> Self {
        match data_type {
            DfsSimpleType::Float => ItemValues::Float(vec![]),
            DfsSimpleType::Double => ItemValues::Double(vec![]),
        }
    }

    pub fn data_type(&self) -> DfsSimpleType {
        match self {
            ItemValues::Float(_) => DfsSimpleType::Float,
            ItemValues::Double(_) => DfsSimpleType::Double,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ItemValues::Float(v) => v.len(),
            ItemValues::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First value widened to f64. Items are single valued for dfs0 data, so this is
    /// the only value we care about.
    pub fn first_as_f64(&self) -> Option<f64> {
        match self {
            ItemValues::Float(v) => v.first().map(|x| *x as f64),
            ItemValues::Double(v) => v.first().copied(),
        }
    }
}

/// Reusable buffer for reading one item at one timestep.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    pub item: usize,
    pub time_in_seconds: f64,
    pub values: ItemValues,
}

impl ItemData {
    pub fn new(item: usize, data_type: DfsSimpleType) -> Self {
        Self {
            item,
            time_in_seconds: 0.0,
            values: ItemValues::empty(data_type),
        }
    }
}

/// Handle to an open time-series file. The handle is opened and closed by the caller,
/// bulk operations only go through these methods.
pub trait DfsFile {
    // Number of items (channels) in the file
    fn item_count(&self) -> usize;

    // Number of timesteps on the time axis
    fn timestep_count(&self) -> usize;

    // Storage width of the given item, 0-based
    fn item_data_type(&self, item: usize) -> DfsSimpleType;

    // Create a buffer suitable for reading the given item
    fn create_empty_item_data(&self, item: usize) -> ItemData {
        ItemData::new(item, self.item_data_type(item))
    }

    // Move the read cursor back to the first timestep
    fn reset(&mut self) -> Result<()>;

    // Read `item_data.item` at `timestep` into the buffer, replacing its contents
    fn read_item_timestep(&mut self, item_data: &mut ItemData, timestep: usize) -> Result<()>;

    // Append the values of the next item. Items are written in index order within a
    // timestep, and timesteps in the order they are given.
    fn write_item_timestep_next(&mut self, time: f64, values: &ItemValues) -> Result<()>;
}
