use anyhow::{anyhow, Result};

use super::{DfsFile, DfsSimpleType, ItemData, ItemValues};

#[derive(Debug, Clone, PartialEq)]
pub struct ItemInfo {
    pub name: String,
    pub data_type: DfsSimpleType,
}

impl ItemInfo {
    pub fn new(name: &str, data_type: DfsSimpleType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
        }
    }
}

/// Time-series file kept entirely in memory. Values are appended with the same
/// sequential contract as a file opened for writing.
#[derive(Debug, Default)]
pub struct MemoryDfsFile {
    items: Vec<ItemInfo>,
    times: Vec<f64>,

    // values[timestep][item]
    values: Vec<Vec<ItemValues>>,

    // Item that the next call to `write_item_timestep_next` writes
    next_item: usize,
    read_cursor: usize,
    closed: bool,
}

impl MemoryDfsFile {
    pub fn new(items: Vec<ItemInfo>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[ItemInfo] {
        &self.items
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn value(&self, timestep: usize, item: usize) -> Option<&ItemValues> {
        self.values.get(timestep).and_then(|row| row.get(item))
    }

    /// Index of the next timestep a sequential read would return.
    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    fn check_open(&self) -> Result<()> {
        if self.closed {
            return Err(anyhow!("File is closed"));
        }
        Ok(())
    }
}

impl DfsFile for MemoryDfsFile {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn timestep_count(&self) -> usize {
        self.times.len()
    }

    fn item_data_type(&self, item: usize) -> DfsSimpleType {
        self.items[item].data_type
    }

    fn reset(&mut self) -> Result<()> {
        self.check_open()?;
        self.read_cursor = 0;
        Ok(())
    }

    fn read_item_timestep(&mut self, item_data: &mut ItemData, timestep: usize) -> Result<()> {
        self.check_open()?;
        if item_data.item >= self.items.len() {
            return Err(anyhow!(
                "Item {} out of bound, file has {} items",
                item_data.item,
                self.items.len()
            ));
        }
        let stored = self.value(timestep, item_data.item).ok_or_else(|| {
            anyhow!(
                "No data for item {} at timestep {}",
                item_data.item,
                timestep
            )
        })?;

        // Reuse the buffer allocation when the widths agree
        match (&mut item_data.values, stored) {
            (ItemValues::Float(dst), ItemValues::Float(src)) => {
                dst.clear();
                dst.extend_from_slice(src);
            }
            (ItemValues::Double(dst), ItemValues::Double(src)) => {
                dst.clear();
                dst.extend_from_slice(src);
            }
            (dst, src) => *dst = src.clone(),
        }
        item_data.time_in_seconds = self.times[timestep];
        self.read_cursor = timestep + 1;
        Ok(())
    }

    fn write_item_timestep_next(&mut self, time: f64, values: &ItemValues) -> Result<()> {
        self.check_open()?;
        if self.items.is_empty() {
            return Err(anyhow!("Cannot write to a file without items"));
        }
        if values.is_empty() {
            return Err(anyhow!("No values given for item {}", self.next_item));
        }

        let info = &self.items[self.next_item];
        if values.data_type() != info.data_type {
            return Err(anyhow!(
                "Item {} ({}) stores {} values, got {}",
                self.next_item,
                info.name,
                info.data_type,
                values.data_type()
            ));
        }

        // First item opens a new timestep
        if self.next_item == 0 {
            self.times.push(time);
            self.values.push(Vec::with_capacity(self.items.len()));
        }
        if let Some(row) = self.values.last_mut() {
            row.push(values.clone());
        }
        self.next_item = (self.next_item + 1) % self.items.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_item_file() -> MemoryDfsFile {
        MemoryDfsFile::new(vec![
            ItemInfo::new("water level", DfsSimpleType::Float),
            ItemInfo::new("discharge", DfsSimpleType::Double),
        ])
    }

    #[test]
    fn test_sequential_write_then_read() {
        let mut file = two_item_file();
        file.write_item_timestep_next(0.0, &ItemValues::Float(vec![1.5]))
            .unwrap();
        file.write_item_timestep_next(0.0, &ItemValues::Double(vec![10.0]))
            .unwrap();
        file.write_item_timestep_next(60.0, &ItemValues::Float(vec![2.5]))
            .unwrap();
        file.write_item_timestep_next(60.0, &ItemValues::Double(vec![20.0]))
            .unwrap();

        assert_eq!(file.timestep_count(), 2);
        assert_eq!(file.times(), &[0.0, 60.0]);

        let mut item_data = file.create_empty_item_data(1);
        file.read_item_timestep(&mut item_data, 1).unwrap();
        assert_eq!(item_data.time_in_seconds, 60.0);
        assert_eq!(item_data.values, ItemValues::Double(vec![20.0]));
        assert_eq!(file.read_cursor(), 2);

        file.reset().unwrap();
        assert_eq!(file.read_cursor(), 0);
    }

    #[test]
    fn test_write_rejects_wrong_width() {
        let mut file = two_item_file();
        let result = file.write_item_timestep_next(0.0, &ItemValues::Double(vec![1.0]));
        assert!(result.is_err());
        assert_eq!(file.timestep_count(), 0);
    }

    #[test]
    fn test_read_missing_timestep() {
        let mut file = two_item_file();
        file.write_item_timestep_next(0.0, &ItemValues::Float(vec![1.0]))
            .unwrap();

        // Second item of the first timestep has not been written yet
        let mut item_data = file.create_empty_item_data(1);
        assert!(file.read_item_timestep(&mut item_data, 0).is_err());
        assert!(file.read_item_timestep(&mut item_data, 5).is_err());
    }

    #[test]
    fn test_closed_file() {
        let mut file = two_item_file();
        file.close();
        assert!(file.reset().is_err());
        assert!(file
            .write_item_timestep_next(0.0, &ItemValues::Float(vec![1.0]))
            .is_err());
    }
}
