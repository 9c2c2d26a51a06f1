pub mod connectivity;
pub mod dfs_file;
pub mod error;
pub mod timeseries;

pub use crate::connectivity::{element_node_counts, to_element_matrix, to_element_table, NO_NODE};
pub use crate::dfs_file::memory::{ItemInfo, MemoryDfsFile};
pub use crate::dfs_file::{DfsFile, DfsSimpleType, ItemData, ItemValues};
pub use crate::error::{DfsUtilError, DfsUtilResult};
pub use crate::timeseries::{read_dfs0_data_double, write_dfs0_data_double};
