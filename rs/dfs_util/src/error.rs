use thiserror::Error;

pub type DfsUtilResult<T> = std::result::Result<T, DfsUtilError>;

#[derive(Debug, Error)]
pub enum DfsUtilError {
    /// Number of times does not match number of data rows.
    #[error("Timestep count mismatch: {times} times but {rows} data rows")]
    TimestepCountMismatch { times: usize, rows: usize },

    /// Number of items in the file does not match number of data columns.
    #[error("Item count mismatch: file has {items} items but data has {columns} columns")]
    ItemCountMismatch { items: usize, columns: usize },

    /// Node indices are 1-based and 0 is reserved for padding.
    #[error("Invalid node index {node} at element {element}, position {position}")]
    InvalidNodeIndex {
        element: usize,
        position: usize,
        node: i32,
    },

    /// Failure raised by the underlying file handle.
    #[error(transparent)]
    Dataset(#[from] anyhow::Error),
}
