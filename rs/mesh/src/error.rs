use thiserror::Error;

pub type SearchResult<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("Node coordinates must be equal in size: {x} x values, {y} y values")]
    NodeCoordinateMismatch { x: usize, y: usize },

    #[error("Point coordinates must be equal in size: {x} x values, {y} y values")]
    PointCoordinateMismatch { x: usize, y: usize },

    #[error("Element matrix must have at least 3 columns, got {0}")]
    TooFewColumns(usize),

    #[error("Triangle matrix must have exactly 3 columns, got {0}")]
    NotTriangles(usize),

    #[error("Node index {node} of element {element}, column {column} out of range (1..={num_nodes})")]
    NodeIndexOutOfRange {
        element: usize,
        column: usize,
        node: i32,
        num_nodes: usize,
    },
}
