pub mod elmt_search;
pub mod error;
mod geometry;
pub mod tri_search;

pub use crate::elmt_search::elmt_search;
pub use crate::error::{SearchError, SearchResult};
pub use crate::tri_search::tri_search;
