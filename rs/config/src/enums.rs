use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub enum SearchMethod {
    /// Pure triangle meshes, exactly 3 columns
    Triangle,
    /// Mixed triangle/quadrilateral meshes
    #[default]
    Element,
}
