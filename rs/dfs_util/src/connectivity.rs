use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::error::{DfsUtilError, DfsUtilResult};

/// Marks "no further nodes in element" in an element matrix.
pub const NO_NODE: i32 = 0;

/// Convert a dfsu element table to an element matrix.
///
/// With mixed elements (triangles/quadrilaterals) the elements do not have the same
/// number of nodes. The matrix gets as many columns as the element with the most
/// nodes, and shorter elements are padded with [`NO_NODE`].
///
/// Node indices are 1-based. A node index below 1 cannot be told apart from padding
/// once in the matrix, so it is rejected.
pub fn to_element_matrix(element_table: &[Vec<i32>]) -> DfsUtilResult<Array2<i32>> {
    for (element, nodes) in element_table.iter().enumerate() {
        if let Some(position) = nodes.iter().position(|&node| node < 1) {
            return Err(DfsUtilError::InvalidNodeIndex {
                element,
                position,
                node: nodes[position],
            });
        }
    }

    let max_nodes = element_table.iter().map(|nodes| nodes.len()).max().unwrap_or(0);
    debug!(
        "Building element matrix of {} elements with up to {} nodes",
        element_table.len(),
        max_nodes
    );

    // Zero initialized, which is already the padding value
    let mut element_matrix = Array2::<i32>::zeros((element_table.len(), max_nodes));
    for (mut row, nodes) in element_matrix.rows_mut().into_iter().zip(element_table) {
        for (cell, &node) in row.iter_mut().zip(nodes) {
            *cell = node;
        }
    }
    Ok(element_matrix)
}

/// Number of nodes in each element of an element matrix, i.e. the number of leading
/// entries before the first [`NO_NODE`].
pub fn element_node_counts(element_matrix: ArrayView2<i32>) -> Vec<usize> {
    element_matrix
        .rows()
        .into_iter()
        .map(|row| row.iter().take_while(|&&node| node != NO_NODE).count())
        .collect()
}

/// Convert an element matrix back to a dfsu element table.
///
/// Each row is cut at its first [`NO_NODE`]. A zero followed by further nodes is
/// treated as the end of the element, so `[1, 0, 3]` becomes `[1]`.
pub fn to_element_table(element_matrix: ArrayView2<i32>) -> Vec<Vec<i32>> {
    element_matrix
        .rows()
        .into_iter()
        .zip(element_node_counts(element_matrix))
        .map(|(row, num_nodes)| row.iter().take(num_nodes).copied().collect())
        .collect()
}
