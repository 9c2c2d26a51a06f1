use dfs_util::{element_node_counts, NO_NODE};
use log::debug;
use ndarray::ArrayView2;

use crate::error::{SearchError, SearchResult};
use crate::geometry::{check_points, Nodes};

/// Find the element containing each point `(xi[i], yi[i])`.
///
/// `elmts` is an element matrix with 1-based node indices and at least 3 columns.
/// Columns after the third may hold [`NO_NODE`] for elements with fewer nodes, so
/// mixed triangle/quadrilateral meshes are supported. Elements are assumed convex.
///
/// Returns the 0-based index of the first element containing each point, or `None`
/// when no element does. Points on an element edge count as inside.
pub fn elmt_search(
    x: &[f64],
    y: &[f64],
    elmts: ArrayView2<i32>,
    xi: &[f64],
    yi: &[f64],
) -> SearchResult<Vec<Option<usize>>> {
    let nodes = Nodes::new(x, y)?;

    let (num_elmts, num_columns) = elmts.dim();
    if num_columns < 3 {
        return Err(SearchError::TooFewColumns(num_columns));
    }
    for ((element, column), &node) in elmts.indexed_iter() {
        let padding = node == NO_NODE && column > 2;
        if !padding && !nodes.contains(node) {
            return Err(SearchError::NodeIndexOutOfRange {
                element,
                column,
                node,
                num_nodes: nodes.len(),
            });
        }
    }
    check_points(xi, yi)?;

    debug!(
        "Searching {} points in {} elements",
        xi.len(),
        num_elmts
    );

    let mut found: Vec<Option<usize>> = vec![None; xi.len()];
    let mut remaining = xi.len();
    for (j, (row, num_nodes)) in elmts
        .rows()
        .into_iter()
        .zip(element_node_counts(elmts))
        .enumerate()
    {
        if remaining == 0 {
            break;
        }
        let elmt_nodes: Vec<usize> = row
            .iter()
            .take(num_nodes)
            .map(|&node| node as usize - 1)
            .collect();

        for (i, slot) in found.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            if is_inside(&nodes, &elmt_nodes, xi[i], yi[i]) {
                *slot = Some(j);
                remaining -= 1;
            }
        }
    }
    Ok(found)
}

// The point must be on the same side of every edge as the node following the edge
fn is_inside(nodes: &Nodes, elmt_nodes: &[usize], px: f64, py: f64) -> bool {
    let n = elmt_nodes.len();
    (0..n).all(|k| {
        let a = elmt_nodes[k];
        let b = elmt_nodes[(k + 1) % n];
        let c = elmt_nodes[(k + 2) % n];
        let ca = nodes.cross(a, b, nodes.x[c], nodes.y[c]);
        let da = nodes.cross(a, b, px, py);
        da * ca >= 0.0
    })
}

#[cfg(test)]
mod tests {
    use ndarray::{array, Array2};

    use super::*;

    //  4 ---- 5 ---- 6
    //  |      | \    |
    //  |  e0  |  \ e2|
    //  |      | e1 \ |
    //  1 ---- 2 ---- 3
    fn mixed_mesh() -> (Vec<f64>, Vec<f64>, Array2<i32>) {
        let x = vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
        let y = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let elmts = array![[1, 2, 5, 4], [2, 3, 5, 0], [3, 6, 5, 0]];
        (x, y, elmts)
    }

    #[test]
    fn test_elmt_search_mixed_mesh() {
        let (x, y, elmts) = mixed_mesh();
        let xi = vec![0.5, 1.2, 1.8, 3.0, 1.5];
        let yi = vec![0.5, 0.2, 0.8, 0.5, -0.1];
        let found = elmt_search(&x, &y, elmts.view(), &xi, &yi).unwrap();
        assert_eq!(found, vec![Some(0), Some(1), Some(2), None, None]);
    }

    #[test]
    fn test_elmt_search_edge_belongs_to_first_element() {
        let (x, y, elmts) = mixed_mesh();
        // On the shared edge between e0 and e1, and on the corner node 5
        let found = elmt_search(&x, &y, elmts.view(), &[1.0, 1.0], &[0.5, 1.0]).unwrap();
        assert_eq!(found, vec![Some(0), Some(0)]);
    }

    #[test]
    fn test_elmt_search_clockwise_element() {
        let x = vec![0.0, 1.0, 0.0];
        let y = vec![0.0, 0.0, 1.0];
        // Same triangle, either orientation
        for elmts in [array![[1, 2, 3]], array![[1, 3, 2]]] {
            let found = elmt_search(&x, &y, elmts.view(), &[0.2, 0.8], &[0.2, 0.8]).unwrap();
            assert_eq!(found, vec![Some(0), None]);
        }
    }

    #[test]
    fn test_elmt_search_no_points() {
        let (x, y, elmts) = mixed_mesh();
        let found = elmt_search(&x, &y, elmts.view(), &[], &[]).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_elmt_search_invalid_input() {
        let (x, y, elmts) = mixed_mesh();
        assert_eq!(
            elmt_search(&x, &y[..5], elmts.view(), &[0.0], &[0.0]).unwrap_err(),
            SearchError::NodeCoordinateMismatch { x: 6, y: 5 }
        );
        assert_eq!(
            elmt_search(&x, &y, elmts.view(), &[0.0, 1.0], &[0.0]).unwrap_err(),
            SearchError::PointCoordinateMismatch { x: 2, y: 1 }
        );
        assert_eq!(
            elmt_search(&x, &y, array![[1, 2]].view(), &[0.0], &[0.0]).unwrap_err(),
            SearchError::TooFewColumns(2)
        );

        // Padding is only allowed after the third node
        let err = elmt_search(&x, &y, array![[1, 2, 0, 0]].view(), &[0.0], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            SearchError::NodeIndexOutOfRange {
                element: 0,
                column: 2,
                node: 0,
                ..
            }
        ));
        // An all padding row is not an element
        let elmts = array![[1, 2, 5, 4], [0, 0, 0, 0]];
        let err = elmt_search(&x, &y, elmts.view(), &[0.5], &[0.5]).unwrap_err();
        assert_eq!(
            err,
            SearchError::NodeIndexOutOfRange {
                element: 1,
                column: 0,
                node: 0,
                num_nodes: 6,
            }
        );
        let err = elmt_search(&x, &y, array![[1, 2, 7]].view(), &[0.0], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            SearchError::NodeIndexOutOfRange { node: 7, .. }
        ));
    }
}
