use log::debug;
use ndarray::ArrayView2;

use crate::error::{SearchError, SearchResult};
use crate::geometry::{check_points, Nodes};

/// Find the triangle containing each point `(xi[i], yi[i])`.
///
/// `tri` has exactly 3 columns of 1-based node indices. Unlike a Delaunay based
/// search, the triangulated domain does not have to be convex.
///
/// Returns the 0-based index of the first triangle containing each point, or `None`.
pub fn tri_search(
    x: &[f64],
    y: &[f64],
    tri: ArrayView2<i32>,
    xi: &[f64],
    yi: &[f64],
) -> SearchResult<Vec<Option<usize>>> {
    let nodes = Nodes::new(x, y)?;

    let (num_elmts, num_columns) = tri.dim();
    if num_columns != 3 {
        return Err(SearchError::NotTriangles(num_columns));
    }
    if let Some(((element, column), &node)) =
        tri.indexed_iter().find(|(_, &node)| !nodes.contains(node))
    {
        return Err(SearchError::NodeIndexOutOfRange {
            element,
            column,
            node,
            num_nodes: nodes.len(),
        });
    }
    check_points(xi, yi)?;

    debug!("Searching {} points in {} triangles", xi.len(), num_elmts);

    let mut found: Vec<Option<usize>> = vec![None; xi.len()];
    let mut remaining = xi.len();
    for (j, row) in tri.rows().into_iter().enumerate() {
        if remaining == 0 {
            break;
        }
        let a = row[0] as usize - 1;
        let b = row[1] as usize - 1;
        let c = row[2] as usize - 1;

        // Orientation of each edge relative to the opposite node
        let ca = nodes.cross(a, b, nodes.x[c], nodes.y[c]);
        let cb = nodes.cross(b, c, nodes.x[a], nodes.y[a]);
        let cc = nodes.cross(c, a, nodes.x[b], nodes.y[b]);

        for (i, slot) in found.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            if nodes.cross(a, b, xi[i], yi[i]) * ca < 0.0
                || nodes.cross(b, c, xi[i], yi[i]) * cb < 0.0
                || nodes.cross(c, a, xi[i], yi[i]) * cc < 0.0
            {
                continue;
            }
            *slot = Some(j);
            remaining -= 1;
        }
    }
    Ok(found)
}
