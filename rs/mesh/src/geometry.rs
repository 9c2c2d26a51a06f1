use crate::error::{SearchError, SearchResult};

/// Node coordinates of a 2D mesh. Node `n` (1-based) is at `(x[n - 1], y[n - 1])`.
pub(crate) struct Nodes<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
}

impl<'a> Nodes<'a> {
    pub fn new(x: &'a [f64], y: &'a [f64]) -> SearchResult<Self> {
        if x.len() != y.len() {
            return Err(SearchError::NodeCoordinateMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn contains(&self, node: i32) -> bool {
        node >= 1 && node as usize <= self.len()
    }

    /// Cross product of `(b - a, (px, py) - a)`, with `a` and `b` 0-based node indices.
    /// The sign tells on which side of the line through `a` and `b` the point lies.
    pub fn cross(&self, a: usize, b: usize, px: f64, py: f64) -> f64 {
        (self.x[b] - self.x[a]) * (py - self.y[a]) - (self.y[b] - self.y[a]) * (px - self.x[a])
    }
}

pub(crate) fn check_points(xi: &[f64], yi: &[f64]) -> SearchResult<()> {
    if xi.len() != yi.len() {
        return Err(SearchError::PointCoordinateMismatch {
            x: xi.len(),
            y: yi.len(),
        });
    }
    Ok(())
}
