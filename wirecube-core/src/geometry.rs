/// Wireframe cube geometry
use nalgebra::Point3;

use crate::transform::RotationStep;

/// Number of points in the cube path
pub const PATH_LEN: usize = 16;

/// Single continuous path over all twelve cube edges.
///
/// Three edges are walked back and forth (indices 6-8, 9-11 and 12-14) so the
/// path never has to jump.
const CUBE_PATH: [[f64; 3]; PATH_LEN] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
];

/// Ordered point path whose consecutive pairs are the drawn edges
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    points: [Point3<f64>; PATH_LEN],
}

impl Wireframe {
    /// The canonical, unrotated unit cube
    pub fn cube() -> Self {
        Self {
            points: CUBE_PATH.map(|[x, y, z]| Point3::new(x, y, z)),
        }
    }

    pub fn points(&self) -> &[Point3<f64>; PATH_LEN] {
        &self.points
    }

    /// Consecutive point pairs, in path order
    pub fn segments(&self) -> impl Iterator<Item = (&Point3<f64>, &Point3<f64>)> + '_ {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Rotate every point in place
    pub fn rotate(&mut self, step: &RotationStep) {
        for point in &mut self.points {
            *point = step.apply(point);
        }
    }

    /// Restore the canonical orientation
    pub fn reset(&mut self) {
        *self = Self::cube();
    }
}

impl Default for Wireframe {
    fn default() -> Self {
        Self::cube()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::rotate_y;
    use std::collections::HashSet;

    type Edge = ([i32; 3], [i32; 3]);

    fn key(p: &Point3<f64>) -> [i32; 3] {
        [p.x.round() as i32, p.y.round() as i32, p.z.round() as i32]
    }

    fn undirected(a: [i32; 3], b: [i32; 3]) -> Edge {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// The twelve edges of the [-1, 1] cube: corner pairs differing in one axis
    fn cube_edges() -> HashSet<Edge> {
        let mut corners = Vec::new();
        for x in [-1, 1] {
            for y in [-1, 1] {
                for z in [-1, 1] {
                    corners.push([x, y, z]);
                }
            }
        }
        let mut edges = HashSet::new();
        for a in &corners {
            for b in &corners {
                let differing = (0..3).filter(|&i| a[i] != b[i]).count();
                if differing == 1 {
                    edges.insert(undirected(*a, *b));
                }
            }
        }
        edges
    }

    #[test]
    fn test_path_covers_every_cube_edge() {
        let wireframe = Wireframe::cube();
        let segments: Vec<Edge> = wireframe
            .segments()
            .map(|(a, b)| undirected(key(a), key(b)))
            .collect();
        assert_eq!(segments.len(), PATH_LEN - 1);

        let expected = cube_edges();
        assert_eq!(expected.len(), 12);
        let drawn: HashSet<Edge> = segments.iter().copied().collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_repeats_are_retraces() {
        let wireframe = Wireframe::cube();
        let segments: Vec<Edge> = wireframe
            .segments()
            .map(|(a, b)| undirected(key(a), key(b)))
            .collect();

        let mut seen = HashSet::new();
        let mut repeats = Vec::new();
        for (i, edge) in segments.iter().enumerate() {
            if !seen.insert(*edge) {
                repeats.push(i);
            }
        }
        assert_eq!(repeats.len(), 3);
        for i in repeats {
            assert_eq!(segments[i], segments[i - 1]);
        }
    }

    #[test]
    fn test_points_at_cube_corners() {
        for p in Wireframe::cube().points() {
            assert_eq!(p.x.abs(), 1.0);
            assert_eq!(p.y.abs(), 1.0);
            assert_eq!(p.z.abs(), 1.0);
        }
    }

    #[test]
    fn test_rotate_and_reset() {
        let mut wireframe = Wireframe::cube();
        wireframe.rotate(&RotationStep::new(0.0, 0.5));
        let expected = rotate_y(&Point3::new(1.0, -1.0, -1.0), 0.5);
        assert!((wireframe.points()[1] - expected).norm() < 1e-12);

        wireframe.reset();
        assert_eq!(wireframe, Wireframe::cube());
    }
}
