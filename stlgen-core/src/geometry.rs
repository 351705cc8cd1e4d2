/// Geometry primitives for triangle soup meshes
use nalgebra::{Point3, Vector3};

/// Compute the geometric normal of the triangle `(p1, p2, p3)`.
///
/// The result is `(p2 - p1) x (p3 - p1)` and is deliberately left
/// unnormalized: its length is twice the triangle's area and it collapses to
/// the zero vector when the points are collinear or coincident. The vertex
/// order picks the side the normal points to.
pub fn normal(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> Vector3<f64> {
    let e1 = p2 - p1;
    let e2 = p3 - p1;

    Vector3::new(
        e1.y * e2.z - e1.z * e2.y,
        e1.z * e2.x - e1.x * e2.z,
        e1.x * e2.y - e1.y * e2.x,
    )
}

/// Placement origin of a primitive's local frame. Axes stay world-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    origin: Point3<f64>,
}

impl Pose {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            origin: Point3::new(x, y, z),
        }
    }

    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// The point at `(dx, dy, dz)` in this pose's local frame
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Point3<f64> {
        self.origin + Vector3::new(dx, dy, dz)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<Point3<f64>> for Pose {
    fn from(origin: Point3<f64>) -> Self {
        Self { origin }
    }
}

/// A triangle facet: three independent vertex copies and one normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub normal: Vector3<f64>,
    pub vertices: [Point3<f64>; 3],
}

impl Triangle {
    /// Build a facet whose normal follows the winding `v0 -> v1 -> v2`.
    pub fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self {
            normal: normal(&v0, &v1, &v2),
            vertices: [v0, v1, v2],
        }
    }

    pub fn centroid(&self) -> Point3<f64> {
        let [v0, v1, v2] = &self.vertices;
        Point3::from((v0.coords + v1.coords + v2.coords) / 3.0)
    }

    /// True when the facet normal is exactly zero (collinear or coincident vertices)
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vector3::zeros()
    }
}

/// An ordered, append-only list of facets with no shared vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Append every facet of `other` after the facets already present
    pub fn append(&mut self, other: Mesh) {
        self.triangles.extend(other.triangles);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    pub fn degenerate_count(&self) -> usize {
        self.triangles.iter().filter(|t| t.is_degenerate()).count()
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Triangle> for Mesh {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
