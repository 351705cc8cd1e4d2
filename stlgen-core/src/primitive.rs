/// Parametric solid primitives and their validated construction
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::{Mesh, Pose};
use crate::tessellate;

/// Fewest facets a cylinder may be sampled with
pub const MIN_FACETS: u32 = 3;

fn positive(parameter: &'static str, value: f64) -> GeometryResult<f64> {
    if !value.is_finite() {
        return Err(GeometryError::NotFinite { parameter, value });
    }
    if value <= 0.0 {
        return Err(GeometryError::NonPositive { parameter, value });
    }
    Ok(value)
}

/// Upright cylinder centred on its pose, axis along +z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    radius: f64,
    height: f64,
    facets: u32,
}

impl Cylinder {
    pub fn new(radius: f64, height: f64, facets: u32) -> GeometryResult<Self> {
        let radius = positive("radius", radius)?;
        let height = positive("height", height)?;
        if facets < MIN_FACETS {
            return Err(GeometryError::TooFewFacets { facets });
        }

        Ok(Self {
            radius,
            height,
            facets,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of angular samples around the axis
    pub fn facets(&self) -> u32 {
        self.facets
    }

    pub fn tessellate(&self, pose: &Pose) -> Mesh {
        tessellate::cylinder(pose, self)
    }
}

/// Axis-aligned cube centred on its pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    size: f64,
}

impl Cube {
    pub fn new(size: f64) -> GeometryResult<Self> {
        Ok(Self {
            size: positive("size", size)?,
        })
    }

    /// Edge length
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn tessellate(&self, pose: &Pose) -> Mesh {
        tessellate::cube(pose, self)
    }
}

/// The closed set of primitive kinds a scene can hold
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Cylinder(Cylinder),
    Cube(Cube),
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Cylinder(_) => "cylinder",
            Primitive::Cube(_) => "cube",
        }
    }

    /// Number of facets `tessellate` will produce
    pub fn triangle_count(&self) -> usize {
        match self {
            Primitive::Cylinder(cylinder) => 4 * cylinder.facets() as usize,
            Primitive::Cube(_) => tessellate::CUBE_TRIANGLES,
        }
    }

    pub fn tessellate(&self, pose: &Pose) -> Mesh {
        match self {
            Primitive::Cylinder(cylinder) => cylinder.tessellate(pose),
            Primitive::Cube(cube) => cube.tessellate(pose),
        }
    }
}

impl From<Cylinder> for Primitive {
    fn from(cylinder: Cylinder) -> Self {
        Primitive::Cylinder(cylinder)
    }
}

impl From<Cube> for Primitive {
    fn from(cube: Cube) -> Self {
        Primitive::Cube(cube)
    }
}

/// A primitive together with the pose it is placed at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPrimitive {
    pub pose: Pose,
    pub primitive: Primitive,
}

impl PlacedPrimitive {
    pub fn new(pose: Pose, primitive: impl Into<Primitive>) -> Self {
        Self {
            pose,
            primitive: primitive.into(),
        }
    }

    pub fn tessellate(&self) -> Mesh {
        self.primitive.tessellate(&self.pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_rejects_too_few_facets() {
        assert_eq!(
            Cylinder::new(3.0, 10.0, 2),
            Err(GeometryError::TooFewFacets { facets: 2 })
        );
        assert!(Cylinder::new(3.0, 10.0, 0).is_err());
        assert!(Cylinder::new(3.0, 10.0, MIN_FACETS).is_ok());
    }

    #[test]
    fn test_non_positive_dimensions_are_rejected() {
        assert_eq!(
            Cylinder::new(0.0, 10.0, 10),
            Err(GeometryError::NonPositive {
                parameter: "radius",
                value: 0.0
            })
        );
        assert_eq!(
            Cylinder::new(3.0, -1.0, 10),
            Err(GeometryError::NonPositive {
                parameter: "height",
                value: -1.0
            })
        );
        assert_eq!(
            Cube::new(-5.0),
            Err(GeometryError::NonPositive {
                parameter: "size",
                value: -5.0
            })
        );
    }

    #[test]
    fn test_non_finite_dimensions_are_rejected() {
        assert!(matches!(
            Cube::new(f64::NAN),
            Err(GeometryError::NotFinite { parameter: "size", .. })
        ));
        assert!(matches!(
            Cylinder::new(f64::INFINITY, 1.0, 8),
            Err(GeometryError::NotFinite { parameter: "radius", .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = Cube::new(0.0).unwrap_err();
        assert_eq!(err.to_string(), "size must be positive, got 0");
        let err = Cylinder::new(1.0, 1.0, 2).unwrap_err();
        assert_eq!(err.to_string(), "cylinder needs at least 3 facets, got 2");
    }

    #[test]
    fn test_triangle_count_matches_tessellation() {
        let pose = Pose::default();
        let cube: Primitive = Cube::new(5.0).unwrap().into();
        let cylinder: Primitive = Cylinder::new(3.0, 10.0, 10).unwrap().into();

        assert_eq!(cube.kind(), "cube");
        assert_eq!(cylinder.kind(), "cylinder");
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cylinder.triangle_count(), 40);
        assert_eq!(cube.tessellate(&pose).len(), cube.triangle_count());
        assert_eq!(cylinder.tessellate(&pose).len(), cylinder.triangle_count());
    }

    #[test]
    fn test_placed_primitive_uses_its_pose() {
        let placed = PlacedPrimitive::new(Pose::new(10.0, 0.0, 0.0), Cube::new(2.0).unwrap());
        let mesh = placed.tessellate();
        assert!(mesh
            .iter()
            .flat_map(|t| t.vertices.iter())
            .all(|v| v.x == 9.0 || v.x == 11.0));
    }
}
