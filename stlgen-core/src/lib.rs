//! stlgen Core Library - Primitive tessellation and ASCII STL output
//!
//! This library turns parametric solids (cubes and cylinders) into triangle
//! soup meshes with outward facing normals and serializes them as ASCII STL.

pub mod error;
pub mod geometry;
pub mod primitive;
pub mod scene;
pub mod scene_file;
pub mod stl;
pub mod tessellate;

// Re-export commonly used types
pub use error::{GeometryError, SceneError, StlError};
pub use geometry::{normal, Mesh, Pose, Triangle};
pub use primitive::{Cube, Cylinder, PlacedPrimitive, Primitive};
pub use scene::Scene;
pub use stl::{EmitReport, StlWriter};
