/// Scene assembly: ordered placed primitives written into one STL solid
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{GeometryResult, StlError, StlResult};
use crate::geometry::{Mesh, Pose};
use crate::primitive::{Cube, Cylinder, PlacedPrimitive, Primitive};
use crate::stl::{solid_name, EmitReport, StlWriter};

/// Primitives in the order their facets are emitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<PlacedPrimitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cube of size 5 at the origin followed by a 10-facet cylinder
    /// (radius 3, height 10) at `(100, 0, 0)`.
    pub fn demo() -> GeometryResult<Self> {
        let mut scene = Self::new();
        scene
            .add(Pose::new(0.0, 0.0, 0.0), Cube::new(5.0)?)
            .add(Pose::new(100.0, 0.0, 0.0), Cylinder::new(3.0, 10.0, 10)?);
        Ok(scene)
    }

    pub fn add(&mut self, pose: Pose, primitive: impl Into<Primitive>) -> &mut Self {
        self.push(PlacedPrimitive::new(pose, primitive));
        self
    }

    pub fn push(&mut self, placed: PlacedPrimitive) {
        self.primitives.push(placed);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedPrimitive> {
        self.primitives.iter()
    }

    /// Total facets the scene will emit
    pub fn triangle_count(&self) -> usize {
        self.primitives
            .iter()
            .map(|p| p.primitive.triangle_count())
            .sum()
    }

    /// Tessellate every primitive and concatenate the meshes in insertion order
    pub fn tessellate(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(self.triangle_count());
        for placed in &self.primitives {
            mesh.append(placed.tessellate());
        }
        mesh
    }

    /// Write the whole scene as one solid named `name` and return the writer.
    pub fn write_to<W: Write>(&self, writer: W, name: &str) -> StlResult<(W, EmitReport)> {
        let mut stl = StlWriter::new(writer, name)?;
        for (index, placed) in self.primitives.iter().enumerate() {
            let mesh = placed.tessellate();
            debug!(
                index,
                kind = placed.primitive.kind(),
                facets = mesh.len(),
                "emitting primitive"
            );
            stl.write_mesh(&mesh)?;
        }
        stl.finish()
    }

    /// Write the scene to `path`, naming the solid after the file.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> StlResult<EmitReport> {
        let path = path.as_ref();
        self.write_to_path_as(path, &solid_name(path))
    }

    /// Write the scene to `path` under an explicit solid name.
    ///
    /// The destination is opened once and the handle is held until the footer
    /// is flushed. When it cannot be opened nothing is written and
    /// [`StlError::Open`] is returned.
    pub fn write_to_path_as(&self, path: impl AsRef<Path>, name: &str) -> StlResult<EmitReport> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| StlError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let (_, report) = self.write_to(BufWriter::new(file), name)?;
        info!(
            path = %path.display(),
            solid = name,
            shapes = self.len(),
            facets = report.facets,
            degenerate = report.degenerate,
            "wrote STL"
        );
        Ok(report)
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a PlacedPrimitive;
    type IntoIter = std::slice::Iter<'a, PlacedPrimitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

impl FromIterator<PlacedPrimitive> for Scene {
    fn from_iter<I: IntoIterator<Item = PlacedPrimitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene() {
        let scene = Scene::demo().unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.triangle_count(), 12 + 40);

        let kinds: Vec<_> = scene.iter().map(|p| p.primitive.kind()).collect();
        assert_eq!(kinds, ["cube", "cylinder"]);
    }

    #[test]
    fn test_tessellate_preserves_insertion_order() {
        let scene = Scene::demo().unwrap();
        let mesh = scene.tessellate();

        assert_eq!(mesh.len(), 52);
        // Cube facets sit around x = 0, cylinder facets around x = 100
        assert!(mesh.triangles[..12].iter().all(|t| t.centroid().x.abs() < 3.0));
        assert!(mesh.triangles[12..].iter().all(|t| t.centroid().x > 96.0));
    }

    #[test]
    fn test_write_to_emits_one_envelope() {
        let scene = Scene::demo().unwrap();
        let (bytes, report) = scene.write_to(Vec::new(), "test").unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(report.facets, 52);
        assert_eq!(report.degenerate, 0);
        assert_eq!(text.matches(" facet normal").count(), 52);
        assert_eq!(text.lines().next(), Some("solid test"));
        assert_eq!(text.lines().last(), Some("endsolid test"));
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.tessellate().is_empty());

        let (bytes, report) = scene.write_to(Vec::new(), "none").unwrap();
        assert_eq!(report.facets, 0);
        assert_eq!(String::from_utf8(bytes).unwrap(), "solid none\nendsolid none\n");
    }
}
