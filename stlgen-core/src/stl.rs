/// ASCII STL emission
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::error::StlResult;
use crate::geometry::{Mesh, Triangle};

/// Solid name used when the destination gives nothing usable
const FALLBACK_NAME: &str = "solid";

/// Counters collected while emitting facets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitReport {
    pub facets: usize,
    /// Facets written with a zero normal
    pub degenerate: usize,
}

/// Streams facets into one `solid ... endsolid` envelope.
///
/// The header is written by [`StlWriter::new`] and the footer by
/// [`StlWriter::finish`], which consumes the writer, so each appears exactly
/// once however many meshes are written in between. Facets are passed through
/// unchanged; degenerate ones are only counted and logged.
pub struct StlWriter<W: Write> {
    writer: W,
    name: String,
    report: EmitReport,
}

impl<W: Write> StlWriter<W> {
    pub fn new(mut writer: W, name: impl Into<String>) -> StlResult<Self> {
        let name = name.into();
        writeln!(writer, "solid {}", name)?;

        Ok(Self {
            writer,
            name,
            report: EmitReport::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn write_triangle(&mut self, triangle: &Triangle) -> StlResult<()> {
        if triangle.is_degenerate() {
            self.report.degenerate += 1;
            warn!(
                solid = %self.name,
                facet = self.report.facets,
                vertices = ?triangle.vertices,
                "writing degenerate facet with zero normal"
            );
        }

        let n = &triangle.normal;
        writeln!(self.writer, " facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(self.writer, "  outer loop")?;
        for v in &triangle.vertices {
            writeln!(self.writer, "   vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(self.writer, "  endloop")?;
        writeln!(self.writer, " endfacet")?;

        self.report.facets += 1;
        Ok(())
    }

    pub fn write_mesh(&mut self, mesh: &Mesh) -> StlResult<()> {
        for triangle in mesh {
            self.write_triangle(triangle)?;
        }
        Ok(())
    }

    pub fn report(&self) -> EmitReport {
        self.report
    }

    /// Write the footer, flush, and hand back the underlying writer.
    pub fn finish(mut self) -> StlResult<(W, EmitReport)> {
        writeln!(self.writer, "endsolid {}", self.name)?;
        self.writer.flush()?;
        Ok((self.writer, self.report))
    }
}

/// Derive the solid name from a destination path: its file name up to the
/// first `.`.
pub fn solid_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();

    if stem.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        stem.to_string()
    }
}

/// Render a single mesh as a complete ASCII STL document
pub fn to_ascii_string(mesh: &Mesh, name: &str) -> StlResult<String> {
    let mut stl = StlWriter::new(Vec::new(), name)?;
    stl.write_mesh(mesh)?;
    let (bytes, _) = stl.finish()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
