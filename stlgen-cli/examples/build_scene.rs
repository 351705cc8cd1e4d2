/// Example: Build a scene in code and print it as ASCII STL
///
/// Usage: cargo run --example build_scene -- [facets]

use std::env;
use std::io;
use stlgen_core::{Cube, Cylinder, Pose, Scene};

fn main() -> anyhow::Result<()> {
    let facets = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 24,
    };

    // A pedestal: a cube with a cylinder standing on top of it
    let mut scene = Scene::new();
    scene
        .add(Pose::new(0.0, 0.0, 5.0), Cube::new(10.0)?)
        .add(Pose::new(0.0, 0.0, 15.0), Cylinder::new(4.0, 10.0, facets)?);

    eprintln!(
        "Writing {} shapes, {} facets",
        scene.len(),
        scene.triangle_count()
    );

    let (_, report) = scene.write_to(io::stdout().lock(), "pedestal")?;
    if report.degenerate > 0 {
        eprintln!("{} degenerate facets", report.degenerate);
    }
    Ok(())
}
