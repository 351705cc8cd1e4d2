/// Command line front end: build a scene and write it as ASCII STL
use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use stlgen_core::{scene_file, stl, EmitReport, Scene};
use tracing::info;

/// Output file used when none is given
pub const DEFAULT_OUTPUT: &str = "test.stl";

#[derive(Debug, Parser)]
#[command(name = "stlgen")]
#[command(about = "Tessellate cube and cylinder scenes into ASCII STL", long_about = None)]
pub struct Cli {
    /// Scene description file (built-in demo scene when omitted)
    pub scene: Option<PathBuf>,

    /// Output STL file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Solid name (default: output file name up to the first `.`)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Write the STL to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Log debug events
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn solid_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| stl::solid_name(&self.output))
    }
}

/// Load the scene named on the command line, or the demo scene
pub fn load(scene: Option<&Path>) -> Result<Scene> {
    match scene {
        Some(path) => scene_file::load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display())),
        None => Scene::demo().context("failed to build demo scene"),
    }
}

pub fn run(cli: &Cli) -> Result<EmitReport> {
    let scene = load(cli.scene.as_deref())?;
    info!(
        shapes = scene.len(),
        triangles = scene.triangle_count(),
        "scene loaded"
    );

    let name = cli.solid_name();
    if cli.stdout {
        let (_, report) = scene
            .write_to(io::stdout().lock(), &name)
            .context("failed to write STL to stdout")?;
        return Ok(report);
    }

    let report = scene
        .write_to_path_as(&cli.output, &name)
        .with_context(|| format!("no output written to {}", cli.output.display()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["stlgen"]);
        assert_eq!(cli.scene, None);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.solid_name(), "test");
        assert!(!cli.stdout);
    }

    #[test]
    fn test_name_override() {
        let cli = Cli::parse_from(["stlgen", "parts.scene", "-o", "out/bracket.stl", "-n", "part"]);
        assert_eq!(cli.scene, Some(PathBuf::from("parts.scene")));
        assert_eq!(cli.solid_name(), "part");

        let cli = Cli::parse_from(["stlgen", "--output", "out/bracket.stl"]);
        assert_eq!(cli.solid_name(), "bracket");
    }

    #[test]
    fn test_missing_scene_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/stlgen/scene.txt"))).unwrap_err();
        assert!(err.to_string().contains("failed to load scene"));
    }

    #[test]
    fn test_run_writes_demo_scene() {
        let dir = std::env::temp_dir().join(format!("stlgen-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let output = dir.join("demo.stl");

        let args = [OsStr::new("stlgen"), OsStr::new("-o"), output.as_os_str()];
        let cli = Cli::parse_from(args);
        let report = run(&cli).unwrap();

        assert_eq!(report.facets, 52);
        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("solid demo\n"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
