//! Scene description parser.
//!
//! One primitive per line, `#` starts a comment:
//!
//! ```text
//! cube at 0 0 0 size 5
//! cylinder at 100 0 0 radius 3 height 10 facets 10
//! ```
//!
//! The `at x y z` clause is optional and defaults to the origin.

use std::fs;
use std::path::Path;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{space1, u32 as facet_count},
    combinator::{all_consuming, map, opt},
    number::complete::double,
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::{GeometryResult, SceneError};
use crate::geometry::Pose;
use crate::primitive::{Cube, Cylinder, PlacedPrimitive, Primitive};
use crate::scene::Scene;

/// A parsed but not yet validated shape statement
#[derive(Debug, Clone, Copy, PartialEq)]
enum ShapeSpec {
    Cube {
        size: f64,
    },
    Cylinder {
        radius: f64,
        height: f64,
        facets: u32,
    },
}

impl ShapeSpec {
    fn build(self) -> GeometryResult<Primitive> {
        Ok(match self {
            ShapeSpec::Cube { size } => Cube::new(size)?.into(),
            ShapeSpec::Cylinder {
                radius,
                height,
                facets,
            } => Cylinder::new(radius, height, facets)?.into(),
        })
    }
}

/// Parse a scene description into a [`Scene`] in file order
pub fn parse_scene(input: &str) -> Result<Scene, SceneError> {
    let mut scene = Scene::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let statement = strip_comment(raw).trim();
        if statement.is_empty() {
            continue;
        }

        let (_, (pose, spec)) = all_consuming(parse_statement)(statement)
            .map_err(|err| syntax_error(line, statement, err))?;
        let primitive = spec
            .build()
            .map_err(|source| SceneError::Geometry { line, source })?;

        scene.push(PlacedPrimitive::new(pose, primitive));
    }

    Ok(scene)
}

/// Read and parse a scene file
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scene(&text)
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or_default()
}

fn syntax_error(line: usize, statement: &str, err: nom::Err<nom::error::Error<&str>>) -> SceneError {
    let rest = match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.input.trim(),
        nom::Err::Incomplete(_) => "",
    };

    let message = if rest.is_empty() {
        format!("incomplete statement `{}`", statement)
    } else if rest == statement {
        format!("expected `cube` or `cylinder`, found `{}`", statement)
    } else {
        format!("unexpected `{}` in `{}`", rest, statement)
    };
    SceneError::Syntax { line, message }
}

fn parse_statement(input: &str) -> IResult<&str, (Pose, ShapeSpec)> {
    alt((parse_cube, parse_cylinder))(input)
}

fn parse_cube(input: &str) -> IResult<&str, (Pose, ShapeSpec)> {
    let (input, _) = tag("cube")(input)?;
    let (input, pose) = parse_placement(input)?;
    let (input, size) = parse_field("size", double)(input)?;
    Ok((input, (pose, ShapeSpec::Cube { size })))
}

fn parse_cylinder(input: &str) -> IResult<&str, (Pose, ShapeSpec)> {
    let (input, _) = tag("cylinder")(input)?;
    let (input, pose) = parse_placement(input)?;
    let (input, radius) = parse_field("radius", double)(input)?;
    let (input, height) = parse_field("height", double)(input)?;
    let (input, facets) = parse_field("facets", facet_count)(input)?;
    Ok((
        input,
        (
            pose,
            ShapeSpec::Cylinder {
                radius,
                height,
                facets,
            },
        ),
    ))
}

fn parse_placement(input: &str) -> IResult<&str, Pose> {
    map(
        opt(preceded(tuple((space1, tag("at"))), parse_coordinates)),
        |origin| origin.map_or_else(Pose::default, |(x, y, z)| Pose::new(x, y, z)),
    )(input)
}

fn parse_coordinates(input: &str) -> IResult<&str, (f64, f64, f64)> {
    tuple((
        preceded(space1, double),
        preceded(space1, double),
        preceded(space1, double),
    ))(input)
}

fn parse_field<'a, O, F>(name: &'static str, value: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    preceded(tuple((space1, tag(name), space1)), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_parse_reference_scene() {
        let scene = parse_scene(
            "# reference scene\n\
             cube at 0 0 0 size 5\n\
             \n\
             cylinder at 100 0 0 radius 3 height 10 facets 10  # trailing comment\n",
        )
        .unwrap();

        assert_eq!(scene.len(), 2);
        let placed: Vec<_> = scene.iter().collect();
        assert_eq!(placed[0].pose, Pose::default());
        assert_eq!(placed[0].primitive, Primitive::Cube(Cube::new(5.0).unwrap()));
        assert_eq!(placed[1].pose.origin(), Point3::new(100.0, 0.0, 0.0));
        assert_eq!(
            placed[1].primitive,
            Primitive::Cylinder(Cylinder::new(3.0, 10.0, 10).unwrap())
        );
    }

    #[test]
    fn test_placement_is_optional() {
        let scene = parse_scene("cube size 2.5e0\ncylinder radius 1 height 2 facets 3").unwrap();
        assert!(scene.iter().all(|p| p.pose == Pose::default()));
        assert_eq!(scene.triangle_count(), 12 + 12);
    }

    #[test]
    fn test_tabs_and_negative_coordinates() {
        let scene = parse_scene("\tcube\tat -1.5 2 -3e2\tsize 0.25").unwrap();
        let placed = scene.iter().next().unwrap();
        assert_eq!(placed.pose.origin(), Point3::new(-1.5, 2.0, -300.0));
    }

    #[test]
    fn test_unknown_shape_reports_line() {
        let err = parse_scene("cube size 1\nsphere radius 2").unwrap_err();
        match err {
            SceneError::Syntax { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("sphere radius 2"), "{}", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        let err = parse_scene("cube size 1 color red").unwrap_err();
        assert!(matches!(err, SceneError::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_fractional_facets_are_rejected() {
        let err = parse_scene("cylinder radius 1 height 1 facets 2.5").unwrap_err();
        assert!(matches!(err, SceneError::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_missing_field_is_incomplete() {
        let err = parse_scene("cylinder at 0 0 0 radius 1 height 1").unwrap_err();
        assert!(matches!(err, SceneError::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_invalid_geometry_reports_line() {
        let err = parse_scene("\n\ncylinder radius 3 height 10 facets 2").unwrap_err();
        match err {
            SceneError::Geometry { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, crate::error::GeometryError::TooFewFacets { facets: 2 });
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("stlgen-no-such-dir/absent.scene");
        assert!(matches!(load_scene(&path), Err(SceneError::Io { .. })));
    }
}
