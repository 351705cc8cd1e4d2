/// Surface tessellation for the cube and cylinder primitives
use std::f64::consts::PI;

use nalgebra::Point3;
use tracing::debug;

use crate::geometry::{Mesh, Pose, Triangle};
use crate::primitive::{Cube, Cylinder};

/// Facets in every tessellated cube: two per face
pub const CUBE_TRIANGLES: usize = 12;

// Cube corners. Upper (+z) and lower (-z) rings are each numbered 1..4 going
// (+x,-y), (+x,+y), (-x,+y), (-x,-y).
const U1: usize = 0;
const U2: usize = 1;
const U3: usize = 2;
const U4: usize = 3;
const D1: usize = 4;
const D2: usize = 5;
const D3: usize = 6;
const D4: usize = 7;

/// Corner triples for each cube facet, wound counter-clockwise seen from outside
const CUBE_FACETS: [[usize; 3]; CUBE_TRIANGLES] = [
    // top (+z)
    [U2, U3, U4],
    [U1, U2, U4],
    // bottom (-z)
    [D4, D3, D2],
    [D1, D4, D2],
    // -y
    [D4, D1, U1],
    [U1, U4, D4],
    // +y
    [U2, D3, U3],
    [U2, D2, D3],
    // +x
    [D2, U2, U1],
    [U1, D1, D2],
    // -x
    [D4, U4, D3],
    [U4, U3, D3],
];

/// Tessellate a cube into its fixed 12-facet topology.
pub fn cube(pose: &Pose, cube: &Cube) -> Mesh {
    let h = cube.size() / 2.0;
    let corners = [
        pose.offset(h, -h, h),
        pose.offset(h, h, h),
        pose.offset(-h, h, h),
        pose.offset(-h, -h, h),
        pose.offset(h, -h, -h),
        pose.offset(h, h, -h),
        pose.offset(-h, h, -h),
        pose.offset(-h, -h, -h),
    ];

    let mesh: Mesh = CUBE_FACETS
        .iter()
        .map(|&[a, b, c]| Triangle::new(corners[a], corners[b], corners[c]))
        .collect();

    debug!(size = cube.size(), triangles = mesh.len(), "tessellated cube");
    mesh
}

/// Matching rim samples on the top and bottom cap circles
#[derive(Debug, Clone, Copy)]
struct Rim {
    top: Point3<f64>,
    bottom: Point3<f64>,
}

/// Tessellate a cylinder into `4 * facets` triangles.
///
/// Each angular step between `prev` and `next` rim samples yields, in order:
/// a top cap wedge fanned from the top centre, the mirrored bottom cap wedge,
/// and the two halves of the side quad split along `prev.top -> next.bottom`.
/// The final sample is computed at `2π` rather than reusing the first one, so
/// the seam closes only up to rounding.
pub fn cylinder(pose: &Pose, cylinder: &Cylinder) -> Mesh {
    let radius = cylinder.radius();
    let half = cylinder.height() / 2.0;
    let facets = cylinder.facets();
    let step = 2.0 * PI / f64::from(facets);

    let top_centre = pose.offset(0.0, 0.0, half);
    let bottom_centre = pose.offset(0.0, 0.0, -half);
    let rim = |theta: f64| {
        let (sin, cos) = theta.sin_cos();
        Rim {
            top: pose.offset(radius * cos, radius * sin, half),
            bottom: pose.offset(radius * cos, radius * sin, -half),
        }
    };

    let mut mesh = Mesh::with_capacity(4 * facets as usize);
    mesh.extend(
        (1..=facets)
            .scan(rim(0.0), |prev, i| {
                let next = rim(step * f64::from(i));
                let wedge = [
                    Triangle::new(top_centre, prev.top, next.top),
                    Triangle::new(next.bottom, prev.bottom, bottom_centre),
                    Triangle::new(prev.top, next.bottom, next.top),
                    Triangle::new(prev.top, prev.bottom, next.bottom),
                ];
                *prev = next;
                Some(wedge)
            })
            .flatten(),
    );

    debug!(
        radius,
        height = cylinder.height(),
        facets,
        triangles = mesh.len(),
        "tessellated cylinder"
    );
    mesh
}
