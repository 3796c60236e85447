use glam::Vec3;

use super::cube::{generate_cube, CubeOptions};
use super::Mesh;

/// Axis-aligned bounding box over a flat position buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
    /// Box mesh for visualization, present when requested and the box is
    /// non-empty.
    pub geometry: Option<Mesh>,
}

impl BoundingBox {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True for the sentinel produced by an empty position buffer.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBoxOptions {
    /// Also build a box mesh spanning the computed bounds.
    pub build_geometry: bool,
}

/// Computes the componentwise min/max over (x, y, z) triples.
///
/// An empty buffer yields the sentinel `min = (+inf, +inf, +inf)`,
/// `max = (-inf, -inf, -inf)`; callers must treat it as degenerate, not as
/// usable geometry. A trailing partial triple is ignored.
pub fn compute_bounding_box(positions: &[f32], options: &BoundingBoxOptions) -> BoundingBox {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);

    for triple in positions.chunks_exact(3) {
        let point = Vec3::new(triple[0], triple[1], triple[2]);
        min = min.min(point);
        max = max.max(point);
    }

    let mut bounds = BoundingBox {
        min,
        max,
        geometry: None,
    };
    if options.build_geometry && !bounds.is_empty() {
        bounds.geometry = Some(generate_cube(&CubeOptions {
            dimensions: max - min,
            position: Some(min),
        }));
    }
    bounds
}
