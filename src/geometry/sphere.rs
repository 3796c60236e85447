use std::f32::consts::PI;

use glam::Vec3;

use super::Mesh;
use crate::error::GeometryError;

/// Options for [`generate_sphere`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereOptions {
    /// Longitude subdivisions.
    pub long_bands: u32,
    /// Latitude subdivisions.
    pub lat_bands: u32,
    pub radius: f32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            long_bands: 32,
            lat_bands: 32,
            radius: 1.0,
        }
    }
}

/// Builds an indexed UV-sphere from a latitude/longitude grid of quads.
///
/// Every cell emits four fresh vertices and two triangles; vertices at the
/// poles and along the seam are duplicated on purpose so the output always has
/// `4 * lat_bands * long_bands` vertices and `6 * lat_bands * long_bands`
/// indices. Normals are the unit direction of each vertex; UVs decrease with
/// increasing band index.
pub fn generate_sphere(options: &SphereOptions) -> Result<Mesh, GeometryError> {
    let SphereOptions {
        long_bands,
        lat_bands,
        radius,
    } = *options;

    if long_bands == 0 || lat_bands == 0 {
        return Err(GeometryError::ZeroBands {
            lat_bands,
            long_bands,
        });
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::InvalidRadius(radius));
    }

    let lat_step = PI / lat_bands as f32;
    let long_step = 2.0 * PI / long_bands as f32;
    let (vertex_count, index_count) = buffer_lengths(lat_bands, long_bands);

    let mut positions = Vec::with_capacity(vertex_count * 3);
    let mut normals = Vec::with_capacity(vertex_count * 3);
    let mut uvs = Vec::with_capacity(vertex_count * 2);
    let mut indices = Vec::with_capacity(index_count);

    for i in 0..lat_bands {
        let lat_angle = i as f32 * lat_step;
        let v1 = 1.0 - i as f32 / lat_bands as f32;
        let v2 = 1.0 - (i + 1) as f32 / lat_bands as f32;

        for j in 0..long_bands {
            let long_angle = j as f32 * long_step;
            let u1 = 1.0 - j as f32 / long_bands as f32;
            let u2 = 1.0 - (j + 1) as f32 / long_bands as f32;

            // Cell corners: v0 = (lat, long), v1 = (lat, long + step),
            // v2 = (lat + step, long), v3 = (lat + step, long + step).
            let corners = [
                direction(lat_angle, long_angle),
                direction(lat_angle, long_angle + long_step),
                direction(lat_angle + lat_step, long_angle),
                direction(lat_angle + lat_step, long_angle + long_step),
            ];

            let base = (positions.len() / 3) as u32;
            for corner in corners {
                positions.extend_from_slice(&(corner * radius).to_array());
                normals.extend_from_slice(&corner.to_array());
            }
            uvs.extend_from_slice(&[u1, v1, u2, v1, u1, v2, u2, v2]);
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
        }
    }

    Ok(Mesh {
        positions,
        normals,
        uvs,
        indices: Some(indices),
    })
}

/// Unit direction for a polar angle `lat` and azimuth `long`.
fn direction(lat: f32, long: f32) -> Vec3 {
    Vec3::new(lat.sin() * long.cos(), lat.cos(), lat.sin() * long.sin())
}

// Widen before multiplying; large band products overflow u32.
fn buffer_lengths(lat_bands: u32, long_bands: u32) -> (usize, usize) {
    let cells = lat_bands as usize * long_bands as usize;
    (cells * 4, cells * 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sizes() {
        let mesh = generate_sphere(&SphereOptions {
            long_bands: 4,
            lat_bands: 2,
            radius: 1.0,
        })
        .unwrap();
        assert_eq!(mesh.positions.len(), 96);
        assert_eq!(mesh.normals.len(), 96);
        assert_eq!(mesh.uvs.len(), 64);
        assert_eq!(mesh.indices.as_ref().unwrap().len(), 48);
    }

    #[test]
    fn test_default_band_counts() {
        let mesh = generate_sphere(&SphereOptions::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 32 * 32 * 4);
        assert_eq!(mesh.triangle_count(), 32 * 32 * 2);
    }

    #[test]
    fn test_positions_on_sphere_surface() {
        let radius = 2.5;
        let mesh = generate_sphere(&SphereOptions {
            long_bands: 8,
            lat_bands: 6,
            radius,
        })
        .unwrap();
        for vertex in 0..mesh.vertex_count() {
            let distance = mesh.position(vertex).length();
            assert!((distance - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_normals_are_unit_directions() {
        let mesh = generate_sphere(&SphereOptions {
            long_bands: 8,
            lat_bands: 6,
            radius: 3.0,
        })
        .unwrap();
        for vertex in 0..mesh.vertex_count() {
            let normal = mesh.normal(vertex);
            assert!((normal.length() - 1.0).abs() < 1e-5);
            assert!(normal.abs_diff_eq(mesh.position(vertex) / 3.0, 1e-5));
        }
    }

    #[test]
    fn test_indices_in_range() {
        let mesh = generate_sphere(&SphereOptions {
            long_bands: 5,
            lat_bands: 3,
            radius: 1.0,
        })
        .unwrap();
        let limit = mesh.vertex_count() as u32;
        assert!(mesh.indices.as_ref().unwrap().iter().all(|&i| i < limit));
    }

    #[test]
    fn test_first_cell_index_pattern() {
        let mesh = generate_sphere(&SphereOptions::default()).unwrap();
        assert_eq!(&mesh.indices.as_ref().unwrap()[..6], &[0, 1, 2, 2, 1, 3]);
    }

    #[test]
    fn test_uv_origin_at_first_band() {
        let mesh = generate_sphere(&SphereOptions {
            long_bands: 4,
            lat_bands: 2,
            radius: 1.0,
        })
        .unwrap();
        // First cell: u runs from 1 down to 0.75, v from 1 down to 0.5.
        assert_eq!(mesh.uv(0).to_array(), [1.0, 1.0]);
        assert_eq!(mesh.uv(1).to_array(), [0.75, 1.0]);
        assert_eq!(mesh.uv(2).to_array(), [1.0, 0.5]);
        assert_eq!(mesh.uv(3).to_array(), [0.75, 0.5]);
    }

    #[test]
    fn test_buffer_lengths_for_oversized_band_counts() {
        let (vertices, indices) = buffer_lengths(40_000, 40_000);
        assert_eq!(vertices, 6_400_000_000);
        assert_eq!(indices, 9_600_000_000);
    }

    #[test]
    fn test_zero_bands_rejected() {
        let result = generate_sphere(&SphereOptions {
            long_bands: 0,
            lat_bands: 4,
            radius: 1.0,
        });
        assert!(matches!(result, Err(GeometryError::ZeroBands { .. })));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = generate_sphere(&SphereOptions {
                radius,
                ..SphereOptions::default()
            });
            assert!(matches!(result, Err(GeometryError::InvalidRadius(_))));
        }
    }

    #[test]
    fn test_deterministic_output() {
        let options = SphereOptions {
            long_bands: 7,
            lat_bands: 5,
            radius: 0.5,
        };
        assert_eq!(
            generate_sphere(&options).unwrap(),
            generate_sphere(&options).unwrap()
        );
    }
}
