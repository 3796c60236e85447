use glam::Vec3;

use super::Mesh;

/// Options for [`generate_cube`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeOptions {
    /// Width, height and depth of the box.
    pub dimensions: Vec3,
    /// Minimum corner. Defaults to `-dimensions / 2`, centering the box on the
    /// origin.
    pub position: Option<Vec3>,
}

impl Default for CubeOptions {
    fn default() -> Self {
        Self {
            dimensions: Vec3::ONE,
            position: None,
        }
    }
}

// Six vertices per face: bottom-left, bottom-right, top-left, then top-left,
// bottom-right, top-right of the face's local frame.
const CORNER_ORDER: [usize; 6] = [0, 1, 2, 2, 1, 3];

const FACE_UVS: [[f32; 2]; 6] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [0.0, 1.0],
    [0.0, 1.0],
    [1.0, 0.0],
    [1.0, 1.0],
];

/// Builds a non-indexed triangle-list box mesh: 36 vertices, six faces in the
/// order front (+Z), right (+X), back (-Z), left (-X), top (+Y), bottom (-Y),
/// each with its outward unit normal and a unit-square UV layout.
///
/// Zero-sized dimensions are allowed; bounding-box visualization builds flat
/// boxes for coplanar point sets.
pub fn generate_cube(options: &CubeOptions) -> Mesh {
    let size = options.dimensions;
    let origin = options.position.unwrap_or(-size / 2.0);

    // Corner naming: f/b front/back, b/t bottom/top, l/r left/right.
    let fbl = origin + Vec3::new(0.0, 0.0, size.z);
    let fbr = origin + Vec3::new(size.x, 0.0, size.z);
    let ftl = origin + Vec3::new(0.0, size.y, size.z);
    let ftr = origin + size;
    let bbl = origin;
    let bbr = origin + Vec3::new(size.x, 0.0, 0.0);
    let btl = origin + Vec3::new(0.0, size.y, 0.0);
    let btr = origin + Vec3::new(size.x, size.y, 0.0);

    // Per face: (bottom-left, bottom-right, top-left, top-right), outward normal.
    let faces = [
        ([fbl, fbr, ftl, ftr], Vec3::Z),
        ([fbr, bbr, ftr, btr], Vec3::X),
        ([bbr, bbl, btr, btl], Vec3::NEG_Z),
        ([bbl, fbl, btl, ftl], Vec3::NEG_X),
        ([ftl, ftr, btl, btr], Vec3::Y),
        ([bbl, bbr, fbl, fbr], Vec3::NEG_Y),
    ];

    let mut mesh = Mesh {
        positions: Vec::with_capacity(36 * 3),
        normals: Vec::with_capacity(36 * 3),
        uvs: Vec::with_capacity(36 * 2),
        indices: None,
    };

    for (corners, normal) in faces {
        for (slot, &corner) in CORNER_ORDER.iter().enumerate() {
            mesh.positions.extend_from_slice(&corners[corner].to_array());
            mesh.normals.extend_from_slice(&normal.to_array());
            mesh.uvs.extend_from_slice(&FACE_UVS[slot]);
        }
    }

    mesh
}
