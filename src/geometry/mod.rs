//! Procedural mesh generation and bounding volumes.

pub mod bounds;
pub mod cube;
pub mod mesh;
pub mod sphere;

pub use bounds::{compute_bounding_box, BoundingBox, BoundingBoxOptions};
pub use cube::{generate_cube, CubeOptions};
pub use mesh::Mesh;
pub use sphere::{generate_sphere, SphereOptions};
