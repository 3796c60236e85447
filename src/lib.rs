//! Stateless helpers for GL-style rendering: procedural cube and UV-sphere
//! meshes, axis-aligned bounding boxes, transform composition, and async
//! image/binary loading.

pub mod error;
pub mod geometry;
pub mod loader;
pub mod transform;

// Re-export commonly used types
pub use error::{GeometryError, LoadError};
pub use geometry::bounds::{compute_bounding_box, BoundingBox, BoundingBoxOptions};
pub use geometry::cube::{generate_cube, CubeOptions};
pub use geometry::mesh::Mesh;
pub use geometry::sphere::{generate_sphere, SphereOptions};
pub use loader::binary::{load_binaries, load_binary};
pub use loader::images::{load_image_array, load_images, stack_images, ImageArray};
pub use transform::{build_transform, Transform};
