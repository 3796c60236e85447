use glam::{Vec2, Vec3};

/// Parallel flat attribute buffers describing a triangle list, laid out for
/// direct upload to a graphics API.
///
/// Positions and normals are grouped as (x, y, z) per vertex, UVs as (u, v).
/// When `indices` is absent the vertices form a flat triangle list in emission
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Option<Vec<u32>>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.vertex_count() / 3,
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    pub fn position(&self, vertex: usize) -> Vec3 {
        let i = vertex * 3;
        Vec3::new(self.positions[i], self.positions[i + 1], self.positions[i + 2])
    }

    pub fn normal(&self, vertex: usize) -> Vec3 {
        let i = vertex * 3;
        Vec3::new(self.normals[i], self.normals[i + 1], self.normals[i + 2])
    }

    pub fn uv(&self, vertex: usize) -> Vec2 {
        let i = vertex * 2;
        Vec2::new(self.uvs[i], self.uvs[i + 1])
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices.as_deref().map(bytemuck::cast_slice)
    }
}
