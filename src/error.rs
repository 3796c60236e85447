use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("Band counts must be positive: {lat_bands} latitude x {long_bands} longitude")]
    ZeroBands { lat_bands: u32, long_bands: u32 },

    #[error("Sphere radius must be positive and finite: {0}")]
    InvalidRadius(f32),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
