use image::{imageops, RgbaImage};
use log::debug;
use reqwest::Client;

use crate::error::LoadError;

/// Same-sized images stacked vertically into one composite, ready for upload
/// as a texture array.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageArray {
    pub data: RgbaImage,
    pub width: u32,
    pub height: u32,
    pub length: u32,
}

/// Fetches and decodes every URL to RGBA8 concurrently, resolving only once
/// all of them have completed, with results in input order. Any failure fails
/// the whole batch and aborts the fetches still in flight, as does dropping
/// the returned future.
pub async fn load_images(urls: &[String]) -> Result<Vec<RgbaImage>, LoadError> {
    let client = Client::new();
    let fetches = urls
        .iter()
        .map(|url| fetch_image(client.clone(), url.clone()))
        .collect();
    let images = super::join_ordered(fetches).await?;
    debug!("Loaded {} images", images.len());
    Ok(images)
}

/// Loads every URL, then stacks the images into one composite sized by the
/// first image.
pub async fn load_image_array(urls: &[String]) -> Result<ImageArray, LoadError> {
    let images = load_images(urls).await?;
    Ok(stack_images(&images))
}

/// Stacks images vertically at the first image's dimensions, drawing image `i`
/// at `(0, i * height)`. Images of a different size get cropped or padded at
/// their slot; keeping inputs same-sized is the caller's job.
pub fn stack_images(images: &[RgbaImage]) -> ImageArray {
    let (width, height) = images
        .first()
        .map(|image| image.dimensions())
        .unwrap_or((0, 0));

    let mut data = RgbaImage::new(width, height * images.len() as u32);
    for (i, image) in images.iter().enumerate() {
        imageops::replace(&mut data, image, 0, i as i64 * height as i64);
    }

    ImageArray {
        data,
        width,
        height,
        length: images.len() as u32,
    }
}

async fn fetch_image(client: Client, url: String) -> Result<RgbaImage, LoadError> {
    debug!("Fetching image {}", url);
    let bytes = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(image::load_from_memory(&bytes)?.to_rgba8())
}
