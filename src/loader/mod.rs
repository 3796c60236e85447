//! Asynchronous loading of images and binary blobs for texture and buffer
//! upload.

pub mod binary;
pub mod images;

pub use binary::{load_binaries, load_binary};
pub use images::{load_image_array, load_images, stack_images, ImageArray};

use std::future::Future;

use tokio::task::JoinSet;

use crate::error::LoadError;

/// Runs every fetch on the runtime and collects results in input order.
///
/// The batch fails on the first error; when the returned future is dropped or
/// returns early, the backing `JoinSet` aborts every task still in flight.
pub(crate) async fn join_ordered<T, F>(fetches: Vec<F>) -> Result<Vec<T>, LoadError>
where
    T: Send + 'static,
    F: Future<Output = Result<T, LoadError>> + Send + 'static,
{
    let mut set = JoinSet::new();
    for (index, fetch) in fetches.into_iter().enumerate() {
        set.spawn(async move { (index, fetch.await) });
    }

    let mut slots: Vec<Option<T>> = Vec::new();
    slots.resize_with(set.len(), || None);
    while let Some(joined) = set.join_next().await {
        let (index, result) = joined?;
        slots[index] = Some(result?);
    }
    Ok(slots.into_iter().flatten().collect())
}
