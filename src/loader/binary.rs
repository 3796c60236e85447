use log::debug;
use reqwest::Client;

use super::join_ordered;
use crate::error::LoadError;

/// Fetches a single URL and returns the raw response bytes.
pub async fn load_binary(url: &str) -> Result<Vec<u8>, LoadError> {
    fetch(Client::new(), url.to_string()).await
}

/// Fetches every URL concurrently and resolves only once all of them have
/// completed, with results in input order. Any failure fails the whole batch
/// and aborts the fetches still in flight, as does dropping the returned
/// future.
pub async fn load_binaries(urls: &[String]) -> Result<Vec<Vec<u8>>, LoadError> {
    let client = Client::new();
    let fetches = urls
        .iter()
        .map(|url| fetch(client.clone(), url.clone()))
        .collect();
    let results = join_ordered(fetches).await?;
    debug!("Loaded {} binary resources", results.len());
    Ok(results)
}

async fn fetch(client: Client, url: String) -> Result<Vec<u8>, LoadError> {
    debug!("Fetching {}", url);
    let bytes = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(bytes.to_vec())
}
