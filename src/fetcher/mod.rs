//! Sequential fetch-and-dedupe loop.
//!
//! Each URL is fetched, checked for an image content type, hashed, and written
//! to the output directory unless the same bytes were already saved this run.

pub mod outcome;
pub mod seen;
#[cfg(test)]
pub(crate) mod test_server;

use crate::utils::{files, http, images};
use outcome::{FetchError, FetchOutcome, SkipReason};
use reqwest::Client;
use seen::SeenHashes;
use std::path::Path;

/// Process a single URL.
///
/// `seen` only changes when an image is actually written.
pub async fn process_url(
    client: &Client,
    url: &str,
    output_dir: &Path,
    seen: &mut SeenHashes,
) -> FetchOutcome {
    match try_process_url(client, url, output_dir, seen).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::debug!(url, error = %e, "fetch failed");
            FetchOutcome::Failed(e)
        }
    }
}

async fn try_process_url(
    client: &Client,
    url: &str,
    output_dir: &Path,
    seen: &mut SeenHashes,
) -> Result<FetchOutcome, FetchError> {
    let response = http::fetch(client, url).await?;
    if response.is_error_status() {
        return Err(FetchError::Status {
            status: response.status,
            url: url.to_string(),
        });
    }
    tracing::debug!(
        url,
        status = %response.status,
        content_type = response.content_type.as_deref().unwrap_or(""),
        bytes = response.body.len(),
        "fetched"
    );

    let content_type = response.content_type.as_deref();
    if !images::is_image_content_type(content_type) {
        return Ok(FetchOutcome::Skipped(SkipReason::NotImage));
    }

    let hash = images::hash_content(&response.body);
    if seen.contains(&hash) {
        tracing::debug!(url, hash = hash.as_str(), "duplicate content");
        return Ok(FetchOutcome::Skipped(SkipReason::Duplicate));
    }

    let filename = files::derive_filename(url, content_type, &hash);
    let path = files::save_image(output_dir, &filename, &response.body)
        .await
        .map_err(|source| FetchError::Io {
            path: output_dir.join(&filename),
            source,
        })?;

    seen.insert(hash);
    Ok(FetchOutcome::Saved { filename, path })
}

/// Run the loop over every URL in order.
///
/// No URL's failure stops the batch. `on_outcome` is called as each URL
/// finishes; the seen-hash set is handed back so the caller owns run state.
pub async fn fetch_all<F>(
    client: &Client,
    urls: &[String],
    output_dir: &Path,
    mut seen: SeenHashes,
    mut on_outcome: F,
) -> (Vec<(String, FetchOutcome)>, SeenHashes)
where
    F: FnMut(&str, &FetchOutcome),
{
    let mut outcomes = Vec::with_capacity(urls.len());

    for url in urls {
        let outcome = process_url(client, url, output_dir, &mut seen).await;
        on_outcome(url, &outcome);
        outcomes.push((url.clone(), outcome));
    }

    tracing::debug!(
        processed = outcomes.len(),
        unique = seen.len(),
        "batch finished"
    );

    (outcomes, seen)
}
