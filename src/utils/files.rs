use crate::utils::images::{self, ContentHash};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

/// Default directory images are saved into, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";

/// Create the output directory if it does not exist yet
pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        tracing::debug!(dir = %dir.display(), "created output directory");
    } else if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", dir.display()),
        ));
    }

    Ok(())
}

/// Last path segment of a URL, if it is non-empty
fn url_basename(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.last()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

/// Choose the on-disk filename for an image.
///
/// The URL's last path segment is used when it carries an extension. Otherwise
/// the name is `image_<hash prefix><ext>`.
pub fn derive_filename(url: &str, content_type: Option<&str>, hash: &ContentHash) -> String {
    match url_basename(url) {
        Some(name) if name.contains('.') => name,
        _ => format!(
            "image_{}{}",
            hash.short(),
            images::image_extension(content_type)
        ),
    }
}

/// Write the payload under `filename`, replacing any file already there
pub async fn save_image(dir: &Path, filename: &str, content: &[u8]) -> io::Result<PathBuf> {
    let file_path = dir.join(filename);
    tokio::fs::write(&file_path, content).await?;
    Ok(file_path)
}
