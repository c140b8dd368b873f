use thiserror::Error;

/// Fatal load failures. Only the manifest can fail a load; individual
/// session fetches are absorbed inside the loader.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch manifest: {0}")]
    ManifestFetch(#[from] reqwest::Error),

    #[error("Failed to read manifest: {0}")]
    ManifestRead(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),
}
