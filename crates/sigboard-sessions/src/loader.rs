use std::path::PathBuf;

use anyhow::Context;
use futures::future;
use serde::Deserialize;

use crate::error::LoadError;
use crate::types::SessionRecord;

/// File name of the index manifest, relative to the base location.
pub const MANIFEST_FILE: &str = "index.json";

/// Where the manifest and session files live: a local directory or an
/// HTTP(S) base URL.
#[derive(Debug, Clone)]
pub enum BaseLocation {
    Dir(PathBuf),
    Url(String),
}

impl BaseLocation {
    /// Interpret a configured base string. Anything that does not look like
    /// an HTTP(S) URL is treated as a directory path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            BaseLocation::Url(raw.trim_end_matches('/').to_string())
        } else {
            BaseLocation::Dir(PathBuf::from(raw))
        }
    }
}

impl std::fmt::Display for BaseLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseLocation::Dir(path) => write!(f, "{}", path.display()),
            BaseLocation::Url(url) => write!(f, "{}", url),
        }
    }
}

/// The index manifest. Two shapes exist in the wild: `files` lists relative
/// session-file paths; `sessions` lists bare identifiers stored as
/// `<id>.json`. `files` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    files: Vec<String>,
    #[serde(default)]
    sessions: Vec<String>,
}

impl Manifest {
    /// Relative paths of every session file the manifest references.
    pub fn entries(&self) -> Vec<String> {
        if !self.files.is_empty() {
            self.files.clone()
        } else {
            self.sessions.iter().map(|id| format!("{}.json", id)).collect()
        }
    }
}

/// Fetches the manifest and every session document it references.
pub struct SessionLoader {
    base: BaseLocation,
    client: reqwest::Client,
}

impl SessionLoader {
    pub fn new(base: BaseLocation) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &BaseLocation {
        &self.base
    }

    /// Load all sessions listed in the manifest.
    ///
    /// The per-file fetches are issued together and joined once every one
    /// has settled. A failed fetch or parse drops that session with a
    /// warning; only a manifest failure aborts the load.
    pub async fn load_all(&self) -> Result<Vec<SessionRecord>, LoadError> {
        let manifest = self.fetch_manifest().await?;
        let entries = manifest.entries();

        let settled = future::join_all(entries.iter().map(|e| self.fetch_session(e))).await;
        let sessions: Vec<SessionRecord> = settled.into_iter().flatten().collect();

        tracing::debug!(
            loaded = sessions.len(),
            listed = entries.len(),
            "Session load complete"
        );

        Ok(sessions)
    }

    async fn fetch_manifest(&self) -> Result<Manifest, LoadError> {
        let bytes = match &self.base {
            BaseLocation::Dir(dir) => tokio::fs::read(dir.join(MANIFEST_FILE)).await?,
            BaseLocation::Url(base) => self
                .client
                .get(format!("{}/{}", base, MANIFEST_FILE))
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?
                .to_vec(),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetch and parse one session file. Failures are absorbed: the session
    /// is dropped from the aggregated set and never retried.
    async fn fetch_session(&self, entry: &str) -> Option<SessionRecord> {
        match self.fetch_session_inner(entry).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Dropping session {}: {:#}", entry, e);
                None
            }
        }
    }

    async fn fetch_session_inner(&self, entry: &str) -> anyhow::Result<SessionRecord> {
        let bytes = match &self.base {
            BaseLocation::Dir(dir) => tokio::fs::read(dir.join(entry))
                .await
                .with_context(|| format!("Failed to read session file {}", entry))?,
            BaseLocation::Url(base) => self
                .client
                .get(format!("{}/{}", base, entry))
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?
                .to_vec(),
        };

        serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse session file {}", entry))
    }
}
