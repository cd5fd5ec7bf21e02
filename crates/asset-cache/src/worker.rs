use std::fmt::Debug;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{Bucket, Manifest, Platform, RequestKey, CACHE_NAME};

/// Why an install attempt was abandoned
///
/// Install is all-or-nothing: the first failing asset aborts the run and
/// the hosting environment decides whether the worker gets another go.
#[derive(Debug, Error)]
pub enum InstallError<E: Debug> {
    #[error("opening cache bucket {name}: {error:?}")]
    OpenBucket { name: String, error: E },
    #[error("building request for {path}: {error:?}")]
    Request { path: String, error: E },
    #[error("fetching {path}: {error:?}")]
    Fetch { path: String, error: E },
    #[error("storing {path}: {error:?}")]
    Store { path: String, error: E },
}

/// Pre-caches a fixed set of static assets at install time and answers
/// fetches from the bucket, falling back to the network on a miss
pub struct StaticAssetCache<P: Platform> {
    platform: P,
    cache_name: String,
    manifest: Manifest,
}

impl<P: Platform> StaticAssetCache<P> {
    pub fn new(platform: P, manifest: Manifest) -> Self {
        Self {
            platform,
            cache_name: CACHE_NAME.to_string(),
            manifest,
        }
    }

    pub fn with_cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Populates the bucket with every manifest asset
    ///
    /// The install isn't complete until every asset is fetched and
    /// stored; no retry, no skip-and-continue.
    pub async fn handle_install(&self) -> Result<(), InstallError<P::Error>> {
        info!(
            "installing {} assets into {}",
            self.manifest.len(),
            self.cache_name
        );

        let bucket = self
            .platform
            .open_bucket(&self.cache_name)
            .await
            .map_err(|error| InstallError::OpenBucket {
                name: self.cache_name.clone(),
                error,
            })?;

        for path in self.manifest.assets() {
            let request = self
                .platform
                .request(path)
                .map_err(|error| InstallError::Request {
                    path: path.clone(),
                    error,
                })?;

            let response = self
                .platform
                .fetch(&request)
                .await
                .map_err(|error| InstallError::Fetch {
                    path: path.clone(),
                    error,
                })?;

            bucket
                .put(&request, response)
                .await
                .map_err(|error| InstallError::Store {
                    path: path.clone(),
                    error,
                })?;

            debug!("cached {path}");
        }

        info!("install complete ({})", self.cache_name);

        Ok(())
    }

    /// Answers a request from the bucket, or from the network on a miss
    ///
    /// A failing lookup counts as a miss. Network errors propagate to
    /// the caller untouched. Nothing on this path writes to the bucket,
    /// so a miss stays a miss until the next install.
    pub async fn handle_fetch(&self, request: &P::Request) -> Result<P::Response, P::Error> {
        let url = request.url();

        match self.lookup(request).await {
            Ok(Some(response)) => {
                debug!("HIT: {url}");
                return Ok(response);
            }
            Ok(None) => debug!("MISS: {url}"),
            Err(error) => warn!("cache lookup failed for {url}, going to network: {error:?}"),
        }

        self.platform.fetch(request).await
    }

    async fn lookup(&self, request: &P::Request) -> Result<Option<P::Response>, P::Error> {
        let bucket = self.platform.open_bucket(&self.cache_name).await?;
        bucket.match_request(request).await
    }
}
