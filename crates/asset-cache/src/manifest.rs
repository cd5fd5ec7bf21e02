use const_format::concatcp;
use serde::{Deserialize, Serialize};

/// Bumping this abandons every previously installed asset set
pub const CACHE_VERSION: &str = "v1";

/// Name of the bucket the static assets are installed into
pub const CACHE_NAME: &str = concatcp!("static-assets-", CACHE_VERSION);

/// Paths every install pre-caches: the root document plus the app shell
pub const DEFAULT_ASSETS: &[&str] = &[
    "/",
    "/static/css/bootstrap.min.css",
    "/static/img/logo-icon.png",
];

/// Ordered list of asset paths to pre-cache at install time
///
/// Fixed at build time and immutable for the lifetime of a running
/// worker. Changing the list only takes effect on the next install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    assets: Vec<String>,
}

impl Manifest {
    pub fn new<I, S>(assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assets: assets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    pub fn contains(&self, path: &str) -> bool {
        self.assets.iter().any(|a| a == path)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS.iter().copied())
    }
}
