//! Snapbatch
//!
//! A batch screenshot fetcher: for each entry in a fixed list of events
//! (id, brand, article URL), request a rendered screenshot from a remote
//! URL-to-image service, persist it under a deterministic filename, skip
//! entries whose output file already exists, and write a JSON manifest of
//! the outcomes.
//!
//! # Features
//!
//! - **File-existence caching**: an existing `event-<id>.jpg` short-circuits
//!   the network entirely
//! - **Batched pacing**: fixed-size batches with inter-item and inter-batch
//!   pauses to stay under the remote service's rate limits
//! - **Swappable seams**: the renderer, artifact store, and throttle are
//!   traits, so tests run without network access or real sleeps
//!
//! # Example
//!
//! ```no_run
//! use snapbatch::{ApiRenderer, BatchFetcher, DirStore, FetchConfig, StdThrottle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FetchConfig::default();
//! let renderer = ApiRenderer::new(&config)?;
//! let store = DirStore::create(&config.output_dir)?;
//! let throttle = StdThrottle::from_config(&config);
//!
//! let mut fetcher = BatchFetcher::new(&config, renderer, store, throttle)?;
//! let results = fetcher.run(&snapbatch::events::builtin_events());
//! println!("{} events processed", results.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

pub mod error;
pub use error::{Error, Result};

pub mod api;
pub mod batch;
pub mod events;
pub mod manifest;
pub mod report;
pub mod store;

pub use api::ApiRenderer;
pub use batch::BatchFetcher;
pub use manifest::{Manifest, ManifestEntry};
pub use store::DirStore;

/// Configuration for a fetch run
///
/// The defaults reproduce the production setup of the original tool:
/// screenshots land in `public/screenshots`, requests go out in batches of
/// three with a half-second pause per item and a two-second pause between
/// batches, and pages are rendered at 768x1280 JPEG quality 85.
///
/// # Examples
///
/// ```
/// let cfg = snapbatch::FetchConfig::default();
/// assert_eq!(cfg.batch_size, 3);
/// assert_eq!(cfg.quality, 85);
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Access key for the rendering service
    pub access_key: String,
    /// Base endpoint of the URL-to-image service
    pub endpoint: String,
    /// Directory screenshots and the manifest are written to
    pub output_dir: PathBuf,
    /// Number of events per batch
    pub batch_size: usize,
    /// Pause inserted after every event
    pub item_delay: Duration,
    /// Pause inserted between batches
    pub batch_pause: Duration,
    /// Rendered page dimensions
    pub viewport: Viewport,
    /// JPEG quality (0-100)
    pub quality: u8,
    /// Timeout for each render request in milliseconds
    pub timeout_ms: u64,
    /// User agent string to send with requests
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            access_key: "f3cae9688a794f2da5192eb2c50f1d3f".to_string(),
            endpoint: "https://api.apiflash.com/v1/urltoimage".to_string(),
            output_dir: PathBuf::from("public/screenshots"),
            batch_size: 3,
            item_delay: Duration::from_millis(500),
            batch_pause: Duration::from_secs(2),
            viewport: Viewport::default(),
            quality: 85,
            timeout_ms: 30000,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) Snapbatch/0.1".to_string(),
        }
    }
}

/// Rendered page dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 768,
            height: 1280,
        }
    }
}

/// One item to screenshot: a stable id, a display label, and the page URL
#[derive(Debug, Clone)]
pub struct Event {
    /// Unique, externally assigned identifier
    pub id: u32,
    /// Display label used in progress and failure output
    pub brand: String,
    /// Absolute HTTP(S) URL of the page to render
    pub url: String,
}

impl Event {
    pub fn new(id: u32, brand: &str, url: &str) -> Self {
        Self {
            id,
            brand: brand.to_string(),
            url: url.to_string(),
        }
    }
}

/// Terminal outcome of a single event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output file already existed; no request was made
    Cached,
    /// Screenshot fetched and written during this run
    Downloaded,
    /// The event failed; the artifact (if any) was removed
    Failed {
        /// Brand label, carried for the failure report
        brand: String,
        /// Display text of the underlying error
        error: String,
    },
}

/// Result of one event's download attempt; created once, never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub id: u32,
    pub outcome: Outcome,
}

impl FetchResult {
    /// Whether the event produced a usable screenshot
    pub fn is_success(&self) -> bool {
        !matches!(self.outcome, Outcome::Failed { .. })
    }

    /// Whether the screenshot pre-dated this run
    pub fn is_cached(&self) -> bool {
        matches!(self.outcome, Outcome::Cached)
    }
}

/// Capability: render a page URL into image bytes
///
/// The production implementation ([`ApiRenderer`]) delegates rendering to a
/// remote URL-to-image service; tests substitute a fake that serves canned
/// bytes or errors without touching the network.
pub trait Renderer {
    /// Render the page at `url` and return the raw image bytes
    fn render(&self, url: &str) -> Result<Vec<u8>>;
}

/// Capability: the artifact store screenshots are cached in
///
/// File existence is the sole idempotence signal, so the store surface is
/// deliberately small: check, write, remove.
pub trait ArtifactStore {
    /// Whether an artifact with this name already exists
    fn exists(&self, name: &str) -> bool;

    /// Persist `bytes` under `name`, returning the stored size as read back
    /// from the artifact itself
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<u64>;

    /// Remove the named artifact; removing a missing artifact is not an error
    fn remove(&mut self, name: &str) -> Result<()>;
}

/// Capability: the pacing inserted between requests
///
/// Purely time-based throttling; it does not react to anything the remote
/// service says. Tests substitute a counter to check pacing without
/// sleeping.
pub trait Throttle {
    /// Pause after every event, regardless of outcome
    fn after_item(&mut self);

    /// Pause between one batch and the next
    fn between_batches(&mut self);
}

/// Wall-clock throttle backed by `thread::sleep`
#[derive(Debug, Clone)]
pub struct StdThrottle {
    item_delay: Duration,
    batch_pause: Duration,
}

impl StdThrottle {
    pub fn new(item_delay: Duration, batch_pause: Duration) -> Self {
        Self {
            item_delay,
            batch_pause,
        }
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(config.item_delay, config.batch_pause)
    }
}

impl Throttle for StdThrottle {
    fn after_item(&mut self) {
        std::thread::sleep(self.item_delay);
    }

    fn between_batches(&mut self) {
        std::thread::sleep(self.batch_pause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.viewport.width, 768);
        assert_eq!(config.viewport.height, 1280);
        assert_eq!(config.batch_size, 3);
        assert_eq!(config.item_delay, Duration::from_millis(500));
        assert_eq!(config.batch_pause, Duration::from_secs(2));
        assert_eq!(config.quality, 85);
        assert!(config.endpoint.starts_with("https://"));
    }

    #[test]
    fn test_result_flags() {
        let ok = FetchResult {
            id: 1,
            outcome: Outcome::Downloaded,
        };
        assert!(ok.is_success());
        assert!(!ok.is_cached());

        let cached = FetchResult {
            id: 2,
            outcome: Outcome::Cached,
        };
        assert!(cached.is_success());
        assert!(cached.is_cached());

        let failed = FetchResult {
            id: 3,
            outcome: Outcome::Failed {
                brand: "Acme".to_string(),
                error: "connection refused".to_string(),
            },
        };
        assert!(!failed.is_success());
        assert!(!failed.is_cached());
    }
}
