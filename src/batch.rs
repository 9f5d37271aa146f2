//! The batch download loop.
//!
//! Events are processed strictly in list order, in fixed-size batches, with
//! a pause after every event and a longer pause between batches. Every
//! failure is caught at event granularity and turned into a failure result;
//! one bad event never aborts the run.

use crate::store::artifact_name;
use crate::{ArtifactStore, Error, Event, FetchConfig, FetchResult, Outcome, Renderer, Result, Throttle};

/// Drives the per-event fetch state machine over a renderer, a store, and a
/// throttle.
///
/// Generic over its three capabilities so tests can run the full loop with
/// an in-memory store, a canned renderer, and a counting throttle.
pub struct BatchFetcher<R, S, T> {
    renderer: R,
    store: S,
    throttle: T,
    batch_size: usize,
}

impl<R: Renderer, S: ArtifactStore, T: Throttle> BatchFetcher<R, S, T> {
    pub fn new(config: &FetchConfig, renderer: R, store: S, throttle: T) -> Result<Self> {
        if config.batch_size == 0 {
            return Err(Error::Config("batch_size must be at least 1".to_string()));
        }
        Ok(Self {
            renderer,
            store,
            throttle,
            batch_size: config.batch_size,
        })
    }

    /// Fetch a single event.
    ///
    /// An existing output file short-circuits the request entirely. On any
    /// failure the artifact is removed before reporting, so a failed event
    /// leaves nothing behind.
    pub fn fetch_one(&mut self, event: &Event) -> FetchResult {
        let filename = artifact_name(event.id);

        if self.store.exists(&filename) {
            println!("✓ Screenshot already exists: {} ({})", filename, event.brand);
            return FetchResult {
                id: event.id,
                outcome: Outcome::Cached,
            };
        }

        println!(
            "Downloading screenshot for: {} (ID: {})...",
            event.brand, event.id
        );

        match self.download(event, &filename) {
            Ok(()) => {
                println!("✓ Downloaded: {} ({})", filename, event.brand);
                FetchResult {
                    id: event.id,
                    outcome: Outcome::Downloaded,
                }
            }
            Err(e) => {
                if let Err(cleanup) = self.store.remove(&filename) {
                    log::warn!("Failed to clean up {}: {}", filename, cleanup);
                }
                let error = e.to_string();
                println!("✗ Failed: {} ({}) - {}", filename, event.brand, error);
                FetchResult {
                    id: event.id,
                    outcome: Outcome::Failed {
                        brand: event.brand.clone(),
                        error,
                    },
                }
            }
        }
    }

    fn download(&mut self, event: &Event, filename: &str) -> Result<()> {
        let bytes = self.renderer.render(&event.url)?;
        let written = self.store.write(filename, &bytes)?;
        if written == 0 {
            return Err(Error::EmptyFile);
        }
        Ok(())
    }

    /// Process the whole list in order and return one result per event.
    pub fn run(&mut self, events: &[Event]) -> Vec<FetchResult> {
        let total_batches = events.len().div_ceil(self.batch_size);
        let mut results = Vec::with_capacity(events.len());

        for (batch_idx, batch) in events.chunks(self.batch_size).enumerate() {
            println!("\nProcessing batch {}/{}...", batch_idx + 1, total_batches);

            for event in batch {
                results.push(self.fetch_one(event));
                self.throttle.after_item();
            }

            if batch_idx + 1 < total_batches {
                self.throttle.between_batches();
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet};
    use std::rc::Rc;

    struct FakeRenderer {
        fail_urls: HashSet<String>,
        empty_urls: HashSet<String>,
        calls: Rc<Cell<usize>>,
    }

    impl FakeRenderer {
        fn new(calls: Rc<Cell<usize>>) -> Self {
            Self {
                fail_urls: HashSet::new(),
                empty_urls: HashSet::new(),
                calls,
            }
        }
    }

    impl Renderer for FakeRenderer {
        fn render(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_urls.contains(url) {
                return Err(Error::Request("connection refused".to_string()));
            }
            if self.empty_urls.contains(url) {
                return Ok(Vec::new());
            }
            Ok(b"\xff\xd8\xfffake-jpeg".to_vec())
        }
    }

    #[derive(Clone, Default)]
    struct MemStore {
        files: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    }

    impl ArtifactStore for MemStore {
        fn exists(&self, name: &str) -> bool {
            self.files.borrow().contains_key(name)
        }

        fn write(&mut self, name: &str, bytes: &[u8]) -> Result<u64> {
            self.files.borrow_mut().insert(name.to_string(), bytes.to_vec());
            Ok(bytes.len() as u64)
        }

        fn remove(&mut self, name: &str) -> Result<()> {
            self.files.borrow_mut().remove(name);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct CountingThrottle {
        items: Rc<Cell<usize>>,
        batches: Rc<Cell<usize>>,
    }

    impl Throttle for CountingThrottle {
        fn after_item(&mut self) {
            self.items.set(self.items.get() + 1);
        }

        fn between_batches(&mut self) {
            self.batches.set(self.batches.get() + 1);
        }
    }

    fn sample_events(n: u32) -> Vec<Event> {
        (1..=n)
            .map(|i| {
                Event::new(
                    i,
                    &format!("Brand {}", i),
                    &format!("https://example.com/article/{}", i),
                )
            })
            .collect()
    }

    fn fetcher(
        renderer: FakeRenderer,
        store: MemStore,
        throttle: CountingThrottle,
    ) -> BatchFetcher<FakeRenderer, MemStore, CountingThrottle> {
        BatchFetcher::new(&FetchConfig::default(), renderer, store, throttle)
            .expect("Failed to build fetcher")
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let config = FetchConfig {
            batch_size: 0,
            ..Default::default()
        };
        let calls = Rc::new(Cell::new(0));
        let result = BatchFetcher::new(
            &config,
            FakeRenderer::new(calls),
            MemStore::default(),
            CountingThrottle::default(),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_one_failure_does_not_abort_the_run() {
        let calls = Rc::new(Cell::new(0));
        let mut renderer = FakeRenderer::new(calls.clone());
        renderer
            .fail_urls
            .insert("https://example.com/article/3".to_string());
        let store = MemStore::default();
        let events = sample_events(5);

        let results = fetcher(renderer, store.clone(), CountingThrottle::default()).run(&events);

        assert_eq!(results.len(), 5);
        assert_eq!(
            results.iter().filter(|r| r.is_success()).count(),
            4,
            "four events should succeed"
        );
        assert!(results.iter().all(|r| !r.is_cached()));

        let failed = &results[2];
        assert_eq!(failed.id, 3);
        assert_eq!(
            failed.outcome,
            Outcome::Failed {
                brand: "Brand 3".to_string(),
                error: "Render request failed: connection refused".to_string(),
            }
        );

        let files = store.files.borrow();
        for id in [1u32, 2, 4, 5] {
            assert!(files.contains_key(&artifact_name(id)));
        }
        assert!(!files.contains_key(&artifact_name(3)));
    }

    #[test]
    fn test_pacing_counts() {
        // ceil(N / batch_size) - 1 batch pauses, one item pause per event
        for (n, expected_batch_pauses) in [(1u32, 0usize), (3, 0), (4, 1), (5, 1), (6, 1), (7, 2)] {
            let calls = Rc::new(Cell::new(0));
            let throttle = CountingThrottle::default();
            let events = sample_events(n);

            fetcher(
                FakeRenderer::new(calls),
                MemStore::default(),
                throttle.clone(),
            )
            .run(&events);

            assert_eq!(throttle.items.get(), n as usize, "item pauses for n={}", n);
            assert_eq!(
                throttle.batches.get(),
                expected_batch_pauses,
                "batch pauses for n={}",
                n
            );
        }
    }

    #[test]
    fn test_existing_files_skip_the_network() {
        let calls = Rc::new(Cell::new(0));
        let mut store = MemStore::default();
        let events = sample_events(4);
        for event in &events {
            store
                .write(&artifact_name(event.id), b"previous run")
                .unwrap();
        }

        let results = fetcher(
            FakeRenderer::new(calls.clone()),
            store,
            CountingThrottle::default(),
        )
        .run(&events);

        assert!(results.iter().all(|r| r.is_cached()));
        assert_eq!(calls.get(), 0, "no render calls expected on a cached run");
    }

    #[test]
    fn test_empty_body_is_cleaned_up() {
        let calls = Rc::new(Cell::new(0));
        let mut renderer = FakeRenderer::new(calls);
        renderer
            .empty_urls
            .insert("https://example.com/article/2".to_string());
        let store = MemStore::default();
        let events = sample_events(2);

        let results = fetcher(renderer, store.clone(), CountingThrottle::default()).run(&events);

        assert_eq!(
            results[1].outcome,
            Outcome::Failed {
                brand: "Brand 2".to_string(),
                error: "Empty file".to_string(),
            }
        );
        assert!(
            !store.files.borrow().contains_key(&artifact_name(2)),
            "zero-byte artifact must not survive"
        );
    }
}
