// SPDX-License-Identifier: MPL-2.0
//! Project write-ups and their parse cache.
//!
//! Write-ups are markdown files embedded under `writeups/<slug>.md`. Parsing
//! happens on first view; the parsed items are kept in an LRU cache so moving
//! back and forth between detail pages does not re-parse.

use iced::widget::markdown;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Parsed write-up, shared between the cache and the detail page.
pub type Writeup = Arc<[markdown::Item]>;

/// Cache hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteupStats {
    pub hits: u64,
    pub misses: u64,
}

/// LRU cache of parsed write-ups keyed by slug.
pub struct WriteupCache {
    cache: LruCache<String, Writeup>,
    stats: WriteupStats,
}

impl std::fmt::Debug for WriteupCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteupCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("stats", &self.stats)
            .finish()
    }
}

impl WriteupCache {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: LruCache::new(capacity),
            stats: WriteupStats::default(),
        }
    }

    /// Returns the parsed write-up for `slug`, parsing it on a miss.
    ///
    /// `None` when no write-up is embedded for the slug.
    pub fn get(&mut self, slug: &str) -> Option<Writeup> {
        if let Some(writeup) = self.cache.get(slug) {
            self.stats.hits += 1;
            return Some(Arc::clone(writeup));
        }

        let source = match super::read_optional_text(&path_for(slug)) {
            Ok(source) => source?,
            Err(err) => {
                tracing::warn!(slug, error = %err, "unreadable write-up");
                return None;
            }
        };

        self.stats.misses += 1;
        let writeup = parse(&source);
        self.cache.put(slug.to_string(), Arc::clone(&writeup));
        Some(writeup)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> WriteupStats {
        self.stats
    }
}

/// Parses markdown into renderable items.
#[must_use]
pub fn parse(source: &str) -> Writeup {
    markdown::parse(source).collect::<Vec<_>>().into()
}

fn path_for(slug: &str) -> String {
    format!("writeups/{slug}.md")
}
