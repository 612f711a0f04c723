// ============================================================================
// Literal Cache
// Thread-safe memoization of parse results
// ============================================================================

use crate::literal::NumericLiteral;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Memoizes [`NumericLiteral::parse`] by trimmed text.
///
/// Source files repeat the same literals (`0`, `1`, `1000`, masks) many
/// times; the cache parses each distinct text once and hands out shared
/// values. Rejections are cached too. Results are always identical to
/// calling the parser directly.
#[derive(Debug, Default)]
pub struct LiteralCache {
    entries: RwLock<HashMap<Box<str>, Option<Arc<NumericLiteral>>>>,
}

impl LiteralCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text`, reusing an earlier result for the same literal.
    pub fn parse(&self, text: &str) -> Option<Arc<NumericLiteral>> {
        let key = text.trim();
        if let Some(cached) = self.entries.read().get(key) {
            return cached.clone();
        }

        let parsed = NumericLiteral::parse(key).map(Arc::new);
        self.entries
            .write()
            .entry(key.into())
            .or_insert(parsed)
            .clone()
    }

    /// Number of distinct texts seen
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_cache_reuses_values() {
        let cache = LiteralCache::new();
        let first = cache.parse("1_000").unwrap();
        let second = cache.parse(" 1_000 ").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_remembers_rejections() {
        let cache = LiteralCache::new();
        assert!(cache.parse("name").is_none());
        assert!(cache.parse("name").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_matches_parser() {
        let cache = LiteralCache::new();
        for text in ["0x1F", "1.5e3f", "123_", "0b102", ".5m"] {
            assert_eq!(
                cache.parse(text).as_deref(),
                NumericLiteral::parse(text).as_ref(),
                "{text}"
            );
        }
    }

    #[test]
    fn test_clear() {
        let cache = LiteralCache::new();
        cache.parse("42");
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_access() {
        let cache = Arc::new(LiteralCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for n in 0..100 {
                        let text = format!("{}", n * 1000);
                        assert!(cache.parse(&text).is_some());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 100);
    }
}
