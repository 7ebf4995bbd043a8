//! Scene cache implementation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use storyreel_core::VideoResult;

/// Configuration for the scene cache.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct SceneCacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    #[builder(default = "default_enabled()")]
    enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for SceneCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

/// Snapshot of the cache contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cached scenes
    pub size: usize,
    /// Cached scene ids in insertion order
    pub entries: Vec<String>,
}

/// Cache of video results keyed by scene id.
///
/// Entries never expire. Writing an id twice replaces the earlier result.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use storyreel_cache::SceneCache;
/// use storyreel_core::VideoResult;
///
/// let mut cache = SceneCache::default();
/// let result = VideoResult {
///     video_url: "https://example.com/clip.mp4".to_string(),
///     has_audio: true,
///     duration: 8,
///     prompt: "Gas station".to_string(),
///     is_placeholder: false,
///     error: None,
///     generated_at: Utc::now(),
/// };
///
/// cache.insert("episode-1-segment-0", result.clone());
/// assert_eq!(cache.get("episode-1-segment-0"), Some(&result));
/// assert_eq!(cache.stats().size, 1);
/// ```
#[derive(Debug, Clone)]
pub struct SceneCache {
    config: SceneCacheConfig,
    entries: HashMap<String, VideoResult>,
    insertion_order: Vec<String>,
}

impl SceneCache {
    /// Create a new scene cache with configuration.
    pub fn new(config: SceneCacheConfig) -> Self {
        tracing::debug!(enabled = config.enabled, "Creating new SceneCache");
        Self {
            config,
            entries: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Store a result under a scene id.
    #[tracing::instrument(skip(self, value), fields(cache_size = self.entries.len()))]
    pub fn insert(&mut self, scene_id: &str, value: VideoResult) {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping insert");
            return;
        }

        if !self.entries.contains_key(scene_id) {
            self.insertion_order.push(scene_id.to_string());
        }

        tracing::debug!(
            overwrite = self.entries.contains_key(scene_id),
            is_placeholder = value.is_placeholder,
            "Inserted entry into cache"
        );

        self.entries.insert(scene_id.to_string(), value);
    }

    /// Get a cached result.
    ///
    /// Returns None if the scene was never stored or the cache is disabled.
    #[tracing::instrument(skip(self), fields(cache_size = self.entries.len()))]
    pub fn get(&self, scene_id: &str) -> Option<&VideoResult> {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, returning None");
            return None;
        }

        let entry = self.entries.get(scene_id);
        tracing::debug!(hit = entry.is_some(), "Cache lookup");
        entry
    }

    /// Clear all cache entries.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.insertion_order.clear();
        tracing::info!(cleared = count, "Cleared scene cache");
    }

    /// Size and ids of the cached scenes.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            entries: self.insertion_order.clone(),
        }
    }

    /// Get number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the configuration.
    pub fn config(&self) -> &SceneCacheConfig {
        &self.config
    }
}

impl Default for SceneCache {
    fn default() -> Self {
        Self::new(SceneCacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn result(url: &str) -> VideoResult {
        VideoResult {
            video_url: url.to_string(),
            has_audio: true,
            duration: 8,
            prompt: "prompt".to_string(),
            is_placeholder: false,
            error: None,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let mut cache = SceneCache::default();
        cache.insert("a", result("https://one"));
        cache.insert("a", result("https://two"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").map(|r| r.video_url.as_str()), Some("https://two"));
        assert_eq!(cache.stats().entries, vec!["a".to_string()]);
    }

    #[test]
    fn test_stats_preserve_insertion_order() {
        let mut cache = SceneCache::default();
        cache.insert("second", result("https://2"));
        cache.insert("first", result("https://1"));

        let stats = cache.stats();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.entries, vec!["second".to_string(), "first".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut cache = SceneCache::default();
        cache.insert("a", result("https://one"));
        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let config = SceneCacheConfig::default().with_enabled(false);
        let mut cache = SceneCache::new(config);
        cache.insert("a", result("https://one"));

        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn test_builder() {
        let config = SceneCacheConfigBuilder::default().build().unwrap();
        assert!(*config.enabled());
    }
}
