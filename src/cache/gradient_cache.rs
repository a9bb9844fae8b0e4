use crate::color::*;
use crate::definition::*;
use crate::raster::*;

use desync::Desync;
use lru::LruCache;
use once_cell::sync::Lazy;

use std::num::NonZeroUsize;
use std::sync::*;

/// Number of rasterized gradients the default cache retains before evicting
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// The process-wide cache shared by bindings that don't inject their own
static DEFAULT_CACHE: Lazy<GradientCache> = Lazy::new(|| GradientCache::with_default_capacity());

///
/// A bounded, shareable cache of rasterized gradients keyed by value fingerprint
///
/// Any number of definitions share entries by value equality: two definitions
/// with equal fingerprints are interchangeable even when they are different
/// instances. Lookups and insertions synchronize through the core, so the
/// cache can be used from multiple threads; concurrent misses on the same
/// fingerprint may both rasterize, with the last store winning (both results
/// are identical, so no caller observes wrong data).
///
/// Cache hits return copies: callers can never mutate a shared entry.
///
#[derive(Clone)]
pub struct GradientCache {
    core: Arc<Desync<GradientCacheCore>>,
}

struct GradientCacheCore {
    entries: LruCache<GradientFingerprint, RasterResult>,
}

///
/// The process-wide default cache
///
/// Tests and embedders that need isolation should construct their own
/// `GradientCache` instead of relying on this shared instance.
///
pub fn default_gradient_cache() -> &'static GradientCache {
    &DEFAULT_CACHE
}

impl GradientCache {
    ///
    /// Creates a cache that retains up to `capacity` rasterized gradients
    /// (least-recently-used entries are evicted once it fills)
    ///
    pub fn new(capacity: usize) -> GradientCache {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();

        GradientCache {
            core: Arc::new(Desync::new(GradientCacheCore {
                entries: LruCache::new(capacity),
            })),
        }
    }

    ///
    /// Creates a cache with the default capacity
    ///
    pub fn with_default_capacity() -> GradientCache {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    ///
    /// Returns the rasterization of a definition, computing and storing it on a miss
    ///
    /// Returns `None` when the definition is not ready to render; nothing is
    /// stored in that case.
    ///
    pub fn get_or_render(&self, definition: &GradientDefinition, effective_colors: &[Color]) -> Option<RasterResult> {
        if !definition.size().is_renderable() || effective_colors.is_empty() {
            return None;
        }

        let fingerprint = definition.fingerprint(effective_colors, None);

        if let Some(hit) = self.lookup(&fingerprint) {
            return Some(hit);
        }

        // Rasterize outside the lock: a racing miss computes the same value
        let result = rasterize(definition, effective_colors)?;
        self.store(result.clone());

        Some(result)
    }

    ///
    /// As `get_or_render`, for the border variant (the border parameters are
    /// part of the fingerprint)
    ///
    pub fn get_or_render_border(&self, definition: &GradientDefinition, border: &BorderPaint, effective_colors: &[Color]) -> Option<RasterResult> {
        if !definition.size().is_renderable() {
            return None;
        }

        let fingerprint = definition.fingerprint(effective_colors, Some(border));

        if let Some(hit) = self.lookup(&fingerprint) {
            return Some(hit);
        }

        let result = rasterize_border(definition, border, effective_colors)?;
        self.store(result.clone());

        Some(result)
    }

    ///
    /// The number of results currently retained
    ///
    pub fn len(&self) -> usize {
        self.core.sync(|core| core.entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// True if a result for this fingerprint is retained (does not refresh its
    /// position in the eviction order)
    ///
    pub fn contains(&self, fingerprint: &GradientFingerprint) -> bool {
        self.core.sync(|core| core.entries.peek(fingerprint).is_some())
    }

    fn lookup(&self, fingerprint: &GradientFingerprint) -> Option<RasterResult> {
        self.core.sync(|core| core.entries.get(fingerprint).cloned())
    }

    fn store(&self, result: RasterResult) {
        self.core.sync(move |core| {
            core.entries.put(result.fingerprint().clone(), result);
        });
    }
}
