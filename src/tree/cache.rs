//! The bounded per-node fingerprint cache, folding a node's last full-layout
//! result and its recent measurement passes into one structure, since both
//! are "was I computed under exactly these inputs, clean, to exactly these
//! outputs" gates keyed the same way.

use crate::geometry::Size;
use crate::style::AvailableSpace;
use crate::tree::layout::{LayoutOutput, RunMode};

/// Number of bounded measure-pass slots retained per node, in addition to
/// the one slot reserved for the node's last full (`PerformLayout`) result.
/// One extra beyond the usual eight-slot ring is kept here so a full
/// layout's own cache slot never has to evict a measure-pass entry that a
/// sibling's flex-basis resolution is still relying on within the same pass.
pub(crate) const CACHE_SIZE: usize = 9;

/// One cached `(inputs) -> (output)` fingerprint. Equality on
/// `known_dimensions`/`available_space` is plain `PartialEq` on the tagged
/// [`AvailableSpace`] enum, never a raw-float comparison — this is what
/// makes two `MaxContent` queries collide deterministically without also
/// colliding with an invalidated slot.
#[derive(Copy, Clone, Debug)]
struct CacheEntry {
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    content: LayoutOutput,
}

/// A node's cache: one slot for its last full layout, plus a small
/// round-robin ring of recent `ComputeSize` (measurement) passes.
#[derive(Clone, Debug, Default)]
pub struct Cache {
    final_layout_entry: Option<CacheEntry>,
    measure_entries: [Option<CacheEntry>; CACHE_SIZE],
    next_slot: usize,
}

/// Returns `true` if a cached entry computed under `cached_space` can answer
/// a query for `requested_space` without the node's content having to be
/// re-measured. An entry computed under `Definite(x)` can only answer a
/// request for that exact `x`; entries computed under `MinContent`/
/// `MaxContent` can only answer a request under the identical mode, since
/// the engine does not track enough information to know whether a narrower
/// or wider definite request would still land on the same intrinsic size.
fn spaces_compatible(cached: AvailableSpace, requested: AvailableSpace) -> bool {
    cached == requested
}

impl Cache {
    /// A new, empty cache
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Looks up a cached result for the given inputs. Returns `None` on any
    /// mismatch — including when the node has been cleared by [`Cache::clear`]
    /// since the entry was stored.
    pub(crate) fn get(
        &self,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        run_mode: RunMode,
    ) -> Option<LayoutOutput> {
        let matches = |entry: &CacheEntry| {
            entry.known_dimensions == known_dimensions
                && spaces_compatible(entry.available_space.width, available_space.width)
                && spaces_compatible(entry.available_space.height, available_space.height)
        };

        match run_mode {
            RunMode::PerformHiddenLayout => None,
            RunMode::PerformLayout => {
                self.final_layout_entry.as_ref().filter(|e| matches(e)).map(|e| e.content)
            }
            RunMode::ComputeSize => {
                if let Some(entry) = self.final_layout_entry.as_ref().filter(|e| matches(e)) {
                    return Some(entry.content);
                }
                self.measure_entries.iter().flatten().find(|e| matches(e)).map(|e| e.content)
            }
        }
    }

    /// Stores a freshly computed result under the given inputs.
    pub(crate) fn store(
        &mut self,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        run_mode: RunMode,
        content: LayoutOutput,
    ) {
        let entry = CacheEntry { known_dimensions, available_space, content };
        match run_mode {
            RunMode::PerformHiddenLayout => {}
            RunMode::PerformLayout => self.final_layout_entry = Some(entry),
            RunMode::ComputeSize => {
                self.measure_entries[self.next_slot] = Some(entry);
                self.next_slot = (self.next_slot + 1) % CACHE_SIZE;
            }
        }
    }

    /// Invalidates every cached entry. Called whenever a node's style
    /// changes or its subtree structure changes: this crate uses eager
    /// invalidation rather than lazy generation-counter comparison (see
    /// DESIGN.md).
    pub(crate) fn clear(&mut self) {
        self.final_layout_entry = None;
        self.measure_entries = Default::default();
        self.next_slot = 0;
    }

    /// True if nothing is cached — used as this crate's definition of
    /// "dirty": a node with an empty cache has no fingerprint that could
    /// possibly match, so it always recomputes.
    pub(crate) fn is_empty(&self) -> bool {
        self.final_layout_entry.is_none() && self.measure_entries.iter().all(|e| e.is_none())
    }
}
