//! In-memory structured event log, distinct from the `debug` feature's
//! stdout [`NodeLogger`](crate::util::debug::NodeLogger): this buffer is
//! runtime-gated rather than compile-time-gated, and its events are
//! `PartialEq`-comparable so tests can assert two layout passes took the
//! identical path rather than just produced the identical output — the
//! mechanism the incremental-layout-equals-fresh-layout property relies on
//! to localize a divergence instead of just detecting one.

use crate::tree::{NodeId, RunMode, SizingMode};
use crate::util::sys::Vec;
use core::cell::RefCell;

thread_local! {
    static TRACE: RefCell<Option<Vec<TraceEvent>>> = const { RefCell::new(None) };
}

/// One recorded instrumentation point in a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A node entered `compute_child_layout` under the given run/sizing mode
    LayoutEnter {
        /// The node entering layout
        node: NodeId,
        /// The run mode it was entered under
        run_mode: RunMode,
        /// The sizing mode it was entered under
        sizing_mode: SizingMode,
    },
    /// A node's layout computation returned
    LayoutExit {
        /// The node whose layout just finished
        node: NodeId,
    },
    /// A cache probe found a matching entry and returned without recomputing
    FingerprintHit {
        /// The node whose cache was hit
        node: NodeId,
    },
    /// A cache probe found no matching entry; the uncached path ran
    FingerprintMiss {
        /// The node whose cache was missed
        node: NodeId,
    },
    /// A leaf's measure callback was invoked
    MeasureCall {
        /// The node being measured
        node: NodeId,
    },
    /// A leaf measurement was served from cache instead of calling measure
    MeasureHit {
        /// The node whose measurement was served from cache
        node: NodeId,
    },
    /// A node was laid out a second time with parent-supplied known
    /// dimensions, after an initial hypothetical-size pass
    ParentOverride {
        /// The node receiving the override
        node: NodeId,
    },
}

/// Starts recording trace events on the current thread. Any events recorded
/// before a prior [`disable_trace`]/[`take_trace`] call are discarded.
pub fn enable_trace() {
    TRACE.with(|cell| *cell.borrow_mut() = Some(Vec::new()));
}

/// Stops recording. [`record_event`] becomes a no-op until [`enable_trace`]
/// is called again.
pub fn disable_trace() {
    TRACE.with(|cell| *cell.borrow_mut() = None);
}

/// Drains and returns every event recorded since the last `enable_trace`/
/// `take_trace` call. Returns an empty `Vec` if tracing isn't enabled.
pub fn take_trace() -> Vec<TraceEvent> {
    TRACE.with(|cell| cell.borrow_mut().as_mut().map(core::mem::take).unwrap_or_default())
}

/// Pushes `event` onto the current thread's trace buffer, if tracing is
/// enabled. A no-op otherwise, so call sites don't need to branch on whether
/// tracing is active.
pub(crate) fn record_event(event: TraceEvent) {
    TRACE.with(|cell| {
        if let Some(events) = cell.borrow_mut().as_mut() {
            events.push(event);
        }
    });
}

/// Returns the index and the two (possibly absent, if one trace is a prefix
/// of the other) events at the first point `a` and `b` diverge, or `None` if
/// they're equal.
pub fn diff_traces(a: &[TraceEvent], b: &[TraceEvent]) -> Option<(usize, Option<TraceEvent>, Option<TraceEvent>)> {
    let len = a.len().max(b.len());
    for i in 0..len {
        let event_a = a.get(i).copied();
        let event_b = b.get(i).copied();
        if event_a != event_b {
            return Some((i, event_a, event_b));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default_records_nothing() {
        disable_trace();
        record_event(TraceEvent::MeasureCall { node: NodeId::new(0) });
        assert_eq!(take_trace(), Vec::new());
    }

    #[test]
    fn enable_then_take_drains_exactly_once() {
        enable_trace();
        record_event(TraceEvent::FingerprintMiss { node: NodeId::new(1) });
        record_event(TraceEvent::FingerprintHit { node: NodeId::new(1) });
        let events = take_trace();
        assert_eq!(events.len(), 2);
        assert_eq!(take_trace(), Vec::new());
        disable_trace();
    }

    #[test]
    fn diff_traces_finds_first_divergence() {
        let a = vec![
            TraceEvent::LayoutEnter { node: NodeId::new(0), run_mode: RunMode::PerformLayout, sizing_mode: SizingMode::InherentSize },
            TraceEvent::FingerprintMiss { node: NodeId::new(0) },
        ];
        let b = vec![
            TraceEvent::LayoutEnter { node: NodeId::new(0), run_mode: RunMode::PerformLayout, sizing_mode: SizingMode::InherentSize },
            TraceEvent::FingerprintHit { node: NodeId::new(0) },
        ];
        let diff = diff_traces(&a, &b);
        assert_eq!(diff.map(|(i, _, _)| i), Some(1));
    }

    #[test]
    fn diff_traces_equal_is_none() {
        let a = vec![TraceEvent::LayoutExit { node: NodeId::new(3) }];
        assert_eq!(diff_traces(&a, &a), None);
    }
}
