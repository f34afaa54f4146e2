//! Human-readable `stdout` trace, enabled only by the `debug` feature.
//!
//! This is distinct from [`crate::trace`], a structured, queryable event
//! buffer meant for use by tests; this module is purely a development aid.

use crate::geometry::Size;
use crate::style::AvailableSpace;
use crate::tree::{NodeId, RunMode, SizingMode};
use core::cell::RefCell;

thread_local! {
    static NODE_STACK: RefCell<Vec<NodeId>> = const { RefCell::new(Vec::new()) };
}

/// Indentation-tracking logger used by the `debug` feature to print the
/// recursive descent of `compute_node_layout`. A zero-sized handle over a
/// `thread_local` stack (this engine is single-threaded, but a plain
/// `static` can't hold a `RefCell` since it is never `Sync`).
pub(crate) struct NodeLogger;

pub(crate) static NODE_LOGGER: NodeLogger = NodeLogger;

impl NodeLogger {
    /// Push `node` onto the trace stack and print its entry
    pub(crate) fn push_node(&self, node: NodeId) {
        let depth = NODE_STACK.with(|s| s.borrow().len());
        println!("{}node {:?}", "| ".repeat(depth), node);
        NODE_STACK.with(|s| s.borrow_mut().push(node));
    }

    /// Pop the most recently pushed node
    pub(crate) fn pop_node(&self) {
        NODE_STACK.with(|s| {
            s.borrow_mut().pop();
        });
    }

    /// Print a labelled line at the current indentation
    pub(crate) fn log(&self, label: &str) {
        let depth = NODE_STACK.with(|s| s.borrow().len());
        println!("{}{label}", "| ".repeat(depth));
    }

    /// Print a labelled line followed by a computed size
    pub(crate) fn labelled_debug_log(&self, label: &str, size: Size<f32>) {
        let depth = NODE_STACK.with(|s| s.borrow().len());
        println!("{}{label}: {:?}", "| ".repeat(depth), size);
    }
}

/// Prints the inputs to a `compute_node_layout` call at the current indentation
pub(crate) fn debug_log_node(
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    run_mode: RunMode,
    sizing_mode: SizingMode,
) {
    let depth = NODE_STACK.with(|s| s.borrow().len());
    println!(
        "{}known={known_dimensions:?} parent={parent_size:?} avail={available_space:?} mode={run_mode:?}/{sizing_mode:?}",
        "| ".repeat(depth)
    );
}
