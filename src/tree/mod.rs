//! The node tree: identity, storage, the driver traits layout algorithms are
//! generic over, and the concrete [`TaffyTree`] consumers build against.

pub(crate) mod cache;
mod layout;
mod node_id;
mod taffy_tree;
mod traits;

pub(crate) use cache::Cache;
pub use layout::{Layout, LayoutInput, LayoutOutput, RunMode, SizingMode};
pub use node_id::NodeId;
pub use taffy_tree::{TaffyError, TaffyResult, TaffyTree};
pub(crate) use taffy_tree::NodeData;
pub use traits::{LayoutAlgorithm, LayoutPartialTree, LayoutTree};
