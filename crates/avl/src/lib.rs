//! Height-balanced binary search tree over `i64` keys.
//!
//! Insertion descends to an empty slot, then each frame on the way back up
//! refreshes its cached height and applies at most one of the four AVL
//! rotations (LL, RR, LR, RL). Equal keys are ignored.

mod iter;
mod node;
mod rotate;
mod tree;
mod validate;

pub use iter::Iter;
pub use rotate::Rotation;
pub use tree::{AvlTree, InsertOutcome};
pub use validate::Violation;
