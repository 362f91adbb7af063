//! Monte-Carlo tree search
//!
//! - [`node`]: arena node, node index and the UCT ordering
//! - [`tree`]: the arena tree with expansion, selection and backpropagation
//! - [`search`]: the engine driving iterations and random playouts

pub mod node;
pub mod search;
pub mod tree;

pub use node::{MctsNode, NodeId, Uct};
pub use search::MctsEngine;
pub use tree::MctsTree;
