//! MCTS tree structure with arena allocation.
//!
//! Nodes live in one contiguous `Vec` and point at each other by
//! [`NodeId`]. Dropping the tree releases every node at once.

use crate::board::{Board, Stone};
use crate::error::Result;
use crate::fixed::Fixed;
use crate::rules::legal_moves;

use super::node::{MctsNode, NodeId, Uct};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree {
    /// Arena storing all nodes; the root is always at index 0
    nodes: Vec<MctsNode>,
}

impl MctsTree {
    /// Create a tree holding only a root where `player` is to move.
    pub fn new(player: Stone) -> Result<Self> {
        let mut nodes = Vec::new();
        nodes.try_reserve(1)?;
        nodes.push(MctsNode::new_root(player));
        Ok(Self { nodes })
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add one child per legal move on `board`, the position at `id`.
    ///
    /// Returns the number of children added. Fails without touching the
    /// tree if the arena cannot grow.
    pub fn expand(&mut self, id: NodeId, board: &Board) -> Result<usize> {
        let moves = legal_moves(board);
        self.nodes.try_reserve(moves.len())?;

        let next = self.get(id).player.opponent();
        for &mv in &moves {
            let child = NodeId(self.nodes.len() as u32);
            self.nodes.push(MctsNode::new_child(id, mv, next));
            self.get_mut(id).children.push(child);
        }
        Ok(moves.len())
    }

    /// Child with the highest UCT value; the first one wins ties.
    pub fn select_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id);
        let mut best: Option<(Uct, NodeId)> = None;
        for &child in &node.children {
            let uct = self.get(child).uct(node.visits);
            if best.map_or(true, |(top, _)| uct > top) {
                best = Some((uct, child));
            }
        }
        best.map(|(_, child)| child)
    }

    /// Add `value` at `leaf` and its complement one level up, alternating
    /// all the way to the root.
    pub fn backpropagate(&mut self, leaf: NodeId, value: Fixed) {
        let mut current = Some(leaf);
        let mut value = value;

        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            node.score += u64::from(value.raw());

            value = value.complement();
            current = node.parent;
        }
    }

    /// Most visited root child as `(move, visits)`; the first one wins ties.
    pub fn best_action(&self) -> Option<(usize, u32)> {
        let root = self.get(self.root());
        let mut best: Option<(usize, u32)> = None;
        for &child in &root.children {
            let node = self.get(child);
            let Some(mv) = node.mv else { continue };
            if best.map_or(true, |(_, visits)| node.visits > visits) {
                best = Some((mv, node.visits));
            }
        }
        best
    }
}
