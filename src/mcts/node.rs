//! MCTS tree node representation.
//!
//! Each node is the position reached by playing `mv` from its parent.
//! Scores are fixed-point sums from the perspective of the player who
//! played `mv`, so a parent simply picks the child with the best score.

use smallvec::SmallVec;

use crate::board::{Stone, TOTAL_CELLS};
use crate::fixed::Fixed;

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// UCT value of a child. Unvisited children outrank every score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Uct {
    Score(Fixed),
    Unvisited,
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Parent node index, `None` for the root
    pub parent: Option<NodeId>,

    /// Cell played to reach this node, `None` for the root
    pub mv: Option<usize>,

    /// Player to move at this node
    pub player: Stone,

    /// Number of times this node has been visited
    pub visits: u32,

    /// Sum of backpropagated fixed-point values (raw)
    pub score: u64,

    /// Child indices, empty until expanded
    pub children: SmallVec<[NodeId; TOTAL_CELLS]>,
}

impl MctsNode {
    /// Root of a search where `player` is to move.
    pub fn new_root(player: Stone) -> Self {
        Self {
            parent: None,
            mv: None,
            player,
            visits: 0,
            score: 0,
            children: SmallVec::new(),
        }
    }

    /// Child reached by `mv`; `player` is to move after it.
    pub fn new_child(parent: NodeId, mv: usize, player: Stone) -> Self {
        Self {
            parent: Some(parent),
            mv: Some(mv),
            player,
            visits: 0,
            score: 0,
            children: SmallVec::new(),
        }
    }

    /// The player who moved into this node.
    #[inline]
    pub fn mover(&self) -> Stone {
        self.player.opponent()
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Average value, zero before the first visit.
    #[inline]
    pub fn mean(&self) -> Fixed {
        if self.visits == 0 {
            Fixed::ZERO
        } else {
            Fixed((self.score / u64::from(self.visits)) as u32)
        }
    }

    /// `mean + sqrt(2) * sqrt(ln(parent_visits) / visits)`.
    pub fn uct(&self, parent_visits: u32) -> Uct {
        if self.visits == 0 {
            return Uct::Unvisited;
        }
        let explore = Fixed::from_int(parent_visits).ln().div_int(self.visits).sqrt();
        let bonus = Fixed::SQRT_2.mul(explore);
        Uct::Score(Fixed(self.mean().raw().saturating_add(bonus.raw())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unvisited_outranks_everything() {
        assert!(Uct::Unvisited > Uct::Score(Fixed(u32::MAX)));
        assert!(Uct::Score(Fixed::ONE) > Uct::Score(Fixed::HALF));
    }

    #[test]
    fn test_mean() {
        let mut node = MctsNode::new_child(NodeId::ROOT, 3, Stone::X);
        assert_eq!(node.mean(), Fixed::ZERO);

        node.visits = 4;
        node.score = u64::from(Fixed::ONE.raw()) * 3;
        assert_eq!(node.mean(), Fixed(49_152));
        assert_eq!(node.mover(), Stone::O);
    }

    #[test]
    fn test_uct_exploration_shrinks_with_visits() {
        let mut few = MctsNode::new_child(NodeId::ROOT, 0, Stone::O);
        few.visits = 2;
        few.score = u64::from(Fixed::HALF.raw()) * 2;

        let mut many = few.clone();
        many.visits = 50;
        many.score = u64::from(Fixed::HALF.raw()) * 50;

        assert_eq!(few.uct(1).max(many.uct(1)), Uct::Score(Fixed::HALF));
        assert!(few.uct(100) > many.uct(100));
        assert!(many.uct(100) > Uct::Score(Fixed::HALF));
    }

    #[test]
    fn test_root_has_no_move() {
        let root = MctsNode::new_root(Stone::O);
        assert_eq!(root.mv, None);
        assert_eq!(root.parent, None);
        assert!(!root.is_expanded());
    }
}
