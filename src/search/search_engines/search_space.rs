use crate::search::{search_engines::SearchNode, Move, MoveSequence, PackedBoard};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// Identifier of a node, which is also its index into the search space
/// arenas. Ids are dense and allocated in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Sentinel id marking the root's missing parent.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// Arena of every node generated so far, keyed by packed board for
/// duplicate detection. Nodes and boards live in segmented vectors so that
/// growth never moves existing entries.
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
    boards: SegVec<PackedBoard, Linear>,
    registered: HashMap<PackedBoard, NodeId>,
}

impl SearchSpace {
    pub fn new(initial: PackedBoard) -> Self {
        let mut nodes = SegVec::new();
        let mut boards = SegVec::new();
        let mut registered = HashMap::new();
        let root_id = NodeId(0);
        registered.insert(initial, root_id);
        nodes.push(SearchNode::new_without_parent(root_id));
        boards.push(initial);
        Self {
            nodes,
            boards,
            registered,
        }
    }

    /// Returns the node for a board, creating it with the given parent and
    /// move if the board has never been seen. Callers distinguish the two
    /// cases through the node's status.
    pub fn insert_or_get_node(
        &mut self,
        board: PackedBoard,
        mv: Move,
        parent_id: NodeId,
    ) -> &mut SearchNode {
        match self.registered.get(&board) {
            Some(&node_id) => self.get_node_mut(node_id),
            None => {
                let node_id = NodeId(self.nodes.len());
                self.registered.insert(board, node_id);
                self.nodes.push(SearchNode::new_with_parent(node_id, parent_id, mv));
                self.boards.push(board);
                self.get_node_mut(node_id)
            }
        }
    }

    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(NodeId(0))
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.0).expect("Invalid node id")
    }

    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.0).expect("Invalid node id")
    }

    pub fn get_board(&self, node_id: NodeId) -> PackedBoard {
        *self.boards.get(node_id.0).expect("Invalid node id")
    }

    /// Number of nodes generated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walks parent links from a goal node back to the root and returns the
    /// moves along the way in forward order.
    pub fn extract_moves(&self, goal_node: &SearchNode) -> MoveSequence {
        let mut moves: Vec<Move> = vec![];
        let mut current = goal_node;
        while current.get_parent_id() != NO_NODE {
            moves.push(
                current
                    .get_move()
                    .expect("Node below the root is missing its move"),
            );
            current = self.get_node(current.get_parent_id());
        }
        moves.reverse();
        MoveSequence::new(moves)
    }
}

impl std::fmt::Debug for SearchSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSpace")
            .field("len", &self.len())
            .finish()
    }
}
