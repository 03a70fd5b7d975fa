use crate::search::{
    search_engines::{NodeId, NO_NODE},
    Cost, Move,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// The node has been created but not yet evaluated.
    New,
    /// The node has been evaluated but not yet expanded.
    Open,
    /// The node has been expanded.
    Closed,
}

/// A node in the search space.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// The id of the node, which doubles as the arena index of its board.
    node_id: NodeId,
    /// The status of the node.
    status: SearchNodeStatus,
    /// The f-value of the node.
    f: Cost,
    /// The g-value of the node, i.e. the moves spent reaching it.
    g: Cost,
    /// The h-value of the node, zero for the uninformed engines.
    h: Cost,
    /// The move that produced this node from its parent, `None` at the root.
    mv: Option<Move>,
    /// The id of the parent node, [`NO_NODE`] at the root.
    parent_id: NodeId,
}

impl SearchNode {
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: Cost::MAX,
            g: Cost::MAX,
            h: Cost::MAX,
            mv: None,
            parent_id: NO_NODE,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, mv: Move) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: Cost::MAX,
            g: Cost::MAX,
            h: Cost::MAX,
            mv: Some(mv),
            parent_id,
        }
    }

    /// Opens the node with `f = g + h`.
    pub fn open(&mut self, g: Cost, h: Cost) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    /// Opens the node with an explicit f-value, for engines that order by
    /// path length alone.
    pub fn open_with_f(&mut self, f: Cost) {
        self.status = SearchNodeStatus::Open;
        self.f = f;
        self.g = f;
        self.h = 0;
    }

    /// Redirects the node onto a shorter path. The heuristic estimate only
    /// depends on the board, so it is kept.
    pub fn reopen(&mut self, g: Cost, parent_id: NodeId, mv: Move) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.f = g + self.h;
        self.parent_id = parent_id;
        self.mv = Some(mv);
    }

    pub fn close(&mut self) {
        debug_assert!(self.status == SearchNodeStatus::Open);
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_f(&self) -> Cost {
        self.f
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_h(&self) -> Cost {
        self.h
    }

    pub fn get_move(&self) -> Option<Move> {
        self.mv
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }
}
