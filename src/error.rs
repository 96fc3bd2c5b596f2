use thiserror::Error;

use crate::graph::Weight;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node {node} is outside the graph of order {order}")]
    InvalidNode { node: usize, order: usize },

    #[error("there is no edge between {u} and {v}")]
    EdgeNotFound { u: usize, v: usize },

    #[error("edge ({u}, {v}) has non-positive weight {weight}")]
    InvalidWeight { u: usize, v: usize, weight: Weight },

    #[error("node {node} cannot be connected to itself")]
    SelfLoop { node: usize },

    #[error("machine {node} is listed more than once")]
    DuplicateMachine { node: usize },
}
