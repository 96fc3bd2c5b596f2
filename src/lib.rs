pub mod disconnect;
pub mod error;
pub mod graph;
pub mod instance;

pub use disconnect::{disconnect_machines, minimum_disconnect_cost, CutEdge, Disconnection, Disconnector};
pub use error::{Error, Result};
pub use graph::{Weight, WeightedGraph};
