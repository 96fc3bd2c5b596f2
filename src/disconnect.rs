mod cut;
mod disconnector;

pub use cut::{CutEdge, Disconnection};
pub use disconnector::{disconnect_machines, minimum_disconnect_cost, Disconnector};
