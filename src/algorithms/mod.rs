//! Search engines and the bookkeeping they share.

pub mod a_star;
pub mod common;
pub mod gbfs;
pub mod node;
pub mod search_space;

pub use a_star::AStar;
pub use common::{PathStep, SearchEngine, SearchOutcome, Solution};
pub use gbfs::Gbfs;
pub use node::{AStarCost, GbfsCost, NodeCost, NodeId, SearchNode};
pub use search_space::SearchSpace;
