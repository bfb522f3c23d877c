//! Draw pools: construction from a banner and the weighted picks over them.

pub mod builder;
pub mod draw;
pub mod types;

pub use builder::build_pool;
pub use draw::{distribute, pick_uniform, pull};
pub use types::{DrawPool, WeightedItem};
