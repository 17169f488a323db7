//! Chunk source implementations.

pub mod replay;
pub mod synthetic;

pub use replay::ReplayProvider;
pub use synthetic::{SyntheticConfig, SyntheticProvider};
