pub mod cs;
pub mod error;

pub use cs::graph;
pub use error::{Error, Result};
