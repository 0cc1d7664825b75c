pub mod common;
pub mod search;

pub use common::{health, root};
pub use search::search;
