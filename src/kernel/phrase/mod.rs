pub mod builder;
pub mod types;

pub use builder::build_clause;
pub use types::*;
