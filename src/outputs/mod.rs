pub mod grammar;
pub mod realizer;
pub mod recipe;
