pub mod config;
pub mod error;
pub mod kernel;
pub mod outputs;
pub mod services;

// Re-export specific items for convenient access
pub use config::GeneratorConfig;
pub use error::NlgError;
pub use kernel::frame::{KeywordFrame, RecipeQuery};
pub use kernel::speech::{Generator, UtteranceType};
pub use outputs::realizer::{RuleRealizer, SurfaceRealizer};
pub use outputs::recipe::{render_recipe, Recipe};
