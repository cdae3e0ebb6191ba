//! Configuration loading

mod loader;

pub use loader::{load_config, load_template};
