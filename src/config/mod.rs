/// Configuration layer: environment files, CLI overrides, validation.
pub mod env;
pub mod errors;
pub mod resolve;

pub use env::load_env_files;
pub use errors::ConfigError;
pub use resolve::{Config, Overrides, Tweaks, resolve};
