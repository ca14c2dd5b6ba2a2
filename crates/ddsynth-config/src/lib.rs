//! Render configuration for ddsynth.
//!
//! This crate is the boundary between user input and the synthesis core.
//! Selector names are resolved once, when the configuration is parsed, and
//! every numeric parameter is checked by [`RenderConfig::validate`] before
//! any buffer is allocated.
//!
//! # Features
//!
//! - **TOML files**: [`RenderConfig::load`], [`RenderConfig::save`], [`RenderConfig::from_toml_str`]
//! - **Program selection**: [`Program`] names every render the CLI can produce
//! - **Envelope shape**: [`AdsrConfig`] holds period fractions
//!
//! # Example
//!
//! ```rust
//! use ddsynth_config::{Program, RenderConfig};
//!
//! let config = RenderConfig::from_toml_str(r#"
//!     program = "scale"
//!     waveform = "square"
//!     loops = 2
//! "#).unwrap();
//!
//! assert_eq!(config.program, Program::Scale);
//! config.validate().unwrap();
//! ```

mod error;
mod program;
mod render;

pub use error::ConfigError;
pub use program::Program;
pub use render::{AdsrConfig, RenderConfig};
