//! Configuration management for postpone.
//!
//! This module handles loading and saving configuration from `~/.postpone/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, PostponeConfig};
