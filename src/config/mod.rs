//! Configuration layer for the MicroSIP bridge.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML settings file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Process environment and destination paths ([`Environment`])
//! - Settings file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--timeout`, `--verbose`
//! 2. **TOML settings file** - everything else lives only here
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! `verbose` uses OR semantics: enabled in either source means enabled.
//!
//! # Settings discovery
//!
//! Without `--config`, the first `settings.toml` found in
//! [`defaults::SETTINGS_LOOKUP_DIRS`] is used.

mod cli;
pub mod defaults;
mod env;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use env::Environment;
pub use error::{ConfigError, field};
pub use toml::{AddressBookEntry, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, discover_settings, write_default_config};
