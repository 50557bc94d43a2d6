//! Configuration module for the declaration analyzer
//! Compile-time limits come from the generated constants, user preferences from `runtime`

// Generated by build.rs from config/<profile>.toml
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

pub use runtime::{
    ConfigError, FileProcessorPreferences, LexicalPreferences, LogLevel, LoggingPreferences,
    RuntimeConfig, SemanticPreferences,
};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        super::compile_time::PROFILE
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("DECL_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}
