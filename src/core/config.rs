//! Configuration management for postseed.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{PostSeedError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Source discovery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Directory scanned for source documents
    #[serde(default = "default_source_dir")]
    pub dir: PathBuf,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Directory depth to descend (1 = the directory itself only)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Artifact output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Path of the JSON artifact
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

/// External text conversion command
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionConfig {
    /// Converter executable
    #[serde(default = "default_converter_program")]
    pub program: String,

    /// Arguments placed before the document path
    #[serde(default = "default_converter_args")]
    pub args: Vec<String>,
}

/// Limits configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Documents extracted at the same time
    #[serde(default = "default_max_concurrent_extractions")]
    pub max_concurrent_extractions: usize,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("word")
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.docx".to_string(), "*.xlsx".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    // Office lock files
    vec!["~$*".to_string()]
}

fn default_max_depth() -> usize {
    1
}

fn default_max_file_size() -> usize {
    50
}

fn default_output_path() -> PathBuf {
    PathBuf::from("scripts/post_seed.json")
}

fn default_converter_program() -> String {
    "textutil".to_string()
}

fn default_converter_args() -> Vec<String> {
    vec![
        "-convert".to_string(),
        "txt".to_string(),
        "-stdout".to_string(),
    ]
}

fn default_max_concurrent_extractions() -> usize {
    1
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_depth: default_max_depth(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            program: default_converter_program(),
            args: default_converter_args(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_concurrent_extractions: default_max_concurrent_extractions(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PostSeedError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. POSTSEED_CONFIG env var
    /// 2. XDG config file (~/.config/postseed/config.toml)
    /// 3. ./postseed.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("POSTSEED_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("postseed.toml").exists() {
                Self::from_file("postseed.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(dir) = env::var("POSTSEED_SOURCE_DIR") {
            self.sources.dir = PathBuf::from(dir);
        }
        if let Ok(path) = env::var("POSTSEED_OUTPUT_PATH") {
            self.output.path = PathBuf::from(path);
        }
        if let Ok(program) = env::var("POSTSEED_CONVERTER") {
            self.conversion.program = program;
        }
        if let Ok(max_concurrent) = env::var("POSTSEED_MAX_CONCURRENT") {
            if let Ok(max) = max_concurrent.parse() {
                self.limits.max_concurrent_extractions = max;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sources.include_patterns.is_empty() {
            return Err(PostSeedError::ConfigError(
                "At least one include pattern is required".to_string(),
            ));
        }

        if self.sources.max_depth == 0 {
            return Err(PostSeedError::ConfigError(
                "Max depth must be non-zero".to_string(),
            ));
        }

        if self.sources.max_file_size_mb == 0 {
            return Err(PostSeedError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.conversion.program.trim().is_empty() {
            return Err(PostSeedError::ConfigError(
                "Converter program cannot be empty".to_string(),
            ));
        }

        if self.limits.max_concurrent_extractions == 0 {
            return Err(PostSeedError::ConfigError(
                "Max concurrent extractions must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Source dir: {:?}", self.sources.dir);
        tracing::info!("  Include patterns: {:?}", self.sources.include_patterns);
        tracing::info!("  Exclude patterns: {:?}", self.sources.exclude_patterns);
        tracing::info!("  Max depth: {}", self.sources.max_depth);
        tracing::info!("  Max file size: {} MB", self.sources.max_file_size_mb);
        tracing::info!("  Output: {:?}", self.output.path);
        tracing::info!(
            "  Converter: {} {}",
            self.conversion.program,
            self.conversion.args.join(" ")
        );
        tracing::info!(
            "  Max concurrent extractions: {}",
            self.limits.max_concurrent_extractions
        );
    }
}
