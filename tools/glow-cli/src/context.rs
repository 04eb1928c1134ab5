//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use glow_commerce::SessionId;
use glow_observability::StructuredLogger;

use crate::config::{GlowConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: GlowConfig,
    /// Where the configuration came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Session log, correlated by session id.
    pub logger: StructuredLogger,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (GlowConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config_file(&cwd) {
                Some(path) => (GlowConfig::load(&path.to_string_lossy())?, Some(path)),
                None => (GlowConfig::default(), None),
            }
        };

        let logger = StructuredLogger::new(SessionId::generate())
            .with_min_level(config.logging.level)
            .with_format(config.logging.format);

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// Tag session logs with the running command.
    pub fn for_command(mut self, command: &str) -> Self {
        self.logger = self.logger.with_command(command);
        self
    }
}

/// Find config file in directory tree.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
