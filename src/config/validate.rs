// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PrereqGraphError, Result};

/// Upper bound on barycenter sweeps; more passes stop changing anything.
pub const MAX_SWEEPS: usize = 64;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = PrereqGraphError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.layout, raw.data))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_depth(cfg)?;
    validate_sweeps(cfg)?;
    validate_spacing(cfg)?;
    validate_data(cfg)?;
    Ok(())
}

fn validate_depth(cfg: &RawConfigFile) -> Result<()> {
    if cfg.layout.max_depth == 0 {
        return Err(PrereqGraphError::ConfigError(
            "[layout].max_depth must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_sweeps(cfg: &RawConfigFile) -> Result<()> {
    if cfg.layout.sweeps > MAX_SWEEPS {
        return Err(PrereqGraphError::ConfigError(format!(
            "[layout].sweeps must be <= {MAX_SWEEPS} (got {})",
            cfg.layout.sweeps
        )));
    }
    Ok(())
}

fn validate_spacing(cfg: &RawConfigFile) -> Result<()> {
    let fields = [
        ("node_gap_x", cfg.layout.node_gap_x),
        ("layer_gap_y", cfg.layout.layer_gap_y),
        ("node_size", cfg.layout.node_size),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            return Err(PrereqGraphError::ConfigError(format!(
                "[layout].{name} must be a positive finite number (got {value})"
            )));
        }
    }
    Ok(())
}

fn validate_data(cfg: &RawConfigFile) -> Result<()> {
    if cfg.data.ast_dir.as_os_str().is_empty() {
        return Err(PrereqGraphError::ConfigError(
            "[data].ast_dir must not be empty".to_string(),
        ));
    }
    if cfg.data.catalog.as_os_str().is_empty() {
        return Err(PrereqGraphError::ConfigError(
            "[data].catalog must not be empty".to_string(),
        ));
    }
    Ok(())
}
