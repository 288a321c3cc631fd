// src/config/validate.rs

use crate::analysis::AGENTS;
use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{GridironError, Result};

const WEIGHT_SUM_EPSILON: f64 = 1e-6;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::GridironError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.game, raw.weights, raw.analysis))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_teams(cfg)?;
    validate_weights(cfg)?;
    validate_analysis(cfg)?;
    Ok(())
}

fn validate_teams(cfg: &RawConfigFile) -> Result<()> {
    let home = cfg.game.home_team.trim();
    let away = cfg.game.away_team.trim();

    if home.is_empty() || away.is_empty() {
        return Err(GridironError::ConfigError(
            "[game] home_team and away_team must be non-empty".to_string(),
        ));
    }
    if home.eq_ignore_ascii_case(away) {
        return Err(GridironError::ConfigError(format!(
            "[game] home_team and away_team must differ (both are '{home}')"
        )));
    }
    Ok(())
}

fn validate_weights(cfg: &RawConfigFile) -> Result<()> {
    let w = &cfg.weights;
    for (name, value) in [
        ("yards", w.yards),
        ("scoring", w.scoring),
        ("efficiency", w.efficiency),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(GridironError::ConfigError(format!(
                "[weights].{name} must be a non-negative number (got {value})"
            )));
        }
    }

    let sum = w.yards + w.scoring + w.efficiency;
    if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
        return Err(GridironError::ConfigError(format!(
            "[weights] must sum to 1.0 (got {sum})"
        )));
    }
    Ok(())
}

fn validate_analysis(cfg: &RawConfigFile) -> Result<()> {
    let Some(enabled) = &cfg.analysis.enabled else {
        return Ok(());
    };

    if enabled.is_empty() {
        return Err(GridironError::ConfigError(
            "[analysis].enabled must list at least one agent".to_string(),
        ));
    }
    for name in enabled {
        if !AGENTS.contains(&name.as_str()) {
            return Err(GridironError::ConfigError(format!(
                "[analysis].enabled contains unknown agent '{}' (expected one of: {})",
                name,
                AGENTS.join(", ")
            )));
        }
    }
    Ok(())
}
