// src/config/model.rs

use chrono::NaiveDate;
use serde::Deserialize;

use crate::analysis::AGENTS;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [game]
/// home_team = "New York Jets"
/// away_team = "Jacksonville Jaguars"
/// date = "2024-12-15"
///
/// [weights]
/// yards = 0.3
/// scoring = 0.4
/// efficiency = 0.3
///
/// [analysis]
/// enabled = ["performance", "injury", "weather"]
/// ```
///
/// `[weights]` and `[analysis]` are optional; `[game]` is not.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    pub game: GameSection,

    #[serde(default)]
    pub weights: WeightsSection,

    #[serde(default)]
    pub analysis: AnalysisSection,
}

/// `[game]` section: the matchup under analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct GameSection {
    pub home_team: String,
    pub away_team: String,
    /// Kickoff date, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// `[weights]` section: momentum weighting for the performance agent.
///
/// Must be non-negative and sum to 1.0.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightsSection {
    #[serde(default = "default_yards_weight")]
    pub yards: f64,

    #[serde(default = "default_scoring_weight")]
    pub scoring: f64,

    #[serde(default = "default_efficiency_weight")]
    pub efficiency: f64,
}

fn default_yards_weight() -> f64 {
    0.3
}

fn default_scoring_weight() -> f64 {
    0.4
}

fn default_efficiency_weight() -> f64 {
    0.3
}

impl Default for WeightsSection {
    fn default() -> Self {
        Self {
            yards: default_yards_weight(),
            scoring: default_scoring_weight(),
            efficiency: default_efficiency_weight(),
        }
    }
}

/// `[analysis]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AnalysisSection {
    /// Agents to run; `None` enables every agent. The prediction step is
    /// implicit and always runs last.
    #[serde(default)]
    pub enabled: Option<Vec<String>>,
}

/// A validated configuration.
///
/// Construct via `ConfigFile::try_from(raw)` (see `config::validate`) or
/// [`load_and_validate`](crate::config::loader::load_and_validate).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub game: GameSection,
    pub weights: WeightsSection,
    pub analysis: AnalysisSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        game: GameSection,
        weights: WeightsSection,
        analysis: AnalysisSection,
    ) -> Self {
        Self {
            game,
            weights,
            analysis,
        }
    }

    /// Enabled agent names in canonical pipeline order.
    pub fn enabled_agents(&self) -> Vec<&'static str> {
        match &self.analysis.enabled {
            None => AGENTS.to_vec(),
            Some(enabled) => AGENTS
                .iter()
                .copied()
                .filter(|agent| enabled.iter().any(|name| name == agent))
                .collect(),
        }
    }
}
