// src/pipeline.rs

//! Wires the analysis agents into a ready-to-run task graph and prepares the
//! initial working context.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tracing::debug;

use crate::analysis::{
    CoachingAnalysis, InjuryAnalysis, LocationAnalysis, MatchupAnalysis, MomentumWeights,
    PerformanceAnalysis, PredictionSummary, RosterAnalysis, SeasonStatsAnalysis, WeatherAnalysis,
};
use crate::config::ConfigFile;
use crate::errors::{GridironError, Result};
use crate::graph::{Payload, TaskGraph, Work};

/// Name of the terminal synthesis node.
pub const PREDICTION_NODE: &str = "prediction";

/// Build the analysis DAG for a validated config.
///
/// Every enabled agent becomes one node; the roster agent runs after the
/// injury agent when both are enabled, and the prediction step depends on
/// every other node so it always runs last.
pub fn build_graph(cfg: &ConfigFile) -> Result<TaskGraph> {
    let enabled = cfg.enabled_agents();
    let mut graph = TaskGraph::new();

    for name in &enabled {
        graph.add_node(*name, agent_work(name, cfg)?, agent_deps(name, &enabled))?;
    }

    let deps = enabled.iter().map(|name| name.to_string()).collect();
    graph.add_node(PREDICTION_NODE, Box::new(PredictionSummary), deps)?;

    debug!(nodes = graph.len(), "analysis pipeline built");
    Ok(graph)
}

fn agent_work(name: &str, cfg: &ConfigFile) -> Result<Box<dyn Work>> {
    let work: Box<dyn Work> = match name {
        "performance" => Box::new(PerformanceAnalysis::new(MomentumWeights {
            yards: cfg.weights.yards,
            scoring: cfg.weights.scoring,
            efficiency: cfg.weights.efficiency,
        })),
        "injury" => Box::new(InjuryAnalysis),
        "roster" => Box::new(RosterAnalysis),
        "weather" => Box::new(WeatherAnalysis),
        "location" => Box::new(LocationAnalysis),
        "matchup" => Box::new(MatchupAnalysis),
        "season_stats" => Box::new(SeasonStatsAnalysis),
        "coaching" => Box::new(CoachingAnalysis),
        other => {
            return Err(GridironError::ConfigError(format!(
                "no agent registered under '{other}'"
            )))
        }
    };
    Ok(work)
}

fn agent_deps(name: &str, enabled: &[&str]) -> Vec<String> {
    match name {
        // The roster call builds on the injury report when it is available.
        "roster" if enabled.contains(&"injury") => vec!["injury".to_string()],
        _ => Vec::new(),
    }
}

/// Read the game-data JSON document that seeds the working context.
pub fn load_game_data(path: impl AsRef<Path>) -> Result<Payload> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(GridironError::ConfigError(format!(
            "game data file '{}' must contain a JSON object",
            path.display()
        ))),
    }
}

/// Combine game data with the configured matchup identity.
pub fn initial_context(cfg: &ConfigFile, game_data: Payload) -> Payload {
    let mut context = game_data;
    context.insert("home_team".to_string(), json!(cfg.game.home_team));
    context.insert("away_team".to_string(), json!(cfg.game.away_team));
    context.insert("game_date".to_string(), json!(cfg.game.date.to_string()));
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalysisSection, GameSection, WeightsSection};
    use chrono::NaiveDate;

    fn config(enabled: Option<Vec<&str>>) -> ConfigFile {
        let raw = crate::config::RawConfigFile {
            game: GameSection {
                home_team: "Jets".to_string(),
                away_team: "Jaguars".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            },
            weights: WeightsSection::default(),
            analysis: AnalysisSection {
                enabled: enabled.map(|names| names.iter().map(|s| s.to_string()).collect()),
            },
        };
        ConfigFile::try_from(raw).unwrap()
    }

    #[test]
    fn full_pipeline_has_all_agents_plus_prediction() {
        let graph = build_graph(&config(None)).unwrap();
        assert_eq!(graph.len(), crate::analysis::AGENTS.len() + 1);
        assert!(graph.contains(PREDICTION_NODE));
        assert_eq!(
            graph.dependencies_of("roster"),
            &["injury".to_string()]
        );
        assert_eq!(
            graph.dependencies_of(PREDICTION_NODE).len(),
            crate::analysis::AGENTS.len()
        );
    }

    #[test]
    fn roster_without_injury_has_no_dependencies() {
        let graph = build_graph(&config(Some(vec!["roster", "weather"]))).unwrap();
        assert!(graph.dependencies_of("roster").is_empty());
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn context_carries_matchup_identity() {
        let context = initial_context(&config(None), Payload::new());
        assert_eq!(context["home_team"], "Jets");
        assert_eq!(context["away_team"], "Jaguars");
        assert_eq!(context["game_date"], "2024-12-15");
    }
}
