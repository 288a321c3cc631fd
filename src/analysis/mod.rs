// src/analysis/mod.rs

//! Analysis agents: pure statistical scoring over game-data payloads.
//!
//! Each agent implements [`Work`](crate::graph::Work) by deserializing the
//! slice of the input payload it cares about and emitting a single keyed
//! result object, which the workflow engine merges into the shared context
//! for downstream agents.

pub mod coaching;
pub mod injury;
pub mod location;
pub mod matchup;
pub mod performance;
pub mod prediction;
pub mod roster;
pub mod season;
pub mod weather;

use std::fmt;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::graph::Payload;

/// Names of the schedulable analysis agents, in canonical pipeline order.
/// The prediction step is not listed; it always runs last.
pub const AGENTS: &[&str] = &[
    "performance",
    "injury",
    "roster",
    "weather",
    "location",
    "matchup",
    "season_stats",
    "coaching",
];

/// Positions whose absence swings a game plan.
pub(crate) const PREMIUM_POSITIONS: &[&str] = &["QB", "RB", "WR"];

/// Three-way impact classification shared across agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Impact::Positive => "positive",
            Impact::Neutral => "neutral",
            Impact::Negative => "negative",
        };
        f.write_str(s)
    }
}

/// Deserialize a required top-level payload entry.
pub(crate) fn require<T: DeserializeOwned>(payload: &Payload, key: &str) -> anyhow::Result<T> {
    let value = payload
        .get(key)
        .with_context(|| format!("missing '{key}' in input payload"))?;
    serde_json::from_value(value.clone())
        .with_context(|| format!("invalid '{key}' in input payload"))
}

/// Deserialize an optional top-level payload entry.
pub(crate) fn optional<T: DeserializeOwned>(
    payload: &Payload,
    key: &str,
) -> anyhow::Result<Option<T>> {
    match payload.get(key) {
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .with_context(|| format!("invalid '{key}' in input payload")),
        None => Ok(None),
    }
}

/// Build a single-entry output payload: `{key: value}`.
pub(crate) fn keyed<T: Serialize>(key: &str, value: &T) -> anyhow::Result<Payload> {
    let mut out = Payload::new();
    out.insert(
        key.to_string(),
        serde_json::to_value(value).context("serializing analysis result")?,
    );
    Ok(out)
}

pub use coaching::CoachingAnalysis;
pub use injury::InjuryAnalysis;
pub use location::LocationAnalysis;
pub use matchup::MatchupAnalysis;
pub use performance::{MomentumWeights, PerformanceAnalysis};
pub use prediction::PredictionSummary;
pub use roster::RosterAnalysis;
pub use season::SeasonStatsAnalysis;
pub use weather::WeatherAnalysis;
