// src/analysis/injury.rs

//! Injury report classification.
//!
//! Players listed `Out` or `Doubtful` count as key injuries; losing a
//! premium position (QB/RB/WR) is a high-impact absence.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::{keyed, require, Impact, PREMIUM_POSITIONS};
use crate::graph::{Payload, Work};

pub const OUTPUT_KEY: &str = "injury_analysis";

#[derive(Debug, Clone, Deserialize)]
pub struct InjuryReport {
    pub player: String,
    pub position: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct TeamInjuries {
    #[serde(default)]
    injuries: Vec<InjuryReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjurySeverity {
    High,
    Moderate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyInjury {
    pub player: String,
    pub position: String,
    pub impact: InjurySeverity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryImpact {
    pub key_injuries: Vec<KeyInjury>,
    pub position_groups_affected: Vec<String>,
    pub overall_impact: Impact,
    pub gameplan_adjustments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryMatchupReport {
    pub home: InjuryImpact,
    pub away: InjuryImpact,
}

fn is_key_status(status: &str) -> bool {
    matches!(status, "Out" | "Doubtful")
}

pub fn analyze_injuries(injuries: &[InjuryReport]) -> InjuryImpact {
    let mut key_injuries = Vec::new();
    let mut position_groups: BTreeSet<String> = BTreeSet::new();
    let mut gameplan_adjustments = Vec::new();

    for report in injuries {
        if !is_key_status(&report.status) {
            continue;
        }

        let premium = PREMIUM_POSITIONS.contains(&report.position.as_str());
        key_injuries.push(KeyInjury {
            player: report.player.clone(),
            position: report.position.clone(),
            impact: if premium {
                InjurySeverity::High
            } else {
                InjurySeverity::Moderate
            },
        });
        position_groups.insert(report.position.clone());

        match report.position.as_str() {
            "QB" => gameplan_adjustments
                .push(format!("expect conservative play-calling without {}", report.player)),
            "RB" => gameplan_adjustments
                .push(format!("expect more passing downs without {}", report.player)),
            _ => {}
        }
    }

    let overall_impact = if key_injuries
        .iter()
        .any(|k| k.impact == InjurySeverity::High)
    {
        Impact::Negative
    } else {
        Impact::Neutral
    };

    InjuryImpact {
        key_injuries,
        position_groups_affected: position_groups.into_iter().collect(),
        overall_impact,
        gameplan_adjustments,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InjuryAnalysis;

impl Work for InjuryAnalysis {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        let home: TeamInjuries = require(input, "home")?;
        let away: TeamInjuries = require(input, "away")?;

        let report = InjuryMatchupReport {
            home: analyze_injuries(&home.injuries),
            away: analyze_injuries(&away.injuries),
        };

        keyed(OUTPUT_KEY, &report)
    }
}
