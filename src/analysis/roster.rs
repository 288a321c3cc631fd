// src/analysis/roster.rs

//! Roster-change assessment, built on top of the injury report.
//!
//! Runs after the injury agent: raw `Out` designations become significant
//! changes, and the upstream key-injury counts feed the chemistry call.

use serde::{Deserialize, Serialize};

use crate::analysis::injury::{self, InjuryMatchupReport, InjuryReport};
use crate::analysis::{keyed, optional, require, Impact, PREMIUM_POSITIONS};
use crate::graph::{Payload, Work};

pub const OUTPUT_KEY: &str = "roster_analysis";

#[derive(Debug, Deserialize)]
struct TeamRoster {
    #[serde(default)]
    injuries: Vec<InjuryReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterChange {
    pub change_type: String,
    pub player: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterAssessment {
    pub significant_changes: Vec<RosterChange>,
    pub team_chemistry_impact: Impact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReport {
    pub home: RosterAssessment,
    pub away: RosterAssessment,
}

pub fn analyze_roster(injuries: &[InjuryReport], upstream_key_injuries: usize) -> RosterAssessment {
    let significant_changes: Vec<RosterChange> = injuries
        .iter()
        .filter(|report| report.status == "Out")
        .map(|report| RosterChange {
            change_type: "injury".to_string(),
            player: report.player.clone(),
            impact: if PREMIUM_POSITIONS.contains(&report.position.as_str()) {
                Impact::Negative
            } else {
                Impact::Neutral
            },
        })
        .collect();

    // Two or more forced changes, or a pile of key injuries upstream, is
    // enough churn to rate the locker-room outlook negative.
    let team_chemistry_impact = if significant_changes.len() >= 2 || upstream_key_injuries >= 3 {
        Impact::Negative
    } else {
        Impact::Neutral
    };

    RosterAssessment {
        significant_changes,
        team_chemistry_impact,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RosterAnalysis;

impl Work for RosterAnalysis {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        let home: TeamRoster = require(input, "home")?;
        let away: TeamRoster = require(input, "away")?;

        // Dependency result, present when the injury agent is in the
        // pipeline; the payload key is the injury node's name.
        let injury_counts = optional::<Payload>(input, "injury")?
            .map(|dep| {
                let report: InjuryMatchupReport = require(&dep, injury::OUTPUT_KEY)?;
                Ok::<_, anyhow::Error>((
                    report.home.key_injuries.len(),
                    report.away.key_injuries.len(),
                ))
            })
            .transpose()?
            .unwrap_or((0, 0));

        let report = RosterReport {
            home: analyze_roster(&home.injuries, injury_counts.0),
            away: analyze_roster(&away.injuries, injury_counts.1),
        };

        keyed(OUTPUT_KEY, &report)
    }
}
