// src/analysis/coaching.rs

//! Coaching tendencies: play-calling balance and defensive pressure.

use serde::{Deserialize, Serialize};

use crate::analysis::{keyed, require};
use crate::graph::{Payload, Work};

pub const OUTPUT_KEY: &str = "coaching_analysis";

const RUN_HEAVY_RATIO: f64 = 1.1;
const PASS_HEAVY_RATIO: f64 = 0.9;
const HEAVY_BLITZ_RATE: f64 = 0.3;

#[derive(Debug, Clone, Deserialize)]
pub struct CoachingProfile {
    #[serde(default = "default_run_pass_ratio")]
    pub run_pass_ratio: f64,
    #[serde(default)]
    pub red_zone_efficiency: f64,
    #[serde(default)]
    pub blitz_frequency: f64,
    #[serde(default)]
    pub coverage_preferences: Vec<String>,
    #[serde(default)]
    pub fourth_down_decisions: Vec<String>,
}

fn default_run_pass_ratio() -> f64 {
    1.0
}

impl Default for CoachingProfile {
    fn default() -> Self {
        Self {
            run_pass_ratio: default_run_pass_ratio(),
            red_zone_efficiency: 0.0,
            blitz_frequency: 0.0,
            coverage_preferences: Vec::new(),
            fourth_down_decisions: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TeamCoaching {
    #[serde(default)]
    coaching: CoachingProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffensiveIdentity {
    RunHeavy,
    PassHeavy,
    Balanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffensiveTendencies {
    pub run_pass_ratio: f64,
    pub red_zone_efficiency: f64,
    pub identity: OffensiveIdentity,
    pub fourth_down_decisions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefensiveSchemes {
    pub blitz_frequency: f64,
    pub coverage_preferences: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCoachingProfile {
    pub offensive_tendencies: OffensiveTendencies,
    pub defensive_schemes: DefensiveSchemes,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingReport {
    pub home: TeamCoachingProfile,
    pub away: TeamCoachingProfile,
}

pub fn analyze_coaching(profile: &CoachingProfile) -> TeamCoachingProfile {
    let identity = if profile.run_pass_ratio > RUN_HEAVY_RATIO {
        OffensiveIdentity::RunHeavy
    } else if profile.run_pass_ratio < PASS_HEAVY_RATIO {
        OffensiveIdentity::PassHeavy
    } else {
        OffensiveIdentity::Balanced
    };

    let mut notes = Vec::new();
    if profile.blitz_frequency > HEAVY_BLITZ_RATE {
        notes.push("expect pressure packages on obvious passing downs".to_string());
    }

    TeamCoachingProfile {
        offensive_tendencies: OffensiveTendencies {
            run_pass_ratio: profile.run_pass_ratio,
            red_zone_efficiency: profile.red_zone_efficiency,
            identity,
            fourth_down_decisions: profile.fourth_down_decisions.clone(),
        },
        defensive_schemes: DefensiveSchemes {
            blitz_frequency: profile.blitz_frequency,
            coverage_preferences: profile.coverage_preferences.clone(),
        },
        notes,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CoachingAnalysis;

impl Work for CoachingAnalysis {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        let home: TeamCoaching = require(input, "home")?;
        let away: TeamCoaching = require(input, "away")?;

        let report = CoachingReport {
            home: analyze_coaching(&home.coaching),
            away: analyze_coaching(&away.coaching),
        };

        keyed(OUTPUT_KEY, &report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_and_pound_is_run_heavy() {
        let profile = analyze_coaching(&CoachingProfile {
            run_pass_ratio: 1.3,
            ..CoachingProfile::default()
        });
        assert_eq!(
            profile.offensive_tendencies.identity,
            OffensiveIdentity::RunHeavy
        );
    }

    #[test]
    fn air_raid_is_pass_heavy() {
        let profile = analyze_coaching(&CoachingProfile {
            run_pass_ratio: 0.7,
            ..CoachingProfile::default()
        });
        assert_eq!(
            profile.offensive_tendencies.identity,
            OffensiveIdentity::PassHeavy
        );
    }

    #[test]
    fn blitz_heavy_defense_is_noted() {
        let profile = analyze_coaching(&CoachingProfile {
            blitz_frequency: 0.42,
            ..CoachingProfile::default()
        });
        assert_eq!(profile.notes.len(), 1);
    }

    #[test]
    fn default_profile_is_balanced_and_quiet() {
        let profile = analyze_coaching(&CoachingProfile::default());
        assert_eq!(
            profile.offensive_tendencies.identity,
            OffensiveIdentity::Balanced
        );
        assert!(profile.notes.is_empty());
    }
}
