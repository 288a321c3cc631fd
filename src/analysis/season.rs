// src/analysis/season.rs

//! Season-long offensive and defensive aggregates.

use serde::{Deserialize, Serialize};

use crate::analysis::{keyed, require, Impact};
use crate::graph::{Payload, Work};

pub const OUTPUT_KEY: &str = "season_analysis";

/// Point differential beyond which a season profile stops being neutral.
const ASSESSMENT_MARGIN: f64 = 3.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonStats {
    #[serde(default)]
    pub avg_points_per_game: f64,
    #[serde(default)]
    pub avg_yards_per_game: f64,
    #[serde(default)]
    pub third_down_rate: f64,
    #[serde(default)]
    pub avg_points_against: f64,
    #[serde(default)]
    pub avg_yards_against: f64,
}

#[derive(Debug, Deserialize)]
struct TeamSeason {
    #[serde(default)]
    season: SeasonStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffensiveStats {
    pub points_per_game: f64,
    pub yards_per_game: f64,
    pub third_down_efficiency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefensiveStats {
    pub points_allowed_per_game: f64,
    pub yards_allowed_per_game: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSeasonProfile {
    pub offensive_stats: OffensiveStats,
    pub defensive_stats: DefensiveStats,
    pub overall_assessment: Impact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonReport {
    pub home: TeamSeasonProfile,
    pub away: TeamSeasonProfile,
}

pub fn analyze_season(stats: &SeasonStats) -> TeamSeasonProfile {
    let differential = stats.avg_points_per_game - stats.avg_points_against;
    let overall_assessment = if differential > ASSESSMENT_MARGIN {
        Impact::Positive
    } else if differential < -ASSESSMENT_MARGIN {
        Impact::Negative
    } else {
        Impact::Neutral
    };

    TeamSeasonProfile {
        offensive_stats: OffensiveStats {
            points_per_game: stats.avg_points_per_game,
            yards_per_game: stats.avg_yards_per_game,
            third_down_efficiency: stats.third_down_rate,
        },
        defensive_stats: DefensiveStats {
            points_allowed_per_game: stats.avg_points_against,
            yards_allowed_per_game: stats.avg_yards_against,
        },
        overall_assessment,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonStatsAnalysis;

impl Work for SeasonStatsAnalysis {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        let home: TeamSeason = require(input, "home")?;
        let away: TeamSeason = require(input, "away")?;

        let report = SeasonReport {
            home: analyze_season(&home.season),
            away: analyze_season(&away.season),
        };

        keyed(OUTPUT_KEY, &report)
    }
}
