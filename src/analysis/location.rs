// src/analysis/location.rs

//! Home/away split comparison: the home team's record at home against the
//! away team's record on the road.

use serde::{Deserialize, Serialize};

use crate::analysis::{keyed, require};
use crate::graph::{Payload, Work};

pub const OUTPUT_KEY: &str = "location_analysis";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamSplits {
    #[serde(default)]
    pub home_win_rate: f64,
    #[serde(default)]
    pub home_avg_points: f64,
    #[serde(default)]
    pub home_avg_points_allowed: f64,
    #[serde(default)]
    pub away_win_rate: f64,
    #[serde(default)]
    pub away_avg_points: f64,
    #[serde(default)]
    pub away_avg_points_allowed: f64,
}

#[derive(Debug, Deserialize)]
struct TeamWithSplits {
    #[serde(default)]
    splits: TeamSplits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationAdvantage {
    Home,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenuePerformance {
    pub win_rate: f64,
    pub avg_points_scored: f64,
    pub avg_points_allowed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationReport {
    /// Home team's performance in home games.
    pub home: VenuePerformance,
    /// Away team's performance on the road.
    pub away: VenuePerformance,
    pub location_advantage: LocationAdvantage,
}

pub fn analyze_location(home: &TeamSplits, away: &TeamSplits) -> LocationReport {
    let location_advantage = if home.home_win_rate > away.away_win_rate {
        LocationAdvantage::Home
    } else {
        LocationAdvantage::Neutral
    };

    LocationReport {
        home: VenuePerformance {
            win_rate: home.home_win_rate,
            avg_points_scored: home.home_avg_points,
            avg_points_allowed: home.home_avg_points_allowed,
        },
        away: VenuePerformance {
            win_rate: away.away_win_rate,
            avg_points_scored: away.away_avg_points,
            avg_points_allowed: away.away_avg_points_allowed,
        },
        location_advantage,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationAnalysis;

impl Work for LocationAnalysis {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        let home: TeamWithSplits = require(input, "home")?;
        let away: TeamWithSplits = require(input, "away")?;
        keyed(OUTPUT_KEY, &analyze_location(&home.splits, &away.splits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_home_record_yields_home_advantage() {
        let home = TeamSplits {
            home_win_rate: 0.75,
            ..TeamSplits::default()
        };
        let away = TeamSplits {
            away_win_rate: 0.40,
            ..TeamSplits::default()
        };
        let report = analyze_location(&home, &away);
        assert_eq!(report.location_advantage, LocationAdvantage::Home);
        assert_eq!(report.home.win_rate, 0.75);
        assert_eq!(report.away.win_rate, 0.40);
    }

    #[test]
    fn strong_road_team_neutralizes_the_venue() {
        let home = TeamSplits {
            home_win_rate: 0.50,
            ..TeamSplits::default()
        };
        let away = TeamSplits {
            away_win_rate: 0.60,
            ..TeamSplits::default()
        };
        let report = analyze_location(&home, &away);
        assert_eq!(report.location_advantage, LocationAdvantage::Neutral);
    }
}
