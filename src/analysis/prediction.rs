// src/analysis/prediction.rs

//! Final synthesis: combines the upstream analysis results from the shared
//! context into a home-win probability, key insights and a per-theme
//! breakdown. Every upstream signal is optional so the pipeline can run with
//! any subset of agents enabled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::injury::InjuryMatchupReport;
use crate::analysis::location::{LocationAdvantage, LocationReport};
use crate::analysis::matchup::MatchupReport;
use crate::analysis::performance::PerformanceReport;
use crate::analysis::season::SeasonReport;
use crate::analysis::weather::WeatherImpact;
use crate::analysis::{injury, keyed, location, matchup, optional, performance, require, season,
    weather, Impact};
use crate::graph::{Payload, Work};

pub const OUTPUT_KEY: &str = "prediction";

const MOMENTUM_WEIGHT: f64 = 0.25;
const INJURY_STEP: f64 = 0.04;
const HOME_FIELD_EDGE: f64 = 0.05;
const SEASON_WEIGHT: f64 = 0.02;
const HISTORY_EDGE: f64 = 0.03;
const PROBABILITY_FLOOR: f64 = 0.05;
const PROBABILITY_CEILING: f64 = 0.95;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub predicted_winner: String,
    pub home_win_probability: f64,
    pub key_insights: Vec<String>,
    pub thematic_breakdown: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionSummary;

impl Work for PredictionSummary {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        let home_team: String = require(input, "home_team")?;
        let away_team: String = require(input, "away_team")?;

        let mut edge = 0.0_f64;
        let mut insights = Vec::new();
        let mut themes: BTreeMap<String, String> = BTreeMap::new();

        if let Some(perf) = optional::<PerformanceReport>(input, performance::OUTPUT_KEY)? {
            let diff = perf.home.momentum_score - perf.away.momentum_score;
            edge += MOMENTUM_WEIGHT * diff.tanh();
            let (leader, trailer) = if diff >= 0.0 {
                (&home_team, &away_team)
            } else {
                (&away_team, &home_team)
            };
            themes.insert(
                "momentum".to_string(),
                format!("{leader} carry the stronger recent form"),
            );
            if diff.abs() > 1.0 {
                insights.push(format!(
                    "{leader} enter with clearly better momentum than {trailer}"
                ));
            }
        }

        if let Some(inj) = optional::<InjuryMatchupReport>(input, injury::OUTPUT_KEY)? {
            let home_key = inj.home.key_injuries.len() as f64;
            let away_key = inj.away.key_injuries.len() as f64;
            edge += INJURY_STEP * (away_key - home_key);
            if home_key > away_key {
                insights.push(format!("{home_team} are the more banged-up side"));
                themes.insert("health".to_string(), format!("injuries favor {away_team}"));
            } else if away_key > home_key {
                insights.push(format!("{away_team} are the more banged-up side"));
                themes.insert("health".to_string(), format!("injuries favor {home_team}"));
            } else {
                themes.insert("health".to_string(), "injury reports are a wash".to_string());
            }
        }

        if let Some(loc) = optional::<LocationReport>(input, location::OUTPUT_KEY)? {
            if loc.location_advantage == LocationAdvantage::Home {
                edge += HOME_FIELD_EDGE;
                themes.insert(
                    "venue".to_string(),
                    format!("{home_team} defend their home field well"),
                );
            } else {
                themes.insert("venue".to_string(), "no meaningful venue edge".to_string());
            }
        }

        if let Some(stats) = optional::<SeasonReport>(input, season::OUTPUT_KEY)? {
            let home_diff = stats.home.offensive_stats.points_per_game
                - stats.home.defensive_stats.points_allowed_per_game;
            let away_diff = stats.away.offensive_stats.points_per_game
                - stats.away.defensive_stats.points_allowed_per_game;
            edge += (SEASON_WEIGHT * (home_diff - away_diff)).clamp(-0.1, 0.1);
            themes.insert(
                "production".to_string(),
                format!(
                    "season point differentials: {home_team} {home_diff:+.1}, {away_team} {away_diff:+.1}"
                ),
            );
        }

        if let Some(hist) = optional::<MatchupReport>(input, matchup::OUTPUT_KEY)? {
            match hist.historical_advantage.as_deref() {
                Some(team) if team == home_team => {
                    edge += HISTORY_EDGE;
                    themes.insert("history".to_string(), format!("{team} own the series"));
                }
                Some(team) if team == away_team => {
                    edge -= HISTORY_EDGE;
                    themes.insert("history".to_string(), format!("{team} own the series"));
                }
                _ => {
                    themes.insert("history".to_string(), "series is even".to_string());
                }
            }
        }

        if let Some(wx) = optional::<WeatherImpact>(input, weather::OUTPUT_KEY)? {
            if wx.overall_impact == Impact::Negative {
                insights.push("conditions may suppress scoring".to_string());
                themes.insert(
                    "conditions".to_string(),
                    wx.risk_factors.first().cloned().unwrap_or_else(|| {
                        "weather is a factor".to_string()
                    }),
                );
            }
        }

        let home_win_probability =
            (0.5 + edge).clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING);
        let predicted_winner = if home_win_probability >= 0.5 {
            home_team.clone()
        } else {
            away_team.clone()
        };

        debug!(
            home = %home_team,
            away = %away_team,
            probability = home_win_probability,
            "prediction computed"
        );

        let report = PredictionReport {
            predicted_winner,
            home_win_probability,
            key_insights: insights,
            thematic_breakdown: themes,
        };

        keyed(OUTPUT_KEY, &report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_input() -> Payload {
        let mut input = Payload::new();
        input.insert("home_team".to_string(), json!("Jets"));
        input.insert("away_team".to_string(), json!("Jaguars"));
        input
    }

    fn run(input: &Payload) -> PredictionReport {
        let out = PredictionSummary.run(input).unwrap();
        serde_json::from_value(out.get(OUTPUT_KEY).cloned().unwrap()).unwrap()
    }

    #[test]
    fn bare_context_is_a_coin_flip_for_the_home_side() {
        let report = run(&base_input());
        assert_eq!(report.home_win_probability, 0.5);
        assert_eq!(report.predicted_winner, "Jets");
        assert!(report.thematic_breakdown.is_empty());
    }

    #[test]
    fn home_momentum_raises_home_probability() {
        let mut input = base_input();
        input.insert(
            performance::OUTPUT_KEY.to_string(),
            json!({
                "home": {"trends": {"yards_trend": [], "scoring_trend": [], "efficiency_trend": []}, "momentum_score": 2.5},
                "away": {"trends": {"yards_trend": [], "scoring_trend": [], "efficiency_trend": []}, "momentum_score": -1.0},
            }),
        );
        let report = run(&input);
        assert!(report.home_win_probability > 0.5);
        assert_eq!(report.predicted_winner, "Jets");
        assert!(report.thematic_breakdown.contains_key("momentum"));
        assert!(!report.key_insights.is_empty());
    }

    #[test]
    fn away_injury_edge_flips_the_pick() {
        let mut input = base_input();
        input.insert(
            injury::OUTPUT_KEY.to_string(),
            json!({
                "home": {
                    "key_injuries": [
                        {"player": "QB1", "position": "QB", "impact": "high"},
                        {"player": "WR1", "position": "WR", "impact": "high"}
                    ],
                    "position_groups_affected": ["QB", "WR"],
                    "overall_impact": "negative",
                    "gameplan_adjustments": []
                },
                "away": {
                    "key_injuries": [],
                    "position_groups_affected": [],
                    "overall_impact": "neutral",
                    "gameplan_adjustments": []
                }
            }),
        );
        let report = run(&input);
        assert!(report.home_win_probability < 0.5);
        assert_eq!(report.predicted_winner, "Jaguars");
    }

    #[test]
    fn probability_stays_within_bounds() {
        let mut input = base_input();
        input.insert(
            performance::OUTPUT_KEY.to_string(),
            json!({
                "home": {"trends": {"yards_trend": [], "scoring_trend": [], "efficiency_trend": []}, "momentum_score": 50.0},
                "away": {"trends": {"yards_trend": [], "scoring_trend": [], "efficiency_trend": []}, "momentum_score": -50.0},
            }),
        );
        input.insert(
            season::OUTPUT_KEY.to_string(),
            json!({
                "home": {
                    "offensive_stats": {"points_per_game": 35.0, "yards_per_game": 0.0, "third_down_efficiency": 0.0},
                    "defensive_stats": {"points_allowed_per_game": 10.0, "yards_allowed_per_game": 0.0},
                    "overall_assessment": "positive"
                },
                "away": {
                    "offensive_stats": {"points_per_game": 12.0, "yards_per_game": 0.0, "third_down_efficiency": 0.0},
                    "defensive_stats": {"points_allowed_per_game": 30.0, "yards_allowed_per_game": 0.0},
                    "overall_assessment": "negative"
                }
            }),
        );
        let report = run(&input);
        assert!(report.home_win_probability <= PROBABILITY_CEILING);
        assert!(report.home_win_probability >= PROBABILITY_FLOOR);
    }

    #[test]
    fn missing_team_names_is_an_error() {
        let err = PredictionSummary.run(&Payload::new()).unwrap_err();
        assert!(err.to_string().contains("home_team"));
    }
}
