// src/analysis/performance.rs

//! Recent-form trends and momentum scoring.
//!
//! Looks at each team's last few game lines, differentiates the yardage,
//! scoring and third-down series, and weights the mean trends into a single
//! momentum score per team.

use serde::{Deserialize, Serialize};

use crate::analysis::{keyed, require};
use crate::graph::{Payload, Work};

pub const OUTPUT_KEY: &str = "performance_analysis";

/// Weights applied to the mean of each trend series.
#[derive(Debug, Clone, Copy)]
pub struct MomentumWeights {
    pub yards: f64,
    pub scoring: f64,
    pub efficiency: f64,
}

impl Default for MomentumWeights {
    fn default() -> Self {
        Self {
            yards: 0.3,
            scoring: 0.4,
            efficiency: 0.3,
        }
    }
}

/// One game's box-score line, most recent last.
#[derive(Debug, Clone, Deserialize)]
pub struct GameLine {
    #[serde(default)]
    pub total_yards: f64,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub third_down_rate: f64,
    #[serde(default)]
    pub first_downs: f64,
}

#[derive(Debug, Deserialize)]
struct TeamGames {
    #[serde(default)]
    recent_games: Vec<GameLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trends {
    pub yards_trend: Vec<f64>,
    pub scoring_trend: Vec<f64>,
    pub efficiency_trend: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamPerformance {
    pub trends: Trends,
    pub momentum_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub home: TeamPerformance,
    pub away: TeamPerformance,
}

/// Discrete gradient of a series: one-sided differences at the endpoints,
/// central differences in the interior.
fn gradient(series: &[f64]) -> Vec<f64> {
    match series.len() {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let mut grad = Vec::with_capacity(n);
            grad.push(series[1] - series[0]);
            for i in 1..n - 1 {
                grad.push((series[i + 1] - series[i - 1]) / 2.0);
            }
            grad.push(series[n - 1] - series[n - 2]);
            grad
        }
    }
}

fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        0.0
    } else {
        series.iter().sum::<f64>() / series.len() as f64
    }
}

pub fn analyze_team(games: &[GameLine], weights: MomentumWeights) -> TeamPerformance {
    let yards: Vec<f64> = games.iter().map(|g| g.total_yards).collect();
    let points: Vec<f64> = games.iter().map(|g| g.points).collect();
    let third_down: Vec<f64> = games.iter().map(|g| g.third_down_rate).collect();

    let trends = Trends {
        yards_trend: gradient(&yards),
        scoring_trend: gradient(&points),
        efficiency_trend: gradient(&third_down),
    };

    let momentum_score = weights.yards * mean(&trends.yards_trend)
        + weights.scoring * mean(&trends.scoring_trend)
        + weights.efficiency * mean(&trends.efficiency_trend);

    TeamPerformance {
        trends,
        momentum_score,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceAnalysis {
    weights: MomentumWeights,
}

impl PerformanceAnalysis {
    pub fn new(weights: MomentumWeights) -> Self {
        Self { weights }
    }
}

impl Work for PerformanceAnalysis {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        let home: TeamGames = require(input, "home")?;
        let away: TeamGames = require(input, "away")?;

        let report = PerformanceReport {
            home: analyze_team(&home.recent_games, self.weights),
            away: analyze_team(&away.recent_games, self.weights),
        };

        keyed(OUTPUT_KEY, &report)
    }
}
