// src/analysis/matchup.rs

//! Head-to-head history between the two teams.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::{keyed, optional};
use crate::graph::{Payload, Work};

pub const OUTPUT_KEY: &str = "matchup_analysis";

const RECENT_MEETINGS: usize = 3;
const HIGH_SCORING_TOTAL: f64 = 45.0;

/// One prior meeting, oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct Meeting {
    pub winner: String,
    #[serde(default)]
    pub winner_points: f64,
    #[serde(default)]
    pub loser_points: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchupHistory {
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPatterns {
    pub avg_points_winner: f64,
    pub avg_points_loser: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupReport {
    /// Team with the most wins in the recorded series, if not tied.
    pub historical_advantage: Option<String>,
    pub recent_trends: Vec<String>,
    pub scoring_patterns: ScoringPatterns,
    pub key_factors: Vec<String>,
}

pub fn analyze_matchup(history: &MatchupHistory) -> MatchupReport {
    let meetings = &history.meetings;

    let mut wins: HashMap<&str, usize> = HashMap::new();
    for meeting in meetings {
        *wins.entry(meeting.winner.as_str()).or_default() += 1;
    }

    // Most series wins, unless the lead is shared.
    let mut best: Option<(&str, usize)> = None;
    let mut tied = false;
    for (team, count) in &wins {
        match best {
            Some((_, best_count)) if *count == best_count => tied = true,
            Some((_, best_count)) if *count > best_count => {
                best = Some((*team, *count));
                tied = false;
            }
            None => {
                best = Some((*team, *count));
                tied = false;
            }
            _ => {}
        }
    }
    let historical_advantage = if tied {
        None
    } else {
        best.map(|(team, _)| team.to_string())
    };

    let recent_trends = meetings
        .iter()
        .rev()
        .take(RECENT_MEETINGS)
        .map(|m| {
            format!(
                "{} won {:.0}-{:.0}",
                m.winner, m.winner_points, m.loser_points
            )
        })
        .collect();

    let count = meetings.len() as f64;
    let scoring_patterns = if meetings.is_empty() {
        ScoringPatterns {
            avg_points_winner: 0.0,
            avg_points_loser: 0.0,
        }
    } else {
        ScoringPatterns {
            avg_points_winner: meetings.iter().map(|m| m.winner_points).sum::<f64>() / count,
            avg_points_loser: meetings.iter().map(|m| m.loser_points).sum::<f64>() / count,
        }
    };

    let mut key_factors = Vec::new();
    if let Some(team) = &historical_advantage {
        key_factors.push(format!("{team} leads the recorded series"));
    }
    if scoring_patterns.avg_points_winner + scoring_patterns.avg_points_loser
        > HIGH_SCORING_TOTAL
    {
        key_factors.push("series has trended high-scoring".to_string());
    }

    MatchupReport {
        historical_advantage,
        recent_trends,
        scoring_patterns,
        key_factors,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchupAnalysis;

impl Work for MatchupAnalysis {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        let history = optional::<MatchupHistory>(input, "head_to_head")?.unwrap_or_default();
        keyed(OUTPUT_KEY, &analyze_matchup(&history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting(winner: &str, wp: f64, lp: f64) -> Meeting {
        Meeting {
            winner: winner.to_string(),
            winner_points: wp,
            loser_points: lp,
        }
    }

    #[test]
    fn series_leader_has_historical_advantage() {
        let history = MatchupHistory {
            meetings: vec![
                meeting("Jets", 24.0, 17.0),
                meeting("Jets", 20.0, 13.0),
                meeting("Jaguars", 27.0, 24.0),
            ],
        };
        let report = analyze_matchup(&history);
        assert_eq!(report.historical_advantage.as_deref(), Some("Jets"));
        assert_eq!(report.recent_trends.len(), 3);
        assert_eq!(report.recent_trends[0], "Jaguars won 27-24");
    }

    #[test]
    fn split_series_has_no_advantage() {
        let history = MatchupHistory {
            meetings: vec![meeting("Jets", 21.0, 14.0), meeting("Jaguars", 17.0, 10.0)],
        };
        let report = analyze_matchup(&history);
        assert_eq!(report.historical_advantage, None);
    }

    #[test]
    fn empty_history_is_all_zeroes() {
        let report = analyze_matchup(&MatchupHistory::default());
        assert_eq!(report.historical_advantage, None);
        assert!(report.recent_trends.is_empty());
        assert_eq!(report.scoring_patterns.avg_points_winner, 0.0);
        assert!(report.key_factors.is_empty());
    }

    #[test]
    fn high_scoring_series_is_flagged() {
        let history = MatchupHistory {
            meetings: vec![meeting("Jets", 34.0, 28.0)],
        };
        let report = analyze_matchup(&history);
        assert!(report
            .key_factors
            .iter()
            .any(|f| f.contains("high-scoring")));
    }
}
