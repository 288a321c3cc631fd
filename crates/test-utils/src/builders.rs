#![allow(dead_code)]

use serde_json::Value;

use gridiron::config::{
    AnalysisSection, ConfigFile, GameSection, RawConfigFile, WeightsSection,
};
use gridiron::graph::Payload;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                game: GameSection {
                    home_team: "New York Jets".to_string(),
                    away_team: "Jacksonville Jaguars".to_string(),
                    date: chrono_date(2024, 12, 15),
                },
                weights: WeightsSection::default(),
                analysis: AnalysisSection::default(),
            },
        }
    }

    pub fn with_teams(mut self, home: &str, away: &str) -> Self {
        self.config.game.home_team = home.to_string();
        self.config.game.away_team = away.to_string();
        self
    }

    pub fn with_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.config.game.date = chrono_date(year, month, day);
        self
    }

    pub fn with_weights(mut self, yards: f64, scoring: f64, efficiency: f64) -> Self {
        self.config.weights = WeightsSection {
            yards,
            scoring,
            efficiency,
        };
        self
    }

    pub fn with_enabled(mut self, agents: &[&str]) -> Self {
        self.config.analysis.enabled =
            Some(agents.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn chrono_date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Build a payload from key/value pairs.
pub fn payload(entries: &[(&str, Value)]) -> Payload {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}
