// src/analysis/weather.rs

//! Weather impact rules.
//!
//! Thresholds follow the usual playbook: freezing temperatures hurt ball
//! handling, 15+ mph wind hurts the passing and kicking games, and a wet
//! forecast tilts play-calling toward the run.

use serde::{Deserialize, Serialize};

use crate::analysis::{keyed, optional, Impact};
use crate::graph::{Payload, Work};

pub const OUTPUT_KEY: &str = "weather_analysis";

const FREEZING_F: f64 = 32.0;
const HIGH_WIND_MPH: f64 = 15.0;
const WET_FORECAST_PCT: f64 = 50.0;

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherData {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub precipitation_chance: f64,
}

fn default_temperature() -> f64 {
    70.0
}

impl Default for WeatherData {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            wind_speed: 0.0,
            precipitation_chance: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherImpact {
    pub overall_impact: Impact,
    pub passing_game_impact: Impact,
    pub running_game_impact: Impact,
    pub kicking_game_impact: Impact,
    pub risk_factors: Vec<String>,
}

pub fn analyze_weather(weather: &WeatherData) -> WeatherImpact {
    let mut impact = WeatherImpact {
        overall_impact: Impact::Neutral,
        passing_game_impact: Impact::Neutral,
        running_game_impact: Impact::Neutral,
        kicking_game_impact: Impact::Neutral,
        risk_factors: Vec::new(),
    };

    if weather.temperature < FREEZING_F {
        impact.overall_impact = Impact::Negative;
        impact.passing_game_impact = Impact::Negative;
        impact
            .risk_factors
            .push("cold weather may affect ball handling".to_string());
    }

    if weather.wind_speed > HIGH_WIND_MPH {
        impact.passing_game_impact = Impact::Negative;
        impact.kicking_game_impact = Impact::Negative;
        impact
            .risk_factors
            .push("high winds may affect passing and kicking".to_string());
    }

    if weather.precipitation_chance > WET_FORECAST_PCT {
        impact.passing_game_impact = Impact::Negative;
        impact.running_game_impact = Impact::Positive;
        impact
            .risk_factors
            .push("wet conditions favor the running game".to_string());
    }

    impact
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherAnalysis;

impl Work for WeatherAnalysis {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        let weather = optional::<WeatherData>(input, "weather")?.unwrap_or_default();
        keyed(OUTPUT_KEY, &analyze_weather(&weather))
    }
}
