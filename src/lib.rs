// src/lib.rs

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod pipeline;

use anyhow::Result;
use tracing::{debug, info};

use crate::analysis::prediction::PredictionReport;
use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::ConfigFile;
use crate::graph::TaskGraph;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - pipeline construction
/// - game-data loading
/// - workflow execution
/// - report output
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;
    let mut graph = pipeline::build_graph(&cfg)?;

    if args.dry_run {
        print_dry_run(&cfg, &graph);
        return Ok(());
    }

    let game_data = pipeline::load_game_data(&args.data)?;
    let context = pipeline::initial_context(&cfg, game_data);

    info!(
        home = %cfg.game.home_team,
        away = %cfg.game.away_team,
        date = %cfg.game.date,
        "starting matchup analysis"
    );

    let outcome = graph.execute_workflow(context);
    print_report(&cfg, &graph);

    let results = outcome?;
    debug!(completed = results.len(), "analysis finished");
    Ok(())
}

/// Simple dry-run output: print the pipeline nodes and their dependencies.
fn print_dry_run(cfg: &ConfigFile, graph: &TaskGraph) {
    println!("gridiron dry-run");
    println!(
        "  {} at {} on {}",
        cfg.game.away_team, cfg.game.home_team, cfg.game.date
    );
    println!();

    println!("pipeline ({} nodes):", graph.len());
    for name in graph.node_names() {
        println!("  - {name}");
        let deps = graph.dependencies_of(name);
        if !deps.is_empty() {
            println!("      after: {deps:?}");
        }
    }

    debug!("dry-run complete (no execution)");
}

/// Print the prediction (when present) and a per-node status table.
fn print_report(cfg: &ConfigFile, graph: &TaskGraph) {
    if let Some(report) = prediction_report(graph) {
        println!(
            "{} at {} on {}",
            cfg.game.away_team, cfg.game.home_team, cfg.game.date
        );
        println!("predicted winner: {}", report.predicted_winner);
        println!(
            "home win probability: {:.1}%",
            report.home_win_probability * 100.0
        );
        if !report.key_insights.is_empty() {
            println!("key insights:");
            for insight in &report.key_insights {
                println!("  - {insight}");
            }
        }
        if !report.thematic_breakdown.is_empty() {
            println!("themes:");
            for (theme, note) in &report.thematic_breakdown {
                println!("  {theme}: {note}");
            }
        }
        println!();
    }

    let status = graph.workflow_status();
    println!(
        "workflow: {} ({} completed, {} failed, {} pending)",
        status.verdict, status.completed, status.failed, status.pending
    );
    for name in graph.node_names() {
        if let Ok(node) = graph.node_status(name) {
            let timing = node
                .duration
                .map(|d| format!("{}ms", d.num_milliseconds()))
                .unwrap_or_else(|| "-".to_string());
            match node.error {
                Some(error) => println!("  {name}: {} ({timing}) - {error}", node.state),
                None => println!("  {name}: {} ({timing})", node.state),
            }
        }
    }
}

fn prediction_report(graph: &TaskGraph) -> Option<PredictionReport> {
    let result = graph.node(pipeline::PREDICTION_NODE)?.result()?;
    let value = result.get(analysis::prediction::OUTPUT_KEY)?;
    serde_json::from_value(value.clone()).ok()
}
