use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

// 导入库模块
use graphlab::config::Config;
use graphlab::core::AlgorithmKind;
use graphlab::graph::{samples, Graph};
use graphlab::services::{run, AlgorithmRequest, ConnectivityMode};
use graphlab::utils::logging;

#[derive(Parser)]
#[command(name = "graphlab", version, about = "Run classical graph algorithms step by step")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the preset graphs
    Presets,
    /// Run one algorithm and print its trace
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Algorithm to run
    #[arg(value_enum)]
    algorithm: AlgorithmKind,
    /// Preset graph key
    #[arg(long, default_value = "complex", conflicts_with = "graph")]
    preset: String,
    /// Graph JSON file
    #[arg(long)]
    graph: Option<PathBuf>,
    /// Start vertex (or starting city); defaults to the first vertex
    #[arg(long)]
    start: Option<String>,
    /// Goal vertex for A*
    #[arg(long)]
    goal: Option<String>,
    /// Connectivity mode for components
    #[arg(long, value_enum, default_value_t = ConnectivityMode::Auto)]
    mode: ConnectivityMode,
    /// Random seed for the genetic algorithm
    #[arg(long)]
    seed: Option<u64>,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Presets => {
            for preset in samples::presets() {
                println!(
                    "{:<22} {} ({} vertices, {} edges, {})",
                    preset.key,
                    preset.name,
                    preset.graph.vertex_count(),
                    preset.graph.edge_count(),
                    preset.graph.orientation_label()
                );
            }
            ExitCode::SUCCESS
        }
        Command::Run(args) => {
            let code = match execute(args) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("error: {}", e);
                    ExitCode::FAILURE
                }
            };
            logging::shutdown();
            code
        }
    }
}

fn execute(options: RunArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(seed) = options.seed {
        config.genetic.seed = Some(seed);
    }
    logging::init(&config.log)?;

    let graph = match &options.graph {
        Some(path) => Graph::load(path)?,
        None => samples::preset(&options.preset)
            .ok_or_else(|| format!("unknown preset: {}", options.preset))?,
    };

    // 未指定起点时使用第一个顶点
    let start = options
        .start
        .or_else(|| graph.vertices.first().map(|v| v.id.clone()));
    let request = AlgorithmRequest::from_parts(
        options.algorithm,
        start,
        options.goal,
        options.mode,
        config.genetic.clone(),
    )?;

    let output = run(&graph, &request);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.trace());
    }

    Ok(if output.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
