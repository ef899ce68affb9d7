//! Storm CLI - headless runner for the lightning and falling-particle scene

mod commands;
mod scene;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, config, simulate};

#[derive(Parser)]
#[command(name = "storm")]
#[command(about = "Lightning flicker and falling particle field, run headless", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scene for a number of frames and print a summary
    Simulate {
        /// Path to a storm.toml config file
        #[arg(long)]
        config: Option<String>,

        /// Seed for the shared random stream
        #[arg(long, default_value = "1")]
        seed: u64,

        /// Number of frames to run
        #[arg(long, default_value = "600")]
        frames: u64,

        /// Frames per second (defaults to scene.frames_per_second)
        #[arg(long)]
        fps: Option<f64>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a storm.toml config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Validate a config file
    Check {
        /// Path to a storm.toml config file
        config: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            config,
            seed,
            frames,
            fps,
        } => simulate::run(simulate::SimulateArgs {
            config,
            seed,
            frames,
            fps,
        }),
        Commands::Config { config: path } => config::run(path.as_deref()),
        Commands::Check { config } => check::run(&config),
    }
}
