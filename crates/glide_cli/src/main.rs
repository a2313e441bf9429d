//! Glide CLI
//!
//! Replays scripted scroll sessions against the headless host and prints
//! what every frame rendered.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod runner;
mod script;

use runner::{FrameReport, Playback, Runner};
use script::{Scenario, SAMPLE_SCENARIO};

#[derive(Parser)]
#[command(name = "glide")]
#[command(author, version, about = "Smooth-scrolling engine playground")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a scenario and print every frame
    Run {
        /// Scenario script
        #[arg(default_value = "glide.toml")]
        script: PathBuf,

        /// Print frames as JSON lines
        #[arg(long)]
        json: bool,

        /// Frames per second of the simulated display
        #[arg(long, default_value_t = 60)]
        fps: u32,
    },

    /// Write a sample scenario
    Init {
        #[arg(default_value = "glide.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run { script, json, fps } => cmd_run(&script, json, fps),
        Commands::Init { path, force } => cmd_init(&path, force),
    }
}

fn cmd_run(path: &Path, json: bool, fps: u32) -> Result<()> {
    let scenario = Scenario::load(path)?;
    tracing::info!(
        "Playing {} ({} steps at {fps} fps)",
        path.display(),
        scenario.steps.len()
    );

    let playback = Runner::new(&scenario, fps)?.play(&scenario)?;
    if json {
        print_json(&playback)
    } else {
        print_text(&playback);
        Ok(())
    }
}

fn print_json(playback: &Playback) -> Result<()> {
    for frame in &playback.frames {
        println!("{}", serde_json::to_string(frame)?);
    }
    println!(
        "{}",
        serde_json::to_string(&serde_json::json!({
            "final": playback.final_frame,
            "completions": playback.completions,
        }))?
    );
    Ok(())
}

fn print_text(playback: &Playback) {
    for frame in &playback.frames {
        println!("{}", format_frame(frame));
    }
    println!("final {}", format_frame(&playback.final_frame));
    for completion in &playback.completions {
        println!("{}: {}", completion.label, completion.outcome);
    }
}

fn format_frame(frame: &FrameReport) -> String {
    let mut line = format!(
        "#{:<5} {:>9.2}ms  current {:>9.3}  target {:>9.3}  top {:>8.2}  left {:>8.2}",
        frame.frame, frame.time_ms, frame.current, frame.target, frame.scroll_top, frame.scroll_left
    );
    if let Some(offset) = frame.overscroll {
        line.push_str(&format!("  overscroll {offset:>8.3}"));
    }
    if frame.clamping {
        line.push_str("  [clamping]");
    } else if !frame.running {
        line.push_str("  [rest]");
    }
    line
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }
    fs::write(path, SAMPLE_SCENARIO)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote sample scenario to {}", path.display());
    Ok(())
}
