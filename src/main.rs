/**
 * ============================================================================
 * ANYCAM2ROS CLI
 * ============================================================================
 *
 * PURPOSE: Discover V4L2 cameras and generate ROS2 cam2image launch scripts
 *
 * MODES:
 * - Interactive (default): scan, select, configure, review, then write the
 *   config document and the launch scripts
 * - Batch (--from-config): read an existing config and regenerate scripts
 *
 * ============================================================================
 */

use anycam2ros::config::store;
use anycam2ros::scripts::writer;
use anycam2ros::session::{interactive, Prompter};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Interactive camera setup CLI for ROS2 cam2image scripts
#[derive(Parser, Debug)]
#[command(name = "anycam2ros")]
#[command(about = "Discover and configure cameras for ROS2 cam2image")]
struct Cli {
    /// Path to config file to write/read
    #[arg(long, default_value = "configs/cameras.json")]
    config: PathBuf,

    /// Directory for generated start scripts
    #[arg(long, default_value = "generated_cameras")]
    output_dir: PathBuf,

    /// Generate scripts from an existing config without prompts
    #[arg(long)]
    from_config: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.from_config {
        generate_from_config(&cli.config, &cli.output_dir)
    } else {
        run_interactive(&cli.config, &cli.output_dir)
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// Batch mode: load the config, regenerate every script, touch nothing else
fn generate_from_config(config_path: &Path, output_dir: &Path) -> Result<(), String> {
    let cameras =
        store::load_cameras(config_path).map_err(|e| format!("Error loading config: {}", e))?;

    println!("Generating {} scripts...", cameras.len());
    let start_all_path = writer::generate_all(&cameras, output_dir)?;

    println!("Successfully generated scripts!");
    println!("Output directory: {}", output_dir.display());
    println!("Master script: {}", start_all_path.display());
    Ok(())
}

// Interactive mode over the real console
fn run_interactive(config_path: &Path, output_dir: &Path) -> Result<(), String> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    interactive::run(&mut prompter, config_path, output_dir)?;
    Ok(())
}
