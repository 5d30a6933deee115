//! Autopilot balance simulator CLI.
//!
//! Plays many headless rounds to see how a tuning behaves.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 1000 rounds, random seed
//!   cargo run --bin simulate -- -n 100 --seed 42  # Reproducible batch
//!   cargo run --bin simulate -- --config hard.json --json

use skyflap::simulator::{run_simulation, SimConfig};
use skyflap::GameConfig;
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    if json {
        // Keep stdout machine-readable.
        match run_simulation(&config) {
            Ok(report) => println!("{}", report.to_json()),
            Err(e) => exit_with(&e.to_string()),
        }
        return;
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 SKYFLAP BALANCE SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Aim:            {:.0}% into the gap", config.aim_ratio * 100.0);
    println!(
        "  Gap:            {}..={}",
        config.game.gap_min, config.game.gap_max
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    match run_simulation(&config) {
        Ok(report) => println!("{}", report.to_text()),
        Err(e) => exit_with(&e.to_string()),
    }
}

fn exit_with(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(9_000);
                    i += 1;
                }
            }
            "-a" | "--aim" => {
                if i + 1 < args.len() {
                    config.aim_ratio = args[i + 1].parse().unwrap_or(0.65);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    match GameConfig::load(Path::new(&args[i + 1])) {
                        Ok(game) => config.game = game,
                        Err(e) => exit_with(&e.to_string()),
                    }
                    i += 1;
                }
            }
            "--json" => {
                json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                let seed = config.seed.unwrap_or(0);
                config = SimConfig {
                    game: config.game,
                    ..SimConfig::quick(seed)
                };
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, json)
}

fn print_help() {
    println!("Skyflap Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of rounds (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Max ticks per round (default: 9,000)");
    println!("    -a, --aim <R>       Autopilot aim, 0.0 = gap top, 1.0 = gap bottom (default: 0.65)");
    println!("    -c, --config <F>    Game tuning JSON file");
    println!("    -v, --verbose       Print every round");
    println!("    --json              Print the report as JSON");
    println!("    --quick             50 seeded rounds, 3,000 ticks each");
    println!("    -h, --help          Show this help");
}
