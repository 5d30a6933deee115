use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyflap::game::{InputEvent, InputOutcome, RoundController};
use skyflap::ui::{self, Hud};
use skyflap::{GameConfig, SpriteMetrics, TerminalAudio, TickClock};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    log: Option<PathBuf>,
    mute: bool,
}

fn print_help() {
    println!("Skyflap - keep the bird between the pipes\n");
    println!("Usage: skyflap [options]\n");
    println!("Options:");
    println!("  --config <FILE>  Load game tuning from a JSON file");
    println!("  --seed <N>       Seed the barrier generator");
    println!("  --log <FILE>     Write logs to FILE (filter via SKYFLAP_LOG)");
    println!("  --mute           Do not ring the terminal bell");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!();
    println!("Controls: any key flaps, R or a click restarts, Q/Esc quits.");
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args::default();
    let mut i = 0;

    let value = |i: usize, flag: &str| -> String {
        match argv.get(i + 1) {
            Some(v) => v.clone(),
            None => {
                eprintln!("{} requires a value", flag);
                std::process::exit(2);
            }
        }
    };

    while i < argv.len() {
        match argv[i].as_str() {
            "--config" | "-c" => {
                args.config = Some(PathBuf::from(value(i, "--config")));
                i += 1;
            }
            "--seed" | "-s" => {
                let raw = value(i, "--seed");
                match raw.parse() {
                    Ok(seed) => args.seed = Some(seed),
                    Err(_) => {
                        eprintln!("Invalid seed: {}", raw);
                        std::process::exit(2);
                    }
                }
                i += 1;
            }
            "--log" => {
                args.log = Some(PathBuf::from(value(i, "--log")));
                i += 1;
            }
            "--mute" | "-m" => args.mute = true,
            "--version" | "-V" => {
                println!("skyflap {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyflap --help' for usage.");
                std::process::exit(2);
            }
        }
        i += 1;
    }
    args
}

fn main() -> io::Result<()> {
    let args = parse_args();

    if let Some(path) = &args.log {
        skyflap::logging::init_file_logging(path)?;
    }

    let config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "failed to load config");
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut round = match RoundController::new(config, SpriteMetrics::default()) {
        Ok(round) => round,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?args.seed, "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut audio = TerminalAudio::new(io::stdout());
    audio.set_muted(args.mute);

    let result = run(&mut terminal, &mut round, &mut rng, &mut audio);

    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal error");
    }
    tracing::info!(rounds = round.rounds_played(), "exiting");
    result
}

/// Fixed-rate loop: wait for input until the next tick is due, then apply
/// queued input in arrival order, step the round once and redraw.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    round: &mut RoundController,
    rng: &mut StdRng,
    audio: &mut TerminalAudio<io::Stdout>,
) -> io::Result<()> {
    let mut clock = TickClock::new(round.config().tick_rate, Instant::now());
    let mut pending: Vec<InputEvent> = Vec::new();
    let mut hud = Hud {
        round: 1,
        ..Default::default()
    };

    terminal.draw(|frame| ui::draw(frame, &round.snapshot(), &hud))?;

    loop {
        let now = Instant::now();
        if !clock.take_tick(now) {
            if event::poll(clock.time_until_tick(now))? {
                if let Some(input) = skyflap::input::map_event(&event::read()?) {
                    pending.push(input);
                }
            }
            continue;
        }

        for input in pending.drain(..) {
            if round.handle_input(input, audio) == InputOutcome::Close {
                return Ok(());
            }
        }

        let result = round.tick(rng, audio);
        hud.round = round.rounds_played();
        hud.best_score = hud.best_score.max(round.score().value());
        hud.crash = round.crash_cause();
        if let Some(cause) = result.crash {
            tracing::debug!(?cause, best = hud.best_score, "crash shown");
        }

        let snapshot = round.snapshot();
        terminal.draw(|frame| ui::draw(frame, &snapshot, &hud))?;
    }
}
