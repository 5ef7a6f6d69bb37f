mod engine_config;
mod output;

use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigSerializer, YamlConfigSerializer, load_yaml_config};
use common::tictactoe::compute_best_move;
use common::{SessionRng, input, log, logger};
use engine_config::{ConfigOverrides, DEFAULT_CONFIG_PATH, EngineConfig};

/// Prints the best tic-tac-toe move as "<score> <row> <col>".
#[derive(Parser)]
#[command(name = "tictactoe_engine", allow_negative_numbers = true)]
struct Args {
    /// Player to move: -1 for x, 1 for o
    player: i32,

    /// Nine cells row by row, top to bottom: -1 x, 1 o, 0 empty
    #[arg(num_args = 0..)]
    cells: Vec<i32>,

    /// YAML config file; missing files are ignored
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Fix the tie-break seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board before the result
    #[arg(long)]
    print_board: bool,

    /// Log search details to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let file_config: EngineConfig = load_yaml_config(&args.config)?;
    let config = file_config.with_overrides(&ConfigOverrides {
        verbose: args.verbose,
        use_log_prefix: args.use_log_prefix,
        print_board: args.print_board,
        seed: args.seed,
    });

    if args.print_config {
        print!("{}", YamlConfigSerializer.serialize(&config)?);
        return Ok(());
    }

    if config.verbose {
        logger::init_logger(config.log_prefix.clone());
    }
    log!("Using config {}", args.config.display());

    let position = input::parse_position(args.player, &args.cells)?;
    let board = position.to_board()?;

    if let Some(winner) = board.winner() {
        log!("Position is already won by {}, searching anyway", winner);
    }
    if config.print_board {
        println!("{}\n", board);
    }

    let mut rng = config.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!("Tie-break seed {}", rng.seed());

    let best = compute_best_move(position.player, &board, &mut rng)?;
    println!("{}", output::format_move(&best));

    Ok(())
}
