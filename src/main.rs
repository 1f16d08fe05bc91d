use clap::Parser;
use flexi_logger::Logger;
use log::{info, warn};

use rust_nim::core::{Board, BoardConfig, GameRng, NimError, Player, DEFAULT_MAX_BITS};
use rust_nim::game::{board_from_rows, read_board, Game};
use rust_nim::terminal::{render, Console};

/// Play Nim against a computer that uses binary parity.
#[derive(Parser, Debug)]
#[command(name = "nim")]
struct Args {
    /// Skip setup and play on the default board (7, 5, 3)
    #[arg(long, conflicts_with_all = ["rows", "random"])]
    default: bool,

    /// Skip setup and play on these rows, e.g. `--rows 7,5,3`
    #[arg(long, value_delimiter = ',', conflicts_with = "random")]
    rows: Option<Vec<u64>>,

    /// Skip setup and play on this many random rows
    #[arg(long)]
    random: Option<usize>,

    /// Seed for `--random`; the clock is used when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Bit width of a row; rows hold at most 2^bits - 1 sticks
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_BITS,
        value_parser = clap::value_parser!(u32).range(1..=16)
    )]
    max_bits: u32,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn starting_board<R, W>(
    args: &Args,
    config: &BoardConfig,
    console: &mut Console<R, W>,
) -> rust_nim::Result<Board>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    if args.default {
        return Board::default_for(config);
    }
    if let Some(rows) = &args.rows {
        return board_from_rows(config, rows);
    }
    if let Some(row_count) = args.random {
        let mut rng = GameRng::new(args.seed.unwrap_or_else(clock_seed));
        info!("random board with seed {}", rng.seed());
        console.print(&format!("| random board, seed {}\n", rng.seed()))?;
        return rng.random_board(row_count, config);
    }

    console.print(&render::settings_banner(&config.sentinels))?;
    read_board(config, console)
}

fn play(args: &Args) -> rust_nim::Result<()> {
    let config = BoardConfig::default().with_max_bits(args.max_bits);
    let mut console = Console::stdio();

    let board = starting_board(args, &config, &mut console)?;
    console.print(&render::rules_banner())?;

    let first = if args.computer_first {
        Player::Computer
    } else {
        Player::Human
    };
    let mut game = Game::new(board)?.starting_with(first);
    game.run(&mut console)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let _logger = Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    match play(&args) {
        Ok(()) => Ok(()),
        Err(NimError::InputClosed) => {
            warn!("input closed, leaving the game");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
