//! Headless board seeding.
//!
//! Usage:
//! `cargo run --bin seed_board -- setup.json`
//! `cargo run --bin seed_board -- setup.json --seed 42`
//!
//! `setup.json` holds `{"board": {"rows", "cols", "walls"}, "seeder": {...}}`.
//! Prints the seeded grid with the top row first: `r`/`b` for pieces, `#`
//! for walls, `.` for empty cells.

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use board_seeder::board::{Board, GridBoard, GridSpec, RecordingSpawner};
use board_seeder::core::{GridCoord, SeedError, SeederConfig, Team};
use board_seeder::seeder::BoardSeeder;

#[derive(Debug, Deserialize)]
struct SetupFile {
    board: GridSpec,
    #[serde(default)]
    seeder: SeederConfig,
}

fn parse_seed_arg(args: &[String]) -> Option<u64> {
    args.windows(2)
        .find(|w| w[0] == "--seed")
        .and_then(|w| w[1].parse().ok())
}

fn render(board: &GridBoard, spawner: &RecordingSpawner) -> String {
    let mut out = String::new();
    for y in (0..board.rows()).rev() {
        for x in 0..board.cols() {
            let cell = match spawner.at(GridCoord::new(x, y)).and_then(|s| s.placed) {
                Some((Team::Red, _)) => 'r',
                Some((Team::Blue, _)) => 'b',
                None if board.is_wall(x, y) => '#',
                None => '.',
            };
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), SeedError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("board_seeder=info,seed_board=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: seed_board <setup.json> [--seed N]");
        std::process::exit(2);
    };

    let text = std::fs::read_to_string(path)?;
    let mut setup: SetupFile = serde_json::from_str(&text)?;
    if let Some(seed) = parse_seed_arg(&args) {
        setup.seeder.seed = Some(seed);
    }

    let board = GridBoard::from_spec(&setup.board);
    info!(rows = board.rows(), cols = board.cols(), walls = board.wall_count(), "Loaded board");

    let mut seeder = BoardSeeder::new(setup.seeder, Some(board), RecordingSpawner::new());
    if seeder.spawn_now().is_none() {
        std::process::exit(1);
    }

    if let Some(board) = seeder.board() {
        print!("{}", render(board, seeder.spawner()));
    }
    Ok(())
}
