//! Chess Canvas CLI - Inspect a board image and its piece animations.

use std::fs;
use std::path::{Path, PathBuf};

use chess_canvas::{
    animation::PieceGraphics,
    board::Board,
    schema::{BoardConfig, GraphicsConfig, PieceConfig},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <board.png> [pieces_dir]", args[0]);
        eprintln!();
        eprintln!("Load a chessboard image and list piece animations.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  board.png    Board image (a blank board is used if unreadable)");
        eprintln!("  pieces_dir   Directory with one sub-directory per piece type");
        eprintln!();
        eprintln!("An example piece config.json is printed with --example.");
        std::process::exit(1);
    }

    let board_path = PathBuf::from(&args[1]);
    let config = BoardConfig::default();

    let board = Board::open(&board_path, &config).unwrap_or_else(|e| {
        eprintln!("Error creating board: {}", e);
        std::process::exit(1);
    });

    println!("Chess Canvas");
    println!("============");
    println!("Board image: {}", board_path.display());
    println!(
        "Grid: {}x{} cells of {}x{} px",
        board.w_cells(),
        board.h_cells(),
        board.cell_w_pix(),
        board.cell_h_pix()
    );
    println!(
        "Surface: {}x{} ({} channels)",
        board.img().width(),
        board.img().height(),
        board.img().channels()
    );

    let Some(pieces_dir) = args.get(2).map(PathBuf::from) else {
        return;
    };

    println!();
    println!("Pieces in {}:", pieces_dir.display());
    for piece in load_pieces(&pieces_dir, &config) {
        println!("  {} ({} states)", piece.name(), piece.len());
        for (state, graphics) in piece.states() {
            println!(
                "    {:<8} frames={:<3} fps={:<5} loop={}",
                state,
                graphics.frame_count(),
                graphics.fps(),
                graphics.looping()
            );
        }
    }
}

/// Load every piece directory under `root`, skipping the ones that fail.
fn load_pieces(root: &Path, config: &BoardConfig) -> Vec<PieceGraphics> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading pieces directory: {}", e);
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    dirs.iter()
        .filter_map(|dir| match PieceGraphics::load(dir, config.cell_size()) {
            Ok(piece) => Some(piece),
            Err(e) => {
                log::warn!("Skipping piece {}: {}", dir.display(), e);
                None
            }
        })
        .collect()
}

fn print_example_config() {
    let mut config = PieceConfig::default();
    config
        .states
        .insert("idle".to_string(), GraphicsConfig::default());
    config.states.insert(
        "move".to_string(),
        GraphicsConfig {
            looping: false,
            fps: 12.0,
        },
    );

    println!("Example piece configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
