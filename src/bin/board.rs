/// Approvals Board client
///
/// Mounts every configured view against the records API once, then prints
/// the first page of each view in both presentations.

use approvals_board::render::{grid, table};
use approvals_board::source::{HttpSource, DEFAULT_API_URL};
use approvals_board::{mount, Board, BoardConfig, ColumnCatalog};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let api_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let config_path = std::env::var("BOARD_CONFIG").ok().map(PathBuf::from);

    let config = BoardConfig::load_or_default(config_path.as_deref());
    let catalog = ColumnCatalog::builtin();
    let source = HttpSource::with_url(api_url);

    // One fetch serves every view on the page.
    let load = mount(&source);

    for view in config.views(&catalog) {
        let board = Board::new(view, load.clone());
        let derived = board.derive(&board.initial_state());

        println!("{}", table::render(&derived));
        println!("{}", serde_json::to_string_pretty(&grid::render_json(&derived))?);
        println!();
    }

    Ok(())
}
