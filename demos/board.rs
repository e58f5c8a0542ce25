/// Board Walkthrough
///
/// This example demonstrates:
/// - Loading records from the bundled data file
/// - Resolving a view's columns and filters from configuration
/// - Filtering, quick search and paging through immutable view states
/// - Rendering the same view as a text table and as a grid payload

use approvals_board::render::{grid, table};
use approvals_board::{Board, BoardConfig, ColumnCatalog, FileSource};

fn main() {
    println!("=== Approvals Board Walkthrough ===\n");

    // 1. Mount the requests view against the bundled data
    println!("1. Mounting the 'requests' view...");
    let catalog = ColumnCatalog::builtin();
    let config = BoardConfig::default();
    let view = match config.view("requests", &catalog) {
        Some(view) => view,
        None => {
            eprintln!("   no 'requests' profile configured");
            return;
        }
    };
    let source = FileSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data/mockData.json"));
    let board = Board::mount(view, &source);
    println!("   Loaded {} records\n", board.records().len());

    // 2. First page, no filters
    println!("2. First page:");
    let state = board.initial_state();
    println!("{}", table::render(&board.derive(&state)));

    // 3. Next page
    println!("3. Next page:");
    let page_count = board.view_model(&state).pager.page_count;
    let state = state.next_page(page_count);
    println!("{}", table::render(&board.derive(&state)));

    // 4. Status filter - back to the first page
    println!("4. Only approved requests:");
    let state = state.with_filter("Status", "Approved");
    println!("{}", table::render(&board.derive(&state)));

    // 5. Quick search on top of the filter
    println!("5. Approved requests matching 'badge':");
    let state = state.with_search("badge");
    println!("{}", table::render(&board.derive(&state)));

    // 6. Same state through the grid presenter
    println!("6. Grid payload for the same state:");
    match serde_json::to_string_pretty(&grid::render_json(&board.derive(&state))) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("   failed to encode grid payload: {}", e),
    }

    println!("\n=== Walkthrough Complete ===");
}
