/// Mock records API
///
/// Standalone server that serves the Approvals Board records file at
/// `/api/messages`.

use approvals_board::server::{run_server, DEFAULT_PORT};
use std::path::PathBuf;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get host, port and data file from environment or use defaults
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = match std::env::var("PORT") {
        Ok(value) => value.parse().map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("PORT must be a number, got '{}'", value),
            )
        })?,
        Err(_) => DEFAULT_PORT,
    };
    let data_path = PathBuf::from(
        std::env::var("DATA_PATH").unwrap_or_else(|_| "data/mockData.json".to_string()),
    );

    // Start the server
    run_server(&host, port, data_path).await
}
