//! Mock records API.
//!
//! Serves the contents of a JSON data file at `GET /api/messages`. The file
//! is read on every request, so edits show up without a restart.
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};

use crate::messages::{ErrorBody, HealthBody};
use crate::source::MESSAGES_PATH;

/// Default listening port of the mock API.
pub const DEFAULT_PORT: u16 = 3001;

const READ_FAILURE: &str = "Failed to read mock data";

/// Shared state: where the records live.
pub struct AppState {
    pub data_path: PathBuf,
}

impl AppState {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }
}

async fn read_data(path: &Path) -> Result<JsonValue, String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("reading {}: {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("parsing {}: {}", path.display(), e))
}

/// Records endpoint handler
async fn messages(state: web::Data<AppState>) -> HttpResponse {
    match read_data(&state.data_path).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            log::error!("Error reading mock data: {}", e);
            HttpResponse::InternalServerError().json(ErrorBody::new(READ_FAILURE))
        }
    }
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthBody::ok())
}

/// Register the API routes; shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(MESSAGES_PATH, web::get().to(messages))
        .route("/health", web::get().to(health_check));
}

/// Start the mock API
pub async fn run_server(host: &str, port: u16, data_path: PathBuf) -> std::io::Result<()> {
    log::info!("Mock API server running at http://{}:{}", host, port);
    log::info!("Serving {} from {}", MESSAGES_PATH, data_path.display());

    let state = web::Data::new(AppState::new(data_path));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            // The board pages are served from another origin during development
            .wrap(
                actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use std::io::Write;

    fn app_state(path: impl Into<PathBuf>) -> web::Data<AppState> {
        web::Data::new(AppState::new(path))
    }

    #[actix_web::test]
    async fn test_messages_serves_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Laptop", "Status": "Pending"}}]"#).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state(file.path()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/messages").to_request();
        let body: JsonValue = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!([{"title": "Laptop", "Status": "Pending"}]));
    }

    #[actix_web::test]
    async fn test_missing_file_is_500() {
        let app = test::init_service(
            App::new()
                .app_data(app_state("/definitely/not/here.json"))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/messages").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body, ErrorBody::new("Failed to read mock data"));
    }

    #[actix_web::test]
    async fn test_invalid_json_is_500() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{").unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state(file.path()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/messages").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(
            App::new()
                .app_data(app_state("unused.json"))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthBody = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.status, "ok");
    }
}
