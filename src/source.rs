//! Record sources.
//!
//! A view fetches its record set exactly once when it is mounted. There is no
//! retry and no cancellation; a failed fetch leaves the view in an error
//! state with an empty record set.

use crate::error::SourceError;
use crate::record::RecordSet;
use std::path::PathBuf;

/// Path of the records endpoint on the mock API.
pub const MESSAGES_PATH: &str = "/api/messages";

/// Default base URL of the mock API.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Anything that can deliver a record set.
pub trait RecordSource {
    fn fetch(&self) -> Result<RecordSet, SourceError>;
}

impl<F> RecordSource for F
where
    F: Fn() -> Result<RecordSet, SourceError>,
{
    fn fetch(&self) -> Result<RecordSet, SourceError> {
        self()
    }
}

/// An in-memory source, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: RecordSet,
}

impl StaticSource {
    pub fn new(records: RecordSet) -> Self {
        StaticSource { records }
    }
}

impl RecordSource for StaticSource {
    fn fetch(&self) -> Result<RecordSet, SourceError> {
        Ok(self.records.clone())
    }
}

/// Reads records from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn fetch(&self) -> Result<RecordSet, SourceError> {
        let text = std::fs::read_to_string(&self.path)?;
        RecordSet::from_json_str(&text).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

/// Fetches records from the messages API over HTTP.
#[cfg(feature = "client")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "client")]
impl Default for HttpSource {
    fn default() -> Self {
        HttpSource::new()
    }
}

#[cfg(feature = "client")]
impl HttpSource {
    /// Client for the default localhost API.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL.to_string())
    }

    pub fn with_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, MESSAGES_PATH)
    }
}

#[cfg(feature = "client")]
impl RecordSource for HttpSource {
    fn fetch(&self) -> Result<RecordSet, SourceError> {
        let response = self
            .client
            .get(self.url())
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let payload: serde_json::Value = response
            .json()
            .map_err(|e| SourceError::Parse(e.to_string()))?;
        Ok(RecordSet::from_json_value(&payload))
    }
}

/// Where a mounted view is in its single fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(RecordSet),
    Failed(String),
}

impl LoadState {
    /// Records to run the pipeline on. Empty unless the fetch succeeded.
    pub fn records(&self) -> RecordSet {
        match self {
            LoadState::Ready(records) => records.clone(),
            _ => RecordSet::empty(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

/// Run the one fetch a view gets per mount.
pub fn mount<S: RecordSource + ?Sized>(source: &S) -> LoadState {
    match source.fetch() {
        Ok(records) => {
            log::info!("loaded {} records", records.len());
            LoadState::Ready(records)
        }
        Err(e) => {
            log::error!("failed to load records: {}", e);
            LoadState::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use std::cell::Cell;
    use std::io::Write;

    #[test]
    fn test_static_source() {
        let records = RecordSet::new(vec![Record::from_pairs([("Status", "Pending")])]);
        let state = mount(&StaticSource::new(records.clone()));
        assert_eq!(state, LoadState::Ready(records.clone()));
        assert_eq!(state.records(), records);
    }

    #[test]
    fn test_failed_fetch_yields_empty_records() {
        let source = || -> Result<RecordSet, SourceError> { Err(SourceError::Status(500)) };
        let state = mount(&source);
        assert!(state.is_failed());
        assert!(state.records().is_empty());
        assert_eq!(
            state,
            LoadState::Failed("Server responded with status 500".to_string())
        );
    }

    #[test]
    fn test_mount_fetches_once() {
        let calls = Cell::new(0);
        let source = || {
            calls.set(calls.get() + 1);
            Err::<RecordSet, _>(SourceError::Network("connection refused".to_string()))
        };
        let _ = mount(&source);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_loading_state_has_no_records() {
        let state = LoadState::default();
        assert!(state.is_loading());
        assert!(state.records().is_empty());
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"Status": "Approved"}}, {{"Status": "Pending"}}]"#).unwrap();

        let records = FileSource::new(file.path()).fetch().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_file_source_errors() {
        let missing = FileSource::new("/definitely/not/here.json").fetch();
        assert!(matches!(missing, Err(SourceError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let invalid = FileSource::new(file.path()).fetch();
        assert!(matches!(invalid, Err(SourceError::Parse(_))));
    }

    #[test]
    fn test_file_source_non_array_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"error": "oops"}}"#).unwrap();
        assert!(FileSource::new(file.path()).fetch().unwrap().is_empty());
    }

    #[cfg(feature = "client")]
    #[test]
    fn test_http_source_url() {
        let source = HttpSource::with_url("http://example.test:9000/".to_string());
        assert_eq!(source.url(), "http://example.test:9000/api/messages");
        assert_eq!(HttpSource::new().url(), "http://localhost:3001/api/messages");
    }

    /// Serve `routes` on an ephemeral port from a background actix system.
    #[cfg(all(feature = "client", feature = "server"))]
    fn spawn_api<F>(routes: F) -> String
    where
        F: Fn(&mut actix_web::web::ServiceConfig) + Clone + Send + 'static,
    {
        use actix_web::{App, HttpServer};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        std::thread::spawn(move || {
            actix_web::rt::System::new().block_on(async move {
                HttpServer::new(move || App::new().configure(routes.clone()))
                    .workers(1)
                    .listen(listener)?
                    .run()
                    .await
            })
        });
        url
    }

    #[cfg(all(feature = "client", feature = "server"))]
    fn serve_data_file(path: PathBuf) -> String {
        let state = actix_web::web::Data::new(crate::server::AppState::new(path));
        spawn_api(move |cfg| {
            cfg.app_data(state.clone());
            crate::server::configure(cfg);
        })
    }

    #[cfg(all(feature = "client", feature = "server"))]
    #[test]
    fn test_http_source_loads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"Status": "Approved"}}, {{"Status": "Pending"}}]"#).unwrap();
        let url = serve_data_file(file.path().to_path_buf());

        let state = mount(&HttpSource::with_url(url));
        assert!(matches!(&state, LoadState::Ready(records) if records.len() == 2));
        assert_eq!(state.records().get(1).unwrap().text("Status"), Some("Pending"));
    }

    #[cfg(all(feature = "client", feature = "server"))]
    #[test]
    fn test_http_source_error_status() {
        let url = serve_data_file(PathBuf::from("/definitely/not/here.json"));

        let result = HttpSource::with_url(url).fetch();
        assert!(matches!(result, Err(SourceError::Status(500))));
    }

    #[cfg(all(feature = "client", feature = "server"))]
    #[test]
    fn test_http_source_non_array_body_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"error": "oops"}}"#).unwrap();
        let url = serve_data_file(file.path().to_path_buf());

        let records = HttpSource::with_url(url).fetch().unwrap();
        assert!(records.is_empty());
    }

    #[cfg(all(feature = "client", feature = "server"))]
    #[test]
    fn test_http_source_invalid_body_is_parse_error() {
        use actix_web::{web, HttpResponse};

        let url = spawn_api(|cfg| {
            cfg.route(
                MESSAGES_PATH,
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("application/json")
                        .body("not json")
                }),
            );
        });

        let result = HttpSource::with_url(url).fetch();
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }

    #[cfg(feature = "client")]
    #[test]
    fn test_http_source_closed_port_is_network_error() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let result = HttpSource::with_url(format!("http://127.0.0.1:{}", port)).fetch();
        assert!(matches!(result, Err(SourceError::Network(_))));
    }
}
