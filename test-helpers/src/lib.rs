pub mod mock;
pub mod routes;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use jiff::Timestamp;
use std::collections::BTreeMap;
use std::net::TcpListener;
use std::sync::Mutex;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

use crate::mock::{Dataset, reference_time};

/// A request received by the fixture API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: BTreeMap<String, String>,
}

/// Shared state behind the fixture API's routes.
pub struct FixtureState {
    pub dataset: Dataset,
    failure: Mutex<Option<String>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FixtureState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            failure: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, path: &str, query: BTreeMap<String, String>) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                path: path.to_string(),
                query,
            });
        }
    }

    pub fn injected_failure(&self) -> Option<String> {
        self.failure.lock().ok().and_then(|f| f.clone())
    }

    pub fn set_failure(&self, message: Option<String>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = message;
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// Origins the UI may be served from. "*" allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Read `DEV_SERVER_IP`, `DEV_SERVER_PORT` and `ALLOWED_ORIGINS`
    /// (comma separated), defaulting to 127.0.0.1:8000 and any origin.
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("DEV_SERVER_IP").unwrap_or_else(|_| "127.0.0.1".into()),
            port: var("DEV_SERVER_PORT")
                .map(|port| port.parse())
                .unwrap_or(Ok(8000))?,
            allowed_origins,
        })
    }

    /// Loopback on an OS-assigned port.
    pub fn local() -> Self {
        Config {
            ip: "127.0.0.1".into(),
            port: 0,
            allowed_origins: vec!["*".into()],
        }
    }
}

/// Build the fixture server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    state: web::Data<FixtureState>,
) -> std::io::Result<Server> {
    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let allowed_origins = config.allowed_origins.clone();
    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(["GET"])
            .allow_any_header()
            .supports_credentials();
        if allowed_origins.iter().any(|origin| origin == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(state.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct TestApp {
    pub port: u16,
    pub client: payloads::APIClient,
    pub state: web::Data<FixtureState>,
}

impl TestApp {
    pub fn dataset(&self) -> &Dataset {
        &self.state.dataset
    }

    /// Make every following request fail with `message` as the body.
    pub fn fail_with(&self, message: &str) {
        self.state.set_failure(Some(message.to_string()));
    }

    pub fn recover(&self) {
        self.state.set_failure(None);
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests()
    }

    /// A client pointed at a port nothing listens on.
    pub fn unreachable_client() -> payloads::APIClient {
        payloads::APIClient {
            address: "http://127.0.0.1:9".into(),
            inner_client: reqwest::Client::new(),
        }
    }
}

/// Spawn the fixture API with content laid out around `now`.
pub async fn spawn_app_with(
    mut config: Config,
    now: Timestamp,
) -> anyhow::Result<TestApp> {
    let state = web::Data::new(FixtureState::new(Dataset::create(now)));
    let server = build(&mut config, state.clone())?;
    tokio::spawn(server);

    Ok(TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        state,
    })
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    spawn_app_with(Config::local(), reference_time())
        .await
        .expect("fixture API failed to start")
}
