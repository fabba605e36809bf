pub mod mock;
pub mod routes;
pub mod store;
pub mod telemetry;

pub use store::{FakeStore, StoreError};

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use reqwest::StatusCode;
use std::net::TcpListener;
use tracing_subscriber::util::SubscriberInitExt;

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// 0 lets the OS pick a free port
    pub port: u16,
}

/// Build the fake backend server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, store: FakeStore) -> std::io::Result<Server> {
    let store = web::Data::new(store);

    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // The ui may be served from any dev origin; it sends credentials.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct TestApp {
    pub port: u16,
    pub store: FakeStore,
    pub client: payloads::APIClient,
}

pub async fn spawn_app_on_port(port: u16) -> anyhow::Result<TestApp> {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = tracing_log::LogTracer::init();
    let _ = subscriber.try_init();

    let store = FakeStore::default();
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
    };

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    let server = build(&mut config, store.clone())?;
    tokio::spawn(server);

    Ok(TestApp {
        port: config.port,
        store,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: client,
        },
    })
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> anyhow::Result<TestApp> {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
