use std::time::Duration;

use crate::configuration::Settings;
use crate::database::{create_connection_pool, DatabaseConnectionPool};
use crate::routes;
use anyhow::Context;
use axum::{extract::Request, routing, serve::Serve, Router};
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

#[derive(Clone)]
pub struct ApplicationState {
    pub database_pool: DatabaseConnectionPool,
    pub storage_timeout: Duration,
}

pub struct Application {
    port: u16,
    pool: DatabaseConnectionPool,
    server: Serve<Router, Router>,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let pool = create_connection_pool(
            configuration.database.connection_string().expose_secret(),
            configuration.database.max_connections,
        )?;
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();
        tracing::info!(%address, port, "Listening.");
        let state = ApplicationState {
            database_pool: pool.clone(),
            storage_timeout: configuration.application.storage_timeout(),
        };
        let server = run(listener, state);
        Ok(Self { port, pool, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn pool(&self) -> DatabaseConnectionPool {
        self.pool.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn router(state: ApplicationState) -> Router {
    Router::new()
        .route("/ping", routing::get(routes::ping))
        .route(
            "/subscriptions",
            routing::get(routes::get_subscriptions)
                .post(routes::create_subscription),
        )
        .route(
            "/subscriptions/report",
            routing::post(routes::accounting_report),
        )
        .route(
            "/subscriptions/:id",
            routing::get(routes::read_subscription)
                .patch(routes::update_subscription)
                .put(routes::update_subscription)
                .delete(routes::delete_subscription),
        )
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &Request<_>| {
                let request_id = Uuid::now_v7();
                info_span!(
                    "Http Request",
                    %request_id,
                    method = %request.method(),
                    request_uri = %request.uri()
                )
            },
        ))
        .with_state(state)
}

pub fn run(
    listener: TcpListener,
    state: ApplicationState,
) -> Serve<Router, Router> {
    axum::serve(listener, router(state))
}
