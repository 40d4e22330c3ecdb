use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::SelectableHelper;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::AsyncConnection;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use diesel_migrations::embed_migrations;
use diesel_migrations::EmbeddedMigrations;
use diesel_migrations::MigrationHarness;
use fake::faker::internet::en::Username;
use fake::Fake;
use once_cell::sync::Lazy;
use reqwest::{Client, Method};
use secrecy::ExposeSecret;
use std::future::IntoFuture;
use subscriptions_service::configuration::get_configuration;
use subscriptions_service::configuration::DatabaseSettings;
use subscriptions_service::database::DatabaseConnection;
use subscriptions_service::models::{
    NewSubscriptionRow, NewUser, Subscription, User,
};
use subscriptions_service::schema::{subscriptions, users};
use subscriptions_service::telemetry::setup_tracing;
use uuid::Uuid;

const MIGRATION: EmbeddedMigrations = embed_migrations!();

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter = "debug";
    if std::env::var("TEST_LOG").is_ok() {
        setup_tracing("test", default_filter, std::io::stdout);
    } else {
        setup_tracing("test", default_filter, std::io::sink);
    }
});

pub const SERVICES: [&str; 5] = ["Okko", "Yandex", "Wink", "Sber", "Ivi"];

pub struct TestUser {
    pub login: String,
    pub password: String,
}

impl TestUser {
    pub fn generate() -> Self {
        Self {
            login: Username().fake(),
            password: Uuid::now_v7().to_string(),
        }
    }

    pub async fn store(&self, connection: &mut DatabaseConnection) -> User {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let hash = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).unwrap(),
        )
        .hash_password(self.password.as_bytes(), &salt)
        .unwrap()
        .to_string();

        diesel::insert_into(users::table)
            .values(&NewUser::new(&self.login, &hash))
            .returning(User::as_returning())
            .get_result(connection)
            .await
            .expect("Failed to add user")
    }
}

pub struct TestApp {
    pub address: String,
    pub pool: Pool<AsyncPgConnection>,
    pub client: Client,
}

impl TestApp {
    fn subscription_url(&self, id: &str) -> String {
        format!("{}/subscriptions/{}", &self.address, id)
    }

    pub async fn ping(&self) -> reqwest::Response {
        self.client
            .get(&format!("{}/ping", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_subscriptions(&self) -> reqwest::Response {
        self.client
            .get(&format!("{}/subscriptions", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_subscription(
        &self,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.client
            .post(&format!("{}/subscriptions", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_subscription(&self, id: &str) -> reqwest::Response {
        self.client
            .get(&self.subscription_url(id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn modify_subscription(
        &self,
        method: Method,
        id: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.client
            .request(method, &self.subscription_url(id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_subscription(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(&self.subscription_url(id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_report(
        &self,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.client
            .post(&format!("{}/subscriptions/report", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn connection(&self) -> DatabaseConnection {
        self.pool
            .get()
            .await
            .expect("Could not retrieve database connection")
    }

    pub async fn store_user(&self) -> User {
        let mut connection = self.connection().await;
        TestUser::generate().store(&mut connection).await
    }

    pub async fn store_subscription(
        &self,
        user: &User,
        service_name: &str,
        price: i32,
        start_date: Option<DateTime<Utc>>,
    ) -> Subscription {
        let row = NewSubscriptionRow {
            user_id: user.id,
            service_name,
            price,
            start_date,
            end_date: None,
        };
        let mut connection = self.connection().await;
        diesel::insert_into(subscriptions::table)
            .values(&row)
            .returning(Subscription::as_returning())
            .get_result(&mut connection)
            .await
            .expect("Failed to add subscription")
    }

    pub async fn find_stored_subscription(
        &self,
        id: i32,
    ) -> Option<Subscription> {
        let mut connection = self.connection().await;
        subscriptions::table
            .find(id)
            .select(Subscription::as_select())
            .first(&mut connection)
            .await
            .optional()
            .expect("Failed to read query")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("failed to get configuration");
        c.database.url = None;
        c.database.database_name = Uuid::now_v7().to_string();
        c.application.port = 0;
        c
    };

    configure_database(&configuration.database).await;

    let application =
        subscriptions_service::startup::Application::build(configuration)
            .await
            .expect("Failed to build app.");
    let testapp = TestApp {
        address: format!("http://127.0.0.1:{}", application.port()),
        pool: application.pool(),
        client: Client::new(),
    };
    tokio::spawn(application.run_until_stopped().into_future());
    testapp
}

async fn configure_database(db_settings: &DatabaseSettings) {
    let mut db_conn = AsyncPgConnection::establish(
        db_settings
            .connection_string_without_database()
            .expose_secret(),
    )
    .await
    .expect("Failed to connect");
    diesel::sql_query(format!(
        r#"CREATE DATABASE "{}";"#,
        db_settings.database_name
    ))
    .execute(&mut db_conn)
    .await
    .expect("Failed to create database");
    let conn_string = db_settings.connection_string().clone();
    subscriptions_service::telemetry::spawn_blocking_with_tracing(move || {
        let mut db_conn: AsyncConnectionWrapper<AsyncPgConnection> =
            AsyncConnectionWrapper::<AsyncPgConnection>::establish(
                conn_string.expose_secret(),
            )
            .expect("Error");
        db_conn
            .run_pending_migrations(MIGRATION)
            .expect("Failed to run migrations");
    })
    .await
    .expect("thread panic");
}

/// Checks the `{data, meta, error}` success envelope and returns `data`.
pub fn assert_envelope(body: &serde_json::Value) -> &serde_json::Value {
    let object = body.as_object().expect("Body is not a JSON object");
    assert!(object.contains_key("data"), "Response has no 'data' key");
    assert!(object.contains_key("meta"), "Response has no 'meta' key");
    assert!(object.contains_key("error"), "Response has no 'error' key");
    assert!(body["error"].is_null(), "Error should be null");
    let timestamp = body["meta"]["timestamp"]
        .as_str()
        .expect("Response has no 'meta.timestamp'");
    assert!(!timestamp.is_empty(), "Timestamp should not be empty");
    &body["data"]
}
