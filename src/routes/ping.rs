#[tracing::instrument(name = "Ping")]
pub async fn ping() -> &'static str {
    tracing::debug!("Ping requested.");
    "pong"
}
