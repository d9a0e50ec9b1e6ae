use routescope::logging;
use routescope::prelude::*;

#[get("/")]
async fn home() -> &'static str {
    "Hello, routescope!"
}

#[get("/health")]
async fn health() -> StatusCode {
    StatusCode::OK
}

#[get("/users/:id")]
async fn get_user(id: Path<u64>) -> String {
    format!("user {}", id.into_inner())
}

#[get("/api/users")]
async fn list_users() -> Json<Vec<&'static str>> {
    Json(vec!["ana", "bruno"])
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    load_dotenv();
    logging::init();

    let config = AppConfig::from_env().expect("Failed to load config");

    RouteScope::new()
        .with_inspector(InspectorConfig::from_env())
        .discover()
        .listen(&config.addr())
        .await
}
