use routescope::logging;
use routescope::prelude::*;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    load_dotenv();
    logging::init();

    let config = AppConfig::from_env().expect("Failed to load config");
    let addr = config.addr();

    let router = Router::new()
        .get("/", |_, _, _| async { Html("<h1>Home</h1>".to_string()) })
        .name("home")
        .get("/dashboard", |_, _, _| async { "dashboard" })
        .name("dashboard.index")
        .get("/api/users", |_, _, _| async { Json(vec!["ana", "bruno"]) })
        .post("/api/users", |_, _, _| async { StatusCode::CREATED })
        .get("/internal/jobs", |_, _, _| async { "jobs" });

    println!();
    println!("  routescope inspector example");
    println!("  ----------------------------");
    println!();
    println!("  Server running at http://{}", addr);
    println!();
    println!("  Browse the routes:");
    println!("    GET /__routes             - HTML inspector");
    println!("    GET /__routes/routes.json - JSON listing");
    println!();
    println!("  /internal/jobs is registered but hidden by the");
    println!("  \"internal\" exclusion pattern.");
    println!();

    RouteScope::new()
        .router(router)
        .with_inspector(
            InspectorConfig::new()
                .prefix("__routes")
                .exclude("__routes")
                .exclude("internal"),
        )
        .listen(&addr)
        .await
}
