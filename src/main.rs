use actix_web::HttpServer;
use travelplan_api::{Settings, create_base_app};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging (run with RUST_LOG=info, for example)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Static settings are read once; everything after this is read-only.
    let settings = Settings::load().map_err(std::io::Error::other)?;

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // Print a startup message for convenience.
    println!("Server running at http://{bind_addr}");

    HttpServer::new(move || create_base_app(settings.clone()))
        .bind(bind_addr)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use travelplan_api::{health, input_page, version};

    #[actix_web::test]
    async fn test_health() {
        // Create a test app with the /api/health route.
        let app =
            test::init_service(App::new().route("/api/health", web::get().to(health))).await;

        // Create a test request to GET /api/health.
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;

        // Ensure the response status is successful (200 OK).
        assert!(resp.status().is_success());

        // Check that the response body contains "healthy".
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("healthy"));
    }

    #[actix_web::test]
    async fn test_version() {
        // Create a test app with the /api/version route.
        let app =
            test::init_service(App::new().route("/api/version", web::get().to(version))).await;

        // Create a test request to GET /api/version.
        let req = test::TestRequest::get().uri("/api/version").to_request();
        let resp = test::call_service(&app, req).await;

        // Ensure the response status is successful (200 OK).
        assert!(resp.status().is_success());

        // Check that the response body contains version, commit, and build_time fields.
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("version"));
        assert!(body_str.contains("commit"));
        assert!(body_str.contains("build_time"));
    }

    #[actix_web::test]
    async fn test_input_page() {
        // The input form renders unconditionally at /.
        let app = test::init_service(App::new().route("/", web::get().to(input_page))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("prefecture"));
        assert!(body_str.contains("都道府県を選択してください"));
    }
}
