// src/server.rs
//! Demo server exposing simulated data on `GET /gps`

use crate::{config::MonitorConfig, error::Result, gps::simulated::SimulatedGps, gps::GpsStatus};
use rocket::{
    catch, catchers, get, http::Status, response::status, routes,
    serde::json::Json, Build, Rocket, State,
};
use tracing::info;

#[get("/gps")]
fn gps(feed: &State<SimulatedGps>) -> Json<GpsStatus> {
    Json(feed.sample())
}

#[catch(404)]
fn unknown_request() -> status::Custom<&'static str> {
    status::Custom(Status::NotImplemented, "Unknown Request")
}

/// Assemble the demo server without launching it
pub fn build(address: &str, port: u16) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", address))
        .merge(("port", port))
        .merge(("log_level", "off"));

    rocket::custom(figment)
        .manage(SimulatedGps::new())
        .mount("/", routes![gps])
        .register("/", catchers![unknown_request])
}

/// Serve until Ctrl+C
pub async fn serve(config: &MonitorConfig) -> Result<()> {
    info!(
        "Starting HTTP server on http://{}:{}",
        config.serve_address, config.serve_port
    );

    let _rocket = build(&config.serve_address, config.serve_port).launch().await?;

    info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::local::asynchronous::Client;

    #[tokio::test]
    async fn test_gps_returns_record() {
        let client = Client::tracked(build("127.0.0.1", 8080)).await.unwrap();
        let response = client.get("/gps").dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().await.unwrap();
        let status = GpsStatus::from_json(&body).unwrap();
        assert!(status.fix_type().is_some());
        assert!(status.time.is_some());
    }

    #[tokio::test]
    async fn test_unknown_path_not_implemented() {
        let client = Client::tracked(build("127.0.0.1", 8080)).await.unwrap();
        let response = client.get("/satellites").dispatch().await;

        assert_eq!(response.status(), Status::NotImplemented);
        assert_eq!(response.into_string().await.as_deref(), Some("Unknown Request"));
    }
}
