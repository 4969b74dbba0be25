mod handlers;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use guichet_orchestrator::Orchestrator;
use routes::api::v1::api_scope;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv()
        .context("You need to provide an .env file. Look at the .env.example for guidance")?;

    let (orchestrator, refresh_handle): (Arc<Orchestrator>, JoinHandle<Result<()>>) =
        Orchestrator::new().context("Orchestrator could not be created")?;

    let board_files = ServeDir::new("./static_files/board");

    let app = Router::new()
        .nest("/api/v1", api_scope(orchestrator.clone()).await)
        .nest_service("/board", board_files)
        .route("/hello", get(|| async { "Hello, world!" }));

    let addr: SocketAddr = dotenvy::var("GUICHET_API_ADDRESS")
        .context("GUICHET_API_ADDRESS has to be set, see .env.example")?
        .parse()
        .context("GUICHET_API_ADDRESS is not a valid socket address")?;

    info!(%addr, "guichet api server listening");

    let server = axum_server::bind(addr).serve(app.into_make_service());

    tokio::select! {
        res = server => res?,
        res = refresh_handle => res??,
    }

    Ok(())
}
