//! HTTP server binary for the user API.
//!
//! All bootstrap (env, logging, configuration, bind, shutdown) lives in
//! `server::run`; this entrypoint only provides the runtime.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}
