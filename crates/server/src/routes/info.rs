//! Informational endpoints: HTML index, hello, version, health.
//!
//! These are static or semi-static and hold no user state.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

use super::ServerState;

const SERVICE_NAME: &str = "User API Server";

/// Endpoint-listing landing page. `{port}` is interpolated at render time
/// so the links match the bound address.
const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>User API Server</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                max-width: 800px;
                margin: 0 auto;
                padding: 20px;
                background-color: #f5f5f5;
            }
            .container {
                background-color: white;
                padding: 30px;
                border-radius: 10px;
                box-shadow: 0 2px 10px rgba(0,0,0,0.1);
            }
            h1 {
                color: #333;
                text-align: center;
            }
            .endpoints {
                margin-top: 30px;
            }
            .endpoint {
                background-color: #f8f9fa;
                padding: 10px;
                margin: 10px 0;
                border-radius: 5px;
                border-left: 4px solid #007bff;
            }
            code {
                background-color: #e9ecef;
                padding: 2px 4px;
                border-radius: 3px;
            }
        </style>
    </head>
    <body>
        <div class="container">
            <h1>User API Server</h1>
            <p>A small JSON API over an in-memory collection of users.</p>
            <p>Server is running on port {port}</p>

            <div class="endpoints">
                <h3>Available Endpoints:</h3>
                <div class="endpoint">
                    <strong>GET /</strong> - Home page (this page)
                </div>
                <div class="endpoint">
                    <strong>GET /api/hello</strong> - Simple JSON greeting
                </div>
                <div class="endpoint">
                    <strong>GET /api/version</strong> - API version
                </div>
                <div class="endpoint">
                    <strong>GET /api/health</strong> - Health and uptime
                </div>
                <div class="endpoint">
                    <strong>GET /api/users</strong> - List users
                </div>
                <div class="endpoint">
                    <strong>POST /api/users</strong> - Create a user (<code>{"name", "email"}</code>)
                </div>
                <div class="endpoint">
                    <strong>GET /api/users/:id</strong> - Fetch a user
                </div>
                <div class="endpoint">
                    <strong>PUT /api/users/:id</strong> - Update a user
                </div>
                <div class="endpoint">
                    <strong>DELETE /api/users/:id</strong> - Delete a user
                </div>
            </div>

            <p><strong>Try these URLs:</strong></p>
            <ul>
                <li><a href="/api/hello">http://localhost:{port}/api/hello</a></li>
                <li><a href="/api/users">http://localhost:{port}/api/users</a></li>
            </ul>
        </div>
    </body>
</html>
"#;

pub async fn index(State(state): State<ServerState>) -> Html<String> {
    Html(INDEX_PAGE.replace("{port}", &state.port.to_string()))
}

pub async fn hello() -> Json<Value> {
    Json(json!({
        "message": format!("Hello from {SERVICE_NAME}!"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn version() -> Json<Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}

pub async fn health(State(state): State<ServerState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "uptime": state.started_at.elapsed().as_secs(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
