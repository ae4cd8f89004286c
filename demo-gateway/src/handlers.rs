use axum::Json;
use serde::Serialize;
use serde_json::{Value, json};

use session_gate_axum::AuthSession;

#[derive(Serialize)]
pub(crate) struct Resource {
    name: String,
    properties: Value,
}

#[derive(Serialize)]
pub(crate) struct ResourceList {
    items: Vec<Resource>,
    total: usize,
}

fn sample_resources() -> ResourceList {
    let items = vec![
        Resource {
            name: "resource1".to_string(),
            properties: json!({"k1": "v1", "k2": "v2"}),
        },
        Resource {
            name: "resource2".to_string(),
            properties: json!({"k1": 1, "k2": 2}),
        },
    ];
    let total = items.len();
    ResourceList { items, total }
}

/// List the protected resources.
///
/// The [`AuthSession`] extractor has already enforced the session cookie
/// and the CSRF header by the time this handler runs.
pub(crate) async fn all_resources(session: AuthSession) -> Json<ResourceList> {
    tracing::debug!("Serving resources for user: {}", session.username);
    Json(sample_resources())
}
