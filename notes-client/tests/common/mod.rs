use notes_client::ApiClient;

/// Serves a fresh notes-api instance on an ephemeral port and returns the
/// base URL for clients.
pub async fn spawn_api() -> String {
    let db = notes_api::init_test_db().await.unwrap();
    let app = notes_api::app::create(db).await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api")
}

/// A base URL nothing listens on, for asserting that an operation never
/// issues a request: any attempt would surface a network error instead of
/// the local validation message.
pub fn dead_api() -> &'static str {
    "http://127.0.0.1:9/api"
}

pub async fn signed_up_client(base_url: &str, email: &str) -> ApiClient {
    let client = ApiClient::new(base_url);
    client.signup(email, "password123").await.unwrap();
    client
}
