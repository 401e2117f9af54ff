use crate::prelude::*;

const GREETING: &str = "🚀 Hello from Ossai!";

/// The whole application: a single `GET /` answering with [`GREETING`].
pub fn app() -> App {
    App::new().route("/", get(home))
}

async fn home() -> impl IntoResponse {
    GREETING
}
