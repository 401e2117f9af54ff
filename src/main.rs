use ossai::prelude::*;

#[tokio::main]
async fn main() -> AppResult<()> {
    app().start().await
}
