use ossai::prelude::*;
use serial_test::serial;

#[tokio::test]
async fn greets_on_root() {
    let server = app().as_test_server();
    let response = server.get("/").await;
    response.assert_status_ok();
    assert_eq!("🚀 Hello from Ossai!", response.text());
}

#[tokio::test]
async fn greeting_never_changes_between_requests() {
    let server = app().as_test_server();
    for _ in 0..3 {
        assert_eq!("🚀 Hello from Ossai!", server.get("/").await.text());
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = app().as_test_server();
    assert_eq!(404, server.get("/nonexistent").await.status_code().as_u16());
}

#[tokio::test]
async fn post_on_root_is_not_allowed() {
    let server = app().as_test_server();
    assert_eq!(405, server.post("/").await.status_code().as_u16());
}

#[tokio::test]
#[serial]
async fn start_fails_when_port_is_taken() -> AppResult<()> {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = taken.local_addr()?.port();
    std::env::set_var("SERVER_BIND", "127.0.0.1");
    std::env::set_var("SERVER_PORT", port.to_string());
    let result = app().start().await;
    std::env::remove_var("SERVER_BIND");
    std::env::remove_var("SERVER_PORT");
    assert!(result.is_err());
    Ok(())
}
