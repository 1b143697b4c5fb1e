use freeipa_rs::{IpaClient, IpaError, IpaSession};
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn login_posts_form_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/session/login_password")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_header("accept", "text/plain")
        .match_header("referer", server.url().as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("user".into(), "admin".into()),
            Matcher::UrlEncoded("password".into(), "Secret123".into()),
        ]))
        .with_status(200)
        .create_async()
        .await;

    let mut session = IpaSession::from_base_url(server.url(), true).unwrap();
    session.login("admin", "Secret123").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn failed_login_surfaces_response_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/session/login_password")
        .with_status(403)
        .with_body("invalid credentials")
        .create_async()
        .await;

    let mut session = IpaSession::from_base_url(server.url(), true).unwrap();
    let error = session
        .login("admin", "wrong-password")
        .await
        .expect_err("login should fail");

    match error {
        IpaError::Unauthorized { message } => assert_eq!(message, "invalid credentials"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn session_cookie_rides_along_after_login() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/session/login_password")
        .with_status(200)
        .with_header("set-cookie", "ipa_session=tok123; Path=/")
        .create_async()
        .await;
    let rpc = server
        .mock("POST", "/session/json")
        .match_header("cookie", "ipa_session=tok123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"result": {}, "error": null}).to_string())
        .create_async()
        .await;

    let mut session = IpaSession::from_base_url(server.url(), true).unwrap();
    session.login("admin", "Secret123").await.unwrap();
    assert_eq!(session.session_cookie().as_deref(), Some("ipa_session=tok123"));

    let client = IpaClient::from_session(session);
    client.ping().await.unwrap();
    rpc.assert_async().await;
}

#[tokio::test]
async fn http_401_wins_over_error_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/session/json")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"result": null, "error": {"code": 4001, "message": "user not found"}})
                .to_string(),
        )
        .create_async()
        .await;

    let session = IpaSession::from_base_url(server.url(), true).unwrap();
    let client = IpaClient::from_session(session);
    let error = client
        .request("user_show", Some(json!("alice")), None)
        .await
        .expect_err("401 should fail");

    assert!(matches!(error, IpaError::Unauthorized { .. }));
}

#[tokio::test]
async fn other_http_errors_carry_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/session/json")
        .with_status(503)
        .with_body("upgrade in progress")
        .create_async()
        .await;

    let session = IpaSession::from_base_url(server.url(), true).unwrap();
    let client = IpaClient::from_session(session);
    let error = client.ping().await.expect_err("503 should fail");

    match error {
        IpaError::BadRequest { message, code } => {
            assert_eq!(message, "upgrade in progress");
            assert_eq!(code, Some(503));
        }
        other => panic!("unexpected error: {other}"),
    }
}
