//! RestGateway against an in-process stand-in for the game service.

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::post,
};
use serde_json::{Value, json};
use tictactoe_client::{
    ClientErrorKind, Configuration, Coordinate, Difficulty, Marker, RestGateway, ServerGateway,
    SessionId,
};

fn empty_state() -> Value {
    json!({
        "board": [[null, null, null], [null, null, null], [null, null, null]],
        "currentPlayer": "X",
        "winner": null,
        "gameOver": false
    })
}

async fn new_game(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let reply = json!({
        "gameId": "g-1",
        "state": empty_state(),
        "aiEnabled": body["aiEnabled"],
        "aiPlayer": body["aiPlayer"],
        "difficulty": body["difficulty"]
    });
    (StatusCode::CREATED, Json(reply))
}

async fn play(Path(id): Path<String>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["row"].as_u64() == Some(0) && body["col"].as_u64() == Some(0) {
        let reply = json!({
            "success": false,
            "gameId": id,
            "state": empty_state(),
            "error": "Invalid move"
        });
        return (StatusCode::BAD_REQUEST, Json(reply));
    }
    let reply = json!({
        "success": true,
        "gameId": id,
        "state": {
            "board": [[null, null, null], [null, "X", null], [null, null, "O"]],
            "currentPlayer": "X",
            "winner": null,
            "gameOver": false
        },
        "aiMove": [2, 2]
    });
    (StatusCode::OK, Json(reply))
}

async fn reset(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "gameId": id,
        "state": empty_state(),
        "message": "Game reset"
    }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

/// Starts the stand-in service and returns its base URL.
async fn spawn_service() -> String {
    let app = Router::new()
        .route("/api/new_game", post(new_game))
        .route("/api/game/{id}/move", post(play))
        .route("/api/game/{id}/reset", post(reset))
        .route("/api/game/broken/move", post(broken))
        .route("/api/game/broken/reset", post(broken));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{addr}")
}

fn at(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col).expect("on board")
}

#[tokio::test]
async fn test_create_session_sends_configuration() {
    let gateway = RestGateway::new(spawn_service().await);
    let config = Configuration {
        ai_enabled: true,
        ai_marker: Marker::X,
        difficulty: Difficulty::Hard,
    };

    let session = gateway.create_session(&config).await.expect("Create failed");
    assert_eq!(session.id().as_str(), "g-1");
    assert_eq!(session.config(), &config);
    assert!(session.board().is_clear());
    assert!(!session.is_terminal());
}

#[tokio::test]
async fn test_accepted_move_carries_ai_reply() {
    let gateway = RestGateway::new(spawn_service().await);

    let reply = gateway
        .submit_move(&SessionId::from("g-1"), at(1, 1))
        .await
        .expect("Move failed");
    assert!(reply.success);
    assert_eq!(reply.session_id.as_str(), "g-1");
    assert_eq!(reply.ai_move, Some(at(2, 2)));
    assert_eq!(reply.state.board().get(at(1, 1)).marker(), Some(Marker::X));
    assert_eq!(reply.state.board().get(at(2, 2)).marker(), Some(Marker::O));
}

#[tokio::test]
async fn test_bad_request_move_is_a_rejection() {
    let gateway = RestGateway::new(spawn_service().await);

    let reply = gateway
        .submit_move(&SessionId::from("g-1"), at(0, 0))
        .await
        .expect("Rejection should not be an error");
    assert!(!reply.success);
    assert_eq!(reply.ai_move, None);
}

#[tokio::test]
async fn test_reset_returns_fresh_state() {
    let gateway = RestGateway::new(spawn_service().await);

    let (id, state) = gateway
        .reset_session(&SessionId::from("g-7"))
        .await
        .expect("Reset failed");
    assert_eq!(id.as_str(), "g-7");
    assert!(state.board().is_clear());
    assert_eq!(*state.active(), Marker::X);
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let gateway = RestGateway::new(spawn_service().await);

    let err = gateway
        .submit_move(&SessionId::from("broken"), at(1, 1))
        .await
        .expect_err("500 should fail");
    assert!(matches!(
        err.kind,
        ClientErrorKind::HttpStatus { status: 500, ref body } if body == "boom"
    ));

    let err = gateway
        .reset_session(&SessionId::from("broken"))
        .await
        .expect_err("500 should fail");
    assert!(matches!(err.kind, ClientErrorKind::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read address");
    drop(listener);

    let gateway = RestGateway::new(format!("http://{addr}"));
    let err = gateway
        .create_session(&Configuration::default())
        .await
        .expect_err("nothing is listening");
    assert!(err.is_network());
}
