//! Drives whole rooms through sessions, the way the WebSocket bridge does.

use serde_json::Value;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tavla::gameroom::*;
use tavla::hosting::*;
use tokio::sync::mpsc::UnboundedReceiver;

async fn recv(rx: &mut UnboundedReceiver<String>) -> Value {
    let text = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for a message")
        .expect("outbox closed");
    serde_json::from_str(&text).unwrap()
}

async fn expect(rx: &mut UnboundedReceiver<String>, kind: &str) -> Value {
    let msg = recv(rx).await;
    assert_eq!(msg["type"], kind, "unexpected {}", msg);
    msg
}

fn connect(casino: &Arc<Casino>) -> (Session, UnboundedReceiver<String>) {
    let (outbox, rx) = Outbox::pair();
    (Session::new(casino.clone(), outbox), rx)
}

struct Table {
    casino: Arc<Casino>,
    code: String,
    white: (Session, UnboundedReceiver<String>),
    black: (Session, UnboundedReceiver<String>),
}

async fn seat_two() -> Table {
    let casino = Arc::new(Casino::new(TimerConfig::instant()));
    let mut white = connect(&casino);
    let mut black = connect(&casino);
    white.0.receive(r#"{"type":"create","name":"Ayşe"}"#).await;
    let created = expect(&mut white.1, "created").await;
    let code = created["code"].as_str().unwrap().to_string();
    black
        .0
        .receive(&json!({ "type": "join", "code": code.to_lowercase(), "name": "Mehmet" }).to_string())
        .await;
    Table {
        casino,
        code,
        white,
        black,
    }
}

#[tokio::test]
async fn both_sides_start_on_the_same_game() {
    let Table {
        mut white,
        mut black,
        ..
    } = seat_two().await;
    let w = expect(&mut white.1, "start").await;
    let b = expect(&mut black.1, "start").await;
    assert_eq!(w["color"], "white");
    assert_eq!(b["color"], "black");
    assert_eq!(w["names"], json!({ "white": "Ayşe", "black": "Mehmet" }));
    assert_eq!(w["names"], b["names"]);
    assert_eq!(w["game"], b["game"]);
    assert_eq!(w["game"]["points"][23], json!({ "color": "white", "count": 2 }));
    assert_eq!(w["game"]["points"][0], json!({ "color": "black", "count": 2 }));
    assert_eq!(w["game"]["rolled"], false);
    assert_eq!(w["game"]["gameOver"], false);
    assert_eq!(w["game"]["scores"], json!({ "white": 0, "black": 0 }));
    let toast = expect(&mut white.1, "toast").await;
    assert_eq!(toast["msg"], "Game started! White rolls first");
    expect(&mut black.1, "toast").await;
}

#[tokio::test]
async fn third_connection_is_turned_away() {
    let table = seat_two().await;
    let (mut third, mut rx) = connect(&table.casino);
    third
        .receive(&json!({ "type": "join", "code": table.code }).to_string())
        .await;
    assert_eq!(
        recv(&mut rx).await,
        json!({ "type": "error", "msg": "room is full" })
    );
    assert!(third.seat().is_none());
}

#[tokio::test]
async fn turns_alternate_through_end_turn() {
    let Table {
        mut white,
        mut black,
        ..
    } = seat_two().await;
    for rx in [&mut white.1, &mut black.1] {
        expect(rx, "start").await;
        expect(rx, "toast").await;
    }
    black.0.receive(r#"{"type":"roll"}"#).await;
    white.0.receive(r#"{"type":"roll"}"#).await;
    let rolled = expect(&mut black.1, "rolled").await;
    assert_eq!(rolled["turn"], "white");
    assert_eq!(expect(&mut white.1, "rolled").await, rolled);
    white.0.receive(r#"{"type":"roll"}"#).await;
    white.0.receive(r#"{"type":"endturn"}"#).await;
    let turn = expect(&mut black.1, "turn").await;
    assert_eq!(turn["game"]["turn"], "black");
    assert_eq!(turn["game"]["dice"], json!([]));
    assert_eq!(turn["game"]["rolled"], false);
    assert_eq!(expect(&mut white.1, "turn").await, turn);
}

#[tokio::test]
async fn rematch_waits_for_both_votes() {
    let Table {
        mut white,
        mut black,
        ..
    } = seat_two().await;
    for rx in [&mut white.1, &mut black.1] {
        expect(rx, "start").await;
        expect(rx, "toast").await;
    }
    white.0.receive(r#"{"type":"rematch"}"#).await;
    let ack = expect(&mut white.1, "toast").await;
    assert_eq!(ack["msg"], "Rematch requested...");
    black.0.receive(r#"{"type":"ping"}"#).await;
    expect(&mut black.1, "pong").await;
    black.0.receive(r#"{"type":"rematch"}"#).await;
    let w = expect(&mut white.1, "rematch").await;
    let b = expect(&mut black.1, "rematch").await;
    assert_eq!(w, b);
    assert_eq!(w["game"]["turn"], "white");
}

#[tokio::test]
async fn room_outlives_one_departure_but_not_two() {
    let Table {
        casino,
        code,
        white,
        mut black,
    } = seat_two().await;
    expect(&mut black.1, "start").await;
    expect(&mut black.1, "toast").await;
    let (session, rx) = white;
    drop(rx);
    session.close();
    expect(&mut black.1, "opponent_left").await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(casino.contains(&code).await);
    let (session, rx) = black;
    drop(rx);
    session.close();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!casino.contains(&code).await);
    assert_eq!(casino.sweep().await, 0);
}
