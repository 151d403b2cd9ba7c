//! WebSocket session handler tests.

use super::*;
use crate::domain::EchoResponder;
use crate::inbound::ws;
use crate::inbound::ws::state::WsState;
use actix_web::{App, HttpServer, dev::Server, dev::ServerHandle};
use actix_ws::Item;
use awc::{BoxedSocket, ws::Codec, ws::Frame, ws::Message};
use futures_util::{SinkExt, StreamExt};
use rstest::{fixture, rstest};

type Socket = actix_codec::Framed<BoxedSocket, Codec>;

#[fixture]
async fn start_ws_server() -> (String, Server) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let ws_state = WsState::new(Arc::new(EchoResponder));
    let server = HttpServer::new(move || {
        App::new()
            .app_data(actix_web::web::Data::new(ws_state.clone()))
            .service(ws::ws_entry)
    })
    .listen(listener)
    .expect("bind test server")
    .disable_signals()
    .run();
    (format!("http://{addr}"), server)
}

#[fixture]
async fn ws_client(#[future] start_ws_server: (String, Server)) -> (Socket, ServerHandle) {
    let (url, server) = start_ws_server.await;
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let (_resp, socket) = awc::Client::default()
        .ws(format!("{url}/ws"))
        .connect()
        .await
        .expect("websocket connect");

    (socket, handle)
}

async fn next_text_frame(socket: &mut Socket) -> String {
    loop {
        let frame = socket.next().await.expect("response frame").expect("frame");
        match frame {
            Frame::Text(bytes) => return String::from_utf8(bytes.to_vec()).expect("utf-8 text"),
            Frame::Ping(_) | Frame::Pong(_) => continue,
            other => panic!("expected text frame, got {other:?}"),
        }
    }
}

#[rstest]
#[actix_rt::test]
async fn echoes_ping_with_prefix(#[future] ws_client: (Socket, ServerHandle)) {
    let (mut socket, _server) = ws_client.await;
    socket
        .send(Message::Text("ping".into()))
        .await
        .expect("send text");

    assert_eq!(next_text_frame(&mut socket).await, "Echo: ping");
}

#[rstest]
#[actix_rt::test]
async fn answers_each_frame_once_in_order(#[future] ws_client: (Socket, ServerHandle)) {
    let (mut socket, _server) = ws_client.await;
    for text in ["one", "", "три"] {
        socket
            .send(Message::Text(text.into()))
            .await
            .expect("send text");
    }

    let mut replies = Vec::new();
    for _ in 0..3 {
        replies.push(next_text_frame(&mut socket).await);
    }

    assert_eq!(replies, vec!["Echo: one", "Echo: ", "Echo: три"]);
}

#[rstest]
#[actix_rt::test]
async fn reassembles_fragmented_text_before_replying(#[future] ws_client: (Socket, ServerHandle)) {
    let (mut socket, _server) = ws_client.await;
    let fragments = [
        Item::FirstText("hel".into()),
        Item::Continue("lo wo".into()),
        Item::Last("rld".into()),
    ];
    for fragment in fragments {
        socket
            .send(Message::Continuation(fragment))
            .await
            .expect("send fragment");
    }
    socket
        .send(Message::Text("after".into()))
        .await
        .expect("send text");

    assert_eq!(next_text_frame(&mut socket).await, "Echo: hello world");
    assert_eq!(next_text_frame(&mut socket).await, "Echo: after");
}

#[rstest]
#[actix_rt::test]
async fn echoes_large_text_verbatim(#[future] ws_client: (Socket, ServerHandle)) {
    let (mut socket, _server) = ws_client.await;
    let text = "marketplace ".repeat(2_730);
    socket
        .send(Message::Text(text.clone().into()))
        .await
        .expect("send text");

    assert_eq!(next_text_frame(&mut socket).await, format!("Echo: {text}"));
}

#[rstest]
#[actix_rt::test]
async fn replies_to_client_close(#[future] ws_client: (Socket, ServerHandle)) {
    let (mut socket, _server) = ws_client.await;
    socket
        .send(Message::Close(Some(CloseCode::Normal.into())))
        .await
        .expect("send close");

    loop {
        match socket.next().await.expect("response frame").expect("frame") {
            Frame::Ping(_) | Frame::Pong(_) => continue,
            Frame::Close(reason) => {
                assert_eq!(reason.map(|r| r.code), Some(CloseCode::Normal));
                break;
            }
            other => panic!("expected close frame, got {other:?}"),
        }
    }
}

#[rstest]
#[actix_rt::test]
async fn closes_after_timeout_without_client_messages(#[future] ws_client: (Socket, ServerHandle)) {
    let (mut socket, _server) = ws_client.await;
    tokio::time::sleep(CLIENT_TIMEOUT + HEARTBEAT_INTERVAL * 3).await;

    let reason = tokio::time::timeout(Duration::from_secs(2), async {
        let mut observed = None;
        while let Some(frame) = socket.next().await {
            match frame.expect("frame") {
                Frame::Ping(_) | Frame::Pong(_) => continue,
                Frame::Close(reason) => {
                    observed = reason;
                    break;
                }
                other => panic!("unexpected frame before close: {other:?}"),
            }
        }
        observed
    })
    .await
    .expect("close frame missing within timeout")
    .expect("close frame missing after timeout");

    assert_eq!(reason.code, CloseCode::Normal);
    assert_eq!(reason.description.as_deref(), Some("heartbeat timeout"));
}
