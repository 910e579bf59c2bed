use crate::state::{AppState, FeedEvent};
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};

/// WebSocket handler for the live sentiment feed
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();

    // Subscribe before the snapshot so no batch slips between them
    let mut events = state.event_bus.subscribe();

    // Send the current result set so new clients start in sync
    let initial = FeedEvent::ResultsReplaced {
        results: state.current_results(),
    };
    if let Ok(msg) = serde_json::to_string(&initial) {
        let _ = sender.send(Message::Text(msg)).await;
    }

    // Event forwarding task
    let send_task = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match serde_json::to_string(&event) {
                Ok(msg) => {
                    if sender.send(Message::Text(msg)).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize event: {}", e);
                }
            }
        }
    });

    // Receive task (handle client close/pings)
    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Close(_) => break,
                Message::Ping(data) => {
                    // Pong is handled automatically by axum
                    tracing::trace!("Received ping: {:?}", data);
                }
                Message::Text(text) => {
                    tracing::trace!("Received message: {}", text);
                }
                _ => {}
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = send_task => {
            tracing::debug!("Send task completed");
        }
        _ = recv_task => {
            tracing::debug!("Receive task completed");
        }
    }
}
