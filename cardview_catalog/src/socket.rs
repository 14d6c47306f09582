// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broadcast messages between clients.
//!
//! Messages travel as JSON on the [`SOCKET_NAME`] channel, shaped
//! `{ "command": <name>, "data": <payload> }`:
//!
//! ```
//! use cardview_catalog::socket::SocketMessage;
//!
//! let msg = SocketMessage::ShowCard { card: "c1".into(), pile: "p1".into() };
//! assert_eq!(
//!     serde_json::to_string(&msg).unwrap(),
//!     r#"{"command":"showCard","data":{"card":"c1","pile":"p1"}}"#,
//! );
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Channel all messages are emitted on.
pub const SOCKET_NAME: &str = "module.monarch";

/// A message exchanged between clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "camelCase")]
pub enum SocketMessage {
    /// Show a card to every connected user.
    ShowCard {
        /// Id of the card.
        card: String,
        /// Id of the collection the card came from.
        pile: String,
    },
}

/// Errors from encoding or routing socket messages.
#[derive(Debug, thiserror::Error)]
pub enum SocketError {
    /// The payload is not valid JSON or does not match the command's shape.
    #[error("malformed socket message: {0}")]
    Malformed(#[from] serde_json::Error),
    /// No handler exists for the command.
    #[error("unknown socket command `{0}`")]
    UnknownCommand(String),
}

/// Outbound transport.
pub trait Socket {
    /// Send an encoded payload on `channel`.
    fn emit(&self, channel: &str, payload: &str);
}

/// A socket that discards everything, for hosts without networking.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSocket;

impl Socket for NullSocket {
    fn emit(&self, _channel: &str, _payload: &str) {}
}

/// Encode `message` and emit it on [`SOCKET_NAME`].
pub fn send(socket: &dyn Socket, message: &SocketMessage) -> Result<(), SocketError> {
    let payload = serde_json::to_string(message)?;
    tracing::debug!(target: "cardview::socket", %payload, "emit");
    socket.emit(SOCKET_NAME, &payload);
    Ok(())
}

/// Receives inbound messages, one method per command.
pub trait SocketHandler {
    /// Display card `card` from collection `pile`.
    fn show_card(&self, card: &str, pile: &str);
}

/// Decode an inbound payload and route it to `handler`.
pub fn dispatch_json<H: SocketHandler + ?Sized>(
    payload: &str,
    handler: &H,
) -> Result<(), SocketError> {
    #[derive(Deserialize)]
    struct Envelope {
        command: String,
    }

    let value: Value = serde_json::from_str(payload)?;
    let Envelope { command } = Envelope::deserialize(&value)?;
    let message = match command.as_str() {
        "showCard" => SocketMessage::deserialize(value)?,
        _ => return Err(SocketError::UnknownCommand(command)),
    };
    match message {
        SocketMessage::ShowCard { card, pile } => handler.show_card(&card, &pile),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(String, String)>>);

    impl Socket for Recorder {
        fn emit(&self, channel: &str, payload: &str) {
            self.0.borrow_mut().push((channel.into(), payload.into()));
        }
    }

    impl SocketHandler for Recorder {
        fn show_card(&self, card: &str, pile: &str) {
            self.0.borrow_mut().push((card.into(), pile.into()));
        }
    }

    #[test]
    fn send_emits_on_module_channel() {
        let socket = Recorder::default();
        send(
            &socket,
            &SocketMessage::ShowCard {
                card: "c".into(),
                pile: "p".into(),
            },
        )
        .unwrap();
        let sent = socket.0.into_inner();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "module.monarch");
        let back: SocketMessage = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(
            back,
            SocketMessage::ShowCard {
                card: "c".into(),
                pile: "p".into()
            }
        );
    }

    #[test]
    fn dispatch_routes_show_card() {
        let handler = Recorder::default();
        dispatch_json(
            r#"{"command":"showCard","data":{"card":"c9","pile":"deck"}}"#,
            &handler,
        )
        .unwrap();
        assert_eq!(
            handler.0.into_inner(),
            [("c9".to_owned(), "deck".to_owned())]
        );
    }

    #[test]
    fn dispatch_rejects_unknown_and_malformed() {
        let handler = Recorder::default();
        let err = dispatch_json(r#"{"command":"explode","data":{}}"#, &handler).unwrap_err();
        assert!(matches!(err, SocketError::UnknownCommand(c) if c == "explode"));

        let err = dispatch_json(r#"{"command":"showCard","data":{"card":1}}"#, &handler)
            .unwrap_err();
        assert!(matches!(err, SocketError::Malformed(_)));

        assert!(dispatch_json("not json", &handler).is_err());
        assert!(handler.0.borrow().is_empty());
    }
}
