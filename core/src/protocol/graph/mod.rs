/*
 * mod.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Graphmail, a Microsoft Graph mail transport.
 *
 * Graphmail is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Graphmail is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Graphmail.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Microsoft Graph mail transport: GraphTransport (Transport).
//!
//! Converts a composed message into a `sendMail` payload and hands it to a
//! [`GraphMailSender`], which owns the HTTP request and the OAuth2 bearer token.
//!
//! Payload assembly is split by concern:
//! - `recipients`: primary recipient resolution and address mapping
//! - `body`: HTML / plain-text selection
//! - `attachments`: base64 file attachments with inline detection
//! - `headers`: forwarded `X-` headers and metadata control flags
//! - `payload`: payload types and assembly
//! - `requests`: JSON request body built with `JsonWriter`

pub mod attachments;
pub mod body;
pub mod headers;
pub mod payload;
pub mod recipients;
pub mod requests;
pub mod sender;

use std::fmt;

use crate::config::GraphMailConfig;
use crate::mail::{EmailMessage, Envelope, SentMessage, Transport, TransportError};

pub use payload::{assemble_payload, Payload};
pub use requests::build_send_mail_body;
pub use sender::GraphMailSender;

use recipients::resolve_recipients;

// ── GraphTransport ────────────────────────────────────────────────────

/// Microsoft Graph mail transport. Sends messages via `POST /users/{sender}/sendMail`.
pub struct GraphTransport<S> {
    sender: S,
    config: GraphMailConfig,
}

impl<S: GraphMailSender> GraphTransport<S> {
    pub fn new(sender: S, config: GraphMailConfig) -> Self {
        Self { sender, config }
    }

    pub fn config(&self) -> &GraphMailConfig {
        &self.config
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Payload that `send` would hand to the sender.
    pub fn build_payload(&self, message: &EmailMessage, envelope: &Envelope) -> Payload {
        assemble_payload(message, envelope, &self.config)
    }
}

impl<S> fmt::Display for GraphTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::uri::GRAPH_TRANSPORT_URI)
    }
}

impl<S: GraphMailSender> Transport for GraphTransport<S> {
    fn send(&self, message: &EmailMessage, envelope: &Envelope) -> Result<SentMessage, TransportError> {
        let payload = self.build_payload(message, envelope);
        let from = envelope.sender.as_str();
        log::debug!(
            "[graph] sendMail from {}: {} to, {} cc, {} bcc, {} attachment(s)",
            from,
            payload.message.to_recipients.len(),
            payload.message.cc_recipients.len(),
            payload.message.bcc_recipients.len(),
            payload.message.attachments.len()
        );
        let request_id = self.sender.send_mail(from, &payload).map_err(|e| {
            log::warn!("[graph] sendMail from {} failed: {}", from, e);
            e
        })?;
        Ok(SentMessage {
            sender: envelope.sender.clone(),
            recipients: resolve_recipients(&envelope.recipients, &message.cc, &message.bcc),
            request_id,
        })
    }
}
