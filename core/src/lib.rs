/*
 * lib.rs
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

//! Graphmail core: turns composed email messages into Microsoft Graph `sendMail` requests.
//!
//! The transformation is pure and synchronous; network delivery is delegated to a
//! [`protocol::graph::GraphMailSender`] supplied by the caller.

pub mod config;
pub mod json;
pub mod mail;
pub mod mime;
pub mod protocol;
pub mod uri;

pub use config::GraphMailConfig;
pub use mail::{
    Address, Attachment, EmailMessage, Envelope, Header, SentMessage, Transport, TransportError,
};
pub use protocol::graph::{GraphMailSender, GraphTransport, Payload};
