/*
 * transport.rs
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

//! Transport trait: hand a composed message to a delivery backend.

use crate::mail::error::TransportError;
use crate::mail::message::{EmailMessage, Envelope, SentMessage};

/// Transport for sending messages. Implementations must not mutate the message or envelope.
pub trait Transport: Send + Sync {
    /// Send `message` to the envelope recipients. Blocks until the backend has answered.
    fn send(&self, message: &EmailMessage, envelope: &Envelope) -> Result<SentMessage, TransportError>;
}
