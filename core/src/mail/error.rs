/*
 * error.rs
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

//! Transport errors.

use std::fmt;

/// Errors surfaced by a transport or its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The sending API did not accept the request. Carries whatever detail the sender provides.
    RequestFailed {
        status: Option<u16>,
        message: String,
    },
    /// Configuration could not be read, parsed or written.
    Config(String),
}

impl TransportError {
    pub fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::RequestFailed {
                status: Some(code),
                message,
            } => write!(f, "request failed ({}): {}", code, message),
            TransportError::RequestFailed { status: None, message } => {
                write!(f, "request failed: {}", message)
            }
            TransportError::Config(m) => write!(f, "configuration error: {}", m),
        }
    }
}

impl std::error::Error for TransportError {}
