/*
 * sender.rs
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

//! Collaborator that performs the sendMail request.

use crate::mail::TransportError;

use super::payload::Payload;

/// Performs `POST /users/{sender}/sendMail` with an already assembled payload.
///
/// Implementations own the HTTP client and token acquisition. Failures are reported as
/// `TransportError::RequestFailed` and are passed through to the caller untouched.
pub trait GraphMailSender: Send + Sync {
    /// Returns the request id reported by the service, if any.
    fn send_mail(&self, sender_address: &str, payload: &Payload) -> Result<Option<String>, TransportError>;
}

impl<S: GraphMailSender + ?Sized> GraphMailSender for Box<S> {
    fn send_mail(&self, sender_address: &str, payload: &Payload) -> Result<Option<String>, TransportError> {
        (**self).send_mail(sender_address, payload)
    }
}

impl<S: GraphMailSender + ?Sized> GraphMailSender for std::sync::Arc<S> {
    fn send_mail(&self, sender_address: &str, payload: &Payload) -> Result<Option<String>, TransportError> {
        (**self).send_mail(sender_address, payload)
    }
}
