/*
 * uri.rs
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

//! Transport identifiers and Graph resource paths. Mailbox addresses are percent-encoded
//! when used as a path segment or userinfo.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Path segment safe set: encode / ? # [ ] @ and space, %, etc.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'@')
    .add(b'%')
    .add(b' ');

/// Userinfo in authority: encode @ and other reserved so one @ separates userinfo from host.
const USERINFO: &AsciiSet = &CONTROLS.add(b'@').add(b':').add(b'%').add(b'/').add(b'?').add(b'#').add(b'[').add(b']');

/// Identifier of the Graph mail transport.
pub const GRAPH_TRANSPORT_URI: &str = "microsoft+graph+api://";

/// Default Graph API base URL.
pub const GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Graph transport URI bound to one mailbox. Format: microsoft+graph+api://email
pub fn graph_transport_uri(email: &str) -> String {
    let userinfo = utf8_percent_encode(email, USERINFO).to_string();
    format!("{}{}", GRAPH_TRANSPORT_URI, userinfo)
}

/// Percent-encode a mailbox address for use as a path segment.
pub fn encode_mailbox(address: &str) -> String {
    utf8_percent_encode(address, PATH_SEGMENT).to_string()
}

/// sendMail resource path for `sender`: /users/{sender}/sendMail
pub fn send_mail_path(sender: &str) -> String {
    format!("/users/{}/sendMail", encode_mailbox(sender))
}

/// Absolute sendMail URL under `base_url` (no trailing slash expected, one is tolerated).
pub fn send_mail_url(base_url: &str, sender: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), send_mail_path(sender))
}
