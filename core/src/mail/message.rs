/*
 * message.rs
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

//! Outbound message and envelope types.

use std::borrow::Cow;

use crate::mime::ContentDisposition;

/// A single email address. Two addresses are equal when their address strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    address: String,
}

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address)
    }
}

/// Name prefix of metadata headers when they appear in a header block.
pub const METADATA_HEADER_PREFIX: &str = "X-Metadata-";

/// A message header.
///
/// `Metadata` headers carry control values for the transport itself (e.g. `saveToSentItems`)
/// and are never passed on to the recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    Plain { name: String, value: String },
    Metadata { key: String, value: String },
}

impl Header {
    pub fn plain(name: impl Into<String>, value: impl Into<String>) -> Self {
        Header::Plain {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn metadata(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header::Metadata {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Header field name. Metadata headers are named `X-Metadata-<key>`.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Header::Plain { name, .. } => Cow::Borrowed(name),
            Header::Metadata { key, .. } => Cow::Owned(format!("{}{}", METADATA_HEADER_PREFIX, key)),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Header::Plain { value, .. } | Header::Metadata { value, .. } => value,
        }
    }
}

/// Attachment: media type, raw content, and the Content-Disposition it will be sent with.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub media_type: String,
    pub content: Vec<u8>,
    pub disposition: ContentDisposition,
}

impl Attachment {
    /// Regular (downloadable) attachment.
    pub fn new(filename: Option<&str>, media_type: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            media_type: media_type.into(),
            content: content.into(),
            disposition: ContentDisposition::with_filename("attachment", filename),
        }
    }

    /// Inline part, e.g. an image referenced from the HTML body.
    pub fn inline(filename: Option<&str>, media_type: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            media_type: media_type.into(),
            content: content.into(),
            disposition: ContentDisposition::with_filename("inline", filename),
        }
    }

    /// Filename declared by the Content-Disposition `filename` parameter.
    pub fn filename(&self) -> Option<&str> {
        self.disposition.get_parameter("filename")
    }
}

/// A composed message ready to be handed to a transport.
#[derive(Debug, Clone, Default)]
pub struct EmailMessage {
    pub from: Vec<Address>,
    /// Explicit Sender header; takes precedence over `from` when deriving an envelope.
    pub sender: Option<Address>,
    pub to: Vec<Address>,
    pub cc: Vec<Address>,
    pub bcc: Vec<Address>,
    pub reply_to: Vec<Address>,
    pub subject: Option<String>,
    pub html_body: Option<String>,
    pub text_body: Option<String>,
    pub headers: Vec<Header>,
    pub attachments: Vec<Attachment>,
}

/// Transport-level sender and recipients. Recipients may also appear in the message's CC/BCC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub sender: Address,
    pub recipients: Vec<Address>,
}

impl Envelope {
    pub fn new(sender: Address, recipients: Vec<Address>) -> Self {
        Self { sender, recipients }
    }

    /// Envelope implied by the message headers: sender (or first From), and To + CC + BCC.
    pub fn from_message(message: &EmailMessage) -> Option<Self> {
        let sender = message
            .sender
            .as_ref()
            .or_else(|| message.from.first())?
            .clone();
        let recipients = message
            .to
            .iter()
            .chain(&message.cc)
            .chain(&message.bcc)
            .cloned()
            .collect();
        Some(Self { sender, recipients })
    }
}

/// Result of a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub sender: Address,
    /// Primary recipients the message was addressed to.
    pub recipients: Vec<Address>,
    /// Request identifier reported by the sending API, if any.
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_equality_is_by_value() {
        assert_eq!(Address::new("a@example.com"), Address::from("a@example.com"));
        assert_ne!(Address::new("a@example.com"), Address::new("A@example.com"));
    }

    #[test]
    fn metadata_header_name() {
        let h = Header::metadata("saveToSentItems", "true");
        assert_eq!(h.name(), "X-Metadata-saveToSentItems");
        assert_eq!(h.value(), "true");
        assert_eq!(Header::plain("X-Custom", "v").name(), "X-Custom");
    }

    #[test]
    fn attachment_filename_from_disposition() {
        let a = Attachment::inline(Some("logo.png"), "image/png", vec![1, 2, 3]);
        assert_eq!(a.filename(), Some("logo.png"));
        assert_eq!(a.disposition.get_disposition_type(), "inline");
        let b = Attachment::new(None, "application/octet-stream", Vec::new());
        assert_eq!(b.filename(), None);
        assert_eq!(b.disposition.get_disposition_type(), "attachment");
    }

    #[test]
    fn envelope_prefers_explicit_sender() {
        let message = EmailMessage {
            from: vec![Address::new("from@example.com")],
            sender: Some(Address::new("sender@example.com")),
            to: vec![Address::new("to@example.com")],
            cc: vec![Address::new("cc@example.com")],
            bcc: vec![Address::new("bcc@example.com")],
            ..Default::default()
        };
        let envelope = Envelope::from_message(&message).unwrap();
        assert_eq!(envelope.sender.as_str(), "sender@example.com");
        let recipients: Vec<&str> = envelope.recipients.iter().map(Address::as_str).collect();
        assert_eq!(recipients, ["to@example.com", "cc@example.com", "bcc@example.com"]);
    }

    #[test]
    fn envelope_falls_back_to_first_from() {
        let message = EmailMessage {
            from: vec![Address::new("first@example.com"), Address::new("second@example.com")],
            ..Default::default()
        };
        let envelope = Envelope::from_message(&message).unwrap();
        assert_eq!(envelope.sender.as_str(), "first@example.com");
        assert!(envelope.recipients.is_empty());
    }

    #[test]
    fn envelope_needs_a_sender() {
        assert!(Envelope::from_message(&EmailMessage::default()).is_none());
    }
}
