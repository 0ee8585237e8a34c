/*
 * payload.rs
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

//! sendMail payload types and assembly.
//!
//! Field names follow the Graph resources they serialize to (`message`, `itemBody`,
//! `recipient`, `fileAttachment`, `internetMessageHeader`); see `requests.rs` for the wire form.

use crate::config::GraphMailConfig;
use crate::mail::{EmailMessage, Envelope};

use super::attachments::encode_attachments;
use super::body::select_body;
use super::headers::{internet_message_headers, save_to_sent_items};
use super::recipients::{map_address, map_addresses, resolve_recipients};

/// Body of `POST /users/{id}/sendMail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub message: GraphMessage,
    pub save_to_sent_items: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphMessage {
    pub subject: String,
    pub body: ItemBody,
    pub to_recipients: Vec<Recipient>,
    pub cc_recipients: Vec<Recipient>,
    pub bcc_recipients: Vec<Recipient>,
    pub reply_to: Vec<Recipient>,
    pub sender: Recipient,
    pub attachments: Vec<FileAttachment>,
    /// Omitted from the request when `None`.
    pub internet_message_headers: Option<Vec<InternetMessageHeader>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Html,
    Text,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Html => "HTML",
            BodyType::Text => "Text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBody {
    pub content_type: BodyType,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub email_address: EmailAddress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    pub address: String,
}

/// `#microsoft.graph.fileAttachment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub name: Option<String>,
    pub content_type: String,
    /// Base64 of the attachment content.
    pub content_bytes: String,
    pub content_id: Option<String>,
    pub is_inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternetMessageHeader {
    pub name: String,
    pub value: String,
}

/// Build the sendMail payload for `message` as delivered to `envelope`.
///
/// Only the To list is filtered; CC, BCC and reply-to are copied from the message as declared.
pub fn assemble_payload(message: &EmailMessage, envelope: &Envelope, config: &GraphMailConfig) -> Payload {
    let to = resolve_recipients(&envelope.recipients, &message.cc, &message.bcc);
    Payload {
        message: GraphMessage {
            subject: message.subject.clone().unwrap_or_default(),
            body: select_body(message.html_body.as_deref(), message.text_body.as_deref()),
            to_recipients: map_addresses(&to),
            cc_recipients: map_addresses(&message.cc),
            bcc_recipients: map_addresses(&message.bcc),
            reply_to: map_addresses(&message.reply_to),
            sender: map_address(&envelope.sender),
            attachments: encode_attachments(&message.attachments),
            internet_message_headers: internet_message_headers(&message.headers),
        },
        save_to_sent_items: save_to_sent_items(&message.headers, config.save_to_sent_items),
    }
}
