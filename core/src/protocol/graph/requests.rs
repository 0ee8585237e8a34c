/*
 * requests.rs
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

//! JSON request body builder for the Microsoft Graph sendMail call.
//! Bodies are generated with `JsonWriter`.

use crate::json::JsonWriter;

use super::payload::{FileAttachment, InternetMessageHeader, Payload, Recipient};

/// OData type tag for file attachments.
pub const FILE_ATTACHMENT_TYPE: &str = "#microsoft.graph.fileAttachment";

/// Build the JSON body for `POST /users/{id}/sendMail`.
pub fn build_send_mail_body(payload: &Payload) -> Vec<u8> {
    let message = &payload.message;
    let mut w = JsonWriter::new();
    w.write_start_object();

    w.write_key("message");
    w.write_start_object();

    w.write_key("subject");
    w.write_string(&message.subject);

    w.write_key("body");
    w.write_start_object();
    w.write_key("contentType");
    w.write_string(message.body.content_type.as_str());
    w.write_key("content");
    w.write_string(&message.body.content);
    w.write_end_object();

    w.write_key("toRecipients");
    write_recipient_array(&mut w, &message.to_recipients);
    w.write_key("ccRecipients");
    write_recipient_array(&mut w, &message.cc_recipients);
    w.write_key("bccRecipients");
    write_recipient_array(&mut w, &message.bcc_recipients);
    w.write_key("replyTo");
    write_recipient_array(&mut w, &message.reply_to);

    w.write_key("sender");
    write_recipient(&mut w, &message.sender);

    w.write_key("attachments");
    w.write_start_array();
    for att in &message.attachments {
        write_attachment(&mut w, att);
    }
    w.write_end_array();

    if let Some(headers) = &message.internet_message_headers {
        w.write_key("internetMessageHeaders");
        write_headers(&mut w, headers);
    }

    w.write_end_object(); // end message

    w.write_key("saveToSentItems");
    w.write_bool(payload.save_to_sent_items);

    w.write_end_object(); // end root
    w.take_buffer().to_vec()
}

// ── Helpers ───────────────────────────────────────────────────────────

fn write_recipient_array(w: &mut JsonWriter, recipients: &[Recipient]) {
    w.write_start_array();
    for r in recipients {
        write_recipient(w, r);
    }
    w.write_end_array();
}

fn write_recipient(w: &mut JsonWriter, recipient: &Recipient) {
    w.write_start_object();
    w.write_key("emailAddress");
    w.write_start_object();
    w.write_key("address");
    w.write_string(&recipient.email_address.address);
    w.write_end_object();
    w.write_end_object();
}

fn write_attachment(w: &mut JsonWriter, att: &FileAttachment) {
    w.write_start_object();
    w.write_key("@odata.type");
    w.write_string(FILE_ATTACHMENT_TYPE);
    w.write_key("name");
    w.write_optional_string(att.name.as_deref());
    w.write_key("contentType");
    w.write_string(&att.content_type);
    w.write_key("contentBytes");
    w.write_string(&att.content_bytes);
    w.write_key("contentId");
    w.write_optional_string(att.content_id.as_deref());
    w.write_key("isInline");
    w.write_bool(att.is_inline);
    w.write_end_object();
}

fn write_headers(w: &mut JsonWriter, headers: &[InternetMessageHeader]) {
    w.write_start_array();
    for h in headers {
        w.write_start_object();
        w.write_key("name");
        w.write_string(&h.name);
        w.write_key("value");
        w.write_string(&h.value);
        w.write_end_object();
    }
    w.write_end_array();
}
