/*
 * attachments.rs
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

//! File attachment encoding for sendMail.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::mail::Attachment;

use super::payload::FileAttachment;

/// Encode attachments in order. The filename doubles as content id so inline parts can be
/// referenced as `cid:<filename>`; the HTML body is not rewritten.
pub fn encode_attachments(attachments: &[Attachment]) -> Vec<FileAttachment> {
    attachments.iter().map(encode_attachment).collect()
}

pub fn encode_attachment(attachment: &Attachment) -> FileAttachment {
    let filename = attachment.filename().map(str::to_string);
    FileAttachment {
        name: filename.clone(),
        content_type: attachment.media_type.clone(),
        content_bytes: BASE64.encode(&attachment.content),
        content_id: filename,
        is_inline: attachment.disposition.get_disposition_type() == "inline",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mime::parse_content_disposition;

    #[test]
    fn inline_image() {
        let a = Attachment::inline(Some("logo.png"), "image/png", b"\x89PNG".to_vec());
        let f = encode_attachment(&a);
        assert_eq!(f.name.as_deref(), Some("logo.png"));
        assert_eq!(f.content_id.as_deref(), Some("logo.png"));
        assert_eq!(f.content_type, "image/png");
        assert_eq!(f.content_bytes, "iVBORw==");
        assert!(f.is_inline);
    }

    #[test]
    fn regular_attachment_without_filename() {
        let a = Attachment::new(None, "text/plain", b"hello".to_vec());
        let f = encode_attachment(&a);
        assert_eq!(f.name, None);
        assert_eq!(f.content_id, None);
        assert_eq!(f.content_bytes, "aGVsbG8=");
        assert!(!f.is_inline);
    }

    #[test]
    fn inline_match_is_exact() {
        let a = Attachment {
            media_type: "image/gif".to_string(),
            content: Vec::new(),
            disposition: parse_content_disposition("Inline; filename=a.gif").unwrap(),
        };
        let f = encode_attachment(&a);
        assert!(!f.is_inline);
        assert_eq!(f.content_bytes, "");
    }

    #[test]
    fn order_preserved() {
        let list = vec![
            Attachment::new(Some("b.txt"), "text/plain", b"b".to_vec()),
            Attachment::new(Some("a.txt"), "text/plain", b"a".to_vec()),
            Attachment::new(Some("b.txt"), "text/plain", b"b".to_vec()),
        ];
        let names: Vec<Option<String>> = encode_attachments(&list).into_iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![Some("b.txt".to_string()), Some("a.txt".to_string()), Some("b.txt".to_string())]
        );
    }
}
