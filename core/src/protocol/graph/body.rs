/*
 * body.rs
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

//! Message body selection (HTML or plain text).

use super::payload::{BodyType, ItemBody};

/// Choose the sendMail body.
///
/// The content type is HTML whenever an HTML body is present, even an empty one. The content
/// falls back to the plain-text body when the HTML body is empty, so an empty HTML body with a
/// text body yields HTML content type carrying the plain text.
pub fn select_body(html: Option<&str>, text: Option<&str>) -> ItemBody {
    let content_type = match html {
        Some(_) => BodyType::Html,
        None => BodyType::Text,
    };
    let content = match html {
        Some(h) if !h.is_empty() => h,
        _ => text.unwrap_or(""),
    };
    ItemBody {
        content_type,
        content: content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_preferred() {
        let body = select_body(Some("<p>Hi</p>"), Some("Hi"));
        assert_eq!(body.content_type, BodyType::Html);
        assert_eq!(body.content, "<p>Hi</p>");
    }

    #[test]
    fn empty_html_keeps_html_type_with_text_content() {
        let body = select_body(Some(""), Some("Hi"));
        assert_eq!(body.content_type, BodyType::Html);
        assert_eq!(body.content, "Hi");
    }

    #[test]
    fn text_only() {
        let body = select_body(None, Some("Hi"));
        assert_eq!(body.content_type, BodyType::Text);
        assert_eq!(body.content, "Hi");
    }

    #[test]
    fn no_body() {
        let body = select_body(None, None);
        assert_eq!(body.content_type, BodyType::Text);
        assert_eq!(body.content, "");
        let body = select_body(Some(""), None);
        assert_eq!(body.content_type, BodyType::Html);
        assert_eq!(body.content, "");
    }
}
