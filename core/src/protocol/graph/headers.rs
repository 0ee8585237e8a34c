/*
 * headers.rs
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

//! Custom header forwarding and metadata control flags.

use crate::mail::Header;

use super::payload::InternetMessageHeader;

/// Only headers whose name starts with this prefix are forwarded to Graph.
pub const FORWARD_PREFIX: &str = "X-";

/// Metadata key that overrides the configured save-to-sent-items behaviour.
pub const SAVE_TO_SENT_ITEMS_KEY: &str = "saveToSentItems";

/// Custom headers to forward as `internetMessageHeaders`, or `None` when there are none.
///
/// Metadata headers are never forwarded, whatever their name.
pub fn internet_message_headers(headers: &[Header]) -> Option<Vec<InternetMessageHeader>> {
    let forwarded: Vec<InternetMessageHeader> = headers
        .iter()
        .filter_map(|header| match header {
            Header::Plain { name, value } if name.starts_with(FORWARD_PREFIX) => {
                Some(InternetMessageHeader {
                    name: name.clone(),
                    value: value.clone(),
                })
            }
            _ => None,
        })
        .collect();
    if forwarded.is_empty() {
        None
    } else {
        Some(forwarded)
    }
}

/// Value of the first `saveToSentItems` metadata header, else `default`.
pub fn save_to_sent_items(headers: &[Header], default: bool) -> bool {
    metadata_flag(headers, SAVE_TO_SENT_ITEMS_KEY).unwrap_or(default)
}

/// Parse the first metadata header with `key`; later headers with the same key are ignored.
pub fn metadata_flag(headers: &[Header], key: &str) -> Option<bool> {
    headers.iter().find_map(|header| match header {
        Header::Metadata { key: k, value } if k == key => Some(parse_bool(value)),
        _ => None,
    })
}

/// Permissive boolean: "1", "true", "on", "yes" (any case, surrounding whitespace ignored) are
/// true; anything else is false.
pub fn parse_bool(value: &str) -> bool {
    let v = value.trim();
    ["1", "true", "on", "yes"].iter().any(|t| v.eq_ignore_ascii_case(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_prefixed_plain_headers_only() {
        let headers = vec![
            Header::plain("X-Custom", "v"),
            Header::plain("Subject", "s"),
            Header::metadata("saveToSentItems", "true"),
        ];
        let forwarded = internet_message_headers(&headers).unwrap();
        assert_eq!(
            forwarded,
            vec![InternetMessageHeader {
                name: "X-Custom".to_string(),
                value: "v".to_string(),
            }]
        );
    }

    #[test]
    fn prefix_is_case_sensitive_and_order_kept() {
        let headers = vec![
            Header::plain("X-B", "2"),
            Header::plain("x-lower", "no"),
            Header::plain("X-A", "1"),
        ];
        let names: Vec<String> = internet_message_headers(&headers)
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, ["X-B", "X-A"]);
    }

    #[test]
    fn nothing_to_forward() {
        assert!(internet_message_headers(&[]).is_none());
        let headers = vec![Header::plain("Subject", "s"), Header::metadata("tag", "x")];
        assert!(internet_message_headers(&headers).is_none());
    }

    #[test]
    fn flag_from_metadata() {
        let headers = vec![Header::metadata("saveToSentItems", "1")];
        assert!(save_to_sent_items(&headers, false));
        let headers = vec![Header::metadata("saveToSentItems", "off")];
        assert!(!save_to_sent_items(&headers, true));
    }

    #[test]
    fn flag_default_when_missing() {
        assert!(!save_to_sent_items(&[], false));
        assert!(save_to_sent_items(&[], true));
        // plain header with the same name is not a metadata header
        let headers = vec![Header::plain("saveToSentItems", "true")];
        assert!(!save_to_sent_items(&headers, false));
    }

    #[test]
    fn first_metadata_header_wins() {
        let headers = vec![
            Header::metadata("other", "yes"),
            Header::metadata("saveToSentItems", "no"),
            Header::metadata("saveToSentItems", "yes"),
        ];
        assert!(!save_to_sent_items(&headers, true));
    }

    #[test]
    fn permissive_bool() {
        for t in ["1", "true", "TRUE", "On", "yes", " yes "] {
            assert!(parse_bool(t), "{t}");
        }
        for f in ["0", "false", "off", "no", "", "maybe", "2"] {
            assert!(!parse_bool(f), "{f}");
        }
    }
}
