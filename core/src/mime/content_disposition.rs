/*
 * content_disposition.rs
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

//! Content-Disposition header (RFC 2183).

use std::collections::HashMap;

use super::parameter::{parse_parameter_list, Parameter};
use super::utils::is_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDisposition {
    disposition_type: String,
    parameter_map: HashMap<String, String>,
}

impl ContentDisposition {
    pub fn new(disposition_type: impl Into<String>, parameters: Option<Vec<Parameter>>) -> Self {
        let disposition_type = disposition_type.into();
        let parameter_map = parameters
            .map(|p| {
                p.into_iter()
                    .map(|param| (param.get_name().to_lowercase(), param.get_value().to_string()))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            disposition_type,
            parameter_map,
        }
    }

    /// Disposition with an optional `filename` parameter.
    pub fn with_filename(disposition_type: impl Into<String>, filename: Option<&str>) -> Self {
        let parameters = filename.map(|f| vec![Parameter::new("filename", f)]);
        Self::new(disposition_type, parameters)
    }

    pub fn get_disposition_type(&self) -> &str {
        &self.disposition_type
    }

    pub fn is_disposition_type(&self, t: &str) -> bool {
        self.disposition_type.eq_ignore_ascii_case(t)
    }

    pub fn get_parameter(&self, name: &str) -> Option<&str> {
        self.parameter_map.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameter_map.contains_key(&name.to_lowercase())
    }
}

pub fn parse_content_disposition(value: &str) -> Option<ContentDisposition> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let (disp_part, params_part) = match value.find(';') {
        Some(i) => {
            let (a, b) = value.split_at(i);
            (a.trim(), b[1..].trim())
        }
        None => (value, ""),
    };
    if !is_token(disp_part) {
        return None;
    }
    let parameters = parse_parameter_list(params_part);
    Some(ContentDisposition::new(disp_part, parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_with_filename() {
        let cd = parse_content_disposition("inline; filename=logo.png").unwrap();
        assert_eq!(cd.get_disposition_type(), "inline");
        assert_eq!(cd.get_parameter("filename"), Some("logo.png"));
        assert_eq!(cd.get_parameter("FILENAME"), Some("logo.png"));
    }

    #[test]
    fn type_case_is_preserved() {
        let cd = parse_content_disposition("Attachment").unwrap();
        assert_eq!(cd.get_disposition_type(), "Attachment");
        assert!(cd.is_disposition_type("attachment"));
        assert!(!cd.has_parameter("filename"));
    }

    #[test]
    fn rejects_invalid_type() {
        assert!(parse_content_disposition("").is_none());
        assert!(parse_content_disposition("in line; filename=a").is_none());
    }

    #[test]
    fn with_filename_matches_parsed() {
        let built = ContentDisposition::with_filename("attachment", Some("a.txt"));
        let parsed = parse_content_disposition("attachment; filename=\"a.txt\"").unwrap();
        assert_eq!(built, parsed);
    }
}
