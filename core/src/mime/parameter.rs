/*
 * parameter.rs
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

//! MIME header parameters (RFC 2045 `name=value` pairs).

use super::utils::is_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_value(&self) -> &str {
        &self.value
    }
}

/// Parse semicolon-separated parameter list (name=value; name="value").
pub fn parse_parameter_list(params_part: &str) -> Option<Vec<Parameter>> {
    let params_part = params_part.trim();
    if params_part.is_empty() {
        return None;
    }
    let mut parameters = Vec::new();
    let mut pos = 0;
    let bytes = params_part.as_bytes();
    let len = bytes.len();

    while pos < len {
        while pos < len && (bytes[pos] == b';' || bytes[pos].is_ascii_whitespace()) {
            pos += 1;
        }
        if pos >= len {
            break;
        }
        let eq = match bytes[pos..].iter().position(|&b| b == b'=') {
            Some(i) => pos + i,
            None => break,
        };
        let name = std::str::from_utf8(&bytes[pos..eq]).ok()?.trim();
        if !is_token(name) {
            match bytes[pos..].iter().position(|&b| b == b';') {
                Some(semi) => {
                    pos += semi + 1;
                    continue;
                }
                None => break,
            }
        }
        pos = eq + 1;
        let value = if pos < len && bytes[pos] == b'"' {
            pos += 1;
            let mut v = Vec::new();
            while pos < len {
                let c = bytes[pos];
                if c == b'\\' && pos + 1 < len {
                    v.push(bytes[pos + 1]);
                    pos += 2;
                } else if c == b'"' {
                    pos += 1;
                    break;
                } else {
                    v.push(c);
                    pos += 1;
                }
            }
            String::from_utf8_lossy(&v).into_owned()
        } else {
            let end = bytes[pos..].iter().position(|&b| b == b';').map(|i| pos + i).unwrap_or(len);
            let v = std::str::from_utf8(&bytes[pos..end]).ok()?.trim();
            pos = end;
            if !is_token(v) {
                continue;
            }
            v.to_string()
        };
        parameters.push(Parameter::new(name, value));
    }
    if parameters.is_empty() {
        None
    } else {
        Some(parameters)
    }
}
