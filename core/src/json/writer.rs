/*
 * writer.rs
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

//! Streaming JSON writer: build JSON via write_* methods, output in a BytesMut (bytes crate).

use bytes::{BufMut, BytesMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,        // before first value
    AfterValue,  // after a value, next may be comma
    AfterKey,    // after key, value follows directly
    InArray,
    InObject,
}

/// Compact JSON writer that appends to a BytesMut.
pub struct JsonWriter {
    buf: BytesMut,
    state: State,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            state: State::Init,
        }
    }

    pub fn buffer(&self) -> &BytesMut {
        &self.buf
    }

    /// Take the buffer, leaving the writer with an empty buffer (for reuse).
    pub fn take_buffer(&mut self) -> BytesMut {
        self.state = State::Init;
        std::mem::take(&mut self.buf)
    }

    fn value_separator(&mut self) {
        if self.state == State::AfterValue {
            self.buf.put_u8(b',');
        }
    }

    pub fn write_start_object(&mut self) {
        self.value_separator();
        self.buf.put_u8(b'{');
        self.state = State::InObject;
    }

    pub fn write_end_object(&mut self) {
        self.buf.put_u8(b'}');
        self.state = State::AfterValue;
    }

    pub fn write_start_array(&mut self) {
        self.value_separator();
        self.buf.put_u8(b'[');
        self.state = State::InArray;
    }

    pub fn write_end_array(&mut self) {
        self.buf.put_u8(b']');
        self.state = State::AfterValue;
    }

    pub fn write_key(&mut self, key: &str) {
        self.value_separator();
        write_escaped_string(&mut self.buf, key);
        self.buf.put_u8(b':');
        self.state = State::AfterKey;
    }

    pub fn write_string(&mut self, value: &str) {
        self.value_separator();
        write_escaped_string(&mut self.buf, value);
        self.state = State::AfterValue;
    }

    /// Write `value` as a string, or `null` when absent.
    pub fn write_optional_string(&mut self, value: Option<&str>) {
        match value {
            Some(v) => self.write_string(v),
            None => self.write_null(),
        }
    }

    pub fn write_bool(&mut self, value: bool) {
        self.value_separator();
        self.buf.put_slice(if value {
            b"true"
        } else {
            b"false"
        });
        self.state = State::AfterValue;
    }

    pub fn write_null(&mut self) {
        self.value_separator();
        self.buf.put_slice(b"null");
        self.state = State::AfterValue;
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_escaped_string(buf: &mut BytesMut, s: &str) {
    buf.put_u8(b'"');
    for ch in s.chars() {
        match ch {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\u{8}' => buf.extend_from_slice(b"\\b"),
            '\u{c}' => buf.extend_from_slice(b"\\f"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            c if c.is_ascii_control() => {
                buf.extend_from_slice(format!("\\u{:04x}", c as u32).as_bytes());
            }
            c => {
                let mut tmp = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
            }
        }
    }
    buf.put_u8(b'"');
}
