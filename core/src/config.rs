/*
 * config.rs
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

//! Transport configuration: `~/.graphmail/config.xml`.
//! All XML read/write uses the quick_xml parser/writer.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <graph-mail>
//!   <save-to-sent-items>true</save-to-sent-items>
//! </graph-mail>
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::mail::TransportError;
use crate::protocol::graph::headers::parse_bool;

const ROOT_ELEMENT: &str = "graph-mail";
const SAVE_TO_SENT_ITEMS_ELEMENT: &str = "save-to-sent-items";

/// Settings for the Graph transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphMailConfig {
    /// Keep a copy in the sender's Sent Items unless a message says otherwise.
    pub save_to_sent_items: bool,
}

impl GraphMailConfig {
    /// Parse configuration XML. Unknown elements are ignored; missing ones keep their defaults.
    pub fn from_xml(content: &str) -> Result<Self, TransportError> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);
        let mut config = Self::default();
        let mut path: Vec<Vec<u8>> = Vec::new();

        loop {
            match reader.read_event() {
                Err(e) => return Err(TransportError::config(format!("XML parse error: {}", e))),
                Ok(Event::Eof) => break,
                Ok(Event::Start(e)) => path.push(e.name().as_ref().to_vec()),
                Ok(Event::End(_)) => {
                    path.pop();
                }
                Ok(Event::Text(e)) => {
                    let in_flag = path.len() == 2
                        && path[0] == ROOT_ELEMENT.as_bytes()
                        && path[1] == SAVE_TO_SENT_ITEMS_ELEMENT.as_bytes();
                    if in_flag {
                        let text = e.unescape().map_err(xml_error)?;
                        config.save_to_sent_items = parse_bool(&text);
                    }
                }
                _ => {}
            }
        }
        Ok(config)
    }

    /// Serialize as configuration XML (UTF-8).
    pub fn to_xml(&self) -> Result<Vec<u8>, TransportError> {
        let mut out = Vec::new();
        let mut writer = Writer::new(&mut out);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Start(BytesStart::new(SAVE_TO_SENT_ITEMS_ELEMENT)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Text(BytesText::new(if self.save_to_sent_items {
                "true"
            } else {
                "false"
            })))
            .map_err(xml_error)?;
        writer
            .write_event(Event::End(BytesEnd::new(SAVE_TO_SENT_ITEMS_ELEMENT)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))
            .map_err(xml_error)?;
        Ok(out)
    }
}

fn xml_error(e: impl std::fmt::Display) -> TransportError {
    TransportError::config(e.to_string())
}

/// Default config directory: ~/.graphmail.
pub fn default_config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from).map(|h| h.join(".graphmail"))
}

/// Default config path: ~/.graphmail/config.xml.
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|d| d.join("config.xml"))
}

/// Load configuration. If the file does not exist, returns the defaults.
pub fn load_config(path: &Path) -> Result<GraphMailConfig, TransportError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(GraphMailConfig::default()),
        Err(e) => return Err(TransportError::config(format!("{}: {}", path.display(), e))),
    };
    GraphMailConfig::from_xml(&content)
}

/// Write configuration, creating the parent directory if needed.
pub fn save_config(path: &Path, config: &GraphMailConfig) -> Result<(), TransportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TransportError::config(e.to_string()))?;
    }
    let xml = config.to_xml()?;
    fs::write(path, xml).map_err(|e| TransportError::config(format!("{}: {}", path.display(), e)))
}
