//! Qt Linguist `.ts` catalog parser.
//!
//! The on-disk format is an XML dialect: a `<TS>` root holding `<context>`
//! elements, each with a `<name>` and an ordered list of `<message>`
//! elements carrying `<source>`, `<translation>` (with an optional `type`
//! lifecycle attribute) and an optional `<comment>`.
//!
//! Parsing is lenient about elements this tool does not model
//! (`<location>`, `<translatorcomment>`, plural-form containers): they are
//! skipped. Everything else is validated, and failures carry the line and
//! column at which the reader stopped.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, BytesText, Event};

use crate::core::data::{TranslationStatus, TsContext, TsDocument, TsMessage};

/// A located parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsParseError {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub col: usize,
    pub message: String,
}

impl fmt::Display for TsParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.message, self.line, self.col
        )
    }
}

impl std::error::Error for TsParseError {}

/// Parse a `.ts` catalog from a string.
pub fn parse_ts(content: &str) -> Result<TsDocument, TsParseError> {
    TsParser::new(content).parse_document()
}

/// Parse a `.ts` catalog from a file, with path context on failure.
pub fn parse_ts_file(path: &Path) -> Result<TsDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    let document = parse_ts(&content)
        .with_context(|| format!("Failed to parse catalog file: {:?}", path))?;
    Ok(document)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Convert a byte offset into a 1-based (line, col) pair using the
/// pre-computed line index. Columns count characters, not bytes.
fn position_at(content: &str, line_index: &[usize], offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len());
    let line = match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    };
    let line_start = line_index[line - 1];
    let col = content[line_start..offset].chars().count() + 1;
    (line, col)
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    content: &'a str,
    line_index: Vec<usize>,
}

impl<'a> TsParser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            content,
            line_index: build_line_index(content),
        }
    }

    fn error(&self, message: impl Into<String>) -> TsParseError {
        let offset = self.reader.buffer_position() as usize;
        let (line, col) = position_at(self.content, &self.line_index, offset);
        TsParseError {
            line,
            col,
            message: message.into(),
        }
    }

    fn next_event(&mut self) -> Result<Event<'a>, TsParseError> {
        match self.reader.read_event() {
            Ok(event) => Ok(event),
            Err(err) => Err(self.error(err.to_string())),
        }
    }

    /// Skip an element this tool does not model, including its subtree.
    fn skip(&mut self, start: &BytesStart) -> Result<(), TsParseError> {
        let result = self.reader.read_to_end(start.name());
        result.map_err(|err| self.error(err.to_string()))?;
        Ok(())
    }

    fn expect_whitespace(&self, text: &BytesText) -> Result<(), TsParseError> {
        if text.iter().all(|b| b.is_ascii_whitespace()) {
            Ok(())
        } else {
            Err(self.error("unexpected text content between elements"))
        }
    }

    fn unescape(&self, text: &BytesText) -> Result<String, TsParseError> {
        let cow = text
            .unescape()
            .map_err(|err| self.error(err.to_string()))?;
        Ok(cow.into_owned())
    }

    fn current_line(&self) -> usize {
        let offset = self.reader.buffer_position() as usize;
        position_at(self.content, &self.line_index, offset).0
    }

    fn parse_document(&mut self) -> Result<TsDocument, TsParseError> {
        let mut document = TsDocument::default();

        // Prolog: XML declaration, <!DOCTYPE TS>, comments, whitespace.
        let root = loop {
            match self.next_event()? {
                Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => continue,
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Start(e) => break e,
                Event::Empty(_) => {
                    return Err(self.error("unexpected empty element at document root"));
                }
                Event::Eof => {
                    return Err(self.error("unexpected end of file, expected <TS> root element"));
                }
                _ => return Err(self.error("unexpected content at document root")),
            }
        };

        if root.name().as_ref() != b"TS" {
            return Err(self.error(format!(
                "expected <TS> root element, found <{}>",
                String::from_utf8_lossy(root.name().as_ref())
            )));
        }

        for attr in root.attributes() {
            let attr = attr.map_err(|err| self.error(err.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|err| self.error(err.to_string()))?;
            match attr.key.as_ref() {
                b"version" => document.version = Some(value.into_owned()),
                b"language" => document.language = Some(value.into_owned()),
                b"sourcelanguage" => document.source_language = Some(value.into_owned()),
                _ => {}
            }
        }

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"context" => document.contexts.push(self.parse_context()?),
                    _ => self.skip(&e)?,
                },
                Event::Empty(_) | Event::Comment(_) => continue,
                Event::End(e) if e.name().as_ref() == b"TS" => break,
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Eof => return Err(self.error("unexpected end of file inside <TS>")),
                _ => return Err(self.error("unexpected content inside <TS>")),
            }
        }

        // Only whitespace and comments may follow the root element.
        loop {
            match self.next_event()? {
                Event::Comment(_) => continue,
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Eof => break,
                _ => return Err(self.error("unexpected content after </TS>")),
            }
        }

        Ok(document)
    }

    fn parse_context(&mut self) -> Result<TsContext, TsParseError> {
        let mut name: Option<String> = None;
        let mut messages = Vec::new();

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => name = Some(self.read_text(b"name")?),
                    b"message" => messages.push(self.parse_message()?),
                    _ => self.skip(&e)?,
                },
                Event::Empty(_) | Event::Comment(_) => continue,
                Event::End(e) if e.name().as_ref() == b"context" => break,
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Eof => return Err(self.error("unexpected end of file inside <context>")),
                _ => return Err(self.error("unexpected content inside <context>")),
            }
        }

        let name = name.ok_or_else(|| self.error("<context> is missing a <name> element"))?;
        Ok(TsContext { name, messages })
    }

    fn parse_message(&mut self) -> Result<TsMessage, TsParseError> {
        let line = self.current_line();
        let mut source: Option<String> = None;
        let mut comment: Option<String> = None;
        let mut translation = String::new();
        let mut status = TranslationStatus::Finished;

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"source" => source = Some(self.read_text(b"source")?),
                    b"comment" => comment = Some(self.read_text(b"comment")?),
                    b"translation" => {
                        status = self.translation_status(&e)?;
                        translation = self.read_text(b"translation")?;
                    }
                    _ => self.skip(&e)?,
                },
                // <translation type="unfinished"/> and unmodeled markers
                // like <location .../> arrive as empty elements.
                Event::Empty(e) => {
                    if e.name().as_ref() == b"translation" {
                        status = self.translation_status(&e)?;
                        translation = String::new();
                    }
                }
                Event::Comment(_) => continue,
                Event::End(e) if e.name().as_ref() == b"message" => break,
                Event::Text(t) => self.expect_whitespace(&t)?,
                Event::Eof => return Err(self.error("unexpected end of file inside <message>")),
                _ => return Err(self.error("unexpected content inside <message>")),
            }
        }

        let source = source.ok_or_else(|| self.error("<message> is missing a <source> element"))?;
        Ok(TsMessage {
            source,
            translation,
            status,
            comment,
            line,
        })
    }

    fn translation_status(&self, e: &BytesStart) -> Result<TranslationStatus, TsParseError> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.error(err.to_string()))?;
            if attr.key.as_ref() == b"type" {
                let value = attr
                    .unescape_value()
                    .map_err(|err| self.error(err.to_string()))?;
                return TranslationStatus::from_type_attr(&value).ok_or_else(|| {
                    self.error(format!("unknown translation type \"{}\"", value))
                });
            }
        }
        Ok(TranslationStatus::Finished)
    }

    /// Read the text content of the current element up to its closing tag.
    fn read_text(&mut self, end: &[u8]) -> Result<String, TsParseError> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                Event::Text(t) => text.push_str(&self.unescape(&t)?),
                Event::CData(c) => {
                    let bytes = c.into_inner();
                    let chunk = std::str::from_utf8(&bytes)
                        .map_err(|err| self.error(err.to_string()))?;
                    text.push_str(chunk);
                }
                Event::Comment(_) => continue,
                Event::End(e) if e.name().as_ref() == end => break,
                Event::Start(e) => {
                    return Err(self.error(format!(
                        "unexpected <{}> inside <{}>",
                        String::from_utf8_lossy(e.name().as_ref()),
                        String::from_utf8_lossy(end)
                    )));
                }
                Event::Eof => {
                    return Err(self.error(format!(
                        "unexpected end of file inside <{}>",
                        String::from_utf8_lossy(end)
                    )));
                }
                _ => {
                    return Err(self.error(format!(
                        "unexpected content inside <{}>",
                        String::from_utf8_lossy(end)
                    )));
                }
            }
        }
        Ok(text)
    }
}
