//! Canonical serialization back to the Qt Linguist on-disk shape.
//!
//! The emitted layout matches what Qt's own tooling writes: XML
//! declaration, `<!DOCTYPE TS>`, contexts at column zero, 4-space
//! indentation inside them, and the five standard entities escaped in
//! text and attribute values.

use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::core::data::TsDocument;

/// Serialize a document to canonical `.ts` text.
///
/// Round-trip property: `parse_ts(&write_ts(&doc))` yields a document
/// with the same contexts, messages, statuses and comments as `doc`.
pub fn write_ts(document: &TsDocument) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    if let Some(version) = &document.version {
        let _ = write!(out, " version=\"{}\"", escape(version));
    }
    if let Some(language) = &document.language {
        let _ = write!(out, " language=\"{}\"", escape(language));
    }
    if let Some(source_language) = &document.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape(source_language));
    }
    out.push_str(">\n");

    for context in &document.contexts {
        out.push_str("<context>\n");
        let _ = writeln!(out, "    <name>{}</name>", escape(&context.name));
        for message in &context.messages {
            out.push_str("    <message>\n");
            let _ = writeln!(out, "        <source>{}</source>", escape(&message.source));
            if let Some(comment) = &message.comment {
                let _ = writeln!(out, "        <comment>{}</comment>", escape(comment));
            }
            match message.status.type_attr() {
                Some(kind) => {
                    let _ = writeln!(
                        out,
                        "        <translation type=\"{}\">{}</translation>",
                        kind,
                        escape(&message.translation)
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "        <translation>{}</translation>",
                        escape(&message.translation)
                    );
                }
            }
            out.push_str("    </message>\n");
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}
