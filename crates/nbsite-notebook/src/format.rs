//! Notebook serialization.
//!
//! Layout: two-space indentation, `": "` between key and value, no trailing
//! newline. With `ensure_ascii` every code point outside printable ASCII is
//! written as a lowercase `\uXXXX` escape (surrogate pairs above the BMP), the
//! way the site's committed notebooks have always been encoded, so re-running
//! the tagger produces minimal diffs.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::{NotebookError, Result};

const INDENT: &[u8] = b"  ";

/// Render `value` in notebook layout.
pub fn to_notebook_json(value: &Value, ensure_ascii: bool) -> Result<String> {
    let mut buf = Vec::with_capacity(4096);
    let formatter = NotebookFormatter {
        pretty: PrettyFormatter::with_indent(INDENT),
        ensure_ascii,
    };
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(NotebookError::Serialize)?;
    String::from_utf8(buf).map_err(|e| NotebookError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

struct NotebookFormatter {
    pretty: PrettyFormatter<'static>,
    ensure_ascii: bool,
}

impl Formatter for NotebookFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    // Quotes, backslashes and C0 controls never reach this method; serde_json
    // escapes those itself via `write_char_escape`.
    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        if !self.ensure_ascii {
            return writer.write_all(fragment.as_bytes());
        }
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uses_two_space_indent_without_trailing_newline() {
        let doc = json!({ "cells": [ { "metadata": { "tags": ["no-execute"] } } ], "nbformat": 4 });

        let text = to_notebook_json(&doc, true).unwrap();

        let expected = "{\n  \"cells\": [\n    {\n      \"metadata\": {\n        \"tags\": [\n          \"no-execute\"\n        ]\n      }\n    }\n  ],\n  \"nbformat\": 4\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_containers_stay_compact() {
        let doc = json!({ "cells": [], "metadata": {} });

        let text = to_notebook_json(&doc, true).unwrap();

        assert_eq!(text, "{\n  \"cells\": [],\n  \"metadata\": {}\n}");
    }

    #[test]
    fn escapes_non_ascii_when_requested() {
        let doc = json!({ "s": "café \u{7f} 😀" });

        let escaped = to_notebook_json(&doc, true).unwrap();
        let raw = to_notebook_json(&doc, false).unwrap();

        assert_eq!(escaped, "{\n  \"s\": \"caf\\u00e9 \\u007f \\ud83d\\ude00\"\n}");
        assert_eq!(raw, "{\n  \"s\": \"café \u{7f} 😀\"\n}");
    }

    #[test]
    fn control_characters_and_quotes_use_json_escapes() {
        let doc = json!({ "s": "a\n\"b\"\\" });

        let text = to_notebook_json(&doc, true).unwrap();

        assert_eq!(text, "{\n  \"s\": \"a\\n\\\"b\\\"\\\\\"\n}");
    }

    #[test]
    fn number_literals_survive_a_round_trip() {
        let source = r#"{"a": 1.0, "b": 1e-05, "c": 12345678901234567890}"#;
        let doc: Value = serde_json::from_str(source).unwrap();

        let text = to_notebook_json(&doc, true).unwrap();

        assert_eq!(text, "{\n  \"a\": 1.0,\n  \"b\": 1e-05,\n  \"c\": 12345678901234567890\n}");
    }
}
