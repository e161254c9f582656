//! Rendering year groups as a script literal.
//!
//! `Repr` produces the exact literal the sidebar script has always embedded:
//! `{'2024': ['a', 'b'], '2025': ['c']}`. It is a valid JavaScript object
//! literal, so the template can assign it directly.

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::groups::SortedYearGroups;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LiteralStyle {
    /// Single-quoted object literal, `', '` / `': '` separators.
    #[default]
    Repr,
    /// Compact JSON object.
    Json,
}

impl FromStr for LiteralStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repr" => Ok(Self::Repr),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown literal style `{other}` (expected repr|json)")),
        }
    }
}

impl fmt::Display for LiteralStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Repr => "repr",
            Self::Json => "json",
        })
    }
}

pub fn render_year_groups(groups: &SortedYearGroups, style: LiteralStyle) -> Result<String> {
    match style {
        LiteralStyle::Repr => Ok(render_repr(groups)),
        LiteralStyle::Json => Ok(serde_json::to_string(groups)?),
    }
}

fn render_repr(groups: &SortedYearGroups) -> String {
    let mut out = String::from("{");
    for (i, (year, ids)) in groups.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&quote_str(&year.to_string()));
        out.push_str(": [");
        let items: Vec<String> = ids.iter().map(|id| quote_str(id)).collect();
        out.push_str(&items.join(", "));
        out.push(']');
    }
    out.push('}');
    out
}

/// Quote `s` as a string literal.
///
/// Single quotes unless `s` contains `'` but no `"`. Backslash, the active
/// quote and non-printable characters are escaped: `\xhh` below U+0100,
/// `\uhhhh` in the BMP, `\Uhhhhhhhh` above it.
pub fn quote_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = c as u32;
                match code {
                    0..=0xff => out.push_str(&format!("\\x{code:02x}")),
                    0x100..=0xffff => out.push_str(&format!("\\u{code:04x}")),
                    _ => out.push_str(&format!("\\U{code:08x}")),
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Format characters (general category Cf).
const FORMAT_CHARS: &[(char, char)] = &[
    ('\u{ad}', '\u{ad}'),
    ('\u{600}', '\u{605}'),
    ('\u{61c}', '\u{61c}'),
    ('\u{6dd}', '\u{6dd}'),
    ('\u{70f}', '\u{70f}'),
    ('\u{890}', '\u{891}'),
    ('\u{8e2}', '\u{8e2}'),
    ('\u{180e}', '\u{180e}'),
    ('\u{200b}', '\u{200f}'),
    ('\u{202a}', '\u{202e}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206f}'),
    ('\u{feff}', '\u{feff}'),
    ('\u{fff9}', '\u{fffb}'),
    ('\u{110bd}', '\u{110bd}'),
    ('\u{110cd}', '\u{110cd}'),
    ('\u{13430}', '\u{1343f}'),
    ('\u{1bca0}', '\u{1bca3}'),
    ('\u{1d173}', '\u{1d17a}'),
    ('\u{e0001}', '\u{e0001}'),
    ('\u{e0020}', '\u{e007f}'),
];

/// Private-use ranges (general category Co).
const PRIVATE_USE: &[(char, char)] = &[
    ('\u{e000}', '\u{f8ff}'),
    ('\u{f0000}', '\u{ffffd}'),
    ('\u{100000}', '\u{10fffd}'),
];

/// Printable in the sense a `repr` literal uses: everything except control,
/// format, private-use and separator characters, with ASCII space allowed.
/// Unassigned code points are not tracked and count as printable.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    let in_ranges = |ranges: &[(char, char)]| ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&c));
    !(c.is_control() || c.is_whitespace() || in_ranges(FORMAT_CHARS) || in_ranges(PRIVATE_USE))
}
