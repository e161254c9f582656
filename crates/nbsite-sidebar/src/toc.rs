//! `_toc.yml` scanning.
//!
//! The TOC is not parsed as YAML. Only `file:` entries matter, so a line scan
//! is enough and tolerates whatever else the book config contains.

use std::fs;
use std::path::Path;

use crate::error::{Result, SidebarError};

const LIST_ITEM_PREFIX: &str = "- file:";
const KEY_PREFIX: &str = "file:";

/// Notebook identifiers of the TOC at `path`, in file order.
pub fn parse_toc(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(SidebarError::TocNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(parse_toc_str(&text))
}

/// Identifiers named by `- file: x` or `file: x` lines. Duplicates are kept.
pub fn parse_toc_str(text: &str) -> Vec<String> {
    text.lines().filter_map(toc_entry).collect()
}

fn toc_entry(line: &str) -> Option<String> {
    let line = line.trim();
    let rest = line
        .strip_prefix(LIST_ITEM_PREFIX)
        .or_else(|| line.strip_prefix(KEY_PREFIX))?;
    let id = rest.trim();
    (!id.is_empty()).then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_list_items_and_bare_keys_in_order() {
        let toc = "\
format: jb-book
root: index
chapters:
  - file: how-dropout-works
  - file: WIP-draft
    sections:
      - file: nested/post
  file: bare-entry
- file: how-dropout-works
";
        assert_eq!(
            parse_toc_str(toc),
            vec![
                "how-dropout-works",
                "WIP-draft",
                "nested/post",
                "bare-entry",
                "how-dropout-works",
            ]
        );
    }

    #[test]
    fn ignores_empty_values_and_other_keys() {
        let toc = "- file:\n  file:   \nroot: index\n- url: https://example.com\n# - file: commented\n";
        assert!(parse_toc_str(toc).is_empty());
    }

    #[test]
    fn handles_crlf_and_missing_space() {
        let toc = "- file: a\r\nfile:b\r\n";
        assert_eq!(parse_toc_str(toc), vec!["a", "b"]);
    }

    #[test]
    fn missing_toc_is_reported() {
        let err = parse_toc(Path::new("definitely/not/here/_toc.yml")).unwrap_err();
        assert!(matches!(err, SidebarError::TocNotFound(_)));
    }
}
