use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::year::{Year, YearSource};

/// Identifiers with this prefix are drafts and never listed.
pub const WIP_PREFIX: &str = "WIP";

pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// On-disk notebook backing `identifier`.
pub fn notebook_path(notebook_dir: &Path, identifier: &str) -> PathBuf {
    notebook_dir.join(format!("{identifier}.{NOTEBOOK_EXTENSION}"))
}

/// Identifiers bucketed by year. Each bucket keeps TOC order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearGroups {
    groups: HashMap<Year, Vec<String>>,
}

impl YearGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, year: Year, identifier: impl Into<String>) {
        self.groups.entry(year).or_default().push(identifier.into());
    }

    pub fn get(&self, year: Year) -> Option<&[String]> {
        self.groups.get(&year).map(Vec::as_slice)
    }

    /// Number of distinct years.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of identifiers across all years.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Year groups in ascending year order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedYearGroups(Vec<(Year, Vec<String>)>);

impl SortedYearGroups {
    pub fn iter(&self) -> impl Iterator<Item = (Year, &[String])> {
        self.0.iter().map(|(year, ids)| (*year, ids.as_slice()))
    }

    pub fn years(&self) -> Vec<Year> {
        self.0.iter().map(|(year, _)| *year).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<(Year, Vec<String>)> {
        self.0
    }
}

/// Serializes as a map `"<year>" -> [identifiers]`, years ascending.
impl Serialize for SortedYearGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(year, ids)| (year.to_string(), ids)))
    }
}

/// Bucket `identifiers` by the year of their notebook under `notebook_dir`.
///
/// `WIP*` identifiers are dropped, and so are identifiers whose notebook does
/// not exist (a dangling TOC entry is not an error). Year lookup failures
/// abort the whole pass.
pub fn generate_year_groups(
    notebook_dir: &Path,
    identifiers: &[String],
    years: &dyn YearSource,
) -> Result<YearGroups> {
    let mut groups = YearGroups::new();
    for identifier in identifiers {
        if identifier.starts_with(WIP_PREFIX) {
            tracing::debug!(%identifier, "skipping work-in-progress notebook");
            continue;
        }
        let path = notebook_path(notebook_dir, identifier);
        if !path.exists() {
            tracing::debug!(%identifier, path = %path.display(), "no notebook on disk; skipping");
            continue;
        }
        let year = years.year_of(&path)?;
        tracing::debug!(%identifier, %year, "dated notebook");
        groups.push(year, identifier.as_str());
    }
    Ok(groups)
}

/// Order groups by ascending numeric year.
pub fn sort_years(groups: &YearGroups) -> SortedYearGroups {
    let mut sorted: Vec<(Year, Vec<String>)> = groups
        .groups
        .iter()
        .map(|(year, ids)| (*year, ids.clone()))
        .collect();
    sorted.sort_by_key(|(year, _)| *year);
    SortedYearGroups(sorted)
}

impl FromIterator<(Year, Vec<String>)> for SortedYearGroups {
    fn from_iter<I: IntoIterator<Item = (Year, Vec<String>)>>(iter: I) -> Self {
        let mut groups = YearGroups::new();
        for (year, ids) in iter {
            groups.groups.entry(year).or_default().extend(ids);
        }
        sort_years(&groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SidebarError;
    use std::collections::HashMap;
    use std::fs;

    /// Years keyed by file stem.
    struct FixedYears(HashMap<&'static str, i32>);

    impl YearSource for FixedYears {
        fn year_of(&self, path: &Path) -> Result<Year> {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            self.0.get(stem).map(|y| Year::new(*y)).ok_or_else(|| SidebarError::Timestamp {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "no fixed year"),
            })
        }
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn site_with(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(notebook_path(dir.path(), name), "{}").unwrap();
        }
        dir
    }

    #[test]
    fn keeps_toc_order_within_a_year() {
        let dir = site_with(&["a", "b", "c"]);
        let years = FixedYears(HashMap::from([("a", 2023), ("b", 2023), ("c", 2023)]));

        let groups = generate_year_groups(dir.path(), &ids(&["b", "a", "c"]), &years).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(Year::new(2023)).unwrap(), ["b", "a", "c"]);
    }

    #[test]
    fn wip_notebooks_never_appear() {
        let dir = site_with(&["WIP-draft", "post"]);
        let years = FixedYears(HashMap::from([("WIP-draft", 2024), ("post", 2024)]));

        let groups = generate_year_groups(dir.path(), &ids(&["WIP-draft", "post"]), &years).unwrap();

        assert_eq!(groups.total(), 1);
        assert_eq!(groups.get(Year::new(2024)).unwrap(), ["post"]);
    }

    #[test]
    fn missing_notebooks_are_skipped_silently() {
        let dir = site_with(&["present"]);
        let years = FixedYears(HashMap::from([("present", 2022)]));

        let groups =
            generate_year_groups(dir.path(), &ids(&["absent", "present"]), &years).unwrap();

        assert_eq!(groups.total(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let dir = site_with(&["a"]);
        let years = FixedYears(HashMap::from([("a", 2020)]));

        let groups = generate_year_groups(dir.path(), &ids(&["a", "a"]), &years).unwrap();

        assert_eq!(groups.get(Year::new(2020)).unwrap(), ["a", "a"]);
    }

    #[test]
    fn year_lookup_failure_aborts() {
        let dir = site_with(&["a", "b"]);
        let years = FixedYears(HashMap::from([("a", 2020)]));

        let err = generate_year_groups(dir.path(), &ids(&["a", "b"]), &years).unwrap_err();

        assert!(matches!(err, SidebarError::Timestamp { .. }));
    }

    #[test]
    fn sorts_years_ascending() {
        let mut groups = YearGroups::new();
        groups.push(Year::new(2022), "x");
        groups.push(Year::new(2020), "y");
        groups.push(Year::new(2021), "z");

        let sorted = sort_years(&groups);

        assert_eq!(
            sorted.years(),
            vec![Year::new(2020), Year::new(2021), Year::new(2022)]
        );
    }

    #[test]
    fn serializes_as_year_keyed_map() {
        let sorted: SortedYearGroups = vec![
            (Year::new(2025), ids(&["c"])),
            (Year::new(2024), ids(&["a", "b"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            serde_json::to_string(&sorted).unwrap(),
            r#"{"2024":["a","b"],"2025":["c"]}"#
        );
    }
}
