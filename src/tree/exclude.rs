/// Names that are always left out of the tree unless defaults are disabled
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".git", ".vscode"];

/// Literal folder/file names; an entry is dropped when any of its segments matches one exactly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    /// Empty set: nothing is excluded
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in list
    pub fn with_defaults() -> Self {
        Self {
            names: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add one name, keeping first-seen order and skipping duplicates
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() && !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add(name);
        }
    }

    /// Merge a user-supplied comma-separated list (e.g. "dist, coverage,")
    pub fn merge_csv(&mut self, csv: &str) {
        self.extend(parse_name_list(csv));
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Exact, case-sensitive match against one path segment
    pub fn matches_segment(&self, segment: &str) -> bool {
        self.names.iter().any(|n| n == segment)
    }

    /// True if any segment of the given segments is excluded
    pub fn excludes<'a, I>(&self, segments: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        segments.into_iter().any(|s| self.matches_segment(s))
    }
}

/// Parse a comma-separated list of names, trimming blanks
pub fn parse_name_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
