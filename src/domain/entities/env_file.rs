//! EnvFile entity - the parsed contents of a `.env`-style file
//!
//! Parsing is line-oriented and deliberately simple: no multi-line values,
//! no escapes, no variable expansion. One pair of surrounding double quotes
//! is stripped from values.

use std::collections::HashMap;

/// A single `KEY=VALUE` assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    key: String,
    value: String,
    /// 1-based line of the assignment that produced the current value
    line: usize,
}

impl EnvEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

/// A key that appeared more than once; the later line won
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: String,
    pub first_line: usize,
    pub overriding_line: usize,
}

/// Ordered key/value mapping parsed from an env file
///
/// Keys keep the position of their first occurrence; a later assignment of
/// the same key replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<EnvEntry>,
    index: HashMap<String, usize>,
    duplicates: Vec<DuplicateKey>,
}

impl EnvFile {
    /// Parse env file content
    pub fn parse(content: &str) -> Self {
        let mut file = Self::default();

        for (idx, raw) in content.lines().enumerate() {
            if let Some((key, value)) = parse_line(raw) {
                file.insert(key, value, idx + 1);
            }
        }

        file
    }

    fn insert(&mut self, key: String, value: String, line: usize) {
        match self.index.get(&key) {
            Some(&pos) => {
                let entry = &mut self.entries[pos];
                self.duplicates.push(DuplicateKey {
                    key: key.clone(),
                    first_line: entry.line,
                    overriding_line: line,
                });
                entry.value = value;
                entry.line = line;
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(EnvEntry { key, value, line });
            }
        }
    }

    /// Look up the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].value.as_str())
    }

    /// Entries in first-occurrence order
    pub fn entries(&self) -> &[EnvEntry] {
        &self.entries
    }

    /// Keys that were assigned more than once, in the order the overrides occurred
    pub fn duplicates(&self) -> &[DuplicateKey] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one line into `(key, value)`, or `None` for blanks, comments and non-assignments
fn parse_line(raw: &str) -> Option<(String, String)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = strip_quotes(value.trim()).trim();

    Some((key.to_string(), value.to_string()))
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let file = EnvFile::parse("\n# comment\n   \n  # indented comment\nA=1\n");
        assert_eq!(file.len(), 1);
        assert_eq!(file.get("A"), Some("1"));
    }

    #[test]
    fn parse_skips_lines_without_delimiter() {
        let file = EnvFile::parse("export\nJUSTAWORD\nB=2");
        assert_eq!(file.len(), 1);
        assert_eq!(file.get("B"), Some("2"));
    }

    #[test]
    fn parse_splits_on_first_equals() {
        let file = EnvFile::parse("DATABASE_URL=postgres://u:p@h/db?sslmode=require");
        assert_eq!(
            file.get("DATABASE_URL"),
            Some("postgres://u:p@h/db?sslmode=require")
        );
    }

    #[test]
    fn parse_trims_key_and_value() {
        let file = EnvFile::parse("  KEY  =   spaced value   ");
        assert_eq!(file.get("KEY"), Some("spaced value"));
    }

    #[test]
    fn parse_strips_one_pair_of_double_quotes() {
        let file = EnvFile::parse("A=\"abc123\"\nB=\"\"nested\"\"\nC=\" padded \"");
        assert_eq!(file.get("A"), Some("abc123"));
        assert_eq!(file.get("B"), Some("\"nested\""));
        assert_eq!(file.get("C"), Some("padded"));
    }

    #[test]
    fn parse_leaves_unbalanced_or_single_quotes() {
        let file = EnvFile::parse("A=\"open\nB=\"\nC='single'");
        assert_eq!(file.get("A"), Some("\"open"));
        assert_eq!(file.get("B"), Some("\""));
        assert_eq!(file.get("C"), Some("'single'"));
    }

    #[test]
    fn parse_empty_quoted_value_is_empty() {
        let file = EnvFile::parse("EMPTY=\"\"");
        assert_eq!(file.get("EMPTY"), Some(""));
    }

    #[test]
    fn parse_last_duplicate_wins_and_keeps_first_position() {
        let file = EnvFile::parse("A=1\nB=2\nA=3");
        let keys: Vec<_> = file.entries().iter().map(EnvEntry::key).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(file.get("A"), Some("3"));
        assert_eq!(file.entries()[0].line(), 3);
        assert_eq!(
            file.duplicates(),
            &[DuplicateKey {
                key: "A".to_string(),
                first_line: 1,
                overriding_line: 3,
            }]
        );
    }

    #[test]
    fn parse_handles_crlf_line_endings() {
        let file = EnvFile::parse("A=1\r\nB=\"two\"\r\n");
        assert_eq!(file.get("A"), Some("1"));
        assert_eq!(file.get("B"), Some("two"));
    }
}
