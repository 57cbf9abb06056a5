//! The marker table: configured tokens and their compiled automaton.

use aho_corasick::AhoCorasick;

use super::types::TagKind;

/// Ordered mapping of marker tokens to tag kinds, extensible through
/// configuration without code changes.
///
/// A token only counts when immediately followed by a colon, so the
/// compiled patterns are `<token>:`. The automaton is built once per
/// table and reused across every segment and file.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    markers: Vec<(String, TagKind)>,
    automaton: AhoCorasick,
}

impl MarkerTable {
    pub fn new(markers: Vec<(String, TagKind)>) -> Self {
        let patterns: Vec<String> = markers
            .iter()
            .map(|(token, _)| format!("{token}:"))
            .collect();
        // Plain literal patterns cannot fail to compile.
        let automaton = AhoCorasick::new(&patterns).expect("literal marker patterns");
        Self { markers, automaton }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Tokens and kinds in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagKind)> {
        self.markers.iter().map(|(token, kind)| (token.as_str(), kind))
    }

    pub(crate) fn kind_of(&self, pattern: usize) -> &TagKind {
        &self.markers[pattern].1
    }

    pub(crate) fn automaton(&self) -> &AhoCorasick {
        &self.automaton
    }
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::new(vec![
            ("TODO".to_string(), TagKind::FixLater),
            ("FIXME".to_string(), TagKind::NeedsRepair),
        ])
    }
}
