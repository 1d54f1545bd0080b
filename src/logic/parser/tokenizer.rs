//! Splits command arguments into a preamble and prefixed values.
//!
//! Input such as `2 r/Likes baseball` becomes the preamble `2` and the value
//! `Likes baseball` under the `r/` prefix.

use std::collections::HashMap;
use std::fmt;

/// A literal marker introducing an argument value, such as `r/`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

pub const PREFIX_REMARK: Prefix = Prefix("r/");

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prefix(\"{}\")", self.0)
    }
}

/// Tokenized arguments: the preamble plus every value seen per prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the trimmed text before the first recognized prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the last value given for `prefix`, if it appeared at all.
    pub fn value(&self, prefix: &Prefix) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Returns every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: &Prefix) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: &Prefix) -> bool {
        self.values.contains_key(prefix)
    }
}

/// Tokenizes `args` against the given prefixes.
///
/// A prefix is recognized only at the start of the input or right after
/// whitespace, so `r/` inside `Bar/r/` is plain text. The preamble and every
/// value are trimmed; a prefix followed by nothing yields an empty value.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(move |prefix| {
            args.match_indices(prefix.as_str())
                .filter(move |(start, _)| starts_token(args, *start))
                .map(move |(start, _)| (start, *prefix))
        })
        .collect();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        let value = args[value_start..value_end].trim().to_string();
        map.values.entry(*prefix).or_default().push(value);
    }

    map
}

fn starts_token(args: &str, start: usize) -> bool {
    args[..start]
        .chars()
        .next_back()
        .is_none_or(char::is_whitespace)
}
