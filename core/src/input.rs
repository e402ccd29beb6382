use std::collections::HashMap;

use anyhow::{anyhow, Result};

use crate::parser::syntax::Prefix;

/// Arguments of one command split by prefix.
///
/// `n/Quiz mc/CS2103 pt/core pt/hard` yields `n/ -> [Quiz]`,
/// `mc/ -> [CS2103]`, `pt/ -> [core, hard]` and an empty preamble.
#[derive(Debug, Default, PartialEq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<&'static str, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(prefix.as_str())
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(prefix.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(prefix.as_str())
    }

    pub fn are_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.is_present(*p))
    }
}

/// Splits `args` on the given prefixes.
///
/// A prefix only counts at the start of `args` or right after whitespace,
/// so `d/` inside `end/` or a URL is left alone.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let needle = prefix.as_str();
        for (pos, _) in args.match_indices(needle) {
            let at_boundary = args[..pos]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if at_boundary {
                positions.push((pos, prefix));
            }
        }
    }
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(prefix.as_str())
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    map
}

/// Resolves `key` to one of `candidates`, exactly or by unique prefix.
pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{
        PREFIX_DEADLINE_DATE, PREFIX_END_DATE, PREFIX_MODULE_CODE, PREFIX_NAME, PREFIX_PRIORITY_TAG,
        PREFIX_TAG,
    };

    const PREFIXES: &[Prefix] = &[
        PREFIX_NAME,
        PREFIX_MODULE_CODE,
        PREFIX_DEADLINE_DATE,
        PREFIX_TAG,
        PREFIX_PRIORITY_TAG,
        PREFIX_END_DATE,
    ];

    #[test]
    fn test_tokenize_simple() {
        let map = tokenize(" n/Week 10 Quiz mc/CS2103 d/01-04-2021", PREFIXES);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_NAME), Some("Week 10 Quiz"));
        assert_eq!(map.value(PREFIX_MODULE_CODE), Some("CS2103"));
        assert_eq!(map.value(PREFIX_DEADLINE_DATE), Some("01-04-2021"));
        assert!(!map.is_present(PREFIX_TAG));
        assert!(map.all_values(PREFIX_TAG).is_empty());
    }

    #[test]
    fn test_tokenize_preamble_and_repeats() {
        let map = tokenize("1 pt/core pt/hard n/a n/b", PREFIXES);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.all_values(PREFIX_TAG), &["core".to_string(), "hard".to_string()]);
        // last value wins
        assert_eq!(map.value(PREFIX_NAME), Some("b"));
    }

    #[test]
    fn test_tokenize_overlapping_prefixes() {
        let map = tokenize("ptag/HIGH pt/core end/01-01-2021 d/02-02-2021", PREFIXES);
        assert_eq!(map.value(PREFIX_PRIORITY_TAG), Some("HIGH"));
        assert_eq!(map.all_values(PREFIX_TAG), &["core".to_string()]);
        assert_eq!(map.value(PREFIX_END_DATE), Some("01-01-2021"));
        assert_eq!(map.value(PREFIX_DEADLINE_DATE), Some("02-02-2021"));
    }

    #[test]
    fn test_tokenize_requires_boundary() {
        let map = tokenize("n/see abc/d/x", PREFIXES);
        assert_eq!(map.value(PREFIX_NAME), Some("see abc/d/x"));
        assert!(!map.is_present(PREFIX_DEADLINE_DATE));
    }

    #[test]
    fn test_tokenize_empty_value() {
        let map = tokenize("1 pt/", PREFIXES);
        assert_eq!(map.all_values(PREFIX_TAG), &[String::new()]);
        assert!(map.are_present(&[PREFIX_TAG]));
        assert!(!map.are_present(&[PREFIX_TAG, PREFIX_NAME]));
    }

    #[test]
    fn test_expand_key() {
        let candidates = vec!["edit", "exit", "delete", "dueIn"];

        assert_eq!(expand_key("edit", &candidates).unwrap(), "edit");
        assert_eq!(expand_key("ed", &candidates).unwrap(), "edit");
        assert_eq!(expand_key("del", &candidates).unwrap(), "delete");

        // Ambiguous
        assert!(expand_key("e", &candidates).is_err());
        assert!(expand_key("d", &candidates).is_err());

        // Unknown
        assert!(expand_key("x", &candidates).is_err());
    }
}
