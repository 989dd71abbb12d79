use std::collections::BTreeMap;

use serde::Serialize;

/// Case-insensitive synonym table mapping free-text variants to a canonical label.
///
/// Keys are matched after trimming and lowercasing, so `"MALE"`, `"Male"` and
/// `"male"` all resolve through a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SynonymMap {
    map: BTreeMap<String, String>,
}

impl SynonymMap {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in pairs {
            map.entry(lookup_key(key.as_ref()))
                .or_insert_with(|| value.into());
        }
        Self { map }
    }

    pub fn get(&self, value: &str) -> Option<&str> {
        self.map.get(&lookup_key(value)).map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.map.contains_key(&lookup_key(value))
    }

    /// Resolve a value to its canonical label, passing unmapped values through.
    pub fn canonicalize<'a>(&'a self, value: &'a str) -> &'a str {
        self.get(value).unwrap_or(value)
    }

    /// Distinct canonical labels, sorted.
    pub fn canonical_values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.map.values().map(String::as_str).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn lookup_key(value: &str) -> String {
    value.trim().to_lowercase()
}
