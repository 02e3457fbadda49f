//! Cafe query parsing and list filtering
//!
//! Validation runs in a fixed order and stops at the first failure:
//! the city is checked before the count. Filtering keeps the
//! directory order, then truncation takes the leading entries.

use crate::core::directory::CafeDirectory;
use crate::core::error::{CafeError, Result};

/// Raw query-string parameters of `GET /cafe`
///
/// Everything stays a string here so that malformed values surface
/// as domain errors instead of extractor rejections.
#[derive(Debug, Clone, Default)]
pub struct CafeParams {
    pub city: Option<String>,
    pub count: Option<String>,
    pub search: Option<String>,
}

impl CafeParams {
    /// Collect parameters from decoded query-string pairs
    ///
    /// The first occurrence of a key wins; later repeats and unknown
    /// keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "city" => &mut params.city,
                "count" => &mut params.count,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// A validated cafe query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeQuery {
    pub city: String,

    /// Maximum number of cafes to return (`None` = unlimited)
    pub count: Option<usize>,

    /// Lowercased search needle (`None` = no filtering)
    pub search: Option<String>,
}

impl CafeQuery {
    /// Validate raw parameters against the directory
    ///
    /// # Errors
    ///
    /// - `UnknownCity`: city missing or not in the directory
    /// - `InvalidCount`: count is not a non-negative integer
    pub fn parse(params: &CafeParams, directory: &CafeDirectory) -> Result<Self> {
        let city = match params.city.as_deref() {
            Some(city) if directory.contains(city) => city.to_string(),
            _ => return Err(CafeError::UnknownCity),
        };

        let count = match params.count.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_count(raw)?),
        };

        let search = params
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        Ok(Self {
            city,
            count,
            search,
        })
    }

    /// Run the query against the directory
    ///
    /// Returns the matching cafe names in directory order, at most
    /// `count` of them.
    pub fn apply<'a>(&self, directory: &'a CafeDirectory) -> Vec<&'a str> {
        let cafes = directory.get(&self.city).unwrap_or_default();
        let limit = self.count.unwrap_or(usize::MAX);

        cafes
            .iter()
            .map(String::as_str)
            .filter(|name| match &self.search {
                Some(needle) => matches_search(name, needle),
                None => true,
            })
            .take(limit)
            .collect()
    }
}

/// Parse a count parameter; negative values are rejected
fn parse_count(raw: &str) -> Result<usize> {
    raw.parse::<usize>().map_err(|_| CafeError::InvalidCount)
}

/// Case-insensitive substring test; `needle` must already be lowercased
fn matches_search(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}
