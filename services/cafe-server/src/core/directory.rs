//! Cafe directory
//!
//! Read-only mapping from city name to its ordered list of cafe
//! names. Built once at startup (from the seed data or the config
//! file) and shared behind an `Arc` afterwards.

use std::collections::BTreeMap;

/// Mapping from city (case-sensitive) to cafe names in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeDirectory {
    cities: BTreeMap<String, Vec<String>>,
}

impl CafeDirectory {
    /// Build a directory from an explicit city table
    pub fn new(cities: BTreeMap<String, Vec<String>>) -> Self {
        Self { cities }
    }

    /// Directory with the built-in seed data
    pub fn seeded() -> Self {
        Self::new(default_cities())
    }

    /// Cafes for `city`, in their original order
    pub fn get(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// Known city names, sorted
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Number of cities
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Total number of cafes across all cities
    pub fn total_cafes(&self) -> usize {
        self.cities.values().map(Vec::len).sum()
    }
}

impl Default for CafeDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Built-in seed data
pub fn default_cities() -> BTreeMap<String, Vec<String>> {
    let mut cities = BTreeMap::new();
    cities.insert(
        "moscow".to_string(),
        vec![
            "Мир кофе".to_string(),
            "Сладкоежка".to_string(),
            "Кофе и завтраки".to_string(),
            "Сытый студент".to_string(),
            "Ложка и вилка".to_string(),
        ],
    );
    cities.insert(
        "tula".to_string(),
        vec![
            "Чайная".to_string(),
            "Пельменная".to_string(),
            "Пряничный домик".to_string(),
        ],
    );
    cities
}
