//! Read-only component catalog
//!
//! The catalog is ingested once (from JSON or from already-parsed data),
//! validated record by record, and never mutated afterwards. Lookup is by
//! `(Category, id)`; iteration preserves ingestion order so dropdowns render
//! in the order the catalog author wrote.

use buildsan_shared::{BuildError, BuildResult, Category, ComponentRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Wire format for catalog ingestion: a flat list of identified records.
/// Each record carries its own `category` tag inside the spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub components: Vec<CatalogEntry>,
}

/// One identified record in the ingestion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(flatten)]
    pub record: ComponentRecord,
}

/// Immutable component store, one bucket per category
#[derive(Debug)]
pub struct CatalogStore {
    records: HashMap<Category, HashMap<String, ComponentRecord>>,
    // Ingestion order per category, kept beside the map for ordered iteration
    order: HashMap<Category, Vec<String>>,
}

impl CatalogStore {
    /// Parse and validate a JSON catalog payload
    pub fn from_json(json: &str) -> BuildResult<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Build the store from already-parsed data, validating every record
    pub fn from_data(data: CatalogData) -> BuildResult<Self> {
        let mut records: HashMap<Category, HashMap<String, ComponentRecord>> = HashMap::new();
        let mut order: HashMap<Category, Vec<String>> = HashMap::new();

        for entry in data.components {
            validate_record(&entry)?;
            let category = entry.record.spec.category();
            let bucket = records.entry(category).or_default();
            if bucket.contains_key(&entry.id) {
                return Err(BuildError::InvalidRecord {
                    id: Some(entry.id),
                    message: format!("duplicate id in category {}", category),
                });
            }
            order.entry(category).or_default().push(entry.id.clone());
            bucket.insert(entry.id, entry.record);
        }

        Ok(Self { records, order })
    }

    /// Empty store, used when a session starts before any catalog arrives
    pub fn empty() -> Self {
        Self {
            records: HashMap::new(),
            order: HashMap::new(),
        }
    }

    /// Look up one component
    pub fn get(&self, category: Category, id: &str) -> Option<&ComponentRecord> {
        self.records.get(&category)?.get(id)
    }

    /// True if the ID is known under the given category
    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.get(category, id).is_some()
    }

    /// All records of one category, in ingestion order
    pub fn iter(&self, category: Category) -> impl Iterator<Item = (&str, &ComponentRecord)> {
        let bucket = self.records.get(&category);
        self.order
            .get(&category)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |id| bucket?.get(id).map(|r| (id.as_str(), r)))
    }

    /// Number of records in one category
    pub fn len(&self, category: Category) -> usize {
        self.order.get(&category).map_or(0, |ids| ids.len())
    }

    pub fn is_empty(&self) -> bool {
        self.order.values().all(|ids| ids.is_empty())
    }
}

fn validate_record(entry: &CatalogEntry) -> BuildResult<()> {
    if entry.id.trim().is_empty() {
        return Err(BuildError::InvalidRecord {
            id: None,
            message: "empty component id".to_string(),
        });
    }
    let score = entry.record.score;
    if !score.is_finite() || !(0.0..=10.0).contains(&score) {
        return Err(BuildError::InvalidRecord {
            id: Some(entry.id.clone()),
            message: format!("score {} outside 0-10", score),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildsan_shared::{ComponentSpec, MemoryType};

    fn sample_json() -> &'static str {
        r#"{
            "components": [
                {
                    "id": "cpu-i5-12400f",
                    "name": "Intel Core i5-12400F",
                    "price": 2890000,
                    "score": 6.5,
                    "category": "cpu",
                    "socket": "LGA1700",
                    "ram_support": ["DDR4", "DDR5"]
                },
                {
                    "id": "mb-b660m",
                    "name": "MSI PRO B660M-A DDR4",
                    "price": 2590000,
                    "score": 6.0,
                    "category": "mainboard",
                    "sockets": ["LGA1700"],
                    "memory_type": "DDR4"
                },
                {
                    "id": "ram-fury-16",
                    "name": "Kingston Fury Beast 16GB",
                    "price": 1190000,
                    "score": 6.0,
                    "category": "ram",
                    "memory_type": "DDR4",
                    "capacity_gb": 16,
                    "speed_mhz": 3200
                }
            ]
        }"#
    }

    #[test]
    fn test_catalog_ingestion_and_lookup() {
        let store = CatalogStore::from_json(sample_json()).unwrap();
        let cpu = store.get(Category::Cpu, "cpu-i5-12400f").unwrap();
        assert_eq!(cpu.price, 2_890_000);
        match &cpu.spec {
            ComponentSpec::Cpu { socket, ram_support } => {
                assert_eq!(socket, "LGA1700");
                assert!(ram_support.contains(&MemoryType::Ddr5));
            }
            _ => panic!("wrong spec variant"),
        }
        assert!(store.get(Category::Vga, "cpu-i5-12400f").is_none());
    }

    #[test]
    fn test_iteration_preserves_ingestion_order() {
        let mut json: CatalogData = serde_json::from_str(sample_json()).unwrap();
        // Add a second CPU after the first
        let mut extra = json.components[0].clone();
        extra.id = "cpu-i3-12100f".to_string();
        json.components.push(extra);

        let store = CatalogStore::from_data(json).unwrap();
        let ids: Vec<&str> = store.iter(Category::Cpu).map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["cpu-i5-12400f", "cpu-i3-12100f"]);
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let mut data: CatalogData = serde_json::from_str(sample_json()).unwrap();
        data.components[0].record.score = 10.5;
        let err = CatalogStore::from_data(data).unwrap_err();
        match err {
            BuildError::InvalidRecord { id, message } => {
                assert_eq!(id.as_deref(), Some("cpu-i5-12400f"));
                assert!(message.contains("10.5"));
            }
            _ => panic!("wrong error variant"),
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut data: CatalogData = serde_json::from_str(sample_json()).unwrap();
        let dup = data.components[0].clone();
        data.components.push(dup);
        assert!(CatalogStore::from_data(data).is_err());
    }

    #[test]
    fn test_cross_category_spec_mismatch_is_unrepresentable() {
        // The category tag selects the spec variant during parse, so a PSU
        // payload claiming CPU fields fails at ingestion rather than later.
        let json = r#"{
            "components": [{
                "id": "psu-bad",
                "name": "Broken PSU",
                "price": 100000,
                "score": 5.0,
                "category": "psu",
                "socket": "LGA1700"
            }]
        }"#;
        assert!(CatalogStore::from_json(json).is_err());
    }
}
