//! Budget-keyed auto-configuration
//!
//! Bundles are looked up by (CPU brand, game, budget key) where the budget
//! key is the whole number of millions of VND, e.g. 15_500_000 → "15M".
//! Lookup is exact: there is no nearest-budget fallback, a missed key just
//! reports which key was attempted so the caller can show it.

use buildsan_shared::{BuildError, BuildResult, Category, CpuBrand};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One predefined build: a component ID per slot, HDD and monitor optional
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigBundle {
    pub cpu: String,
    pub mainboard: String,
    pub vga: String,
    pub ram: String,
    pub ssd: String,
    pub psu: String,
    pub r#case: String,
    pub cpu_cooler: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor: Option<String>,
}

impl ConfigBundle {
    /// Component ID for one slot, `None` for an absent optional slot
    pub fn slot(&self, category: Category) -> Option<&str> {
        match category {
            Category::Cpu => Some(&self.cpu),
            Category::Mainboard => Some(&self.mainboard),
            Category::Vga => Some(&self.vga),
            Category::Ram => Some(&self.ram),
            Category::Ssd => Some(&self.ssd),
            Category::Psu => Some(&self.psu),
            Category::Case => Some(&self.r#case),
            Category::CpuCooler => Some(&self.cpu_cooler),
            Category::Hdd => self.hdd.as_deref(),
            Category::Monitor => self.monitor.as_deref(),
        }
    }

    /// All filled slots in selection order
    pub fn slots(&self) -> impl Iterator<Item = (Category, &str)> {
        Category::ALL
            .iter()
            .filter_map(move |&category| self.slot(category).map(|id| (category, id)))
    }
}

/// Outcome of one bundle lookup: the key that was tried, and the bundle if
/// the table had an exact entry for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchAttempt<'a> {
    pub budget_key: String,
    pub bundle: Option<&'a ConfigBundle>,
}

/// Budget key for a raw VND amount, floor-divided to whole millions
pub fn budget_key(budget_raw: u64) -> String {
    format!("{}M", budget_raw / 1_000_000)
}

type BundleTable = HashMap<CpuBrand, HashMap<String, HashMap<String, ConfigBundle>>>;

/// Bundle tables, built-in plus user-supplied
pub struct ConfigMatcher {
    builtin: BundleTable,
    user: BundleTable,
}

impl ConfigMatcher {
    pub fn new() -> Self {
        let mut matcher = Self {
            builtin: HashMap::new(),
            user: HashMap::new(),
        };
        matcher.load_builtin_bundles();
        matcher
    }

    /// Exact lookup by brand, game and budget. The attempted key is always
    /// reported, matched or not.
    pub fn lookup(&self, brand: CpuBrand, game_id: &str, budget_raw: u64) -> MatchAttempt<'_> {
        let key = budget_key(budget_raw);
        let bundle = self
            .table_get(&self.builtin, brand, game_id, &key)
            .or_else(|| self.table_get(&self.user, brand, game_id, &key));
        if bundle.is_none() {
            log::debug!("no bundle for {} / {} / {}", brand, game_id, key);
        }
        MatchAttempt {
            budget_key: key,
            bundle,
        }
    }

    /// Register a user bundle under an explicit budget key ("15M")
    pub fn insert(
        &mut self,
        brand: CpuBrand,
        game_id: String,
        budget_key: String,
        bundle: ConfigBundle,
    ) -> BuildResult<()> {
        if !budget_key.ends_with('M') || budget_key[..budget_key.len() - 1].parse::<u64>().is_err()
        {
            return Err(BuildError::InvalidConfig {
                message: format!("malformed budget key: {}", budget_key),
            });
        }
        self.user
            .entry(brand)
            .or_default()
            .entry(game_id)
            .or_default()
            .insert(budget_key, bundle);
        Ok(())
    }

    /// Merge user bundles from a JSON map of game → budget key → bundle
    pub fn load_json(&mut self, brand: CpuBrand, json: &str) -> BuildResult<()> {
        let games: HashMap<String, HashMap<String, ConfigBundle>> = serde_json::from_str(json)?;
        for (game_id, budgets) in games {
            for (key, bundle) in budgets {
                self.insert(brand, game_id.clone(), key, bundle)?;
            }
        }
        Ok(())
    }

    /// Budget keys available for a brand/game pair, for display when a
    /// lookup misses
    pub fn available_budgets(&self, brand: CpuBrand, game_id: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .builtin
            .get(&brand)
            .and_then(|games| games.get(game_id))
            .into_iter()
            .chain(
                self.user
                    .get(&brand)
                    .and_then(|games| games.get(game_id))
                    .into_iter(),
            )
            .flat_map(|budgets| budgets.keys().map(String::as_str))
            .collect();
        keys.sort_unstable_by_key(|k| k[..k.len() - 1].parse::<u64>().unwrap_or(0));
        keys
    }

    fn table_get<'a>(
        &self,
        table: &'a BundleTable,
        brand: CpuBrand,
        game_id: &str,
        key: &str,
    ) -> Option<&'a ConfigBundle> {
        table.get(&brand)?.get(game_id)?.get(key)
    }

    fn load_builtin_bundles(&mut self) {
        let mut add = |brand: CpuBrand, game: &str, key: &str, bundle: ConfigBundle| {
            self.builtin
                .entry(brand)
                .or_default()
                .entry(game.to_string())
                .or_default()
                .insert(key.to_string(), bundle);
        };

        let intel_mid = ConfigBundle {
            cpu: "12400f".to_string(),
            mainboard: "HNZ-B760".to_string(),
            vga: "3060".to_string(),
            ram: "cosair-16".to_string(),
            ssd: "sstc-256".to_string(),
            psu: "VSP750".to_string(),
            r#case: "GA3".to_string(),
            cpu_cooler: "CR1000".to_string(),
            hdd: None,
            monitor: None,
        };
        let intel_high = ConfigBundle {
            cpu: "13600k".to_string(),
            mainboard: "MSI-Z690".to_string(),
            vga: "3070ti".to_string(),
            ram: "corsair-32".to_string(),
            ssd: "samsung-1TB".to_string(),
            psu: "COSAIR850".to_string(),
            r#case: "Corsair-5000D".to_string(),
            cpu_cooler: "NZXT-X63".to_string(),
            hdd: Some("4tb".to_string()),
            monitor: Some("240hz".to_string()),
        };
        let amd_mid = ConfigBundle {
            cpu: "5600x".to_string(),
            mainboard: "MSI-B550".to_string(),
            vga: "6600xt".to_string(),
            ram: "cosair-16".to_string(),
            ssd: "sstc-512".to_string(),
            psu: "VSP750".to_string(),
            r#case: "GA3".to_string(),
            cpu_cooler: "CR1000".to_string(),
            hdd: None,
            monitor: None,
        };
        let amd_high = ConfigBundle {
            cpu: "7800x3d".to_string(),
            mainboard: "MSI-B650".to_string(),
            vga: "7800xt".to_string(),
            ram: "corsair-32".to_string(),
            ssd: "samsung-1TB".to_string(),
            psu: "COSAIR850".to_string(),
            r#case: "Corsair-5000D".to_string(),
            cpu_cooler: "NZXT-X63".to_string(),
            hdd: None,
            monitor: Some("240hz".to_string()),
        };

        for game in ["valorant", "csgo", "lol", "pubg", "crossfire", "gta-v"] {
            add(CpuBrand::Intel, game, "10M", intel_mid.clone());
            add(CpuBrand::Intel, game, "15M", intel_mid.clone());
            add(CpuBrand::Intel, game, "20M", intel_high.clone());
            add(CpuBrand::Intel, game, "25M", intel_high.clone());
            add(CpuBrand::Amd, game, "10M", amd_mid.clone());
            add(CpuBrand::Amd, game, "15M", amd_mid.clone());
            add(CpuBrand::Amd, game, "20M", amd_high.clone());
            add(CpuBrand::Amd, game, "25M", amd_high.clone());
        }
    }
}

impl Default for ConfigMatcher {
    fn default() -> Self {
        Self::new()
    }
}
