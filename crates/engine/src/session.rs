//! Engine facade and per-user build session
//!
//! `Engine` owns the immutable tables (catalog, bundle table, game
//! library); `BuildSession` holds one user's mutable selection. Applying a
//! bundle raises a re-entrancy flag so the per-slot updates it performs do
//! not each trigger a full recomputation — the session recomputes once,
//! after the last slot is placed.

use crate::catalog::CatalogStore;
use crate::compat;
use crate::fps::{FpsEstimate, FpsEstimator};
use crate::games::GameLibrary;
use crate::matcher::{ConfigBundle, ConfigMatcher, MatchAttempt};
use crate::scoring::{self, BuildScore, PerformanceSnapshot};
use buildsan_shared::{BuildResult, Category, CpuBrand, GameType, QualityPreset};
use std::collections::HashMap;

/// Options still selectable after a CPU or mainboard pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOptions {
    pub mainboards: Vec<String>,
    pub ram: Vec<String>,
}

/// Immutable rule tables shared by every session
pub struct Engine {
    catalog: CatalogStore,
    matcher: ConfigMatcher,
    games: GameLibrary,
}

impl Engine {
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            matcher: ConfigMatcher::new(),
            games: GameLibrary::new(),
        }
    }

    /// Ingest a JSON catalog and build the engine around it
    pub fn from_json(catalog_json: &str) -> BuildResult<Self> {
        Ok(Self::new(CatalogStore::from_json(catalog_json)?))
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn games(&self) -> &GameLibrary {
        &self.games
    }

    /// Extend the bundle table before sessions start
    pub fn matcher_mut(&mut self) -> &mut ConfigMatcher {
        &mut self.matcher
    }

    /// Extend the game library before sessions start
    pub fn games_mut(&mut self) -> &mut GameLibrary {
        &mut self.games
    }

    /// Bundle lookup for the auto-configuration flow
    pub fn request_auto_config(
        &self,
        brand: CpuBrand,
        game_id: &str,
        budget_raw: u64,
    ) -> MatchAttempt<'_> {
        self.matcher.lookup(brand, game_id, budget_raw)
    }

    /// CPU selected: compute the allowed mainboards and RAM, healing the
    /// session if its current picks became incompatible
    pub fn select_cpu(&self, session: &mut BuildSession, id: &str) -> AllowedOptions {
        self.place(session, Category::Cpu, id);
        self.heal_after_platform_change(session);
        self.allowed_options(session)
    }

    /// Mainboard selected: recompute the allowed RAM, healing the session
    pub fn select_mainboard(&self, session: &mut BuildSession, id: &str) -> AllowedOptions {
        self.place(session, Category::Mainboard, id);
        self.heal_after_platform_change(session);
        self.allowed_options(session)
    }

    /// Change one slot. Returns the recomputed snapshot, or `None` while a
    /// bundle application is in progress.
    pub fn set_selection(
        &self,
        session: &mut BuildSession,
        category: Category,
        id: &str,
    ) -> Option<PerformanceSnapshot> {
        if session.auto_selecting {
            return None;
        }
        self.place(session, category, id);
        if matches!(category, Category::Cpu | Category::Mainboard) {
            self.heal_after_platform_change(session);
        }
        Some(self.snapshot(session))
    }

    /// Apply every slot of a bundle, then recompute once
    pub fn apply_bundle(
        &self,
        session: &mut BuildSession,
        bundle: &ConfigBundle,
    ) -> PerformanceSnapshot {
        session.auto_selecting = true;
        for (category, id) in bundle.slots() {
            self.place(session, category, id);
        }
        session.auto_selecting = false;
        self.heal_after_platform_change(session);
        self.snapshot(session)
    }

    /// Sum of the prices of all selected components known to the catalog.
    /// Ad hoc selections have no price yet and contribute nothing.
    pub fn total_price(&self, session: &BuildSession) -> u64 {
        session
            .selection
            .iter()
            .filter_map(|(&category, id)| self.catalog.get(category, id))
            .map(|record| record.price)
            .sum()
    }

    /// FPS estimate for the session's CPU in the given game
    pub fn fps_estimate(
        &self,
        session: &BuildSession,
        game_id: &str,
        preset: Option<QualityPreset>,
    ) -> Option<FpsEstimate> {
        let cpu_name = self.display_name(session, Category::Cpu);
        FpsEstimator::new(&self.games).estimate(game_id, preset, &cpu_name)
    }

    /// Aggregate build score over the session's rated slots
    pub fn build_score(&self, session: &BuildSession) -> BuildScore {
        let rating = |category: Category| {
            session
                .selection
                .get(&category)
                .and_then(|id| self.catalog.get(category, id))
                .and_then(scoring::record_rating)
        };
        scoring::build_score(&rating)
    }

    /// Pure recomputation of the performance panel from the current state
    pub fn snapshot(&self, session: &BuildSession) -> PerformanceSnapshot {
        let cpu_score = scoring::cpu_perf_score(&self.display_name(session, Category::Cpu));
        let gpu_score = scoring::gpu_perf_score(&self.display_name(session, Category::Vga));
        let game_type = session
            .selected_game
            .as_deref()
            .and_then(|id| self.games.get(id))
            .map(|game| game.game_type)
            .unwrap_or(GameType::General);
        PerformanceSnapshot::compute(cpu_score, gpu_score, game_type)
    }

    fn allowed_options(&self, session: &BuildSession) -> AllowedOptions {
        let cpu = session
            .selection
            .get(&Category::Cpu)
            .and_then(|id| self.catalog.get(Category::Cpu, id));
        let mainboard = session
            .selection
            .get(&Category::Mainboard)
            .and_then(|id| self.catalog.get(Category::Mainboard, id));
        match cpu {
            Some(cpu) => AllowedOptions {
                mainboards: compat::mainboards_for(&self.catalog, cpu),
                ram: compat::ram_for(&self.catalog, cpu, mainboard),
            },
            None => AllowedOptions {
                mainboards: Vec::new(),
                ram: Vec::new(),
            },
        }
    }

    /// Record a selection, keeping IDs the catalog has never seen. The
    /// storefront injects seasonal parts straight into the dropdowns, so an
    /// unknown ID is a warning, not an error.
    fn place(&self, session: &mut BuildSession, category: Category, id: &str) {
        if !self.catalog.contains(category, id) {
            log::warn!("selected {} id {:?} is not in the catalog", category, id);
        }
        session.selection.insert(category, id.to_string());
    }

    /// Clear mainboard/RAM selections the current CPU no longer supports
    fn heal_after_platform_change(&self, session: &mut BuildSession) {
        let cpu = match session
            .selection
            .get(&Category::Cpu)
            .and_then(|id| self.catalog.get(Category::Cpu, id))
        {
            Some(cpu) => cpu.clone(),
            // Ad hoc CPU: nothing to validate against
            None => return,
        };

        let mainboard = session
            .selection
            .get(&Category::Mainboard)
            .and_then(|id| self.catalog.get(Category::Mainboard, id))
            .cloned();

        if let Some(ref mb) = mainboard {
            if !compat::mainboard_fits(&cpu, mb) {
                log::warn!("clearing mainboard {:?}: socket mismatch with CPU", mb.name);
                session.selection.remove(&Category::Mainboard);
            }
        }

        let mainboard = session
            .selection
            .get(&Category::Mainboard)
            .and_then(|id| self.catalog.get(Category::Mainboard, id))
            .cloned();

        if let Some(ram_id) = session.selection.get(&Category::Ram).cloned() {
            let ram = self.catalog.get(Category::Ram, &ram_id);
            let keeps = match (&mainboard, ram) {
                (Some(mb), Some(ram)) => compat::ram_fits(&cpu, mb, ram),
                // No mainboard means no valid RAM; unknown RAM stays put
                (None, Some(_)) => false,
                _ => true,
            };
            if !keeps {
                log::warn!("clearing RAM {:?}: incompatible with platform", ram_id);
                session.selection.remove(&Category::Ram);
            }
        }
    }
}

/// One user's build in progress
#[derive(Debug, Default, Clone)]
pub struct BuildSession {
    selection: HashMap<Category, String>,
    selected_game: Option<String>,
    auto_selecting: bool,
}

impl BuildSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected component ID for a slot
    pub fn selected(&self, category: Category) -> Option<&str> {
        self.selection.get(&category).map(String::as_str)
    }

    /// Pick the game the gaming score and FPS panel are computed for
    pub fn select_game(&mut self, game_id: Option<String>) {
        self.selected_game = game_id;
    }

    pub fn selected_game(&self) -> Option<&str> {
        self.selected_game.as_deref()
    }

    pub fn clear(&mut self, category: Category) {
        self.selection.remove(&category);
    }
}

impl Engine {
    /// Marketing name used by the name heuristics: the catalog record's
    /// name when the ID is known, the raw ID otherwise
    fn display_name(&self, session: &BuildSession, category: Category) -> String {
        match session.selection.get(&category) {
            Some(id) => self
                .catalog
                .get(category, id)
                .map(|record| record.name.clone())
                .unwrap_or_else(|| id.clone()),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogData, CatalogEntry};
    use buildsan_shared::{ComponentRecord, ComponentSpec, MemoryType};

    fn entry(id: &str, name: &str, price: u64, score: f32, spec: ComponentSpec) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            record: ComponentRecord::new(name, price, score, spec),
        }
    }

    fn engine() -> Engine {
        let data = CatalogData {
            components: vec![
                entry(
                    "12400f",
                    "Intel Core i5-12400F",
                    2_890_000,
                    6.5,
                    ComponentSpec::Cpu {
                        socket: "LGA1700".to_string(),
                        ram_support: vec![MemoryType::Ddr4, MemoryType::Ddr5],
                    },
                ),
                entry(
                    "5600x",
                    "AMD Ryzen 5 5600X",
                    3_190_000,
                    6.5,
                    ComponentSpec::Cpu {
                        socket: "AM4".to_string(),
                        ram_support: vec![MemoryType::Ddr4],
                    },
                ),
                entry(
                    "HNZ-B760",
                    "MSI PRO B760M-A DDR4",
                    2_990_000,
                    6.0,
                    ComponentSpec::Mainboard {
                        sockets: vec!["LGA1700".to_string()],
                        memory_type: MemoryType::Ddr4,
                    },
                ),
                entry(
                    "MSI-B550",
                    "MSI B550M PRO-VDH",
                    2_490_000,
                    6.0,
                    ComponentSpec::Mainboard {
                        sockets: vec!["AM4".to_string()],
                        memory_type: MemoryType::Ddr4,
                    },
                ),
                entry(
                    "cosair-16",
                    "Corsair Vengeance LPX 16GB DDR4",
                    1_290_000,
                    6.0,
                    ComponentSpec::Ram {
                        memory_type: MemoryType::Ddr4,
                        capacity_gb: 16,
                        speed_mhz: 3200,
                    },
                ),
                entry(
                    "3060",
                    "NVIDIA GeForce RTX 3060 12GB",
                    6_990_000,
                    6.5,
                    ComponentSpec::Vga { vram_gb: 12 },
                ),
                entry(
                    "sstc-256",
                    "SSTC Megatron 256GB",
                    490_000,
                    5.0,
                    ComponentSpec::Ssd { capacity_gb: 256 },
                ),
                entry(
                    "VSP750",
                    "VSP Elite 750W",
                    990_000,
                    5.0,
                    ComponentSpec::Psu { wattage: 750 },
                ),
                entry(
                    "GA3",
                    "Vitra GA3 ATX",
                    590_000,
                    5.0,
                    ComponentSpec::Case {
                        form_factor: "ATX".to_string(),
                    },
                ),
                entry(
                    "CR1000",
                    "Coolmoon CR1000",
                    390_000,
                    5.0,
                    ComponentSpec::CpuCooler {
                        cooler_type: "Air".to_string(),
                    },
                ),
            ],
        };
        Engine::new(CatalogStore::from_data(data).unwrap())
    }

    #[test]
    fn test_select_cpu_filters_options() {
        let engine = engine();
        let mut session = BuildSession::new();
        let options = engine.select_cpu(&mut session, "12400f");
        assert_eq!(options.mainboards, vec!["HNZ-B760"]);
        // no mainboard selected yet, so no RAM options
        assert!(options.ram.is_empty());

        let options = engine.select_mainboard(&mut session, "HNZ-B760");
        assert_eq!(options.ram, vec!["cosair-16"]);
    }

    #[test]
    fn test_cpu_swap_clears_incompatible_platform() {
        let engine = engine();
        let mut session = BuildSession::new();
        engine.select_cpu(&mut session, "12400f");
        engine.select_mainboard(&mut session, "HNZ-B760");
        engine.set_selection(&mut session, Category::Ram, "cosair-16");

        // Swapping to AM4 invalidates the LGA1700 board; the RAM goes with
        // it because a session without a mainboard has no valid RAM
        let options = engine.select_cpu(&mut session, "5600x");
        assert_eq!(options.mainboards, vec!["MSI-B550"]);
        assert_eq!(session.selected(Category::Mainboard), None);
        assert_eq!(session.selected(Category::Ram), None);
    }

    #[test]
    fn test_apply_bundle_recomputes_once() {
        let engine = engine();
        let mut session = BuildSession::new();
        let bundle = engine
            .request_auto_config(CpuBrand::Intel, "valorant", 15_000_000)
            .bundle
            .expect("built-in bundle")
            .clone();

        let snapshot = engine.apply_bundle(&mut session, &bundle);
        assert_eq!(session.selected(Category::Cpu), Some("12400f"));
        assert!(snapshot.cpu_score > 0);
        assert!(snapshot.gpu_score > 0);
    }

    #[test]
    fn test_set_selection_suppressed_during_bundle_application() {
        let engine = engine();
        let mut session = BuildSession::new();
        session.auto_selecting = true;
        assert!(engine
            .set_selection(&mut session, Category::Vga, "3060")
            .is_none());
        session.auto_selecting = false;
        assert!(engine
            .set_selection(&mut session, Category::Vga, "3060")
            .is_some());
    }

    #[test]
    fn test_ad_hoc_ids_are_kept_without_price() {
        let engine = engine();
        let mut session = BuildSession::new();
        engine.set_selection(&mut session, Category::Vga, "3060");
        engine.set_selection(&mut session, Category::Ssd, "limited-edition-ssd");

        assert_eq!(
            session.selected(Category::Ssd),
            Some("limited-edition-ssd")
        );
        // unknown ID contributes no price
        assert_eq!(engine.total_price(&session), 6_990_000);
    }

    #[test]
    fn test_total_price_sums_known_selections() {
        let engine = engine();
        let mut session = BuildSession::new();
        engine.select_cpu(&mut session, "12400f");
        engine.select_mainboard(&mut session, "HNZ-B760");
        assert_eq!(engine.total_price(&session), 2_890_000 + 2_990_000);
    }

    #[test]
    fn test_snapshot_uses_selected_game_type() {
        let engine = engine();
        let mut session = BuildSession::new();
        engine.select_cpu(&mut session, "5600x");
        engine.set_selection(&mut session, Category::Vga, "3060");

        // cpu 76, gpu 83: default blend rounds to 81, esports to 80
        let general = engine.snapshot(&session);
        assert_eq!(general.gaming, 81);
        session.select_game(Some("csgo".to_string()));
        let esports = engine.snapshot(&session);
        assert_eq!(esports.gaming, 80);
    }

    #[test]
    fn test_fps_estimate_uses_catalog_cpu_name() {
        let engine = engine();
        let mut session = BuildSession::new();
        engine.select_cpu(&mut session, "5600x");
        let estimate = engine
            .fps_estimate(&session, "valorant", Some(QualityPreset::Low))
            .expect("known game");
        // plain Ryzen gets the esports boost
        assert_eq!(estimate.boost_factor, 1.15);
    }

    #[test]
    fn test_build_score_over_selection() {
        let engine = engine();
        let mut session = BuildSession::new();
        engine.select_cpu(&mut session, "12400f");
        engine.select_mainboard(&mut session, "HNZ-B760");
        let score = engine.build_score(&session);
        // (6.5 + 6.0) / 8 = 1.5625 -> 1.56
        assert_eq!(score.total, 1.56);
        assert!(score.upgrade_hint.is_none());
    }
}
