//! Built-in game library
//!
//! Ships the sixteen titles the storefront configures builds for, with their
//! classification, Vietnamese notes and the per-preset FPS tables. User
//! tables can extend the library at runtime but never override a built-in.

use buildsan_shared::{
    BuildError, BuildResult, CpuDependency, FpsRange, FpsTable, GameProfile, GameType, QualityFps,
};
use std::collections::HashMap;

/// Game profile table keyed by game ID ("valorant", "gta-v", ...)
pub struct GameLibrary {
    builtin: HashMap<String, GameProfile>,
    user: HashMap<String, GameProfile>,
}

impl GameLibrary {
    pub fn new() -> Self {
        let mut library = Self {
            builtin: HashMap::new(),
            user: HashMap::new(),
        };
        library.load_builtin_games();
        library
    }

    /// Look up a game by ID, built-ins first
    pub fn get(&self, id: &str) -> Option<&GameProfile> {
        self.builtin.get(id).or_else(|| self.user.get(id))
    }

    /// Register a user-defined game. Built-in IDs cannot be overridden.
    pub fn insert(&mut self, id: String, profile: GameProfile) -> BuildResult<()> {
        if self.builtin.contains_key(&id) {
            return Err(BuildError::InvalidConfig {
                message: format!("cannot override built-in game: {}", id),
            });
        }
        self.user.insert(id, profile);
        Ok(())
    }

    /// Merge user-defined games from a JSON map of ID to profile
    pub fn load_json(&mut self, json: &str) -> BuildResult<()> {
        let profiles: HashMap<String, GameProfile> = serde_json::from_str(json)?;
        for (id, profile) in profiles {
            self.insert(id, profile)?;
        }
        Ok(())
    }

    /// All known game IDs, built-ins then user entries, sorted within each
    pub fn ids(&self) -> Vec<&str> {
        let mut builtin: Vec<&str> = self.builtin.keys().map(String::as_str).collect();
        let mut user: Vec<&str> = self.user.keys().map(String::as_str).collect();
        builtin.sort_unstable();
        user.sort_unstable();
        builtin.extend(user);
        builtin
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtin.is_empty() && self.user.is_empty()
    }

    fn load_builtin_games(&mut self) {
        let mut add = |id: &str,
                       name: &str,
                       game_type: GameType,
                       cpu_dependency: CpuDependency,
                       notes: &str,
                       rows: [(u32, u32); 4]| {
            let [low, medium, high, ultra] = rows;
            self.builtin.insert(
                id.to_string(),
                GameProfile {
                    name: name.to_string(),
                    game_type,
                    cpu_dependency,
                    notes: notes.to_string(),
                    fps: FpsTable {
                        low: preset_row(low, "thấp"),
                        medium: preset_row(medium, "trung bình"),
                        high: preset_row(high, "cao"),
                        ultra: preset_row(ultra, "ultra"),
                    },
                },
            );
        };

        add(
            "valorant",
            "Valorant",
            GameType::Esports,
            CpuDependency::High,
            "Valorant là game esports nhẹ, tối ưu tốt cho cả CPU và GPU.",
            [(350, 400), (300, 350), (250, 300), (200, 250)],
        );
        add(
            "csgo",
            "CS:GO",
            GameType::Esports,
            CpuDependency::High,
            "CS:GO phụ thuộc nhiều vào sức mạnh CPU, tối ưu tốt cho gaming.",
            [(320, 350), (270, 300), (220, 250), (170, 200)],
        );
        add(
            "pubg",
            "PUBG",
            GameType::BattleRoyale,
            CpuDependency::High,
            "PUBG đòi hỏi cân bằng giữa CPU và GPU để đạt hiệu năng tốt nhất.",
            [(160, 180), (130, 150), (100, 120), (80, 100)],
        );
        add(
            "lol",
            "Liên Minh Huyền Thoại",
            GameType::Esports,
            CpuDependency::Medium,
            "Liên Minh Huyền Thoại được tối ưu rất tốt, chạy mượt trên hầu hết cấu hình.",
            [(350, 400), (300, 350), (250, 300), (200, 250)],
        );
        add(
            "gta-v",
            "GTA V",
            GameType::Aaa,
            CpuDependency::High,
            "GTA V là game open-world đòi hỏi cả CPU và GPU mạnh để đạt FPS cao.",
            [(100, 120), (80, 100), (60, 80), (45, 60)],
        );
        add(
            "elden-ring",
            "Elden Ring",
            GameType::Aaa,
            CpuDependency::Medium,
            "Elden Ring có giới hạn FPS và đòi hỏi cấu hình khá để chơi mượt.",
            [(80, 90), (65, 75), (50, 60), (40, 50)],
        );
        add(
            "naraka",
            "Naraka: Bladepoint",
            GameType::BattleRoyale,
            CpuDependency::Medium,
            "Naraka: Bladepoint cần GPU tốt để xử lý đồ họa và hiệu ứng.",
            [(120, 140), (100, 120), (80, 100), (60, 80)],
        );
        add(
            "genshin",
            "Genshin Impact",
            GameType::Mmorpg,
            CpuDependency::Medium,
            "Genshin Impact được tối ưu tốt và có thể chạy mượt trên nhiều cấu hình.",
            [(180, 200), (160, 180), (140, 160), (120, 140)],
        );
        add(
            "fo4",
            "FIFA Online 4",
            GameType::Esports,
            CpuDependency::Medium,
            "FIFA Online 4 được tối ưu tốt cho cả CPU và GPU.",
            [(280, 300), (230, 250), (180, 200), (130, 150)],
        );
        add(
            "black-myth-wukong",
            "Black Myth: Wukong",
            GameType::Aaa,
            CpuDependency::High,
            "Black Myth: Wukong là game AAA đòi hỏi cấu hình mạnh.",
            [(90, 100), (75, 85), (60, 70), (50, 60)],
        );
        add(
            "god-of-war",
            "God of War",
            GameType::Aaa,
            CpuDependency::Medium,
            "God of War là game đòi hỏi cấu hình mạnh cho các cài đặt cao.",
            [(100, 110), (85, 95), (70, 80), (60, 70)],
        );
        add(
            "battle-teams-2",
            "Battle Teams 2",
            GameType::Esports,
            CpuDependency::High,
            "Battle Teams 2 là game bắn súng nhẹ, tối ưu tốt cho nhiều cấu hình.",
            [(200, 250), (150, 200), (100, 150), (80, 100)],
        );
        add(
            "delta-force",
            "Delta Force",
            GameType::Esports,
            CpuDependency::Medium,
            "Delta Force là game bắn súng cổ điển, chạy tốt trên hầu hết cấu hình.",
            [(250, 300), (200, 250), (150, 200), (100, 150)],
        );
        add(
            "audition",
            "Audition",
            GameType::Casual,
            CpuDependency::Low,
            "Audition là game nhảy nhẹ, tối ưu tốt cho mọi cấu hình.",
            [(200, 250), (180, 220), (150, 180), (120, 150)],
        );
        add(
            "mu-origin",
            "MU Origin",
            GameType::Mmorpg,
            CpuDependency::Medium,
            "MU Origin là game nhập vai nhẹ, chạy tốt trên nhiều cấu hình.",
            [(180, 220), (150, 180), (120, 150), (90, 120)],
        );
        add(
            "crossfire",
            "CrossFire",
            GameType::Esports,
            CpuDependency::VeryHigh,
            "CrossFire là game bắn súng online phổ biến, tối ưu tốt cho CPU.",
            [(300, 350), (250, 300), (200, 250), (150, 200)],
        );
    }
}

impl Default for GameLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn preset_row((min, max): (u32, u32), setting: &str) -> QualityFps {
    QualityFps {
        fps: FpsRange::new(min, max),
        description: format!("Cài đặt {}, độ phân giải 1080p", setting),
    }
}
