//! Game profiles: classification plus the per-preset FPS table

use crate::QualityPreset;
use serde::{Deserialize, Serialize};

/// Broad game classification, drives the gaming-score weights and the
/// CPU-architecture FPS boosts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    Esports,
    BattleRoyale,
    Mmorpg,
    Aaa,
    Strategy,
    Sandbox,
    Casual,
    General,
}

/// How strongly a game's frame rate depends on CPU performance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum CpuDependency {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Inclusive FPS range. Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FpsRange {
    pub min: u32,
    pub max: u32,
}

impl FpsRange {
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max, "FPS range must be ordered");
        Self { min, max }
    }

    /// Scale both ends by a boost factor, flooring the result
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min: (self.min as f64 * factor).floor() as u32,
            max: (self.max as f64 * factor).floor() as u32,
        }
    }
}

impl std::fmt::Display for FpsRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One row of a game's FPS table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityFps {
    pub fps: FpsRange,
    pub description: String,
}

/// FPS rows for all four quality presets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FpsTable {
    pub low: QualityFps,
    pub medium: QualityFps,
    pub high: QualityFps,
    pub ultra: QualityFps,
}

impl FpsTable {
    pub fn get(&self, preset: QualityPreset) -> &QualityFps {
        match preset {
            QualityPreset::Low => &self.low,
            QualityPreset::Medium => &self.medium,
            QualityPreset::High => &self.high,
            QualityPreset::Ultra => &self.ultra,
        }
    }
}

/// Everything the engine knows about one game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameProfile {
    /// Display name ("Liên Minh Huyền Thoại", not "lol")
    pub name: String,
    pub game_type: GameType,
    pub cpu_dependency: CpuDependency,
    /// Free-form note surfaced alongside the FPS estimate
    pub notes: String,
    pub fps: FpsTable,
}
