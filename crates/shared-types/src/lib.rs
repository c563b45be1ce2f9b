//! Shared types for the Buildsan PC-build configurator
//!
//! This crate contains the domain types shared between the rules engine and
//! any presentation layer: component records, game profiles, score types and
//! the common error enum. Everything here is plain data — no behavior beyond
//! small accessors — so the presentation layer can serialize any of it
//! straight to the UI.

use serde::{Deserialize, Serialize};

pub mod component;
pub mod errors;
pub mod game;

pub use component::{ComponentRecord, ComponentSpec, MemoryType};
pub use errors::{BuildError, BuildResult};
pub use game::{CpuDependency, FpsRange, FpsTable, GameProfile, GameType, QualityFps};

/// Component slot in a build
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Cpu,
    Mainboard,
    Vga,
    Ram,
    Ssd,
    Hdd,
    Psu,
    Case,
    CpuCooler,
    Monitor,
}

impl Category {
    /// Every selectable slot, in the order the UI presents them
    pub const ALL: [Category; 10] = [
        Category::Cpu,
        Category::Mainboard,
        Category::Vga,
        Category::Ram,
        Category::Ssd,
        Category::Hdd,
        Category::Psu,
        Category::Case,
        Category::CpuCooler,
        Category::Monitor,
    ];

    /// The eight slots that participate in the aggregate build score.
    /// HDD and monitor are priced but never rated.
    pub const SCORED: [Category; 8] = [
        Category::Cpu,
        Category::Mainboard,
        Category::Vga,
        Category::Ram,
        Category::Ssd,
        Category::Psu,
        Category::Case,
        Category::CpuCooler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Mainboard => "mainboard",
            Category::Vga => "vga",
            Category::Ram => "ram",
            Category::Ssd => "ssd",
            Category::Hdd => "hdd",
            Category::Psu => "psu",
            Category::Case => "case",
            Category::CpuCooler => "cpuCooler",
            Category::Monitor => "monitor",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU platform a bundle table is keyed by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CpuBrand {
    Intel,
    Amd,
}

impl std::fmt::Display for CpuBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CpuBrand::Intel => write!(f, "Intel"),
            CpuBrand::Amd => write!(f, "Amd"),
        }
    }
}

/// Graphics quality preset, one row of a game's FPS table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    Medium,
    High,
    Ultra,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "low",
            QualityPreset::Medium => "medium",
            QualityPreset::High => "high",
            QualityPreset::Ultra => "ultra",
        }
    }
}
