//! Component records and their per-category attributes

use crate::Category;
use serde::{Deserialize, Serialize};

/// RAM generation, the axis the CPU/mainboard/RAM compatibility rules run on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MemoryType {
    #[serde(rename = "DDR3")]
    Ddr3,
    #[serde(rename = "DDR4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    Ddr5,
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoryType::Ddr3 => write!(f, "DDR3"),
            MemoryType::Ddr4 => write!(f, "DDR4"),
            MemoryType::Ddr5 => write!(f, "DDR5"),
        }
    }
}

/// One catalog entry: common fields plus the category-specific spec.
///
/// `score` is the component rating on the 0–10 catalog scale (used by the
/// aggregate build score); it is unrelated to the 0–100 name-derived
/// performance scores the engine computes for CPUs and GPUs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentRecord {
    pub name: String,
    /// Price in VND. Never negative by construction.
    pub price: u64,
    /// Catalog rating, 0–10. Validated at catalog load.
    pub score: f32,
    #[serde(flatten)]
    pub spec: ComponentSpec,
}

/// Category-specific attributes, one variant per slot.
///
/// A tagged enum instead of one record with many optional fields: a CPU can
/// never accidentally carry a `memory_type` and a PSU can never carry a
/// socket, so the compatibility rules don't need defensive field checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum ComponentSpec {
    Cpu {
        socket: String,
        ram_support: Vec<MemoryType>,
    },
    Mainboard {
        sockets: Vec<String>,
        memory_type: MemoryType,
    },
    Ram {
        memory_type: MemoryType,
        capacity_gb: u32,
        speed_mhz: u32,
    },
    Vga {
        vram_gb: u32,
    },
    Ssd {
        capacity_gb: u32,
    },
    Hdd {
        capacity_gb: u32,
    },
    Psu {
        wattage: u32,
    },
    Case {
        form_factor: String,
    },
    CpuCooler {
        cooler_type: String,
    },
    Monitor {
        refresh_rate_hz: u32,
        screen_size_in: f32,
    },
}

impl ComponentSpec {
    /// The slot this spec belongs to
    pub fn category(&self) -> Category {
        match self {
            ComponentSpec::Cpu { .. } => Category::Cpu,
            ComponentSpec::Mainboard { .. } => Category::Mainboard,
            ComponentSpec::Ram { .. } => Category::Ram,
            ComponentSpec::Vga { .. } => Category::Vga,
            ComponentSpec::Ssd { .. } => Category::Ssd,
            ComponentSpec::Hdd { .. } => Category::Hdd,
            ComponentSpec::Psu { .. } => Category::Psu,
            ComponentSpec::Case { .. } => Category::Case,
            ComponentSpec::CpuCooler { .. } => Category::CpuCooler,
            ComponentSpec::Monitor { .. } => Category::Monitor,
        }
    }
}

impl ComponentRecord {
    /// Convenience constructor used by the built-in tables and tests
    pub fn new(name: impl Into<String>, price: u64, score: f32, spec: ComponentSpec) -> Self {
        Self {
            name: name.into(),
            price,
            score,
            spec,
        }
    }
}
