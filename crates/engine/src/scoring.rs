//! Heuristic performance scoring
//!
//! Two unrelated scales live here and never mix arithmetically:
//! - catalog component ratings (0–10), averaged into the aggregate build
//!   score with its Vietnamese recommendation messages;
//! - name-derived CPU/GPU performance scores (0–100), which feed the task
//!   scores, the bottleneck analysis and the FPS estimator.
//!
//! The name heuristics only need the marketing name of the part; they look
//! at the tier keyword, the generation digits and a handful of suffixes.

use buildsan_shared::{Category, ComponentRecord, ComponentSpec, GameType};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Base score per GPU series, checked top-down so the first match wins.
/// Most-specific entries come first: "rtx 4090" must be tested before the
/// "rtx 40" series fallback or the fallback swallows every 40-series card.
const GPU_SERIES: &[(&str, u32)] = &[
    ("rtx 4090", 98),
    ("rtx 4080", 95),
    ("rtx 4070", 90),
    ("rtx 4060", 85),
    ("rtx 40", 90),
    ("rtx 3090", 95),
    ("rtx 3080", 90),
    ("rtx 3070", 85),
    ("rtx 3060", 80),
    ("rtx 2080", 85),
    ("rtx 2070", 80),
    ("rtx 2060", 75),
    ("gtx 1080", 75),
    ("gtx 1070", 70),
    ("gtx 1060", 65),
    ("rx 7900", 95),
    ("rx 7800", 90),
    ("rx 7700", 85),
    ("rx 7600", 80),
    ("rx 6900", 90),
    ("rx 6800", 85),
    ("rx 6700", 80),
    ("rx 6600", 75),
];

static INTEL_GEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})th gen|i[3579]-(\d{1,2})\d{3}").unwrap());
static RYZEN_GEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"ryzen \d+ (\d)\d{3}").unwrap());

/// CPU generation parsed from the marketing name ("12th Gen", "i7-12700",
/// "Ryzen 7 7800X3D"). `None` when the name carries no generation digits.
pub fn cpu_generation(name: &str) -> Option<u32> {
    let normalized = name.to_lowercase();
    if let Some(caps) = INTEL_GEN.captures(&normalized) {
        let gen = caps.get(1).or_else(|| caps.get(2));
        if let Some(m) = gen {
            return m.as_str().parse().ok();
        }
    }
    RYZEN_GEN
        .captures(&normalized)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Heuristic CPU performance score, 0–100. Empty name scores 0.
pub fn cpu_perf_score(name: &str) -> u32 {
    let normalized = name.to_lowercase();
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return 0;
    }

    let base: f64 = if normalized.contains("i9") {
        85.0
    } else if normalized.contains("i7") {
        75.0
    } else if normalized.contains("i5") {
        65.0
    } else if normalized.contains("i3") {
        55.0
    } else if normalized.contains("ryzen 9") {
        85.0
    } else if normalized.contains("ryzen 7") {
        75.0
    } else if normalized.contains("ryzen 5") {
        65.0
    } else if normalized.contains("ryzen 3") {
        55.0
    } else {
        45.0
    };

    let gen_bonus = cpu_generation(normalized)
        .map(|gen| (gen as f64 * 1.5).min(15.0))
        .unwrap_or(0.0);

    let mut feature_bonus = 0.0;
    if normalized.contains('k') || normalized.contains('x') {
        feature_bonus += 3.0;
    }
    if normalized.contains("xt") {
        feature_bonus += 4.0;
    }
    if normalized.contains("hk") {
        feature_bonus += 5.0;
    }

    (base + gen_bonus + feature_bonus).min(100.0).round() as u32
}

/// Heuristic GPU performance score, 0–100. Unknown series scores only its
/// suffix and VRAM bonuses; empty name scores 0.
pub fn gpu_perf_score(name: &str) -> u32 {
    let normalized = name.to_lowercase();
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return 0;
    }

    let base = GPU_SERIES
        .iter()
        .find(|(series, _)| normalized.contains(series))
        .map(|(_, score)| *score)
        .unwrap_or(0);

    let mut feature_bonus = 0;
    if normalized.contains("ti") {
        feature_bonus += 3;
    }
    if normalized.contains("super") {
        feature_bonus += 2;
    }
    if normalized.contains("xt") {
        feature_bonus += 2;
    }

    let vram_bonus = if normalized.contains("24gb") {
        5
    } else if normalized.contains("16gb") {
        4
    } else if normalized.contains("12gb") {
        3
    } else if normalized.contains("8gb") {
        2
    } else {
        0
    };

    (base + feature_bonus + vram_bonus).min(100)
}

fn blend(cpu: u32, gpu: u32, cpu_weight: f64, gpu_weight: f64) -> u32 {
    let score = (cpu as f64 * cpu_weight + gpu as f64 * gpu_weight).round();
    (score as u32).min(100)
}

/// Gaming score with type-dependent weights: esports leans on the CPU,
/// AAA titles on the GPU.
pub fn gaming_score(cpu: u32, gpu: u32, game_type: GameType) -> u32 {
    let (cpu_weight, gpu_weight) = match game_type {
        GameType::Esports => (0.5, 0.5),
        GameType::Strategy => (0.6, 0.4),
        GameType::Aaa => (0.2, 0.8),
        _ => (0.3, 0.7),
    };
    blend(cpu, gpu, cpu_weight, gpu_weight)
}

pub fn graphics_score(cpu: u32, gpu: u32) -> u32 {
    blend(cpu, gpu, 0.3, 0.7)
}

pub fn office_score(cpu: u32, gpu: u32) -> u32 {
    blend(cpu, gpu, 0.8, 0.2)
}

pub fn livestream_score(gaming: u32, cpu: u32) -> u32 {
    blend(gaming, cpu, 0.4, 0.6)
}

pub fn render_score(graphics: u32, cpu: u32, gpu: u32) -> u32 {
    let score = (graphics as f64 * 0.5 + cpu as f64 * 0.3 + gpu as f64 * 0.2).round();
    (score as u32).min(100)
}

/// Which side of the build limits the other
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Bottleneck {
    Cpu { percentage: u32 },
    Gpu { percentage: u32 },
    Balanced,
    Unknown,
}

impl Bottleneck {
    /// CPU/GPU ratio analysis. A zero score on either side means the
    /// analysis has nothing to work with, never a division by zero.
    pub fn analyze(cpu_score: u32, gpu_score: u32) -> Self {
        if cpu_score == 0 || gpu_score == 0 {
            return Bottleneck::Unknown;
        }
        let ratio = cpu_score as f64 / gpu_score as f64;
        if ratio > 1.2 {
            Bottleneck::Cpu {
                percentage: ((ratio - 1.0) / ratio * 100.0).round() as u32,
            }
        } else if ratio < 0.8 {
            Bottleneck::Gpu {
                percentage: ((1.0 - ratio) / ratio * 100.0).round() as u32,
            }
        } else {
            Bottleneck::Balanced
        }
    }

    pub fn percentage(&self) -> u32 {
        match self {
            Bottleneck::Cpu { percentage } | Bottleneck::Gpu { percentage } => *percentage,
            _ => 0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Bottleneck::Cpu { .. } => "CPU đang là điểm nghẽn",
            Bottleneck::Gpu { .. } => "GPU đang là điểm nghẽn",
            Bottleneck::Balanced => "Cân bằng lý tưởng",
            Bottleneck::Unknown => "Không đủ thông tin để phân tích",
        }
    }
}

/// One full recomputation of the performance panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PerformanceSnapshot {
    pub cpu_score: u32,
    pub gpu_score: u32,
    pub gaming: u32,
    pub graphics: u32,
    pub office: u32,
    pub livestream: u32,
    pub render: u32,
    pub bottleneck: Bottleneck,
}

impl PerformanceSnapshot {
    /// Compute every task score from the two name-derived scores.
    /// `game_type` is the currently selected game's classification
    /// (General when no game is selected).
    pub fn compute(cpu_score: u32, gpu_score: u32, game_type: GameType) -> Self {
        let gaming = gaming_score(cpu_score, gpu_score, game_type);
        let graphics = graphics_score(cpu_score, gpu_score);
        Self {
            cpu_score,
            gpu_score,
            gaming,
            graphics,
            office: office_score(cpu_score, gpu_score),
            livestream: livestream_score(gaming, cpu_score),
            render: render_score(graphics, cpu_score, gpu_score),
            bottleneck: Bottleneck::analyze(cpu_score, gpu_score),
        }
    }

    /// Average of the five task scores, used by the upgrade advisor
    pub fn average(&self) -> f64 {
        (self.gaming + self.graphics + self.office + self.livestream + self.render) as f64 / 5.0
    }
}

/// Which end of the CPU/mainboard pairing to upgrade first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UpgradeHint {
    Mainboard,
    Cpu,
}

impl UpgradeHint {
    pub fn message(&self) -> &'static str {
        match self {
            UpgradeHint::Mainboard => "Nên nâng cấp Mainboard",
            UpgradeHint::Cpu => "Nên nâng cấp CPU",
        }
    }
}

/// Aggregate build score over the eight rated component slots
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BuildScore {
    /// Mean of the eight catalog ratings, two decimal places
    pub total: f64,
    pub message: &'static str,
    pub upgrade_hint: Option<UpgradeHint>,
}

/// Rating of one selected component, `None` when the slot is empty
fn rating_of(selection: &dyn Fn(Category) -> Option<f32>, category: Category) -> f64 {
    selection(category).map(|s| s as f64).unwrap_or(0.0)
}

/// Aggregate the catalog ratings of the current selection. A missing
/// selection contributes 0 to the mean rather than shrinking the divisor.
pub fn build_score(selection: &dyn Fn(Category) -> Option<f32>) -> BuildScore {
    let sum: f64 = Category::SCORED
        .iter()
        .map(|&category| rating_of(selection, category))
        .sum();
    let total = (sum / Category::SCORED.len() as f64 * 100.0).round() / 100.0;

    let message = if total <= 2.5 {
        "MÁY HƠI YẾU, CHƠI GAME ONLINE NÊN NÂNG CPU VÀ MAIN"
    } else if total <= 4.0 {
        "MÁY CŨNG KHÁ ỔN RỒI MUỐN TĂNG FPS MÀ CHƠI SETTING THẤP HÃY TĂNG CPU"
    } else if total <= 6.0 {
        "MÁY TẠM ỔN RỒI, TĂNG FPS SETTING THẤP NÂNG CPU CÒN TĂNG FPS 3A THÌ NÂNG VGA"
    } else if total <= 8.0 {
        "MÁY NHƯ NÀY CÒN GÌ MÀ CHÊ NỮA"
    } else {
        "BẠN MUỐN MUA CẢ SỐP KHÔNG?"
    };

    let cpu = rating_of(selection, Category::Cpu);
    let mainboard = rating_of(selection, Category::Mainboard);
    let diff = cpu - mainboard;
    let upgrade_hint = if diff >= 3.0 {
        Some(UpgradeHint::Mainboard)
    } else if diff <= -3.0 {
        Some(UpgradeHint::Cpu)
    } else {
        None
    };

    BuildScore {
        total,
        message,
        upgrade_hint,
    }
}

/// Label tier for one 0–100 performance score
pub fn performance_label(score: u32) -> &'static str {
    if score >= 90 {
        "Xuất sắc"
    } else if score >= 75 {
        "Rất tốt"
    } else if score >= 60 {
        "Tốt"
    } else if score >= 45 {
        "Trung bình"
    } else if score >= 30 {
        "Yếu"
    } else {
        "Rất yếu"
    }
}

/// Stability rating from the CPU/GPU score gap
pub fn stability(cpu_score: u32, gpu_score: u32) -> &'static str {
    let difference = cpu_score.abs_diff(gpu_score);
    if difference <= 10 {
        "Rất ổn định"
    } else if difference <= 20 {
        "Ổn định"
    } else if difference <= 30 {
        "Tương đối ổn định"
    } else {
        "Có thể không ổn định"
    }
}

/// Targeted upgrade suggestions: one overall line keyed by the average,
/// then one line per task score under 50
pub fn recommendations(snapshot: &PerformanceSnapshot) -> Vec<String> {
    let mut out = Vec::new();

    let avg = snapshot.average();
    out.push(
        if avg < 30.0 {
            "Your system needs significant upgrades for better overall performance"
        } else if avg < 60.0 {
            "Consider selective upgrades based on your primary usage"
        } else if avg < 80.0 {
            "Your system performs well but has room for improvement"
        } else {
            "Your system performs excellently across all tasks"
        }
        .to_string(),
    );

    if snapshot.gaming < 50 {
        out.push("Consider upgrading your GPU for better gaming performance".to_string());
    }
    if snapshot.graphics < 50 {
        out.push("For better graphics performance, upgrade your GPU or add more VRAM".to_string());
    }
    if snapshot.office < 50 {
        out.push(
            "For better office performance, consider upgrading your CPU or adding more RAM"
                .to_string(),
        );
    }
    if snapshot.livestream < 50 {
        out.push(
            "For smoother livestreaming, upgrade your CPU and ensure good internet connection"
                .to_string(),
        );
    }
    if snapshot.render < 50 {
        out.push(
            "For faster rendering, consider a CPU with more cores or a workstation GPU"
                .to_string(),
        );
    }

    out
}

/// Rating of one selected record for the aggregate score, by category
pub fn record_rating(record: &ComponentRecord) -> Option<f32> {
    match record.spec {
        // HDD and monitor are priced but never rated
        ComponentSpec::Hdd { .. } | ComponentSpec::Monitor { .. } => None,
        _ => Some(record.score),
    }
}
