//! FPS estimation
//!
//! Estimates are table-driven: the selected game's FPS table provides the
//! base range for the requested quality preset, then a CPU-architecture
//! boost widens it. The boost only looks at the CPU name — X3D parts with
//! 3D V-Cache get the big multipliers, plain Ryzen parts a smaller one in
//! esports titles, everything else runs the table as-is.

use crate::games::GameLibrary;
use buildsan_shared::{CpuDependency, FpsRange, GameType, QualityPreset};
use serde::{Deserialize, Serialize};

/// One FPS estimate for a game at a quality preset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FpsEstimate {
    pub fps: FpsRange,
    /// Preset row description, with the boost disclosed when one applied
    pub description: String,
    pub boost_factor: f64,
}

/// Estimator over a game library
pub struct FpsEstimator<'a> {
    games: &'a GameLibrary,
}

impl<'a> FpsEstimator<'a> {
    pub fn new(games: &'a GameLibrary) -> Self {
        Self { games }
    }

    /// Estimate the FPS range for a game. Unknown games return `None`;
    /// a missing preset falls back to the medium row.
    pub fn estimate(
        &self,
        game_id: &str,
        preset: Option<QualityPreset>,
        cpu_name: &str,
    ) -> Option<FpsEstimate> {
        let game = self.games.get(game_id)?;
        let row = game.fps.get(preset.unwrap_or(QualityPreset::Medium));

        let cpu = cpu_name.to_lowercase();
        let is_x3d = cpu.contains("x3d");
        let is_amd = cpu.contains("ryzen");

        let boost_factor: f64 = if is_x3d {
            match game.game_type {
                GameType::Esports => {
                    if game.cpu_dependency == CpuDependency::VeryHigh {
                        1.6
                    } else {
                        1.5
                    }
                }
                GameType::BattleRoyale | GameType::Mmorpg => 1.45,
                _ => 1.4,
            }
        } else if is_amd && game.game_type == GameType::Esports {
            match game.cpu_dependency {
                CpuDependency::VeryHigh => 1.2,
                CpuDependency::High => 1.15,
                CpuDependency::Medium => 1.12,
                CpuDependency::Low => 1.1,
            }
        } else {
            1.0
        };

        let mut description = row.description.clone();
        if boost_factor > 1.0 {
            let percent = ((boost_factor - 1.0) * 100.0).round() as u32;
            if is_x3d {
                description.push_str(&format!(
                    " (+{}% hiệu năng từ CPU AMD X3D với 3D V-Cache)",
                    percent
                ));
            } else {
                description.push_str(&format!(" (+{}% hiệu năng từ CPU AMD)", percent));
            }
        }

        Some(FpsEstimate {
            fps: row.fps.scaled(boost_factor),
            description,
            boost_factor,
        })
    }
}

/// Quality preset a build can be expected to hold, from the mean of the
/// CPU and GPU performance scores
pub fn suggest_preset(cpu_score: u32, gpu_score: u32) -> QualityPreset {
    let combined = (cpu_score as f64 + gpu_score as f64) / 2.0;
    if combined >= 85.0 {
        QualityPreset::Ultra
    } else if combined >= 70.0 {
        QualityPreset::High
    } else if combined >= 50.0 {
        QualityPreset::Medium
    } else {
        QualityPreset::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_game_has_no_estimate() {
        let games = GameLibrary::new();
        let estimator = FpsEstimator::new(&games);
        assert!(estimator
            .estimate("half-life-3", Some(QualityPreset::High), "")
            .is_none());
    }

    #[test]
    fn test_plain_table_estimate_without_boost() {
        let games = GameLibrary::new();
        let estimator = FpsEstimator::new(&games);
        let estimate = estimator
            .estimate("valorant", Some(QualityPreset::High), "Intel Core i5-12400F")
            .unwrap();
        assert_eq!(estimate.fps, FpsRange::new(250, 300));
        assert_eq!(estimate.boost_factor, 1.0);
        assert!(!estimate.description.contains('%'));
    }

    #[test]
    fn test_missing_preset_falls_back_to_medium() {
        let games = GameLibrary::new();
        let estimator = FpsEstimator::new(&games);
        let estimate = estimator.estimate("valorant", None, "").unwrap();
        assert_eq!(estimate.fps, FpsRange::new(300, 350));
    }

    #[test]
    fn test_x3d_boost_by_game_type() {
        let games = GameLibrary::new();
        let estimator = FpsEstimator::new(&games);
        let cpu = "AMD Ryzen 7 7800X3D";

        // esports with high dependency: +50%
        let valorant = estimator
            .estimate("valorant", Some(QualityPreset::Low), cpu)
            .unwrap();
        assert_eq!(valorant.boost_factor, 1.5);
        assert_eq!(valorant.fps, FpsRange::new(525, 600));
        assert!(valorant.description.contains("+50%"));
        assert!(valorant.description.contains("3D V-Cache"));

        // esports with very-high dependency: +60%
        let crossfire = estimator
            .estimate("crossfire", Some(QualityPreset::Low), cpu)
            .unwrap();
        assert_eq!(crossfire.boost_factor, 1.6);

        // battle royale: +45%
        let pubg = estimator
            .estimate("pubg", Some(QualityPreset::Low), cpu)
            .unwrap();
        assert_eq!(pubg.boost_factor, 1.45);
        assert_eq!(pubg.fps, FpsRange::new(232, 261)); // floor(160*1.45), floor(180*1.45)

        // AAA: +40%
        let gta = estimator
            .estimate("gta-v", Some(QualityPreset::Low), cpu)
            .unwrap();
        assert_eq!(gta.boost_factor, 1.4);
    }

    #[test]
    fn test_plain_ryzen_boost_only_in_esports() {
        let games = GameLibrary::new();
        let estimator = FpsEstimator::new(&games);
        let cpu = "AMD Ryzen 5 5600";

        // esports, high dependency: +15%
        let valorant = estimator
            .estimate("valorant", Some(QualityPreset::Low), cpu)
            .unwrap();
        assert_eq!(valorant.boost_factor, 1.15);
        assert!(valorant.description.contains("+15% hiệu năng từ CPU AMD"));
        assert!(!valorant.description.contains("3D V-Cache"));

        // esports, medium dependency: +12%
        let lol = estimator
            .estimate("lol", Some(QualityPreset::Low), cpu)
            .unwrap();
        assert_eq!(lol.boost_factor, 1.12);

        // non-esports: no boost for plain Ryzen
        let pubg = estimator
            .estimate("pubg", Some(QualityPreset::Low), cpu)
            .unwrap();
        assert_eq!(pubg.boost_factor, 1.0);
    }

    #[test]
    fn test_suggest_preset_boundaries() {
        assert_eq!(suggest_preset(85, 85), QualityPreset::Ultra);
        assert_eq!(suggest_preset(84, 85), QualityPreset::High);
        assert_eq!(suggest_preset(70, 70), QualityPreset::High);
        assert_eq!(suggest_preset(50, 50), QualityPreset::Medium);
        assert_eq!(suggest_preset(49, 50), QualityPreset::Low);
        assert_eq!(suggest_preset(0, 0), QualityPreset::Low);
    }
}
