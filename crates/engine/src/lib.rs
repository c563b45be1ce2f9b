//! Rules and scoring engine for the Buildsan PC-build configurator
//!
//! The engine is split along the same seams the product exposes:
//! - [`catalog`] — the read-only component store, keyed by category + ID
//! - [`compat`] — socket / memory-type compatibility filtering
//! - [`matcher`] — budget-keyed auto-configuration bundles
//! - [`scoring`] — heuristic CPU/GPU scores, task scores and the
//!   aggregate build score
//! - [`fps`] — per-game FPS estimation with CPU-architecture boosts
//! - [`games`] — the built-in game library
//! - [`session`] — the `Engine` facade plus per-user `BuildSession`
//!
//! Everything is synchronous and allocation-light; the catalog, bundle
//! table and game library are immutable once the engine is constructed.

pub mod catalog;
pub mod compat;
pub mod fps;
pub mod games;
pub mod matcher;
pub mod scoring;
pub mod session;

pub use catalog::CatalogStore;
pub use fps::{FpsEstimate, FpsEstimator};
pub use games::GameLibrary;
pub use matcher::{ConfigBundle, ConfigMatcher, MatchAttempt};
pub use scoring::{Bottleneck, BuildScore, PerformanceSnapshot};
pub use session::{AllowedOptions, BuildSession, Engine};

pub use buildsan_shared::{BuildError, BuildResult};
