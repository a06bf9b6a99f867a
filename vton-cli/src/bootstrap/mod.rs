//! Environment bootstrap for the try-on application
//!
//! Ordered, failure-tolerant preparation of everything the externally
//! shipped try-on pipeline needs at runtime:
//! - interpreter discovery and version gate (the only fatal check)
//! - Python package installation with per-package fallback
//! - static/ directory skeleton
//! - model artifact presence verification
//! - SQLite user-store initialization

pub mod assets;
pub mod installer;
pub mod report;
pub mod runtime;
pub mod skeleton;
pub mod store;

pub use assets::{check_assets, AssetReport};
pub use installer::{install_dependencies, plan_install, InstallPlan, InstallReport};
pub use report::{SetupReport, StoreResult};
pub use runtime::{check_runtime, find_interpreter, RuntimeCheck};
pub use skeleton::{create_skeleton, SkeletonResult};
pub use store::initialize_store;
