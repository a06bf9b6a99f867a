//! Setup command surface
//!
//! `setup run` performs the full bootstrap; `check`, `dirs`, and `db` expose
//! the individual steps for operators who only want one of them.

use crate::bootstrap::report::{self, SetupReport, StoreResult};
use crate::bootstrap::{assets, installer, runtime, skeleton, store};
use crate::manifest::SetupManifest;
use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;
use std::path::Path;

#[derive(Debug, Clone, Subcommand)]
pub enum SetupCommands {
    /// Run the full bootstrap (runtime gate, packages, directories, models, database)
    #[command(alias = "init")]
    Run {
        /// Skip dependency installation
        #[arg(long)]
        skip_install: bool,

        /// Skip directory provisioning
        #[arg(long)]
        skip_dirs: bool,

        /// Skip model artifact verification
        #[arg(long)]
        skip_models: bool,

        /// Skip database initialization
        #[arg(long)]
        skip_db: bool,
    },

    /// Verify the model artifacts only
    Check,

    /// Provision the working directories only
    Dirs,

    /// Initialize the user database only
    Db,
}

/// Which steps `setup run` should skip.
#[derive(Debug, Default)]
pub struct RunFlags {
    pub skip_install: bool,
    pub skip_dirs: bool,
    pub skip_models: bool,
    pub skip_db: bool,
}

pub async fn handle_setup_command(
    command: SetupCommands,
    root: &Path,
    manifest: &SetupManifest,
) -> Result<()> {
    match command {
        SetupCommands::Run { skip_install, skip_dirs, skip_models, skip_db } => {
            let flags = RunFlags { skip_install, skip_dirs, skip_models, skip_db };
            let report = run_setup(root, manifest, &flags).await;
            report::print_summary(&report);
            Ok(())
        }
        SetupCommands::Check => {
            println!("🤖 Checking model files...");
            report::print_assets(&assets::check_assets(root, &manifest.model_files));
            Ok(())
        }
        SetupCommands::Dirs => {
            println!("📁 Creating directories...");
            report::print_skeleton(&skeleton::create_skeleton(root, &manifest.directories));
            Ok(())
        }
        SetupCommands::Db => {
            println!("🗄️  Setting up database...");
            let result = initialize_store_step(root, manifest).await;
            report::print_store(&result);
            Ok(())
        }
    }
}

async fn initialize_store_step(root: &Path, manifest: &SetupManifest) -> StoreResult {
    let path = root.join(&manifest.store_file);
    let error = store::initialize_store(&path).await.err().map(|e| format!("{e:#}"));
    StoreResult { path, error }
}

/// Full bootstrap sequence. Only the runtime gate aborts; every later step
/// degrades into report entries instead of stopping the run.
async fn run_setup(root: &Path, manifest: &SetupManifest, flags: &RunFlags) -> SetupReport {
    println!("🚀 Setting up AR/VR Virtual Try-On System");
    println!("{}", "=".repeat(50));

    let timestamp = Utc::now().to_rfc3339();
    let runtime = runtime::check_runtime(manifest);
    report::print_runtime(&runtime);

    let python = match runtime.resolved() {
        Some(python) => python.to_path_buf(),
        None => return SetupReport::aborted(timestamp, runtime),
    };

    let install = if flags.skip_install {
        println!("\n⏭️  Skipping dependency installation");
        None
    } else {
        println!("\n📦 Installing required packages...");
        Some(installer::install_dependencies(&python, root, manifest))
    };

    let skeleton = if flags.skip_dirs {
        println!("\n⏭️  Skipping directory provisioning");
        None
    } else {
        println!("\n📁 Creating directories...");
        let result = skeleton::create_skeleton(root, &manifest.directories);
        report::print_skeleton(&result);
        Some(result)
    };

    let assets = if flags.skip_models {
        println!("\n⏭️  Skipping model checks");
        None
    } else {
        println!("\n🤖 Checking model files...");
        let result = assets::check_assets(root, &manifest.model_files);
        report::print_assets(&result);
        Some(result)
    };

    let store = if flags.skip_db {
        println!("\n⏭️  Skipping database initialization");
        None
    } else {
        println!("\n🗄️  Setting up database...");
        let result = initialize_store_step(root, manifest).await;
        report::print_store(&result);
        Some(result)
    };

    SetupReport { timestamp, runtime, install, skeleton, assets, store }
}
