use crate::config::{Config, StoreKind};
use crate::core::log::ttlog;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `init` command
///
/// This prepares:
///  - the configuration file (left untouched if it already exists)
///  - the local mirror directory
///  - the bucket directory, when the store is a local directory
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing fuellog…");

    //
    // 1️⃣ CONFIGURATION FILE
    //
    if Config::init_all(&cfg.path)? {
        println!("✅ Config file : {}", cfg.path.display());
    } else {
        println!("📄 Config file : {} (already present)", cfg.path.display());
    }

    //
    // 2️⃣ LOCAL DIRECTORIES
    //
    let mirror = expand_tilde(&cfg.mirror_dir);
    fs::create_dir_all(&mirror)?;
    println!("📁 Local copies: {}", mirror.display());

    if cfg.store.kind == StoreKind::Fs {
        let bucket = expand_tilde(&cfg.store.root).join(&cfg.store.bucket);
        fs::create_dir_all(&bucket)?;
        println!("🪣 Bucket      : {}", bucket.display());
    } else {
        println!(
            "🌐 Store       : {}/{}",
            cfg.store.endpoint.trim_end_matches('/'),
            cfg.store.bucket
        );
    }

    //
    // 3️⃣ ACTIVITY LOG (non-blocking)
    //
    ttlog(
        &cfg.log_file(),
        "init",
        &cfg.path.display().to_string(),
        "configuration initialized",
    );

    println!("🎉 fuellog initialization completed!");
    Ok(())
}
