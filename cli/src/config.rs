use std::path::PathBuf;

use anyhow::Result;
use platform_store::StoreSettings;

/// Resolved runtime configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub settings: StoreSettings,
}

impl AppConfig {
    /// An explicit state directory wins; otherwise `ROSTER_STATE_DIR`, then
    /// the platform data dir.
    pub fn load(state_dir: Option<PathBuf>) -> Result<Self> {
        let settings = match state_dir {
            Some(dir) => StoreSettings::with_root(dir),
            None => StoreSettings::from_env()?,
        };
        Ok(Self { settings })
    }
}
