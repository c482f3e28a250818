use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the data directory.
/// Read once at startup; never written by the app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Named color overrides, hex strings like "#FF4444"
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-category color overrides (keys: study, work, personal)
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}
