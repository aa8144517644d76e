//! @ai:module:intent Configuration for export naming and report branding
//! @ai:module:layer infrastructure
//! @ai:module:public_api ExportConfig
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Branding and limits applied by the export builders
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Prefix of every generated filename
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Name shown in the text report banner
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default = "default_footer")]
    pub footer: String,
    /// Number of dishes listed in the structured report ranking
    #[serde(default = "default_top_dishes_limit")]
    pub top_dishes_limit: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            brand_name: default_brand_name(),
            footer: default_footer(),
            top_dishes_limit: default_top_dishes_limit(),
        }
    }
}

fn default_file_prefix() -> String {
    "kkcg".to_string()
}

fn default_brand_name() -> String {
    "KODI KURA CHITTI GAARE".to_string()
}

fn default_footer() -> String {
    "Report generated by Kodi Kura Chitti Gaare Analytics Dashboard".to_string()
}

fn default_top_dishes_limit() -> usize {
    10
}

impl ExportConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
