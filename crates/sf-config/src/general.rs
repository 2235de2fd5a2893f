//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default number of stars in a rating display.
const fn default_star_max() -> u8 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Star slots rendered by rating widgets and summaries.
    #[serde(default = "default_star_max")]
    pub default_star_max: u8,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_star_max: default_star_max(),
        }
    }
}
