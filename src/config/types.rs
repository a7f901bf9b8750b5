use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rates: RatesConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the exchange rates come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    /// EUR-base rates endpoint. The response must be a JSON object with a
    /// `rates` object mapping currency codes to numbers.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_endpoint() -> String {
    "http://api.fixer.io/latest?base=EUR".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}
