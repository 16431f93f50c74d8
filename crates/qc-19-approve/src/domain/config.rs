//! Allowance configuration.

/// Default name of the ledger's native asset.
pub const DEFAULT_BASE_ASSET_NAME: &str = "QOS";

/// Allowance validation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveConfig {
    /// Native asset name. Secondary assets may not reuse it in any case.
    pub base_asset_name: String,
}

impl Default for ApproveConfig {
    fn default() -> Self {
        Self {
            base_asset_name: DEFAULT_BASE_ASSET_NAME.to_string(),
        }
    }
}

impl ApproveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_asset_name(mut self, name: impl Into<String>) -> Self {
        self.base_asset_name = name.into();
        self
    }

    /// Case-insensitive match against the reserved base asset name.
    pub fn is_base_asset(&self, name: &str) -> bool {
        name.trim().eq_ignore_ascii_case(self.base_asset_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reserves_qos() {
        let config = ApproveConfig::default();
        assert!(config.is_base_asset("qos"));
        assert!(config.is_base_asset(" QoS "));
        assert!(!config.is_base_asset("QSC"));
    }

    #[test]
    fn test_builder_overrides_name() {
        let config = ApproveConfig::new().with_base_asset_name("atom");
        assert!(config.is_base_asset("ATOM"));
        assert!(!config.is_base_asset("qos"));
    }
}
