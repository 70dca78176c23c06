//! Target environment value object - which deployment context a variable is scoped to

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Deployment context in the provider's variable store
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TargetEnvironment {
    /// Local `vercel dev` runs
    #[value(alias = "dev")]
    Development,
    /// Preview deployments (non-production branches)
    Preview,
    /// Production deployments
    #[value(alias = "prod")]
    Production,
}

impl TargetEnvironment {
    /// Name passed to the provider CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetEnvironment::Development => "development",
            TargetEnvironment::Preview => "preview",
            TargetEnvironment::Production => "production",
        }
    }
}

impl std::fmt::Display for TargetEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetEnvironment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(TargetEnvironment::Development),
            "preview" => Ok(TargetEnvironment::Preview),
            "production" | "prod" => Ok(TargetEnvironment::Production),
            _ => Err(ConfigurationError::UnknownTarget {
                value: s.to_string(),
            }),
        }
    }
}
