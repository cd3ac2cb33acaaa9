use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub category: ModelCategory,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ModelCategory {
    ImageEdit,
}

/// How the user wants the new style chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignMode {
    /// Let the model analyse the face and pick a style.
    #[default]
    Auto,
    /// Follow the user's description and/or reference photo.
    Custom,
}

impl DesignMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DesignMode::Auto => "auto",
            DesignMode::Custom => "custom",
        }
    }
}

impl fmt::Display for DesignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(DesignMode::Auto),
            "custom" => Ok(DesignMode::Custom),
            other => Err(format!("unknown design mode: {}", other)),
        }
    }
}
