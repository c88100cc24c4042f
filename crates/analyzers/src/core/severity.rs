use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Low => write!(f, "LOW"),
        }
    }
}

impl Severity {
    /// Multiplier used by the overall risk score, distinct from per-finding scores.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Critical => 10,
            Self::High => 5,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Lenient parse for untrusted detector output. Unknown labels become Medium.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "CRITICAL" => Self::Critical,
            "HIGH" => Self::High,
            "MEDIUM" => Self::Medium,
            "LOW" => Self::Low,
            _ => Self::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagCategory {
    Jurisdiction,
    Financial,
    Legal,
    Operational,
    Compliance,
    VagueLanguage,
    MissingInfo,
    Liability,
    IntellectualProperty,
    Tax,
    Employee,
    Customer,
    Other,
}

impl FlagCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jurisdiction => "jurisdiction",
            Self::Financial => "financial",
            Self::Legal => "legal",
            Self::Operational => "operational",
            Self::Compliance => "compliance",
            Self::VagueLanguage => "vague_language",
            Self::MissingInfo => "missing_info",
            Self::Liability => "liability",
            Self::IntellectualProperty => "intellectual_property",
            Self::Tax => "tax",
            Self::Employee => "employee",
            Self::Customer => "customer",
            Self::Other => "other",
        }
    }

    /// Lenient parse for untrusted detector output. Unknown labels become Other.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "jurisdiction" => Self::Jurisdiction,
            "financial" => Self::Financial,
            "legal" => Self::Legal,
            "operational" => Self::Operational,
            "compliance" => Self::Compliance,
            "vague_language" => Self::VagueLanguage,
            "missing_info" => Self::MissingInfo,
            "liability" => Self::Liability,
            "intellectual_property" => Self::IntellectualProperty,
            "tax" => Self::Tax,
            "employee" => Self::Employee,
            "customer" => Self::Customer,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for FlagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSource {
    RuleEngine,
    LlmAnalyzer,
}

impl fmt::Display for FlagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleEngine => write!(f, "rule_engine"),
            Self::LlmAnalyzer => write!(f, "llm_analyzer"),
        }
    }
}
