//! Fault record types

use serde::{Deserialize, Serialize};

/// Fault severity rating
///
/// The source data rates some faults with a range ("Low to Medium"), so
/// the ranges are explicit variants rather than free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    None,
    Low,
    #[serde(rename = "Low to Medium")]
    LowToMedium,
    Medium,
    #[serde(rename = "Medium to High")]
    MediumToHigh,
    High,
    Unknown,
}

impl Severity {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::LowToMedium => "Low to Medium",
            Severity::Medium => "Medium",
            Severity::MediumToHigh => "Medium to High",
            Severity::High => "High",
            Severity::Unknown => "Unknown",
        }
    }
}

/// Repair and prevention record for one fault class
///
/// All records live in a `const` table and are never mutated after process
/// start; lookups hand out `&'static` references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaultRecord {
    /// Fault class name (catalog key)
    pub name: &'static str,
    /// What the fault is and why it matters
    pub description: &'static str,
    /// Severity rating
    pub severity: Severity,
    /// Observable symptoms, if the fault has any before inspection
    pub symptoms: Option<&'static [&'static str]>,
    /// Ordered repair procedure (always non-empty)
    pub repair_steps: &'static [&'static str],
    /// Ordered prevention measures (always non-empty)
    pub prevention: &'static [&'static str],
    /// Rough repair cost band, where known
    pub cost_estimate: Option<&'static str>,
}
