//! Static fault catalog and lookup

use crate::record::{FaultRecord, Severity};
use tracing::debug;

/// Fault knowledge base, in definition order. The order is fixed: callers
/// that enumerate the catalog see the classes in this sequence.
const CATALOG: &[FaultRecord] = &[
    FaultRecord {
        name: "Healthy Panel",
        description: "No faults detected. Panel is operating normally.",
        severity: Severity::None,
        symptoms: None,
        repair_steps: &[
            "No action required. Continue regular maintenance.",
            "Monitor panel performance monthly.",
            "Keep panel surface clean.",
        ],
        prevention: &[
            "Regular cleaning and inspection",
            "Proper installation and mounting",
            "Avoid physical damage",
        ],
        cost_estimate: None,
    },
    FaultRecord {
        name: "Microcracks",
        description: "Small cracks in solar cells that can reduce efficiency and lead to cell failure over time.",
        severity: Severity::Medium,
        symptoms: Some(&[
            "Reduced power output",
            "Visible hairline cracks in cells",
            "Hot spots may develop",
        ]),
        repair_steps: &[
            "Inspect all cells for crack patterns",
            "Replace individual cracked cells if possible",
            "If multiple cells affected, consider panel replacement",
            "Apply protective coating to prevent further cracking",
            "Ensure proper mounting to reduce mechanical stress",
        ],
        prevention: &[
            "Handle panels carefully during installation",
            "Use proper mounting hardware",
            "Avoid thermal stress from rapid temperature changes",
            "Regular EL testing to catch early cracks",
        ],
        cost_estimate: Some("Low to Medium (cell replacement) or High (panel replacement)"),
    },
    FaultRecord {
        name: "Hot Spots",
        description: "Localized overheating in cells, often caused by shading, cell defects, or bypass diode failure.",
        severity: Severity::High,
        symptoms: Some(&[
            "Localized heating visible in thermal imaging",
            "Reduced panel efficiency",
            "Potential fire hazard if severe",
        ]),
        repair_steps: &[
            "Immediately reduce panel load or disconnect if severe",
            "Identify and remove shading sources",
            "Check and replace faulty bypass diodes",
            "Replace affected cells if damaged",
            "Clean panel surface to remove debris causing shading",
            "Verify proper wiring and connections",
        ],
        prevention: &[
            "Regular cleaning to prevent shading",
            "Proper system design with bypass diodes",
            "Avoid partial shading situations",
            "Regular thermal inspections",
        ],
        cost_estimate: Some("Medium (diode/cell replacement)"),
    },
    FaultRecord {
        name: "Snail Trails",
        description: "Dark lines or trails on cells caused by moisture ingress and silver paste degradation.",
        severity: Severity::LowToMedium,
        symptoms: Some(&[
            "Dark lines or trails on cell surface",
            "Gradual efficiency loss",
            "Visible discoloration",
        ]),
        repair_steps: &[
            "Clean panel surface thoroughly",
            "Apply protective sealant to prevent moisture ingress",
            "Replace affected cells if degradation is severe",
            "Improve panel encapsulation",
            "Ensure proper panel sealing",
        ],
        prevention: &[
            "Use high-quality panel encapsulation",
            "Ensure proper installation sealing",
            "Regular maintenance and cleaning",
            "Protect from excessive moisture",
        ],
        cost_estimate: Some("Low to Medium"),
    },
    FaultRecord {
        name: "Cell Breakage",
        description: "Complete breakage or shattering of solar cells, often due to mechanical damage or extreme stress.",
        severity: Severity::High,
        symptoms: Some(&[
            "Visible broken or shattered cells",
            "Significant power loss",
            "Potential safety hazard",
        ]),
        repair_steps: &[
            "Disconnect panel from system immediately",
            "Replace broken cells or entire panel",
            "Inspect mounting system for issues",
            "Check for impact damage sources",
            "Verify proper installation and support",
        ],
        prevention: &[
            "Careful handling during transport and installation",
            "Proper mounting and support structure",
            "Protection from hail and debris",
            "Regular structural inspections",
        ],
        cost_estimate: Some("High (panel replacement usually required)"),
    },
    FaultRecord {
        name: "Delamination",
        description: "Separation of layers in the panel, allowing moisture ingress and reducing efficiency.",
        severity: Severity::MediumToHigh,
        symptoms: Some(&[
            "Visible separation of panel layers",
            "Moisture ingress",
            "Reduced efficiency",
            "Potential for further damage",
        ]),
        repair_steps: &[
            "Assess extent of delamination",
            "Apply specialized adhesive/sealant if minor",
            "Replace panel if delamination is extensive",
            "Improve panel encapsulation",
            "Ensure proper environmental protection",
        ],
        prevention: &[
            "Use high-quality panel materials",
            "Proper installation and sealing",
            "Protect from extreme weather",
            "Regular inspection for early signs",
        ],
        cost_estimate: Some("Medium to High"),
    },
    FaultRecord {
        name: "Bypass Diode Failure",
        description: "Failure of bypass diodes that protect cells from reverse current, causing hot spots and reduced output.",
        severity: Severity::Medium,
        symptoms: Some(&[
            "Hot spots in panel",
            "Reduced power output",
            "Visible diode junction box issues",
        ]),
        repair_steps: &[
            "Disconnect panel from system",
            "Open junction box carefully",
            "Test diodes with multimeter",
            "Replace faulty diodes",
            "Re-seal junction box properly",
            "Test panel output after repair",
        ],
        prevention: &[
            "Use quality diodes in system design",
            "Proper junction box sealing",
            "Regular electrical testing",
            "Protect from moisture and overheating",
        ],
        cost_estimate: Some("Low to Medium"),
    },
    FaultRecord {
        name: "PID (Potential Induced Degradation)",
        description: "Performance degradation caused by voltage potential between cells and ground, common in high-voltage systems.",
        severity: Severity::MediumToHigh,
        symptoms: Some(&[
            "Gradual efficiency loss",
            "Not visible in EL images but affects performance",
            "More common in high-voltage arrays",
        ]),
        repair_steps: &[
            "Install PID recovery boxes if applicable",
            "Ground array properly",
            "Use PID-resistant panels",
            "Consider panel replacement if severe",
            "Optimize system voltage",
        ],
        prevention: &[
            "Use PID-resistant panel technology",
            "Proper system grounding",
            "Optimize system design",
            "Regular performance monitoring",
        ],
        cost_estimate: Some("Medium to High"),
    },
];

/// Record returned for fault names the catalog does not know
const DEFAULT_RECORD: FaultRecord = FaultRecord {
    name: "Unknown",
    description: "Unknown fault type.",
    severity: Severity::Unknown,
    symptoms: None,
    repair_steps: &["Consult a professional solar technician."],
    prevention: &["Regular maintenance and inspection."],
    cost_estimate: None,
};

/// Get the full catalog, in definition order
pub fn catalog() -> &'static [FaultRecord] {
    CATALOG
}

/// Look up the record for a fault class
///
/// Matching is exact and case-sensitive. Unknown names return the fixed
/// default record; a miss is a handled outcome, not an error.
pub fn lookup(fault_name: &str) -> &'static FaultRecord {
    match CATALOG.iter().find(|r| r.name == fault_name) {
        Some(record) => record,
        None => {
            debug!("Unknown fault type '{}', returning default record", fault_name);
            &DEFAULT_RECORD
        }
    }
}

/// List all known fault class names, in catalog order
pub fn list_fault_types() -> Vec<&'static str> {
    CATALOG.iter().map(|r| r.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fault_lookup() {
        let record = lookup("Hot Spots");
        assert_eq!(record.name, "Hot Spots");
        assert_eq!(record.severity, Severity::High);
        assert_eq!(
            record.repair_steps[0],
            "Immediately reduce panel load or disconnect if severe"
        );
    }

    #[test]
    fn test_unknown_fault_returns_default() {
        for name in ["Rust", "hot spots", "Hot Spots ", ""] {
            let record = lookup(name);
            assert_eq!(record.description, "Unknown fault type.");
            assert_eq!(record.severity, Severity::Unknown);
            assert_eq!(record.repair_steps, &["Consult a professional solar technician."]);
            assert_eq!(record.prevention, &["Regular maintenance and inspection."]);
        }
    }

    #[test]
    fn test_every_record_has_repair_and_prevention() {
        for record in catalog() {
            assert!(!record.repair_steps.is_empty(), "{} has no repair steps", record.name);
            assert!(!record.prevention.is_empty(), "{} has no prevention", record.name);
        }
    }

    #[test]
    fn test_fault_type_listing_order() {
        let types = list_fault_types();
        assert_eq!(types.len(), 8);
        assert_eq!(types[0], "Healthy Panel");
        assert_eq!(types[7], "PID (Potential Induced Degradation)");
    }

    #[test]
    fn test_severity_serializes_to_human_strings() {
        let json = serde_json::to_string(&Severity::LowToMedium).unwrap();
        assert_eq!(json, "\"Low to Medium\"");
        let json = serde_json::to_string(&Severity::MediumToHigh).unwrap();
        assert_eq!(json, "\"Medium to High\"");
        assert_eq!(Severity::High.as_str(), "High");
    }

    #[test]
    fn test_record_serialization() {
        let value = serde_json::to_value(lookup("Microcracks")).unwrap();
        assert_eq!(value["severity"], "Medium");
        assert_eq!(value["symptoms"][0], "Reduced power output");
    }
}
