//! Diagnosis Composition
//!
//! Ties the three standalone components together for a caller:
//! - classify a panel photo,
//! - resolve the predicted fault to its repair/prevention record,
//! - route the customer pincode to a service office.
//!
//! The components never depend on each other; this crate is the caller
//! that combines their outputs into a single report value.

use fault_catalog::FaultRecord;
use fault_classifier::{preprocess, Classification, ClassifierError, FaultModel};
use image::DynamicImage;
use office_directory::{format_contact, ServiceOffice};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Combined result of one diagnosis run
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    /// Classifier output for the submitted image
    pub classification: Classification,
    /// Repair/prevention record for the predicted fault
    pub fault_info: &'static FaultRecord,
    /// Service office covering the customer pincode
    pub office: Option<&'static ServiceOffice>,
}

impl DiagnosisReport {
    /// Render the report as a human-readable block
    pub fn render(&self) -> String {
        let mut out = format!(
            "Fault: {} ({:.1}% confidence)\nSeverity: {}\n{}\n",
            self.classification.fault_type,
            self.classification.confidence * 100.0,
            self.fault_info.severity.as_str(),
            self.fault_info.description,
        );

        out.push_str("\nRepair steps:\n");
        for (i, step) in self.fault_info.repair_steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }

        out.push_str("\nPrevention:\n");
        for measure in self.fault_info.prevention {
            out.push_str(&format!("- {}\n", measure));
        }

        out.push_str("\nNearest service office:\n");
        out.push_str(&format_contact(self.office));
        out
    }
}

/// Diagnosis front end holding the loaded model
///
/// Loading is expensive; construct once per process and reuse.
#[derive(Debug)]
pub struct Diagnoser {
    model: FaultModel,
}

impl Diagnoser {
    /// Load the model artifact and build a diagnoser
    pub fn new(model_path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        Ok(Self {
            model: FaultModel::load(model_path)?,
        })
    }

    /// Wrap an already-loaded model
    pub fn from_model(model: FaultModel) -> Self {
        Self { model }
    }

    /// Diagnose a decoded panel photo for a customer pincode
    ///
    /// Only the classification stage can fail; catalog and office lookups
    /// are total.
    pub fn diagnose(
        &self,
        image: &DynamicImage,
        postal_code: &str,
    ) -> Result<DiagnosisReport, ClassifierError> {
        let classification = self.model.classify_image(image)?;
        let fault_info = fault_catalog::lookup(classification.fault_type);
        let office = office_directory::find_nearest(postal_code);

        info!(
            "Diagnosed {} ({:.1}% confidence), routed to {}",
            classification.fault_type,
            classification.confidence * 100.0,
            office.map_or("no office", |o| o.office_name),
        );

        Ok(DiagnosisReport {
            classification,
            fault_info,
            office,
        })
    }

    /// Diagnose a panel photo straight from a file
    pub fn diagnose_file(
        &self,
        image_path: impl AsRef<Path>,
        postal_code: &str,
    ) -> Result<DiagnosisReport, ClassifierError> {
        let image = preprocess::load_image(image_path)?;
        self.diagnose(&image, postal_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fault_classifier::CLASS_LABELS;

    fn sample_report() -> DiagnosisReport {
        let classification = Classification {
            fault_type: "Hot Spots",
            confidence: 0.87,
            probabilities: [0.02, 0.03, 0.87, 0.01, 0.02, 0.02, 0.02, 0.01],
        };
        DiagnosisReport {
            fault_info: fault_catalog::lookup(classification.fault_type),
            office: office_directory::find_nearest("110001"),
            classification,
        }
    }

    #[test]
    fn test_every_class_label_has_a_catalog_record() {
        // A predicted label must never fall through to the default record.
        for label in CLASS_LABELS {
            assert_eq!(fault_catalog::lookup(label).name, label);
        }
    }

    #[test]
    fn test_report_rendering() {
        let rendered = sample_report().render();
        assert!(rendered.contains("Fault: Hot Spots (87.0% confidence)"));
        assert!(rendered.contains("Severity: High"));
        assert!(rendered.contains("1. Immediately reduce panel load or disconnect if severe"));
        assert!(rendered.contains("Delhi Central Service Center"));
    }

    #[test]
    fn test_report_rendering_without_office() {
        let mut report = sample_report();
        report.office = None;
        assert!(report.render().contains("No office found."));
    }

    #[test]
    fn test_report_serialization() {
        let value = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(value["classification"]["fault_type"], "Hot Spots");
        assert_eq!(value["fault_info"]["severity"], "High");
        assert_eq!(value["office"]["pincode"], "110001");
    }

    #[test]
    fn test_missing_model_propagates() {
        let err = Diagnoser::new("model/does_not_exist.onnx").unwrap_err();
        assert!(matches!(err, ClassifierError::ArtifactMissing { .. }));
    }
}
