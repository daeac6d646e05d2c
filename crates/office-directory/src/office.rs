//! Service office record

use serde::Serialize;

/// One service office, keyed by its canonical pincode
///
/// Office data is a `const` table fixed at build time; lookups hand out
/// `&'static` references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceOffice {
    /// Display name
    pub office_name: &'static str,
    /// Street address
    pub address: &'static str,
    /// Canonical pincode (directory key)
    pub pincode: &'static str,
    /// Contact phone number
    pub phone: &'static str,
    /// Contact email
    pub email: &'static str,
    /// Service coverage radius in kilometers
    pub coverage_radius_km: u32,
    /// Working hours, human readable
    pub working_hours: &'static str,
}
