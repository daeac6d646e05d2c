//! Office table, pincode index, and resolution

use crate::office::ServiceOffice;
use tracing::debug;

/// Service offices, in definition order. The order is a documented property:
/// the prefix fallback and the final default both pick the first match in
/// this sequence.
pub(crate) const OFFICES: &[ServiceOffice] = &[
    ServiceOffice {
        office_name: "Delhi Central Service Center",
        address: "123 Connaught Place, New Delhi",
        pincode: "110001",
        phone: "+91-11-2345-6789",
        email: "delhi.central@solarrepair.in",
        coverage_radius_km: 25,
        working_hours: "Mon-Sat: 9:00 AM - 6:00 PM",
    },
    ServiceOffice {
        office_name: "Mumbai Main Service Center",
        address: "456 Marine Drive, Mumbai",
        pincode: "400001",
        phone: "+91-22-3456-7890",
        email: "mumbai.main@solarrepair.in",
        coverage_radius_km: 30,
        working_hours: "Mon-Sat: 9:00 AM - 6:00 PM",
    },
    ServiceOffice {
        office_name: "Bangalore Tech Park Service Center",
        address: "789 MG Road, Bangalore",
        pincode: "560001",
        phone: "+91-80-4567-8901",
        email: "bangalore.tech@solarrepair.in",
        coverage_radius_km: 35,
        working_hours: "Mon-Sat: 9:00 AM - 6:00 PM",
    },
    ServiceOffice {
        office_name: "Kolkata Eastern Service Center",
        address: "321 Park Street, Kolkata",
        pincode: "700001",
        phone: "+91-33-5678-9012",
        email: "kolkata.east@solarrepair.in",
        coverage_radius_km: 28,
        working_hours: "Mon-Sat: 9:00 AM - 6:00 PM",
    },
    ServiceOffice {
        office_name: "Chennai Southern Service Center",
        address: "654 Mount Road, Chennai",
        pincode: "600001",
        phone: "+91-44-6789-0123",
        email: "chennai.south@solarrepair.in",
        coverage_radius_km: 30,
        working_hours: "Mon-Sat: 9:00 AM - 6:00 PM",
    },
    ServiceOffice {
        office_name: "Ahmedabad Western Service Center",
        address: "987 CG Road, Ahmedabad",
        pincode: "380001",
        phone: "+91-79-7890-1234",
        email: "ahmedabad.west@solarrepair.in",
        coverage_radius_km: 25,
        working_hours: "Mon-Sat: 9:00 AM - 6:00 PM",
    },
    ServiceOffice {
        office_name: "Hyderabad Deccan Service Center",
        address: "147 Hitech City, Hyderabad",
        pincode: "500001",
        phone: "+91-40-8901-2345",
        email: "hyderabad.deccan@solarrepair.in",
        coverage_radius_km: 32,
        working_hours: "Mon-Sat: 9:00 AM - 6:00 PM",
    },
    ServiceOffice {
        office_name: "Delhi NCR Service Center",
        address: "258 Sector 18, Noida",
        pincode: "110092",
        phone: "+91-11-9012-3456",
        email: "delhi.ncr@solarrepair.in",
        coverage_radius_km: 40,
        working_hours: "Mon-Sat: 9:00 AM - 6:00 PM",
    },
];

/// Recognized pincode -> canonical office pincode. Every value must exist
/// as a key in `OFFICES` (checked by test).
const PINCODE_INDEX: &[(&str, &str)] = &[
    // Delhi and NCR
    ("110001", "110001"),
    ("110002", "110001"),
    ("110003", "110001"),
    ("110092", "110092"),
    ("110093", "110092"),
    ("110094", "110092"),
    // Mumbai
    ("400001", "400001"),
    ("400002", "400001"),
    ("400003", "400001"),
    ("400004", "400001"),
    ("400005", "400001"),
    // Bangalore
    ("560001", "560001"),
    ("560002", "560001"),
    ("560003", "560001"),
    ("560004", "560001"),
    ("560005", "560001"),
    // Kolkata
    ("700001", "700001"),
    ("700002", "700001"),
    ("700003", "700001"),
    ("700004", "700001"),
    ("700005", "700001"),
    // Chennai
    ("600001", "600001"),
    ("600002", "600001"),
    ("600003", "600001"),
    ("600004", "600001"),
    ("600005", "600001"),
    // Ahmedabad
    ("380001", "380001"),
    ("380002", "380001"),
    ("380003", "380001"),
    ("380004", "380001"),
    ("380005", "380001"),
    // Hyderabad
    ("500001", "500001"),
    ("500002", "500001"),
    ("500003", "500001"),
    ("500004", "500001"),
    ("500005", "500001"),
];

/// Trim surrounding whitespace and strip embedded spaces
fn normalize(pincode: &str) -> String {
    pincode.trim().replace(' ', "")
}

fn office_by_pincode(pincode: &str) -> Option<&'static ServiceOffice> {
    OFFICES.iter().find(|o| o.pincode == pincode)
}

/// Find the service office covering a pincode
///
/// Resolution order, first match wins:
/// 1. exact match in the pincode index;
/// 2. first office whose canonical pincode shares its first 3 characters
///    with the input (inputs shorter than 3 characters cannot match and
///    skip this stage);
/// 3. the first office in the table.
///
/// Returns `None` only when the directory is empty. Never fails for any
/// input string.
pub fn find_nearest(postal_code: &str) -> Option<&'static ServiceOffice> {
    let code = normalize(postal_code);

    if let Some((_, canonical)) = PINCODE_INDEX.iter().find(|(p, _)| *p == code) {
        return office_by_pincode(canonical);
    }

    if let Some(office) = OFFICES.iter().find(|o| code.starts_with(&o.pincode[..3])) {
        debug!("Pincode {} matched office {} by prefix", code, office.pincode);
        return Some(office);
    }

    debug!("Pincode {} unmatched, using default office", code);
    OFFICES.first()
}

/// List all service offices, in table order
pub fn list_offices() -> &'static [ServiceOffice] {
    OFFICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let office = find_nearest("110001").unwrap();
        assert_eq!(office.office_name, "Delhi Central Service Center");
        assert_eq!(office.phone, "+91-11-2345-6789");
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        // "110093" shares its prefix with Delhi Central (110001), which sits
        // earlier in the table, but the index routes it to Delhi NCR.
        let office = find_nearest("110093").unwrap();
        assert_eq!(office.office_name, "Delhi NCR Service Center");
        assert_eq!(office.pincode, "110092");
    }

    #[test]
    fn test_prefix_fallback() {
        let office = find_nearest("560099").unwrap();
        assert_eq!(office.office_name, "Bangalore Tech Park Service Center");
    }

    #[test]
    fn test_unmatched_falls_back_to_first_office() {
        let office = find_nearest("999999").unwrap();
        assert_eq!(office.pincode, "110001");
    }

    #[test]
    fn test_normalization() {
        let office = find_nearest("  400 001 ").unwrap();
        assert_eq!(office.office_name, "Mumbai Main Service Center");
    }

    #[test]
    fn test_short_input_skips_prefix_stage() {
        // "56" cannot match the 3-character prefix rule, so it resolves to
        // the default office rather than Bangalore.
        let office = find_nearest("56").unwrap();
        assert_eq!(office.pincode, "110001");
    }

    #[test]
    fn test_never_fails_on_any_input() {
        for input in ["", "   ", "ab", "pincode?", "1", "110", "110001110001"] {
            assert!(find_nearest(input).is_some());
        }
    }

    #[test]
    fn test_prefix_of_input_matches() {
        // Longer inputs still match when they begin with an office prefix.
        let office = find_nearest("700042").unwrap();
        assert_eq!(office.office_name, "Kolkata Eastern Service Center");
    }

    #[test]
    fn test_index_values_resolve_to_offices() {
        for (recognized, canonical) in PINCODE_INDEX {
            let office = office_by_pincode(canonical)
                .unwrap_or_else(|| panic!("{} maps to unknown office {}", recognized, canonical));
            assert_eq!(office.pincode, *canonical);
        }
    }

    #[test]
    fn test_office_listing() {
        let offices = list_offices();
        assert_eq!(offices.len(), 8);
        assert_eq!(offices[0].pincode, "110001");
        assert_eq!(offices[7].pincode, "110092");
        assert!(offices.iter().all(|o| o.coverage_radius_km > 0));
    }
}
