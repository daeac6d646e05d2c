//! Contact block formatting

use crate::office::ServiceOffice;

/// Render an office as a multi-line contact block
///
/// Pure formatting, no I/O. Absent input yields a fixed "not found" string.
pub fn format_contact(office: Option<&ServiceOffice>) -> String {
    let Some(office) = office else {
        return "No office found.".to_string();
    };

    format!(
        "**{}**\n\
         Address: {}\n\
         Pincode: {}\n\
         Phone: {}\n\
         Email: {}\n\
         Hours: {}\n",
        office.office_name,
        office.address,
        office.pincode,
        office.phone,
        office.email,
        office.working_hours,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::find_nearest;

    #[test]
    fn test_contact_block_content() {
        let office = find_nearest("600001");
        let block = format_contact(office);
        assert!(block.contains("Chennai Southern Service Center"));
        assert!(block.contains("Pincode: 600001"));
        assert!(block.contains("Phone: +91-44-6789-0123"));
        assert!(block.contains("Hours: Mon-Sat: 9:00 AM - 6:00 PM"));
    }

    #[test]
    fn test_absent_office() {
        assert_eq!(format_contact(None), "No office found.");
    }

    #[test]
    fn test_office_serialization() {
        let value = serde_json::to_value(find_nearest("380001")).unwrap();
        assert_eq!(value["office_name"], "Ahmedabad Western Service Center");
        assert_eq!(value["coverage_radius_km"], 25);
    }
}
