//! Service Office Directory
//!
//! Routes a customer pincode to the service office covering it. Resolution
//! is best-effort: exact index match first, then a pincode-prefix fallback,
//! then the first office in the table. Lookups never fail.

mod directory;
mod format;
mod office;

pub use directory::{find_nearest, list_offices};
pub use format::format_contact;
pub use office::ServiceOffice;
