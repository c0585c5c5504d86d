//! Application configuration.
//!
//! Brand and contact constants shown in the footer. These are baked into
//! the bundle at compile time.

/// Brand name, as printed in the footer and copyright line.
pub const BRAND_NAME: &str = "TALENTHUB";

/// Application name for the document title.
pub const APP_NAME: &str = "TalentHub";

/// One-line pitch under the brand name.
pub const BRAND_TAGLINE: &str =
    "Connecting talented professionals with the companies that need them.";

/// Public contact address.
pub const CONTACT_EMAIL: &str = "hello@talenthub.com";

/// Public phone number, display form.
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

/// Head office.
pub const CONTACT_ADDRESS: &str = "100 Market Street, San Francisco, CA";

/// Number of navigation columns the footer is laid out for.
pub const NAV_SECTION_COUNT: usize = 4;

/// `mailto:` target for [`CONTACT_EMAIL`].
pub const CONTACT_EMAIL_HREF: &str = "mailto:hello@talenthub.com";

/// `tel:` target for [`CONTACT_PHONE`].
pub const CONTACT_PHONE_HREF: &str = "tel:+15551234567";
