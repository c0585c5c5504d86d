//! Footer content tables.
//!
//! Everything the footer shows lives here as `'static` data: navigation
//! columns, social profiles, contact lines and the legal bar. The only
//! value computed at render time is the copyright year.
//!
//! ```text
//! ┌──────────────┬───────────────┬───────────────┬─────────┬─────────┐
//! │ Brand        │ For Job       │ For           │ Company │ Support │
//! │ contact      │ Seekers       │ Recruiters    │         │         │
//! │ social icons │               │               │         │         │
//! ├──────────────┴───────────────┴───────────────┴─────────┴─────────┤
//! │ © YEAR TALENTHUB. ALL RIGHTS RESERVED.        Privacy Terms ...  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use chrono::{Datelike, Local};
use url::Url;

use crate::config::{
    BRAND_NAME, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_EMAIL_HREF, CONTACT_PHONE,
    CONTACT_PHONE_HREF, NAV_SECTION_COUNT,
};
use crate::types::{AppError, AppResult, ContactDetail, IconKind, NavLink, NavSection, SocialLink};

// =============================================================================
// Static tables
// =============================================================================

const JOB_SEEKER_LINKS: &[NavLink] = &[
    NavLink::new("Browse Jobs", "/jobs"),
    NavLink::new("Dashboard", "/dashboard"),
    NavLink::new("My Profile", "/profile"),
    NavLink::new("Messages", "/messages"),
];

const RECRUITER_LINKS: &[NavLink] = &[
    NavLink::new("Post a Job", "/recruiter/jobs"),
    NavLink::new("Applications", "/recruiter/applications"),
    NavLink::new("Talent Network", "/connections"),
    NavLink::new("Messages", "/messages"),
];

const COMPANY_LINKS: &[NavLink] = &[
    NavLink::new("Careers", "/careers"),
    NavLink::new("Press", "/press"),
    NavLink::new("Blog", "/blog"),
    NavLink::new("Terms of Service", "/terms"),
];

const SUPPORT_LINKS: &[NavLink] = &[
    NavLink::new("Help Center", "/help"),
    NavLink::new("Privacy Policy", "/privacy"),
    NavLink::new("Contact Us", "/contact"),
    NavLink::new("FAQ", "/faq"),
    NavLink::new("Safety Tips", "/safety"),
];

/// Navigation columns, left to right.
static NAV_SECTIONS: [NavSection; NAV_SECTION_COUNT] = [
    NavSection {
        title: "For Job Seekers",
        icon: IconKind::Work,
        links: JOB_SEEKER_LINKS,
    },
    NavSection {
        title: "For Recruiters",
        icon: IconKind::Business,
        links: RECRUITER_LINKS,
    },
    NavSection {
        title: "Company",
        icon: IconKind::Info,
        links: COMPANY_LINKS,
    },
    NavSection {
        title: "Support",
        icon: IconKind::Help,
        links: SUPPORT_LINKS,
    },
];

static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        icon: IconKind::LinkedIn,
        destination: "https://www.linkedin.com/company/talenthub",
        accessible_label: "TalentHub on LinkedIn",
    },
    SocialLink {
        icon: IconKind::Twitter,
        destination: "https://twitter.com/talenthub",
        accessible_label: "TalentHub on Twitter",
    },
    SocialLink {
        icon: IconKind::Facebook,
        destination: "https://www.facebook.com/talenthub",
        accessible_label: "TalentHub on Facebook",
    },
    SocialLink {
        icon: IconKind::Instagram,
        destination: "https://www.instagram.com/talenthub",
        accessible_label: "TalentHub on Instagram",
    },
];

static CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: IconKind::Email,
        text: CONTACT_EMAIL,
        href: Some(CONTACT_EMAIL_HREF),
    },
    ContactDetail {
        icon: IconKind::Phone,
        text: CONTACT_PHONE,
        href: Some(CONTACT_PHONE_HREF),
    },
    ContactDetail {
        icon: IconKind::Location,
        text: CONTACT_ADDRESS,
        href: None,
    },
];

/// Bottom bar, after the copyright line.
static LEGAL_LINKS: [NavLink; 4] = [
    NavLink::new("Privacy", "/privacy"),
    NavLink::new("Terms", "/terms"),
    NavLink::new("Cookies", "/cookies"),
    NavLink::new("Subscribe", "/newsletter"),
];

// =============================================================================
// FooterContent
// =============================================================================

/// Read-only access to the footer data.
///
/// Every accessor is pure except [`FooterContent::display_year`], which
/// reads the local clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FooterContent;

impl FooterContent {
    /// Navigation columns in display order.
    pub fn nav_sections() -> &'static [NavSection] {
        &NAV_SECTIONS
    }

    /// Social profiles in display order.
    pub fn social_links() -> &'static [SocialLink] {
        &SOCIAL_LINKS
    }

    pub fn contact_details() -> &'static [ContactDetail] {
        &CONTACT_DETAILS
    }

    pub fn legal_links() -> &'static [NavLink] {
        &LEGAL_LINKS
    }

    /// Current calendar year from the local clock.
    pub fn display_year() -> i32 {
        Self::display_year_on(Local::now())
    }

    /// Calendar year of `date`.
    pub fn display_year_on(date: impl Datelike) -> i32 {
        date.year()
    }

    /// Copyright line for the bottom bar.
    pub fn copyright_notice(year: i32) -> String {
        format!("© {} {}. ALL RIGHTS RESERVED.", year, BRAND_NAME)
    }

    /// Audit the built-in tables.
    pub fn validate() -> AppResult<()> {
        validate_tables(Self::nav_sections(), Self::social_links())
    }
}

/// Check a set of footer tables for the invariants the layout relies on.
///
/// Returns the first problem found.
pub fn validate_tables(sections: &[NavSection], social: &[SocialLink]) -> AppResult<()> {
    if sections.len() != NAV_SECTION_COUNT {
        return Err(AppError::SectionCount {
            expected: NAV_SECTION_COUNT,
            found: sections.len(),
        });
    }

    for section in sections {
        let mut seen = HashSet::new();
        for link in section.links {
            if !seen.insert(link.label) {
                return Err(AppError::DuplicateLabel {
                    section: section.title.to_string(),
                    label: link.label.to_string(),
                });
            }
            if !link.is_internal() {
                return Err(AppError::ExternalDestination {
                    label: link.label.to_string(),
                    destination: link.destination.to_string(),
                });
            }
        }
    }

    for link in social {
        validate_social_url(link.destination)?;
        if link.accessible_label.trim().is_empty() {
            return Err(AppError::MissingLabel {
                url: link.destination.to_string(),
            });
        }
    }

    Ok(())
}

fn validate_social_url(url_str: &str) -> AppResult<()> {
    let invalid = |reason: String| AppError::InvalidSocialUrl {
        url: url_str.to_string(),
        reason,
    };

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    if url.scheme() != "https" {
        return Err(invalid(format!("Unsupported URL scheme: {}", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("Missing host".to_string()));
    }
    Ok(())
}
