//! Common types used across the frontend application.
//!
//! The footer is mostly data: these types describe that data without
//! saying anything about how it is drawn.
//!
//! # Categories
//!
//! - **Icon Types** - Icon identifiers resolved by the renderer
//! - **Link Types** - Navigation, social and contact entries
//! - **Error Types** - Frontend error handling

use std::fmt;

// =============================================================================
// Icon Types
// =============================================================================

/// Every icon the footer can show.
///
/// The content tables only carry the kind; [`crate::components::Icon`]
/// turns it into markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Brand mark next to the company name
    Brand,
    /// Job seekers column
    Work,
    /// Recruiters column
    Business,
    /// Company column
    Info,
    /// Support column
    Help,
    Email,
    Phone,
    Location,
    LinkedIn,
    Twitter,
    Facebook,
    Instagram,
}

impl IconKind {
    /// Short machine name, used for CSS classes and test ids.
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Brand => "brand",
            IconKind::Work => "work",
            IconKind::Business => "business",
            IconKind::Info => "info",
            IconKind::Help => "help",
            IconKind::Email => "email",
            IconKind::Phone => "phone",
            IconKind::Location => "location",
            IconKind::LinkedIn => "linkedin",
            IconKind::Twitter => "twitter",
            IconKind::Facebook => "facebook",
            IconKind::Instagram => "instagram",
        }
    }

    /// Whether this icon stands for a social network.
    pub fn is_social(&self) -> bool {
        matches!(
            self,
            IconKind::LinkedIn | IconKind::Twitter | IconKind::Facebook | IconKind::Instagram
        )
    }
}

// =============================================================================
// Link Types
// =============================================================================

/// A single labeled internal route link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible text
    pub label: &'static str,
    /// In-app path, always starting with `/`
    pub destination: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, destination: &'static str) -> Self {
        Self { label, destination }
    }

    /// True when the destination is an in-app path.
    pub fn is_internal(&self) -> bool {
        self.destination.starts_with('/') && !self.destination.starts_with("//")
    }
}

/// A titled group of internal links, shown as one footer column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    /// Column heading
    pub title: &'static str,
    /// Grouping icon shown next to the heading
    pub icon: IconKind,
    /// Links in display order
    pub links: &'static [NavLink],
}

/// A labeled external social-network profile link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    /// Absolute `https://` URL
    pub destination: &'static str,
    /// Text for screen readers (`aria-label`)
    pub accessible_label: &'static str,
}

/// One line of the contact block (email, phone, address).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: IconKind,
    /// Visible text
    pub text: &'static str,
    /// `mailto:` / `tel:` target, `None` for plain text
    pub href: Option<&'static str>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Only the content audit produces these; rendering itself cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Wrong number of navigation sections.
    SectionCount { expected: usize, found: usize },
    /// Same label appears twice inside one section.
    DuplicateLabel { section: String, label: String },
    /// Navigation destination is not an in-app path.
    ExternalDestination { label: String, destination: String },
    /// Social link URL is malformed or not https.
    InvalidSocialUrl { url: String, reason: String },
    /// Social link has an empty accessible label.
    MissingLabel { url: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::SectionCount { expected, found } => {
                write!(f, "Expected {} navigation sections, found {}", expected, found)
            }
            AppError::DuplicateLabel { section, label } => {
                write!(f, "Duplicate link '{}' in section '{}'", label, section)
            }
            AppError::ExternalDestination { label, destination } => {
                write!(f, "Link '{}' points outside the app: {}", label, destination)
            }
            AppError::InvalidSocialUrl { url, reason } => {
                write!(f, "Invalid social URL {}: {}", url, reason)
            }
            AppError::MissingLabel { url } => {
                write!(f, "Social link {} has no accessible label", url)
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
