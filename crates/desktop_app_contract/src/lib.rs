//! Shared contract types between the desktop session controller and the content panes it hosts.
//!
//! An application is described once by the host ([`AppDescriptor`]) and referenced everywhere
//! else by its [`ApplicationId`]. The controller never looks inside [`AppModule`]; only the
//! rendering layer mounts it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_APPLICATION_ID_LEN: usize = 32;

/// Stable identifier for a portfolio application pane.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejection reasons for malformed application ids.
pub enum ApplicationIdError {
    /// The id was empty.
    #[error("application id must not be empty")]
    Empty,
    /// The id exceeded the length limit.
    #[error("application id `{0}` is longer than 32 bytes")]
    TooLong(String),
    /// The id contained characters outside `[a-z0-9-]` or had a bad leading/trailing byte.
    #[error("invalid application id `{0}`; expected a lowercase slug such as `about`")]
    Malformed(String),
}

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase slug (`about`, `case-studies`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ApplicationIdError> {
        let raw = raw.into();
        validate_application_id(&raw)?;
        Ok(Self(raw))
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = ApplicationIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ApplicationId> for String {
    fn from(value: ApplicationId) -> Self {
        value.0
    }
}

fn validate_application_id(raw: &str) -> Result<(), ApplicationIdError> {
    if raw.is_empty() {
        return Err(ApplicationIdError::Empty);
    }
    if raw.len() > MAX_APPLICATION_ID_LEN {
        return Err(ApplicationIdError::TooLong(raw.to_string()));
    }

    let bytes = raw.as_bytes();
    let well_formed = bytes[0].is_ascii_lowercase()
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && !raw.ends_with('-');
    if well_formed {
        Ok(())
    } else {
        Err(ApplicationIdError::Malformed(raw.to_string()))
    }
}

/// Static content mount function used by the app catalog.
pub type AppMountFn = fn() -> View;

#[derive(Debug, Clone, Copy)]
/// Opaque content-rendering capability for one pane type.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Renders the pane content.
    pub fn mount(self) -> View {
        (self.mount_fn)()
    }
}

#[derive(Debug, Clone)]
/// Immutable host-defined description of an application.
pub struct AppDescriptor {
    /// Canonical app id; window state is keyed by it.
    pub app_id: ApplicationId,
    /// Human-readable name shown in title bars, tiles and icons.
    pub display_name: String,
    /// Icon glyph.
    pub icon: String,
    /// Whether the app has a desktop icon in addition to its start-menu tile.
    pub show_on_desktop: bool,
    /// Content renderer.
    pub module: AppModule,
}

/// DOM id of the managed window element for `app_id`.
pub fn window_dom_id(app_id: &ApplicationId) -> String {
    format!("desktop-window-{}", app_id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_id_requires_lowercase_slug() {
        assert!(ApplicationId::new("about").is_ok());
        assert!(ApplicationId::new("case-studies").is_ok());
        assert!(ApplicationId::new("web3").is_ok());
        assert_eq!(ApplicationId::new(""), Err(ApplicationIdError::Empty));
        assert!(matches!(
            ApplicationId::new("About"),
            Err(ApplicationIdError::Malformed(_))
        ));
        assert!(matches!(
            ApplicationId::new("3d"),
            Err(ApplicationIdError::Malformed(_))
        ));
        assert!(matches!(
            ApplicationId::new("skills-"),
            Err(ApplicationIdError::Malformed(_))
        ));
        assert!(matches!(
            ApplicationId::new("a".repeat(33)),
            Err(ApplicationIdError::TooLong(_))
        ));
    }

    #[test]
    fn application_id_deserialization_validates() {
        let parsed: Result<ApplicationId, _> = serde_json::from_str("\"resume\"");
        assert_eq!(parsed.ok(), Some(ApplicationId::trusted("resume")));
        let rejected: Result<ApplicationId, _> = serde_json::from_str("\"Not Valid\"");
        assert!(rejected.is_err());
    }

    #[test]
    fn window_dom_id_embeds_app_id() {
        assert_eq!(
            window_dom_id(&ApplicationId::trusted("contact")),
            "desktop-window-contact"
        );
    }
}
