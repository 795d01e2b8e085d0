//! Application catalog: manifest entries from `desktop.toml` paired with their content panes.

mod panes;

use desktop_app_contract::{AppDescriptor, ApplicationId, ApplicationIdError};
use thiserror::Error;

use crate::config::{load_desktop_config, ConfigError, DesktopConfig, DesktopLayout};

#[derive(Debug, Error)]
/// Boundary errors raised before an application id reaches the session controller.
pub enum CatalogError {
    /// The embedded desktop config could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A manifest entry has no content pane compiled in.
    #[error("no content pane registered for app `{0}`")]
    MissingPane(ApplicationId),
    /// The raw id is not a valid application id.
    #[error(transparent)]
    InvalidId(#[from] ApplicationIdError),
    /// The id is well formed but not in the catalog.
    #[error("unknown application `{0}`")]
    UnknownApp(ApplicationId),
}

#[derive(Debug, Clone)]
pub struct AppCatalog {
    layout: DesktopLayout,
    apps: Vec<AppDescriptor>,
}

impl AppCatalog {
    /// Loads the catalog embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the embedded config is invalid or names an app without a
    /// content pane.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_config(load_desktop_config()?)
    }

    /// Builds a catalog from an already-decoded config.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingPane`] for manifest entries with no content pane.
    pub fn from_config(config: DesktopConfig) -> Result<Self, CatalogError> {
        let apps = config
            .apps
            .into_iter()
            .map(|manifest| {
                let module = panes::content_module(&manifest.app_id)
                    .ok_or_else(|| CatalogError::MissingPane(manifest.app_id.clone()))?;
                Ok(AppDescriptor {
                    app_id: manifest.app_id,
                    display_name: manifest.display_name,
                    icon: manifest.icon,
                    show_on_desktop: manifest.show_on_desktop,
                    module,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self {
            layout: config.layout,
            apps,
        })
    }

    pub fn layout(&self) -> DesktopLayout {
        self.layout
    }

    /// Every app, in start-menu order.
    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    pub fn desktop_icon_apps(&self) -> Vec<AppDescriptor> {
        self.apps
            .iter()
            .filter(|app| app.show_on_desktop)
            .cloned()
            .collect()
    }

    pub fn descriptor(&self, app_id: &ApplicationId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| &app.app_id == app_id)
    }

    /// Validates a raw id from outside the shell (query string, host message) against the
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidId`] for malformed ids and [`CatalogError::UnknownApp`] for
    /// ids the catalog does not contain.
    pub fn resolve(&self, raw: &str) -> Result<ApplicationId, CatalogError> {
        let app_id = ApplicationId::new(raw.trim())?;
        if self.descriptor(&app_id).is_some() {
            Ok(app_id)
        } else {
            Err(CatalogError::UnknownApp(app_id))
        }
    }

    pub fn display_name(&self, app_id: &ApplicationId) -> String {
        self.descriptor(app_id)
            .map(|app| app.display_name.clone())
            .unwrap_or_else(|| app_id.to_string())
    }

    pub fn icon(&self, app_id: &ApplicationId) -> String {
        self.descriptor(app_id)
            .map(|app| app.icon.clone())
            .unwrap_or_default()
    }
}
