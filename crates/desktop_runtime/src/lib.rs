//! Desktop window-management runtime for the portfolio site.
//!
//! The session controller ([`DesktopSession`]) and its pure reducer run anywhere; the Leptos
//! components in [`components`] mirror session state into the browser.

pub mod apps;
pub mod components;
pub mod config;
mod effect_executor;
pub mod host;
pub mod model;
pub mod placement;
pub mod reducer;
mod runtime_context;
pub mod session;
pub mod window_manager;

pub use apps::{AppCatalog, CatalogError};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig, DesktopLayout};
pub use model::*;
pub use placement::{FixedPlacement, PlacementSource, SeededPlacement};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use session::DesktopSession;
