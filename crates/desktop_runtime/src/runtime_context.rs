//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived session controller, the reactive state mirror the components
//! read, and the runtime effect queue. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;

use crate::{
    apps::{AppCatalog, CatalogError},
    effect_executor, host,
    model::{DesktopState, WindowRect},
    reducer::{DesktopAction, RuntimeEffect},
    session::DesktopSession,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Application catalog the shell was booted with.
    pub catalog: StoredValue<AppCatalog>,
    /// The session controller. Only [`DesktopRuntimeContext::dispatch`] mutates it.
    pub session: StoredValue<DesktopSession>,
    /// Reactive mirror of the session state, replaced only when a dispatch changed it.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    pub fn is_dragging(&self) -> bool {
        self.session.with_value(|session| session.is_dragging())
    }

    pub fn taskbar_height_px(&self) -> i32 {
        self.catalog
            .with_value(|catalog| catalog.layout().taskbar_height_px)
    }

    pub fn desktop_viewport(&self) -> WindowRect {
        host::desktop_viewport_rect(self.taskbar_height_px())
    }

    /// Opens an app named by an untrusted id after checking it against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when `raw` is malformed or not in the catalog.
    pub fn open_app_by_raw_id(&self, raw: &str) -> Result<(), CatalogError> {
        let app_id = self.catalog.with_value(|catalog| catalog.resolve(raw))?;
        self.dispatch_action(DesktopAction::OpenApp { app_id });
        Ok(())
    }
}

fn open_boot_targets(runtime: DesktopRuntimeContext) {
    let Some(search) = host::location_search() else {
        return;
    };
    let targets = host::parse_open_query(&search);
    if targets.is_empty() {
        return;
    }

    logging::log!("opening {} app(s) from boot query", targets.len());
    for raw in targets {
        if let Err(err) = runtime.open_app_by_raw_id(&raw) {
            logging::warn!("ignoring boot open target `{raw}`: {err}");
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Application catalog assembled by the entry layer.
    catalog: AppCatalog,
    children: Children,
) -> impl IntoView {
    let session = store_value(DesktopSession::new(catalog.layout()));
    let state = create_rw_signal(session.with_value(|session| session.state().clone()));
    let catalog = store_value(catalog);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let target = action.app_id().cloned();
        let mut new_effects = Vec::new();
        let mut next_state = None;

        session.update_value(|session| {
            new_effects = session.dispatch(action);
            if state.with_untracked(|current| current != session.state()) {
                next_state = Some(session.state().clone());
            }
        });

        match next_state {
            Some(next) => state.set(next),
            None => {
                if let Some(app_id) = target {
                    if state.with_untracked(|current| current.window(&app_id).is_none()) {
                        logging::debug_warn!("desktop action ignored: `{app_id}` is not open");
                    }
                }
            }
        }

        if !new_effects.is_empty() {
            effects.update(|queue| queue.extend(new_effects));
        }
    });

    let runtime = DesktopRuntimeContext {
        catalog,
        session,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());
    effect_executor::install(runtime);
    open_boot_targets(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
