//! Reducer actions, side-effect intents, and transition logic for the desktop session.

use desktop_app_contract::ApplicationId;

use crate::{
    model::{DesktopState, DragSession, InteractionState, PointerPosition, WindowState},
    placement::PlacementSource,
    window_manager::{activate_window, dragged_origin, most_recent_focusable},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an application window, or bring the existing one forward.
    OpenApp {
        /// Application to open. Must already be validated against the catalog.
        app_id: ApplicationId,
    },
    /// Close a window.
    CloseWindow {
        /// Window to close.
        app_id: ApplicationId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        app_id: ApplicationId,
    },
    /// Un-minimize a window and make it active.
    RestoreWindow {
        /// Window to restore.
        app_id: ApplicationId,
    },
    /// Flip the maximized flag of a window.
    ToggleMaximize {
        /// Window to maximize or un-maximize.
        app_id: ApplicationId,
    },
    /// Make a visible window active.
    FocusWindow {
        /// Window to focus.
        app_id: ApplicationId,
    },
    /// Taskbar button press: restore when minimized, focus otherwise.
    ActivateTaskbarWindow {
        /// Window associated with the taskbar button.
        app_id: ApplicationId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: ApplicationId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
}

impl DesktopAction {
    /// Window the action addresses, if any.
    pub fn app_id(&self) -> Option<&ApplicationId> {
        match self {
            Self::OpenApp { app_id }
            | Self::CloseWindow { app_id }
            | Self::MinimizeWindow { app_id }
            | Self::RestoreWindow { app_id }
            | Self::ToggleMaximize { app_id }
            | Self::FocusWindow { app_id }
            | Self::ActivateTaskbarWindow { app_id }
            | Self::BeginMove { app_id, .. } => Some(app_id),
            Self::UpdateMove { .. } | Self::EndMove | Self::ToggleStartMenu | Self::CloseStartMenu => {
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move DOM focus into the newly active window.
    FocusWindowElement(ApplicationId),
    /// Activation was cleared; return DOM focus to the desktop surface.
    FocusDesktop,
}

/// Applies a [`DesktopAction`] to the session state and collects resulting side effects.
///
/// Every action is total: ids that are not open (or not in the state the action needs) leave the
/// state untouched and produce no effects.
pub fn reduce_desktop<P: PlacementSource + ?Sized>(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    placement: &mut P,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            state.start_menu_open = false;
            if let Some(window) = state.window_mut(&app_id) {
                window.minimized = false;
            } else {
                let (x, y) = placement.next_origin(&state.layout.placement);
                let rect = state.layout.window_rect_at(x, y);
                state.windows.push(WindowState {
                    app_id: app_id.clone(),
                    rect,
                    minimized: false,
                    maximized: false,
                });
            }
            let was_active = state.is_active(&app_id);
            if activate_window(state, &app_id) && !was_active {
                effects.push(RuntimeEffect::FocusWindowElement(app_id));
            }
        }
        DesktopAction::CloseWindow { app_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.app_id != app_id);
            if state.windows.len() == before_len {
                return effects;
            }
            end_drag_of(interaction, &app_id);
            if state.is_active(&app_id) {
                state.active_window = most_recent_focusable(state);
                effects.push(match &state.active_window {
                    Some(next) => RuntimeEffect::FocusWindowElement(next.clone()),
                    None => RuntimeEffect::FocusDesktop,
                });
            }
        }
        DesktopAction::MinimizeWindow { app_id } => {
            let Some(window) = state.window_mut(&app_id) else {
                return effects;
            };
            if window.minimized {
                return effects;
            }
            window.minimized = true;
            end_drag_of(interaction, &app_id);
            if state.is_active(&app_id) {
                state.active_window = None;
                effects.push(RuntimeEffect::FocusDesktop);
            }
        }
        DesktopAction::RestoreWindow { app_id } => {
            let Some(window) = state.window_mut(&app_id) else {
                return effects;
            };
            if !window.minimized {
                return effects;
            }
            window.minimized = false;
            state.active_window = Some(app_id.clone());
            effects.push(RuntimeEffect::FocusWindowElement(app_id));
        }
        DesktopAction::ToggleMaximize { app_id } => {
            if let Some(window) = state.window_mut(&app_id) {
                window.maximized = !window.maximized;
            }
        }
        DesktopAction::FocusWindow { app_id } => {
            let was_active = state.is_active(&app_id);
            if activate_window(state, &app_id) && !was_active {
                effects.push(RuntimeEffect::FocusWindowElement(app_id));
            }
        }
        DesktopAction::ActivateTaskbarWindow { app_id } => {
            let minimized = state.window(&app_id).map(|w| w.minimized);
            let next = match minimized {
                Some(true) => DesktopAction::RestoreWindow { app_id },
                Some(false) => DesktopAction::FocusWindow { app_id },
                None => return effects,
            };
            effects.extend(reduce_desktop(state, interaction, placement, next));
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let Some(window) = state.window(&app_id) else {
                return effects;
            };
            if window.maximized || window.minimized {
                return effects;
            }
            let offset = PointerPosition {
                x: pointer.x.saturating_sub(window.rect.x),
                y: pointer.y.saturating_sub(window.rect.y),
            };
            interaction.dragging = Some(DragSession {
                app_id: app_id.clone(),
                offset,
            });
            effects.extend(reduce_desktop(
                state,
                interaction,
                placement,
                DesktopAction::FocusWindow { app_id },
            ));
        }
        DesktopAction::UpdateMove { pointer } => {
            let Some(DragSession { app_id, offset }) = interaction.dragging.as_ref() else {
                return effects;
            };
            let offset = *offset;
            let Some(window) = state.window_mut(app_id) else {
                interaction.dragging = None;
                return effects;
            };
            if !window.maximized {
                let (x, y) = dragged_origin(pointer, offset);
                window.rect = window.rect.with_origin(x, y);
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
    }

    effects
}

fn end_drag_of(interaction: &mut InteractionState, app_id: &ApplicationId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| &session.app_id == app_id)
    {
        interaction.dragging = None;
    }
}
