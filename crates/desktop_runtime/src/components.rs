//! Desktop shell UI composition and interaction surfaces.

mod start_menu;
mod taskbar;
mod taskbar_input;
mod window;

use desktop_app_contract::ApplicationId;
use leptos::*;

use self::{
    start_menu::StartMenu, taskbar::Taskbar, taskbar_input::start_menu_shortcut,
    window::DesktopWindow,
};

use crate::{
    host::DESKTOP_ROOT_DOM_ID,
    model::{PointerPosition, ShellSnapshot, WindowRect},
    reducer::DesktopAction,
    window_manager::shell_snapshot,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: icons, managed windows, start menu and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let viewport = create_rw_signal(runtime.desktop_viewport());
    let snapshot: Memo<ShellSnapshot> =
        create_memo(move |_| state.with(|desktop| shell_snapshot(desktop, viewport.get())));
    provide_context(snapshot);

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(runtime.desktop_viewport());
    });
    on_cleanup(move || resize_listener.remove());

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let start_menu_open = state.with_untracked(|desktop| desktop.start_menu_open);
        if let Some(action) = start_menu_shortcut(
            &ev.key(),
            ev.ctrl_key(),
            ev.alt_key() || ev.meta_key(),
            start_menu_open,
        ) {
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.is_dragging() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.is_dragging() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            id=DESKTOP_ROOT_DOM_ID
            class="desktop-shell"
            tabindex="-1"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-backdrop" aria-hidden="true"></div>

            <div class="desktop-icon-grid" role="list" aria-label="Desktop">
                <For
                    each=move || runtime.catalog.with_value(|catalog| catalog.desktop_icon_apps())
                    key=|app| app.app_id.clone()
                    let:app
                >
                    {{
                        let app_id = app.app_id.clone();
                        view! {
                            <button
                                type="button"
                                role="listitem"
                                class="desktop-icon"
                                on:dblclick=move |_| {
                                    runtime.dispatch_action(DesktopAction::OpenApp {
                                        app_id: app_id.clone(),
                                    });
                                }
                            >
                                <span class="desktop-icon-glyph" aria-hidden="true">{app.icon.clone()}</span>
                                <span class="desktop-icon-label">{app.display_name.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="desktop-window-layer">
                <For
                    each=move || snapshot.get().taskbar
                    key=|entry| entry.app_id.clone()
                    let:entry
                >
                    <DesktopWindow app_id=entry.app_id />
                </For>
            </div>

            <StartMenu />
            <Taskbar />
        </div>
    }
}

/// Snapshot memo provided by [`DesktopShell`].
fn use_shell_snapshot() -> Memo<ShellSnapshot> {
    use_context::<Memo<ShellSnapshot>>().expect("shell snapshot not provided")
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn window_style(rect: WindowRect, z_index: u32) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x, rect.y, rect.w, rect.h, z_index
    )
}

fn window_class(active: bool, maximized: bool) -> String {
    let active_class = if active { " active" } else { "" };
    let maximized_class = if maximized { " maximized" } else { "" };
    format!("desktop-window{active_class}{maximized_class}")
}

fn taskbar_button_dom_id(app_id: &ApplicationId) -> String {
    format!("taskbar-window-button-{}", app_id.as_str())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_style_positions_window_and_sets_stacking() {
        let rect = WindowRect {
            x: -40,
            y: 0,
            w: 900,
            h: 650,
        };
        assert_eq!(
            window_style(rect, 3),
            "left:-40px;top:0px;width:900px;height:650px;z-index:3;"
        );
    }

    #[test]
    fn window_class_reflects_flags() {
        assert_eq!(window_class(false, false), "desktop-window");
        assert_eq!(window_class(true, true), "desktop-window active maximized");
    }

    #[test]
    fn taskbar_button_ids_are_keyed_by_app() {
        assert_eq!(
            taskbar_button_dom_id(&ApplicationId::trusted("skills")),
            "taskbar-window-button-skills"
        );
    }
}
