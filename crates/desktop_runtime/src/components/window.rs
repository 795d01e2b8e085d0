use super::*;
use desktop_app_contract::window_dom_id;

#[component]
pub(super) fn DesktopWindow(app_id: ApplicationId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let snapshot = use_shell_snapshot();

    let painted = {
        let app_id = app_id.clone();
        Signal::derive(move || {
            snapshot.with(|snapshot| {
                snapshot
                    .visible
                    .iter()
                    .find(|w| w.app_id == app_id)
                    .cloned()
            })
        })
    };
    let (title, icon, content) = runtime.catalog.with_value(|catalog| {
        (
            catalog.display_name(&app_id),
            catalog.icon(&app_id),
            catalog.descriptor(&app_id).map(|app| app.module),
        )
    });
    let content = content.map(|module| module.mount());

    let focus = {
        let app_id = app_id.clone();
        move |_: web_sys::PointerEvent| {
            let inactive = painted.get_untracked().is_some_and(|w| !w.active);
            if inactive {
                runtime.dispatch_action(DesktopAction::FocusWindow {
                    app_id: app_id.clone(),
                });
            }
        }
    };
    let begin_move = {
        let app_id = app_id.clone();
        move |ev: web_sys::PointerEvent| {
            if ev.button() != 0 || !ev.is_primary() {
                return;
            }
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginMove {
                app_id: app_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let toggle_maximize = {
        let app_id = app_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                app_id: app_id.clone(),
            })
        }
    };
    let toggle_maximize_from_button = toggle_maximize.clone();
    let minimize = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                app_id: app_id.clone(),
            });
        }
    };
    let close = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::CloseWindow {
                app_id: app_id.clone(),
            });
        }
    };

    view! {
        <section
            id=window_dom_id(&app_id)
            class=move || {
                painted
                    .get()
                    .map(|w| window_class(w.active, w.maximized))
                    .unwrap_or_else(|| window_class(false, false))
            }
            style=move || painted.get().map(|w| window_style(w.rect, w.z_index)).unwrap_or_default()
            hidden=move || painted.get().is_none()
            tabindex="-1"
            role="dialog"
            aria-label=title.clone()
            on:pointerdown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">{icon}</span>
                    <span>{title.clone()}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=minimize
                    >
                        "–"
                    </button>
                    <button
                        type="button"
                        aria-label=move || {
                            if painted.get().is_some_and(|w| w.maximized) {
                                "Restore window"
                            } else {
                                "Maximize window"
                            }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev: web_sys::MouseEvent| {
                            stop_mouse_event(&ev);
                            toggle_maximize_from_button();
                        }
                    >
                        "□"
                    </button>
                    <button
                        type="button"
                        class="titlebar-close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=close
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">{content}</div>
        </section>
    }
}
