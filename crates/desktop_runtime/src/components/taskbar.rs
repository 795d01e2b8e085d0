use std::time::Duration;

use platform_host::{ClockFormat, ClockSnapshot};

use super::*;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let snapshot = use_shell_snapshot();
    let clock_now = create_rw_signal(ClockSnapshot::now());
    let clock_format = ClockFormat::default();

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            style=move || format!("height:{}px;", runtime.taskbar_height_px())
        >
            <div class="taskbar-center">
                <button
                    type="button"
                    id="taskbar-start-button"
                    class="taskbar-start"
                    aria-label="Start"
                    aria-haspopup="menu"
                    aria-expanded=move || snapshot.get().start_menu_open.to_string()
                    on:mousedown=move |ev| ev.stop_propagation()
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    }
                >
                    "⊞"
                </button>
                <button type="button" class="taskbar-search" aria-label="Search">
                    "Search"
                </button>
                <div class="taskbar-divider" aria-hidden="true"></div>

                <For
                    each=move || snapshot.get().taskbar
                    key=|entry| entry.app_id.clone()
                    let:entry
                >
                    {{
                        let app_id = entry.app_id.clone();
                        let active_id = app_id.clone();
                        let is_active = move || {
                            snapshot.with(|snapshot| snapshot.active_window.as_ref() == Some(&active_id))
                        };
                        let is_active_for_indicator = is_active.clone();
                        let (label, icon) = runtime.catalog.with_value(|catalog| {
                            (catalog.display_name(&app_id), catalog.icon(&app_id))
                        });
                        view! {
                            <button
                                type="button"
                                id=taskbar_button_dom_id(&app_id)
                                class=move || {
                                    if is_active() {
                                        "taskbar-app active"
                                    } else {
                                        "taskbar-app"
                                    }
                                }
                                aria-label=label
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::ActivateTaskbarWindow {
                                        app_id: app_id.clone(),
                                    });
                                }
                            >
                                <span aria-hidden="true">{icon}</span>
                                <Show when=is_active_for_indicator fallback=|| ()>
                                    <span class="taskbar-app-indicator" aria-hidden="true"></span>
                                </Show>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-tray">
                <span class="taskbar-tray-icons" aria-hidden="true">"📶 🔊 🔋"</span>
                <div
                    class="taskbar-clock"
                    role="timer"
                    aria-label=move || clock_now.get().aria_label(clock_format)
                >
                    <div class="taskbar-clock-time">
                        {move || clock_now.get().format_time(clock_format)}
                    </div>
                    <div class="taskbar-clock-date">{move || clock_now.get().format_date()}</div>
                </div>
            </div>
        </footer>
    }
}
