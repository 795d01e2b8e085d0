use desktop_app_contract::AppDescriptor;

use super::*;
use crate::apps::AppCatalog;

const START_MENU_OWNER: &str = "Saiganesh Angadi";
const RECOMMENDED_APP_ID: &str = "resume";

/// Catalog entry surfaced under "Recommended".
fn recommended_app(catalog: &AppCatalog) -> Option<AppDescriptor> {
    let app_id = ApplicationId::new(RECOMMENDED_APP_ID).ok()?;
    catalog.descriptor(&app_id).cloned()
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let snapshot = use_shell_snapshot();
    let recommended = runtime.catalog.with_value(recommended_app);

    view! {
        <Show when=move || snapshot.get().start_menu_open fallback=|| ()>
            <div
                class="start-menu-backdrop"
                aria-hidden="true"
                on:click=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
            ></div>
            <div
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Start"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-search">
                    <span aria-hidden="true">"🔍"</span>
                    <input
                        type="text"
                        aria-label="Search"
                        placeholder="Search for apps, settings, and documents"
                    />
                </div>
                <h3 class="start-menu-heading">"Pinned"</h3>
                <div class="start-menu-grid">
                    <For
                        each=move || runtime.catalog.with_value(|catalog| catalog.apps().to_vec())
                        key=|app| app.app_id.clone()
                        let:app
                    >
                        {{
                            let app_id = app.app_id.clone();
                            view! {
                                <button
                                    type="button"
                                    role="menuitem"
                                    class="start-menu-tile"
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        runtime.dispatch_action(DesktopAction::OpenApp {
                                            app_id: app_id.clone(),
                                        });
                                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                                    }
                                >
                                    <span class="start-menu-tile-icon" aria-hidden="true">
                                        {app.icon.clone()}
                                    </span>
                                    <span class="start-menu-tile-label">{app.display_name.clone()}</span>
                                </button>
                            }
                        }}
                    </For>
                </div>
                {recommended
                    .clone()
                    .map(|app| {
                        let app_id = app.app_id.clone();
                        view! {
                            <section class="start-menu-recommended">
                                <h3 class="start-menu-heading">"Recommended"</h3>
                                <button
                                    type="button"
                                    role="menuitem"
                                    class="start-menu-recommended-item"
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        runtime.dispatch_action(DesktopAction::OpenApp {
                                            app_id: app_id.clone(),
                                        });
                                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                                    }
                                >
                                    <span aria-hidden="true">{app.icon.clone()}</span>
                                    <span>"Resume.pdf"</span>
                                </button>
                            </section>
                        }
                    })}
                <footer class="start-menu-footer">
                    <div class="start-menu-user">
                        <span class="start-menu-avatar" aria-hidden="true">"👤"</span>
                        <span>{START_MENU_OWNER}</span>
                    </div>
                    <button type="button" class="start-menu-settings" aria-label="Settings">
                        "⚙"
                    </button>
                </footer>
            </div>
        </Show>
    }
}
