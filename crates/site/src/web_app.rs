use desktop_runtime::{AppCatalog, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="A desktop-style portfolio with movable application windows." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    match AppCatalog::load() {
        Ok(catalog) => view! {
            <DesktopProvider catalog=catalog>
                <DesktopShell />
            </DesktopProvider>
        }
        .into_view(),
        Err(err) => {
            logging::error!("desktop catalog failed to load: {err}");
            view! {
                <section class="desktop-boot-error" role="alert">
                    <h1>"The desktop could not start."</h1>
                    <p>{err.to_string()}</p>
                </section>
            }
            .into_view()
        }
    }
}
