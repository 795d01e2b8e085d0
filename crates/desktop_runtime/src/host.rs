//! Browser host boundary: viewport geometry, DOM focus and the boot query string.

use desktop_app_contract::{window_dom_id, ApplicationId};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::model::WindowRect;

/// DOM id of the desktop surface that receives focus when no window is active.
pub const DESKTOP_ROOT_DOM_ID: &str = "desktop-shell-root";

const FALLBACK_VIEWPORT_W: i32 = 1024;
const FALLBACK_VIEWPORT_H: i32 = 768;

/// Area windows may occupy: the browser viewport minus the taskbar.
pub fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_W);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_H);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(320),
                h: (height - taskbar_height_px).max(220),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: FALLBACK_VIEWPORT_W,
        h: FALLBACK_VIEWPORT_H - taskbar_height_px,
    }
}

/// Focuses an element by id and reports whether a focusable element was found.
pub fn focus_element_by_id(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return false;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return false;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return false;
        };
        let _ = element.focus();
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

pub fn focus_window_element(app_id: &ApplicationId) -> bool {
    focus_element_by_id(&window_dom_id(app_id))
}

pub fn focus_desktop() -> bool {
    focus_element_by_id(DESKTOP_ROOT_DOM_ID)
}

/// Raw `location.search` of the page, when running in a browser.
pub fn location_search() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().search().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Extracts app ids from `open=` parameters (`?open=about,skills&open=resume`), in order.
///
/// Ids are returned raw; callers validate them against the catalog.
pub fn parse_open_query(search: &str) -> Vec<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.strip_prefix("open="))
        .flat_map(|value| {
            value
                .replace("%2C", ",")
                .replace("%2c", ",")
                .split(',')
                .map(str::trim)
                .filter(|raw| !raw.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
