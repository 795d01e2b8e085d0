//! Window-manager helpers shared by the desktop reducer and the rendering layer.

use desktop_app_contract::ApplicationId;

use crate::model::{
    DesktopState, PaintedWindow, PointerPosition, ShellSnapshot, TaskbarEntry, WindowRect,
    WindowState,
};

/// Smallest y a dragged window origin may take. There is no matching horizontal limit.
pub const MIN_DRAG_Y: i32 = 0;

/// Makes `app_id` the active window when it is open and not minimized.
///
/// Returns `true` when `app_id` is active afterwards.
pub fn activate_window(state: &mut DesktopState, app_id: &ApplicationId) -> bool {
    let focusable = state
        .window(app_id)
        .map(|w| !w.minimized)
        .unwrap_or(false);
    if focusable {
        state.active_window = Some(app_id.clone());
    }
    focusable
}

/// The most recently opened window that may hold focus.
pub fn most_recent_focusable(state: &DesktopState) -> Option<ApplicationId> {
    state
        .windows
        .iter()
        .rev()
        .find(|w| !w.minimized)
        .map(|w| w.app_id.clone())
}

/// Non-minimized windows bottom-to-top: open order, with the active window lifted to the top.
pub fn paint_order(state: &DesktopState) -> Vec<&WindowState> {
    let (mut order, active): (Vec<&WindowState>, Vec<&WindowState>) = state
        .windows
        .iter()
        .filter(|w| !w.minimized)
        .partition(|w| !state.is_active(&w.app_id));
    order.extend(active);
    order
}

/// Geometry to paint `window` with inside `viewport`.
pub fn render_rect(window: &WindowState, viewport: WindowRect) -> WindowRect {
    if window.maximized {
        viewport
    } else {
        window.rect
    }
}

/// Window origin for a pointer at `pointer` given the grab `offset`.
pub fn dragged_origin(pointer: PointerPosition, offset: PointerPosition) -> (i32, i32) {
    let x = pointer.x.saturating_sub(offset.x);
    let y = pointer.y.saturating_sub(offset.y).max(MIN_DRAG_Y);
    (x, y)
}

/// Builds the outbound snapshot for one UI refresh.
pub fn shell_snapshot(state: &DesktopState, viewport: WindowRect) -> ShellSnapshot {
    let visible = paint_order(state)
        .into_iter()
        .enumerate()
        .map(|(idx, window)| PaintedWindow {
            app_id: window.app_id.clone(),
            rect: render_rect(window, viewport),
            z_index: (idx + 1) as u32,
            active: state.is_active(&window.app_id),
            maximized: window.maximized,
        })
        .collect();
    let taskbar = state
        .windows
        .iter()
        .map(|window| TaskbarEntry {
            app_id: window.app_id.clone(),
            minimized: window.minimized,
            active: state.is_active(&window.app_id),
        })
        .collect();

    ShellSnapshot {
        visible,
        taskbar,
        active_window: state.active_window.clone(),
        start_menu_open: state.start_menu_open,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::trusted(raw)
    }

    fn window(raw: &str, minimized: bool) -> WindowState {
        WindowState {
            app_id: id(raw),
            rect: WindowRect {
                x: 100,
                y: 50,
                w: 900,
                h: 650,
            },
            minimized,
            maximized: false,
        }
    }

    fn state_with(windows: Vec<WindowState>, active: Option<&str>) -> DesktopState {
        let mut state = DesktopState::default();
        state.windows = windows;
        state.active_window = active.map(id);
        state
    }

    #[test]
    fn paint_order_lifts_active_window_and_keeps_open_order_for_rest() {
        let state = state_with(
            vec![
                window("about", false),
                window("skills", false),
                window("resume", true),
                window("contact", false),
            ],
            Some("skills"),
        );
        let order: Vec<&str> = paint_order(&state)
            .into_iter()
            .map(|w| w.app_id.as_str())
            .collect();
        assert_eq!(order, vec!["about", "contact", "skills"]);
    }

    #[test]
    fn most_recent_focusable_skips_minimized_windows() {
        let state = state_with(
            vec![window("about", false), window("skills", true)],
            None,
        );
        assert_eq!(most_recent_focusable(&state), Some(id("about")));

        let all_minimized = state_with(vec![window("skills", true)], None);
        assert_eq!(most_recent_focusable(&all_minimized), None);
    }

    #[test]
    fn activate_window_refuses_minimized_and_absent_ids() {
        let mut state = state_with(
            vec![window("about", false), window("skills", true)],
            None,
        );
        assert!(!activate_window(&mut state, &id("skills")));
        assert!(!activate_window(&mut state, &id("resume")));
        assert_eq!(state.active_window, None);
        assert!(activate_window(&mut state, &id("about")));
        assert_eq!(state.active_window, Some(id("about")));
    }

    #[test]
    fn dragged_origin_clamps_only_vertically() {
        let offset = PointerPosition { x: 40, y: 10 };
        assert_eq!(
            dragged_origin(PointerPosition { x: 10, y: -300 }, offset),
            (-30, 0)
        );
        assert_eq!(
            dragged_origin(PointerPosition { x: 500, y: 210 }, offset),
            (460, 200)
        );
    }

    #[test]
    fn snapshot_paints_maximized_windows_at_viewport_and_lists_all_in_taskbar() {
        let mut maximized = window("projects", false);
        maximized.maximized = true;
        let state = state_with(
            vec![window("about", true), maximized],
            Some("projects"),
        );
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 672,
        };

        let snapshot = shell_snapshot(&state, viewport);

        assert_eq!(
            snapshot.visible,
            vec![PaintedWindow {
                app_id: id("projects"),
                rect: viewport,
                z_index: 1,
                active: true,
                maximized: true,
            }]
        );
        assert_eq!(
            snapshot.taskbar,
            vec![
                TaskbarEntry {
                    app_id: id("about"),
                    minimized: true,
                    active: false,
                },
                TaskbarEntry {
                    app_id: id("projects"),
                    minimized: false,
                    active: true,
                },
            ]
        );
        assert_eq!(state.windows[1].rect.x, 100);
    }
}
