use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};

use crate::config::DesktopLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn with_origin(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Per-application window record. Keyed by `app_id`; at most one per id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub app_id: ApplicationId,
    /// Stored geometry. Kept untouched while maximized so un-maximizing restores it.
    pub rect: WindowRect,
    pub minimized: bool,
    pub maximized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub layout: DesktopLayout,
    /// Insertion order is open order.
    pub windows: Vec<WindowState>,
    pub active_window: Option<ApplicationId>,
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_layout(DesktopLayout::default())
    }
}

impl DesktopState {
    pub fn with_layout(layout: DesktopLayout) -> Self {
        Self {
            layout,
            windows: Vec::new(),
            active_window: None,
            start_menu_open: false,
        }
    }

    pub fn window(&self, app_id: &ApplicationId) -> Option<&WindowState> {
        self.windows.iter().find(|w| &w.app_id == app_id)
    }

    pub fn window_mut(&mut self, app_id: &ApplicationId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| &w.app_id == app_id)
    }

    pub fn is_active(&self, app_id: &ApplicationId) -> bool {
        self.active_window.as_ref() == Some(app_id)
    }
}

/// In-progress title-bar drag. Fixed size regardless of how many moves arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: ApplicationId,
    /// Pointer position minus window origin at drag start.
    pub offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

/// A non-minimized window as the rendering layer should paint it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintedWindow {
    pub app_id: ApplicationId,
    /// Render-time rect: the viewport when maximized, stored geometry otherwise.
    pub rect: WindowRect,
    /// 1-based stacking position; the active window has the highest value.
    pub z_index: u32,
    pub active: bool,
    pub maximized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskbarEntry {
    pub app_id: ApplicationId,
    pub minimized: bool,
    pub active: bool,
}

/// Read-only view of the session consumed once per UI refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellSnapshot {
    /// Non-minimized windows in paint order (bottom first).
    pub visible: Vec<PaintedWindow>,
    /// Every open window in open order.
    pub taskbar: Vec<TaskbarEntry>,
    pub active_window: Option<ApplicationId>,
    pub start_menu_open: bool,
}
