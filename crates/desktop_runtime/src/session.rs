//! The desktop session controller: one owner for window state, drag state and placement.

use desktop_app_contract::ApplicationId;

use crate::{
    config::DesktopLayout,
    model::{DesktopState, InteractionState, PointerPosition, ShellSnapshot, WindowRect},
    placement::{PlacementSource, SeededPlacement},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    window_manager::shell_snapshot,
};

/// Owns the session state and routes every gesture through [`reduce_desktop`].
#[derive(Debug, Clone)]
pub struct DesktopSession<P = SeededPlacement> {
    state: DesktopState,
    interaction: InteractionState,
    placement: P,
}

impl DesktopSession<SeededPlacement> {
    /// Session with clock-seeded random placement.
    pub fn new(layout: DesktopLayout) -> Self {
        Self::with_placement(layout, SeededPlacement::from_clock())
    }
}

impl<P: PlacementSource> DesktopSession<P> {
    pub fn with_placement(layout: DesktopLayout, placement: P) -> Self {
        Self {
            state: DesktopState::with_layout(layout),
            interaction: InteractionState::default(),
            placement,
        }
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.dragging.is_some()
    }

    /// Applies one action.
    pub fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(
            &mut self.state,
            &mut self.interaction,
            &mut self.placement,
            action,
        )
    }

    /// Read-only view for one UI refresh.
    pub fn snapshot(&self, viewport: WindowRect) -> ShellSnapshot {
        shell_snapshot(&self.state, viewport)
    }

    pub fn open(&mut self, app_id: ApplicationId) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::OpenApp { app_id })
    }

    pub fn close(&mut self, app_id: ApplicationId) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::CloseWindow { app_id })
    }

    pub fn minimize(&mut self, app_id: ApplicationId) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::MinimizeWindow { app_id })
    }

    pub fn restore(&mut self, app_id: ApplicationId) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::RestoreWindow { app_id })
    }

    pub fn toggle_maximize(&mut self, app_id: ApplicationId) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::ToggleMaximize { app_id })
    }

    pub fn focus(&mut self, app_id: ApplicationId) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::FocusWindow { app_id })
    }

    pub fn activate_from_taskbar(&mut self, app_id: ApplicationId) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::ActivateTaskbarWindow { app_id })
    }

    pub fn begin_drag(
        &mut self,
        app_id: ApplicationId,
        pointer: PointerPosition,
    ) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::BeginMove { app_id, pointer })
    }

    pub fn update_drag(&mut self, pointer: PointerPosition) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::UpdateMove { pointer })
    }

    pub fn end_drag(&mut self) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::EndMove)
    }

    pub fn toggle_start_menu(&mut self) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::ToggleStartMenu)
    }

    pub fn close_start_menu(&mut self) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::CloseStartMenu)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::placement::FixedPlacement;

    const IDS: [&str; 4] = ["about", "skills", "projects", "resume"];

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::trusted(raw)
    }

    fn session() -> DesktopSession<FixedPlacement> {
        DesktopSession::with_placement(
            DesktopLayout::default(),
            FixedPlacement::new([(110, 55), (170, 80), (230, 125)]),
        )
    }

    fn assert_invariants<P: PlacementSource>(session: &DesktopSession<P>) {
        let state = session.state();
        for (idx, window) in state.windows.iter().enumerate() {
            assert!(
                state.windows[idx + 1..]
                    .iter()
                    .all(|other| other.app_id != window.app_id),
                "duplicate window for {}",
                window.app_id
            );
        }
        if let Some(active) = &state.active_window {
            let window = state.window(active).expect("active window is open");
            assert!(!window.minimized, "active window {active} is minimized");
        }
    }

    #[test]
    fn reopening_changes_only_active_window() {
        let mut s = session();
        s.open(id("about"));
        s.open(id("skills"));
        let windows = s.state().windows.clone();

        s.open(id("about"));

        assert_eq!(s.state().windows, windows);
        assert_eq!(s.state().active_window, Some(id("about")));
    }

    #[test]
    fn close_reassigns_focus_to_most_recent_window() {
        let mut s = session();
        s.open(id("about"));
        s.open(id("skills"));
        s.open(id("projects"));
        assert_eq!(s.state().active_window, Some(id("projects")));

        s.close(id("projects"));
        assert_eq!(s.state().active_window, Some(id("skills")));
        s.close(id("skills"));
        assert_eq!(s.state().active_window, Some(id("about")));
        s.close(id("about"));
        assert_eq!(s.state().active_window, None);
    }

    #[test]
    fn minimize_clears_focus_only_for_the_active_window() {
        let mut s = session();
        s.open(id("about"));
        s.open(id("skills"));

        s.minimize(id("about"));
        assert_eq!(s.state().active_window, Some(id("skills")));

        s.minimize(id("skills"));
        assert_eq!(s.state().active_window, None);
        assert_invariants(&s);
    }

    #[test]
    fn restore_and_close_are_noops_for_absent_or_visible_windows() {
        let mut s = session();
        s.open(id("about"));
        s.open(id("skills"));
        let before = s.state().clone();

        assert!(s.restore(id("about")).is_empty());
        assert!(s.restore(id("resume")).is_empty());
        assert!(s.close(id("resume")).is_empty());
        assert!(s.minimize(id("resume")).is_empty());
        assert!(s.toggle_maximize(id("resume")).is_empty());
        assert!(s.focus(id("resume")).is_empty());

        assert_eq!(s.state(), &before);
    }

    #[test]
    fn toggle_maximize_round_trips_without_touching_geometry() {
        let mut s = session();
        s.open(id("about"));
        s.open(id("skills"));
        s.minimize(id("skills"));
        let before = s.state().clone();

        s.toggle_maximize(id("about"));
        let window = s.state().window(&id("about")).expect("window");
        assert!(window.maximized);
        assert_eq!(window.rect, before.windows[0].rect);
        assert_eq!(s.state().active_window, before.active_window);

        s.toggle_maximize(id("about"));
        s.toggle_maximize(id("skills"));
        s.toggle_maximize(id("skills"));
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn minimized_window_keeps_maximized_flag_through_restore() {
        let mut s = session();
        s.open(id("projects"));
        s.toggle_maximize(id("projects"));
        s.minimize(id("projects"));
        s.restore(id("projects"));

        let window = s.state().window(&id("projects")).expect("window");
        assert!(window.maximized);
        assert!(!window.minimized);
        assert_eq!(s.state().active_window, Some(id("projects")));
    }

    #[test]
    fn reopening_after_close_creates_a_fresh_window() {
        let mut s = session();
        s.open(id("about"));
        s.begin_drag(id("about"), PointerPosition { x: 200, y: 100 });
        s.update_drag(PointerPosition { x: 700, y: 500 });
        s.end_drag();
        s.close(id("about"));

        s.open(id("about"));

        let window = s.state().window(&id("about")).expect("window");
        assert_eq!((window.rect.x, window.rect.y), (170, 80));
        assert!(!window.maximized);
    }

    #[test]
    fn about_and_skills_scenario() {
        let mut s = session();
        let band = s.state().layout.placement;

        s.open(id("about"));
        assert_eq!(s.state().windows.len(), 1);
        assert_eq!(s.state().active_window, Some(id("about")));
        let about = s.state().window(&id("about")).expect("about");
        assert!(band.contains(about.rect.x, about.rect.y));

        s.open(id("skills"));
        assert_eq!(s.state().windows.len(), 2);
        assert_eq!(s.state().active_window, Some(id("skills")));

        s.minimize(id("skills"));
        assert_eq!(s.state().active_window, None);
        assert!(s.state().window(&id("skills")).expect("skills").minimized);

        s.focus(id("about"));
        assert_eq!(s.state().active_window, Some(id("about")));

        s.close(id("about"));
        assert_eq!(s.state().windows.len(), 1);
        assert!(s.state().window(&id("skills")).expect("skills").minimized);
        assert_eq!(s.state().active_window, None);

        s.restore(id("skills"));
        assert!(!s.state().window(&id("skills")).expect("skills").minimized);
        assert_eq!(s.state().active_window, Some(id("skills")));
        assert_invariants(&s);
    }

    #[test]
    fn clock_seeded_session_places_windows_inside_band() {
        let mut s = DesktopSession::new(DesktopLayout::default());
        for raw in IDS {
            s.open(id(raw));
        }
        let band = s.state().layout.placement;
        for window in &s.state().windows {
            assert!(band.contains(window.rect.x, window.rect.y));
            assert_eq!((window.rect.w, window.rect.h), (900, 650));
        }
    }

    #[test]
    fn snapshot_hides_minimized_windows_and_stacks_active_on_top() {
        let mut s = session();
        s.open(id("about"));
        s.open(id("skills"));
        s.open(id("projects"));
        s.minimize(id("skills"));
        s.focus(id("about"));
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1440,
            h: 852,
        };

        let snapshot = s.snapshot(viewport);

        let painted: Vec<(&str, u32)> = snapshot
            .visible
            .iter()
            .map(|w| (w.app_id.as_str(), w.z_index))
            .collect();
        assert_eq!(painted, vec![("projects", 1), ("about", 2)]);
        assert_eq!(snapshot.taskbar.len(), 3);
        assert_eq!(snapshot.active_window, Some(id("about")));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Open(usize),
        Close(usize),
        Minimize(usize),
        Restore(usize),
        Maximize(usize),
        Focus(usize),
        Taskbar(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let index = 0..IDS.len();
        prop_oneof![
            index.clone().prop_map(Op::Open),
            index.clone().prop_map(Op::Close),
            index.clone().prop_map(Op::Minimize),
            index.clone().prop_map(Op::Restore),
            index.clone().prop_map(Op::Maximize),
            index.clone().prop_map(Op::Focus),
            index.prop_map(Op::Taskbar),
        ]
    }

    proptest! {
        #[test]
        fn window_list_stays_unique_and_focus_stays_valid(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut s = session();
            for op in ops {
                match op {
                    Op::Open(i) => s.open(id(IDS[i])),
                    Op::Close(i) => s.close(id(IDS[i])),
                    Op::Minimize(i) => s.minimize(id(IDS[i])),
                    Op::Restore(i) => s.restore(id(IDS[i])),
                    Op::Maximize(i) => s.toggle_maximize(id(IDS[i])),
                    Op::Focus(i) => s.focus(id(IDS[i])),
                    Op::Taskbar(i) => s.activate_from_taskbar(id(IDS[i])),
                };
                assert_invariants(&s);
                prop_assert!(s.state().windows.len() <= IDS.len());
            }
        }

        #[test]
        fn drag_never_moves_window_above_viewport_top(
            start_x in -2_000i32..2_000,
            start_y in -2_000i32..2_000,
            moves in prop::collection::vec((any::<i32>(), any::<i32>()), 1..32),
        ) {
            let mut s = session();
            s.open(id("about"));
            s.begin_drag(id("about"), PointerPosition { x: start_x, y: start_y });
            for (x, y) in moves {
                s.update_drag(PointerPosition { x, y });
                let rect = s.state().window(&id("about")).expect("window").rect;
                prop_assert!(rect.y >= 0);
            }
            prop_assert!(s.is_dragging());
        }
    }
}
