//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{host, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}

fn run_runtime_effect(effect: RuntimeEffect) {
    // Deferred a frame so a freshly opened window exists in the DOM before it is focused.
    request_animation_frame(move || {
        if !focus_effect_target(&effect) {
            logging::debug_warn!("{}", missing_focus_target(&effect));
        }
    });
}

/// Moves DOM focus for `effect`; `false` when the target element is missing.
fn focus_effect_target(effect: &RuntimeEffect) -> bool {
    match effect {
        RuntimeEffect::FocusWindowElement(app_id) => host::focus_window_element(app_id),
        RuntimeEffect::FocusDesktop => host::focus_desktop(),
    }
}

fn missing_focus_target(effect: &RuntimeEffect) -> String {
    match effect {
        RuntimeEffect::FocusWindowElement(app_id) => {
            format!("no window element to focus for `{app_id}`")
        }
        RuntimeEffect::FocusDesktop => {
            format!("no desktop root `#{}` to focus", host::DESKTOP_ROOT_DOM_ID)
        }
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn focus_effects_without_a_dom_report_their_missing_target() {
        let window = RuntimeEffect::FocusWindowElement(ApplicationId::trusted("about"));
        let desktop = RuntimeEffect::FocusDesktop;

        assert!(!focus_effect_target(&window));
        assert!(!focus_effect_target(&desktop));
        assert_eq!(
            missing_focus_target(&window),
            "no window element to focus for `about`"
        );
        assert_eq!(
            missing_focus_target(&desktop),
            "no desktop root `#desktop-shell-root` to focus"
        );
    }
}
