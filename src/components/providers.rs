use leptos::prelude::*;

use crate::diagnostics::BuildDiagnostics;
use crate::gate::{CancelHandle, Host, MountGate, MountedCallback, Rendered, Teardown, Wrap};
use crate::theme::{ThemeOptions, ThemeProvider};

/// Leptos lifecycle: effects for the mount callback, owner cleanup for teardown.
#[derive(Clone)]
struct LeptosHost {
    rerender: ArcTrigger,
}

impl Host for LeptosHost {
    fn on_mounted(&self, callback: MountedCallback) -> CancelHandle {
        let handle = CancelHandle::new();
        let guard = handle.clone();
        let mut callback = Some(callback);

        // Tracks nothing, so it runs once after the first render
        Effect::new(move |_| {
            if guard.is_cancelled() {
                return;
            }
            if let Some(callback) = callback.take() {
                callback();
            }
        });

        handle
    }

    fn on_teardown(&self, cleanup: Teardown) {
        on_cleanup(cleanup);
    }

    fn request_render(&self) {
        self.rerender.notify();
    }
}

struct ThemeProviderWrap;

impl Wrap<ChildrenFn> for ThemeProviderWrap {
    type Output = AnyView;

    fn wrap(&self, children: ChildrenFn, options: &ThemeOptions) -> AnyView {
        let options = options.clone();
        view! { <ThemeProvider options=options>{children()}</ThemeProvider> }.into_any()
    }
}

/// Renders children bare until the first client render, then inside `ThemeProvider`.
#[component]
pub fn Providers(children: ChildrenFn) -> impl IntoView {
    let host = LeptosHost {
        rerender: ArcTrigger::new(),
    };
    let rerender = host.rerender.clone();
    let gate = MountGate::attach(&host, ThemeOptions::default(), BuildDiagnostics::default());

    move || {
        rerender.track();
        match gate.render(children.clone(), &ThemeProviderWrap) {
            Rendered::Passthrough(children) => children().into_any(),
            Rendered::Themed(view) => view,
        }
    }
}
