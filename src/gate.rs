use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::diagnostics::Diagnostics;
use crate::theme::ThemeOptions;

/// Callback run once after the first render has been committed.
pub type MountedCallback = Box<dyn FnOnce()>;

/// Cleanup run when the host destroys the gate instance.
pub type Teardown = Box<dyn FnOnce() + Send + Sync>;

/// Whether the first client render has completed for one gate instance.
///
/// `mounted` only ever moves from `false` to `true`. Once `torn_down` is set
/// the state is frozen.
#[derive(Debug, Default)]
pub struct MountState {
    mounted: AtomicBool,
    torn_down: AtomicBool,
}

impl MountState {
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::Acquire)
    }

    /// Returns `true` only for the call that performed the transition.
    pub fn mark_mounted(&self) -> bool {
        if self.is_torn_down() {
            return false;
        }
        !self.mounted.swap(true, Ordering::AcqRel)
    }

    pub fn tear_down(&self) {
        self.torn_down.store(true, Ordering::Release);
    }
}

/// Disposer for a registered mounted callback.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Lifecycle hooks a UI host offers to a component instance.
pub trait Host {
    /// Schedule `callback` to run once, after the first render commits.
    /// The host must not run it once the returned handle is cancelled.
    fn on_mounted(&self, callback: MountedCallback) -> CancelHandle;

    /// Run `cleanup` when the instance is destroyed.
    fn on_teardown(&self, cleanup: Teardown);

    /// Ask the host to render the instance again.
    fn request_render(&self);
}

/// The theming capability: wrap children in a theme context.
pub trait Wrap<C> {
    type Output;

    fn wrap(&self, children: C, options: &ThemeOptions) -> Self::Output;
}

/// Output of one gate render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<C, T> {
    /// Children returned untouched, no theme context applied.
    Passthrough(C),
    /// Children wrapped by the theming capability.
    Themed(T),
}

/// Defers theming of its children until the host has committed a first render.
pub struct MountGate<D> {
    state: Arc<MountState>,
    options: ThemeOptions,
    diagnostics: D,
}

impl<D: Diagnostics> MountGate<D> {
    /// Creates the gate and registers its mounted callback and teardown with `host`.
    pub fn attach<H>(host: &H, options: ThemeOptions, diagnostics: D) -> Self
    where
        H: Host + Clone + 'static,
    {
        let state = Arc::new(MountState::default());

        let handle = {
            let state = Arc::clone(&state);
            let host_for_render = host.clone();
            host.on_mounted(Box::new(move || {
                if state.mark_mounted() {
                    host_for_render.request_render();
                }
            }))
        };

        {
            let state = Arc::clone(&state);
            host.on_teardown(Box::new(move || {
                handle.cancel();
                state.tear_down();
            }));
        }

        Self {
            state,
            options,
            diagnostics,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    pub fn render<C, W>(&self, children: C, wrapper: &W) -> Rendered<C, W::Output>
    where
        W: Wrap<C>,
    {
        if self.state.is_mounted() {
            return Rendered::Themed(wrapper.wrap(children, &self.options));
        }
        if !self.state.is_torn_down() {
            self.diagnostics.not_mounted();
        }
        Rendered::Passthrough(children)
    }
}
