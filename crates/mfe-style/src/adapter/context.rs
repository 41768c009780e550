//! Style mode state: detection, configuration and the process-wide context.
//!
//! A [`StyleContext`] owns a [`Prober`] and a small state machine:
//!
//! ```text
//! Uninitialized --mode()--> Detecting --probe--> Resolved(mode)
//! Uninitialized --configure(mode)--> Resolved(mode)
//! any --reset()--> Uninitialized
//! ```
//!
//! `Resolved` is sticky. Detection runs at most once per context even with
//! concurrent callers: the first caller moves the state to `Detecting` and
//! probes, later callers wait for the result.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use super::mode::StyleMode;
use super::probe::{ConstantProber, Prober};

/// Current state of a context's style mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeState {
    Uninitialized,
    Detecting,
    Resolved(StyleMode),
}

#[derive(Debug)]
struct Inner {
    state: ModeState,
    detections: usize,
}

/// Holds the style mode for a set of lookups.
///
/// # Example
///
/// ```rust
/// use mfe_style::adapter::{ConstantProber, StyleContext, StyleMode};
///
/// let ctx = StyleContext::new(ConstantProber::present());
/// assert_eq!(ctx.mode(), StyleMode::Native);
///
/// ctx.configure(StyleMode::Computed);
/// assert_eq!(ctx.mode(), StyleMode::Computed);
/// assert_eq!(ctx.detections(), 1);
/// ```
pub struct StyleContext {
    prober: Box<dyn Prober>,
    inner: Mutex<Inner>,
    resolved: Condvar,
}

impl StyleContext {
    /// Creates an uninitialized context that will probe with `prober`.
    pub fn new(prober: impl Prober + 'static) -> Self {
        Self {
            prober: Box::new(prober),
            inner: Mutex::new(Inner {
                state: ModeState::Uninitialized,
                detections: 0,
            }),
            resolved: Condvar::new(),
        }
    }

    /// Creates a context already resolved to `mode`. Its prober never runs.
    pub fn configured(mode: StyleMode) -> Self {
        let ctx = Self::new(ConstantProber::absent());
        ctx.configure(mode);
        ctx
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the resolved mode, detecting it on first use.
    pub fn mode(&self) -> StyleMode {
        let mut inner = self.lock();
        loop {
            let state = inner.state;
            match state {
                ModeState::Resolved(mode) => return mode,
                ModeState::Detecting => {
                    inner = self
                        .resolved
                        .wait(inner)
                        .unwrap_or_else(PoisonError::into_inner);
                }
                ModeState::Uninitialized => {
                    inner.state = ModeState::Detecting;
                    inner.detections += 1;
                    drop(inner);

                    let guard = DetectionGuard { ctx: self };
                    let detected = StyleMode::from_detection(self.prober.detect());
                    std::mem::forget(guard);
                    log::debug!("detected style mode: {}", detected);

                    inner = self.lock();
                    // configure() or reset() may have run while probing.
                    if inner.state == ModeState::Detecting {
                        inner.state = ModeState::Resolved(detected);
                    }
                    self.resolved.notify_all();
                }
            }
        }
    }

    /// Pins the mode, overriding any detected value.
    pub fn configure(&self, mode: StyleMode) {
        let mut inner = self.lock();
        inner.state = ModeState::Resolved(mode);
        self.resolved.notify_all();
        log::debug!("style mode configured: {}", mode);
    }

    /// Forgets the resolved mode so the next lookup probes again.
    pub fn reset(&self) {
        let mut inner = self.lock();
        if inner.state != ModeState::Detecting {
            inner.state = ModeState::Uninitialized;
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> ModeState {
        self.lock().state
    }

    /// How many times the prober has been run.
    pub fn detections(&self) -> usize {
        self.lock().detections
    }
}

impl std::fmt::Debug for StyleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("StyleContext")
            .field("state", &inner.state)
            .field("detections", &inner.detections)
            .finish_non_exhaustive()
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new(ConstantProber::absent())
    }
}

// Restores `Uninitialized` if the prober panics, so waiters are not stuck.
struct DetectionGuard<'a> {
    ctx: &'a StyleContext,
}

impl Drop for DetectionGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.ctx.lock();
        if inner.state == ModeState::Detecting {
            inner.state = ModeState::Uninitialized;
        }
        self.ctx.resolved.notify_all();
    }
}

static GLOBAL_CONTEXT: Lazy<Mutex<Arc<StyleContext>>> =
    Lazy::new(|| Mutex::new(Arc::new(default_global_context())));

fn default_global_context() -> StyleContext {
    match StyleMode::from_env() {
        Some(mode) => StyleContext::configured(mode),
        None => StyleContext::default(),
    }
}

fn global_slot() -> MutexGuard<'static, Arc<StyleContext>> {
    GLOBAL_CONTEXT
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// The process-wide context used by [`get_styles`](super::get_styles).
///
/// Created on first use. Honors `MFE_STYLE_MODE` if set, otherwise probes
/// with [`ConstantProber::absent`].
pub fn global_context() -> Arc<StyleContext> {
    Arc::clone(&global_slot())
}

/// Replaces the process-wide context, e.g. to install a platform prober.
pub fn install_global_context(ctx: StyleContext) {
    *global_slot() = Arc::new(ctx);
}

/// Pins the process-wide style mode.
pub fn configure_style_mode(mode: StyleMode) {
    global_context().configure(mode);
}

/// Clears the process-wide style mode so the next lookup detects again.
///
/// A valid `MFE_STYLE_MODE` is re-read and pins the mode immediately.
pub fn reset_style_mode() {
    let ctx = global_context();
    ctx.reset();
    if let Some(mode) = StyleMode::from_env() {
        ctx.configure(mode);
    }
}
