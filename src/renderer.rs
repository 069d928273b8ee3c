//! Renderer abstraction for displaying snapshots.

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::view::Snapshot;

/// Renderer abstraction for displaying [`Snapshot`]s.
///
/// Implement this trait to connect the tracker to a UI toolkit, a terminal,
/// or anything else that shows state. The controller calls
/// [`render`](Self::render) after every command, always with a snapshot of a
/// fully applied state. Renderers never mutate the tracker directly; they send
/// commands through an [`Emitter`](crate::Emitter).
///
/// # Example
///
/// ```rust
/// use progress_mvu::{Renderer, Snapshot};
///
/// struct StatusLine;
///
/// impl Renderer for StatusLine {
///     fn render(&mut self, snapshot: Snapshot) {
///         println!("{} ({}%)", snapshot.label, snapshot.percent);
///     }
/// }
/// ```
pub trait Renderer {
    fn render(&mut self, snapshot: Snapshot);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, snapshot: Snapshot) {
        (**self).render(snapshot);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures every rendered [`Snapshot`].
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture buffer, so keep one clone for assertions and
/// hand the other to the controller.
///
/// # Example
///
/// ```rust
/// use progress_mvu::{AppController, Command, ManualScheduler, TestRenderer};
///
/// let renderer = TestRenderer::new();
/// let mut controller = AppController::new(
///     Default::default(),
///     renderer.clone(),
///     ManualScheduler::new(),
/// );
/// controller.start();
/// controller.dispatch(Command::SetPendingAmount(40.0));
/// controller.dispatch(Command::CommitIncrement);
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].current, 0.0);
///     assert_eq!(renders.last().unwrap().percent, 40);
/// });
/// ```
#[derive(Clone, Default)]
pub struct TestRenderer {
    renders: Arc<Mutex<Vec<Snapshot>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Renderer for TestRenderer {
    fn render(&mut self, snapshot: Snapshot) {
        self.renders.lock().push(snapshot);
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of renders so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Most recent snapshot, if anything was rendered.
    #[must_use]
    pub fn last(&self) -> Option<Snapshot> {
        self.renders.lock().last().cloned()
    }

    /// Access the captured renders with a closure.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Snapshot>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
