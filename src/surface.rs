//! Rendering surface abstraction
//!
//! A surface owns the actual focusable fields and the mapping from slot index
//! to focus handle. The component only tells it what to draw and which slot
//! should hold keyboard focus.

use crate::view::OtpView;

/// What an OTP field needs from the toolkit that displays it
pub trait Surface {
    /// Redraw every slot from `view`
    fn render(&mut self, view: &OtpView);

    /// Move native keyboard focus to slot `index`
    ///
    /// Must be idempotent: focusing the already-focused slot is harmless.
    fn focus(&mut self, index: usize);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn render(&mut self, view: &OtpView) {
        (**self).render(view);
    }

    fn focus(&mut self, index: usize) {
        (**self).focus(index);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn render(&mut self, view: &OtpView) {
        (**self).render(view);
    }

    fn focus(&mut self, index: usize) {
        (**self).focus(index);
    }
}

/// In-memory surface that records what it was asked to do
///
/// Used by tests and by the replay binary's JSON mode.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    last_view: Option<OtpView>,
    focused: Option<usize>,
    focus_history: Vec<usize>,
    render_count: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent view, if anything has been rendered
    pub fn last_view(&self) -> Option<&OtpView> {
        self.last_view.as_ref()
    }

    /// The slot currently holding keyboard focus
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Every focus request since mount or the last `clear_history`, in order
    ///
    /// Grows by one entry per focus effect; long-running hosts should call
    /// `clear_history` periodically.
    pub fn focus_history(&self) -> &[usize] {
        &self.focus_history
    }

    /// Forget recorded focus requests; the current focus is kept
    pub fn clear_history(&mut self) {
        self.focus_history.clear();
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl Surface for HeadlessSurface {
    fn render(&mut self, view: &OtpView) {
        self.last_view = Some(view.clone());
        self.render_count += 1;
    }

    fn focus(&mut self, index: usize) {
        self.focused = Some(index);
        self.focus_history.push(index);
    }
}
