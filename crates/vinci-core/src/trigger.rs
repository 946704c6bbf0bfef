//! Hook through which state mutations ask for a new render pass.
//!
//! The core never schedules a pass on its own; it only tells the trigger
//! that one is due. Whoever owns the render manager decides when to run it.

/// Reason reported when a hook-allocated state handle is written.
pub const STATE_CHANGED: &str = "state_changed";

pub trait RenderTrigger {
    /// Called synchronously from inside a state mutation.
    fn request_render(&self, reason: &str);
}

impl<F> RenderTrigger for F
where
    F: Fn(&str),
{
    fn request_render(&self, reason: &str) {
        self(reason)
    }
}

/// Trigger that drops every request. Used until a real one is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrigger;

impl RenderTrigger for NoopTrigger {
    fn request_render(&self, _reason: &str) {}
}
