use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use vinci_core::{
    AppConfig, CallbackError, Node, PropValue, RenderContext, RenderTrigger, Theme, View,
};
use vinci_reconcile::{apply_patches, ApplyError, Patch};
use vinci_render::{RenderError, RenderManager};

/// Upper bound on passes [`VinciTestRule::pump_until_idle`] runs before it
/// reports that the content never settles.
pub const MAX_IDLE_PASSES: usize = 64;

#[derive(Debug, Error)]
pub enum TestError {
    #[error("no content installed")]
    NoContent,
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Apply(#[from] ApplyError),
    #[error(transparent)]
    Callback(#[from] CallbackError),
    #[error("patched tree diverged from the rendered tree")]
    Diverged,
    #[error("content still dirty after {passes} passes")]
    NotIdle { passes: usize },
    #[error("no node matches {0}")]
    NotFound(String),
}

/// Render trigger that records every reason it is given.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrigger {
    reasons: Rc<RefCell<Vec<String>>>,
}

impl RecordingTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reasons(&self) -> Vec<String> {
        self.reasons.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.reasons.borrow().len()
    }

    /// Returns the recorded reasons and forgets them.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.reasons.borrow_mut())
    }
}

impl RenderTrigger for RecordingTrigger {
    fn request_render(&self, reason: &str) {
        self.reasons.borrow_mut().push(reason.to_owned());
    }
}

/// Headless harness around a [`RenderManager`].
///
/// Besides driving passes, the rule keeps a mirror of the tree that is only
/// ever updated by applying the emitted patches, the way a native consumer
/// would. Every pass checks that the mirror matches the rendered tree.
pub struct VinciTestRule {
    manager: Option<RenderManager>,
    mirror: Option<Node>,
    last_patches: Vec<Patch>,
    trigger: RecordingTrigger,
    theme: Option<Theme>,
    config: Option<AppConfig>,
}

impl VinciTestRule {
    pub fn new() -> Self {
        Self {
            manager: None,
            mirror: None,
            last_patches: Vec::new(),
            trigger: RecordingTrigger::new(),
            theme: None,
            config: None,
        }
    }

    /// Default theme for content installed after this call.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Config for content installed after this call.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Installs `content` and performs the initial render.
    pub fn set_content(&mut self, content: impl View + 'static) -> &Node {
        let mut builder = RenderContext::builder().trigger(self.trigger.clone());
        if let Some(theme) = self.theme.clone() {
            builder = builder.default_theme(theme);
        }
        if let Some(config) = self.config.clone() {
            builder = builder.config(config);
        }
        let manager = self
            .manager
            .insert(RenderManager::new(builder.build(), content));
        let tree = manager.initial_tree().clone();
        self.last_patches.clear();
        self.mirror.insert(tree)
    }

    /// Runs one incremental pass and applies its patches to the mirror.
    pub fn recompose(&mut self) -> Result<&[Patch], TestError> {
        let manager = self.manager.as_mut().ok_or(TestError::NoContent)?;
        let patches = manager.re_render_patches()?;
        apply_patches(&mut self.mirror, &patches)?;
        if self.mirror.as_ref() != manager.current_tree() {
            return Err(TestError::Diverged);
        }
        self.last_patches = patches;
        Ok(&self.last_patches)
    }

    /// Recomposes until no state change is pending. Returns the number of
    /// passes run.
    pub fn pump_until_idle(&mut self) -> Result<usize, TestError> {
        let mut passes = 0;
        while self.manager()?.needs_render() {
            if passes == MAX_IDLE_PASSES {
                return Err(TestError::NotIdle { passes });
            }
            self.recompose()?;
            passes += 1;
        }
        Ok(passes)
    }

    /// Dispatches the `onClick` callback of the first node whose `label`
    /// prop equals `label`, then pumps until idle.
    pub fn click(&mut self, label: &str) -> Result<usize, TestError> {
        let id = {
            let tree = self.tree().ok_or(TestError::NoContent)?;
            find_node(tree, |node| {
                node.prop("label").and_then(PropValue::as_str) == Some(label)
            })
            .and_then(|node| node.prop("onClick"))
            .and_then(PropValue::as_str)
            .map(str::to_owned)
            .ok_or_else(|| TestError::NotFound(format!("label `{label}`")))?
        };
        self.dispatch(&id, None)?;
        self.pump_until_idle()
    }

    pub fn dispatch(&mut self, id: &str, payload: Option<&PropValue>) -> Result<(), TestError> {
        self.manager()?.dispatch(id, payload)?;
        Ok(())
    }

    pub fn tree(&self) -> Option<&Node> {
        self.manager.as_ref().and_then(RenderManager::current_tree)
    }

    /// The tree as rebuilt from patches alone.
    pub fn mirror(&self) -> Option<&Node> {
        self.mirror.as_ref()
    }

    pub fn last_patches(&self) -> &[Patch] {
        &self.last_patches
    }

    pub fn trigger(&self) -> &RecordingTrigger {
        &self.trigger
    }

    pub fn has_content(&self) -> bool {
        self.manager.is_some()
    }

    pub fn manager_mut(&mut self) -> Option<&mut RenderManager> {
        self.manager.as_mut()
    }

    fn manager(&self) -> Result<&RenderManager, TestError> {
        self.manager.as_ref().ok_or(TestError::NoContent)
    }
}

impl Default for VinciTestRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for tests that only need temporary access to a
/// [`VinciTestRule`].
pub fn run_test_render<R>(f: impl FnOnce(&mut VinciTestRule) -> R) -> R {
    let mut rule = VinciTestRule::new();
    f(&mut rule)
}

/// Renders `view` once against a fresh context.
pub fn render_view(view: &impl View) -> Node {
    let mut ctx = RenderContext::new();
    ctx.reset();
    view.render(&mut ctx)
}

/// First node in pre-order that satisfies `predicate`.
pub fn find_node<'a>(root: &'a Node, predicate: impl Fn(&Node) -> bool + Copy) -> Option<&'a Node> {
    if predicate(root) {
        return Some(root);
    }
    root.children
        .iter()
        .find_map(|child| find_node(child, predicate))
}

/// Text of every `Text` node in pre-order.
pub fn texts(root: &Node) -> Vec<String> {
    let mut out = Vec::new();
    collect_texts(root, &mut out);
    out
}

fn collect_texts(node: &Node, out: &mut Vec<String>) {
    if node.kind == "Text" {
        if let Some(text) = node.prop("text").and_then(PropValue::as_str) {
            out.push(text.to_owned());
        }
    }
    for child in &node.children {
        collect_texts(child, out);
    }
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
