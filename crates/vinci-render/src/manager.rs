use std::fmt;

use serde::Serialize;
use vinci_core::{CallbackError, Node, PropValue, RenderContext, View};
use vinci_reconcile::{diff, Patch, ROOT_PATH};

use crate::encode::encode;
use crate::error::RenderError;

/// What a pass hands to the consumer: the whole tree on the first pass, a
/// patch list afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PassOutput {
    Tree(Node),
    Patches(Vec<Patch>),
}

/// Owns the root context and the retained tree, and runs render passes.
///
/// A manager starts uninitialized. [`initial_render`](Self::initial_render)
/// retains the first tree; every later [`re_render`](Self::re_render) diffs
/// against it and retains the new tree in its place.
pub struct RenderManager {
    context: RenderContext,
    root: Box<dyn View>,
    current: Option<Node>,
}

impl RenderManager {
    pub fn new(context: RenderContext, root: impl View + 'static) -> Self {
        Self {
            context,
            root: Box::new(root),
            current: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// Renders the full tree, retains it and returns it. Calling this again
    /// restarts from a fresh baseline.
    pub fn initial_tree(&mut self) -> &Node {
        let tree = self.render_pass();
        log::debug!("initial render produced {} nodes", tree.subtree_len());
        self.current.insert(tree)
    }

    /// [`initial_tree`](Self::initial_tree), encoded as JSON.
    pub fn initial_render(&mut self) -> String {
        encode(self.initial_tree())
    }

    /// Renders a new tree and returns the patches from the retained tree to
    /// it. The new tree becomes the retained one.
    pub fn re_render_patches(&mut self) -> Result<Vec<Patch>, RenderError> {
        if self.current.is_none() {
            return Err(RenderError::NotInitialized);
        }
        let tree = self.render_pass();
        let patches = diff(self.current.as_ref(), &tree, ROOT_PATH);
        log::debug!("re-render produced {} patches", patches.len());
        self.current = Some(tree);
        Ok(patches)
    }

    /// [`re_render_patches`](Self::re_render_patches), encoded as JSON.
    pub fn re_render(&mut self) -> Result<String, RenderError> {
        self.re_render_patches().map(|patches| encode(&patches))
    }

    /// Runs a pass whatever the state: without a retained tree the whole new
    /// tree is returned, otherwise the patches against it.
    pub fn render_output(&mut self) -> PassOutput {
        match self.re_render_patches() {
            Ok(patches) => PassOutput::Patches(patches),
            Err(RenderError::NotInitialized) => {
                log::warn!("no retained tree, emitting the full tree");
                PassOutput::Tree(self.initial_tree().clone())
            }
        }
    }

    /// [`render_output`](Self::render_output), encoded as JSON.
    pub fn render_and_get_patches(&mut self) -> String {
        encode(&self.render_output())
    }

    /// Invokes the callback a consumer knows by `id`.
    pub fn dispatch(&self, id: &str, payload: Option<&PropValue>) -> Result<(), CallbackError> {
        self.context.dispatch(id, payload).inspect_err(|err| {
            log::warn!("{err}");
        })
    }

    /// Whether state changed since the last pass started.
    pub fn needs_render(&self) -> bool {
        self.context.is_dirty()
    }

    pub fn current_tree(&self) -> Option<&Node> {
        self.current.as_ref()
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.context
    }

    fn render_pass(&mut self) -> Node {
        self.context.clear_dirty();
        self.context.reset();
        let tree = self.root.render(&mut self.context);
        self.context.purge_unused_callbacks();
        tree
    }
}

impl fmt::Debug for RenderManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderManager")
            .field("context", &self.context)
            .field("current", &self.current)
            .finish()
    }
}
