//! The render context: hook slots, child contexts and tree-wide services.
//!
//! Slot identity is positional. The n-th `use_*` call of pass K reads the
//! slot written by the n-th call of pass K-1, so components must make the
//! same calls in the same order on every pass. A mismatched type is reported
//! as [`SlotError`]; a mismatched order of same-typed calls cannot be
//! detected and silently swaps state.
//!
//! Every context in a tree shares one block of services with the root: the
//! callback registry, the render trigger, the dirty flag and the default
//! theme. Each context owns its own slot arena and child contexts.

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::callback::{CallbackId, CallbackRegistry};
use crate::config::AppConfig;
use crate::error::{CallbackError, SlotError};
use crate::slots::{SlotArena, SlotCell};
use crate::theme::Theme;
use crate::trigger::{NoopTrigger, RenderTrigger, STATE_CHANGED};
use crate::value::PropValue;

struct Shared {
    callbacks: RefCell<CallbackRegistry>,
    trigger: RefCell<Rc<dyn RenderTrigger>>,
    dirty: Cell<bool>,
    default_theme: Rc<Theme>,
    empty_config: AppConfig,
}

impl Shared {
    fn notify(&self, reason: &str) {
        self.dirty.set(true);
        let trigger = Rc::clone(&self.trigger.borrow());
        trigger.request_render(reason);
    }
}

pub struct RenderContext {
    slots: SlotArena,
    children: Vec<RenderContext>,
    children_cursor: usize,
    theme: Option<Rc<Theme>>,
    config: Option<Rc<AppConfig>>,
    inherited_theme: Option<Rc<Theme>>,
    inherited_config: Option<Rc<AppConfig>>,
    shared: Rc<Shared>,
    depth: usize,
}

impl RenderContext {
    /// Root context with the light theme as its default.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> RenderContextBuilder {
        RenderContextBuilder::default()
    }

    fn child_of(parent: &RenderContext) -> Self {
        Self {
            slots: SlotArena::default(),
            children: Vec::new(),
            children_cursor: 0,
            theme: None,
            config: None,
            inherited_theme: None,
            inherited_config: None,
            shared: Rc::clone(&parent.shared),
            depth: parent.depth + 1,
        }
    }

    /// Starts a render pass at this level: both cursors go back to zero. On
    /// the root this also clears the record of callbacks used this pass.
    ///
    /// Child contexts are reset when [`use_child_context`] hands them out, so
    /// a child that is not visited keeps its slots untouched.
    ///
    /// [`use_child_context`]: RenderContext::use_child_context
    pub fn reset(&mut self) {
        self.slots.rewind();
        self.children_cursor = 0;
        if self.is_root() {
            self.shared.callbacks.borrow_mut().begin_pass();
        }
    }

    /// Allocates (first pass) or reads back (later passes) a state slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot at this position was created with another type.
    /// Use [`try_use_state_with`](RenderContext::try_use_state_with) to get
    /// the error instead.
    pub fn use_state<T: 'static>(&mut self, initial: T) -> State<T> {
        self.use_state_with(|| initial)
    }

    /// Like [`use_state`](RenderContext::use_state), but only builds the
    /// initial value when the slot is first created.
    pub fn use_state_with<T: 'static>(&mut self, init: impl FnOnce() -> T) -> State<T> {
        match self.try_use_state_with(init) {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_use_state_with<T: 'static>(
        &mut self,
        init: impl FnOnce() -> T,
    ) -> Result<State<T>, SlotError> {
        let (index, cell) = self.slots.remember(init)?;
        Ok(State {
            cell,
            index,
            shared: Rc::clone(&self.shared),
        })
    }

    /// Returns the child context at the next child position, creating it on
    /// first use. The child is reset and inherits this context's effective
    /// theme and config before it is returned.
    pub fn use_child_context(&mut self) -> &mut RenderContext {
        let index = self.children_cursor;
        self.children_cursor += 1;
        if index == self.children.len() {
            log::trace!("creating child context {index} at depth {}", self.depth + 1);
            let child = RenderContext::child_of(self);
            self.children.push(child);
        }
        let theme = self.theme.clone().or_else(|| self.inherited_theme.clone());
        let config = self.config.clone().or_else(|| self.inherited_config.clone());
        let child = &mut self.children[index];
        child.inherited_theme = theme;
        child.inherited_config = config;
        child.slots.rewind();
        child.children_cursor = 0;
        child
    }

    /// Registers `callback` under an id that stays stable for as long as this
    /// call keeps its position in render order.
    ///
    /// # Panics
    ///
    /// Panics on a hook-order violation, like [`use_state`](RenderContext::use_state).
    pub fn use_callback(&mut self, callback: impl Fn(Option<&PropValue>) + 'static) -> CallbackId {
        let shared = &self.shared;
        let id = match self
            .slots
            .remember(|| shared.callbacks.borrow_mut().issue_id())
        {
            Ok((_, cell)) => cell.with(CallbackId::clone),
            Err(err) => panic!("{err}"),
        };
        self.shared
            .callbacks
            .borrow_mut()
            .register(id.clone(), Rc::new(callback));
        id
    }

    /// Removes callbacks that were not registered during the current pass.
    pub fn purge_unused_callbacks(&self) -> usize {
        let removed = self.shared.callbacks.borrow_mut().purge_unused();
        if removed > 0 {
            log::debug!("purged {removed} unused callbacks");
        }
        removed
    }

    /// Invokes the callback registered under `id`.
    pub fn dispatch(&self, id: &str, payload: Option<&PropValue>) -> Result<(), CallbackError> {
        let callback = self
            .shared
            .callbacks
            .borrow()
            .get(id)
            .ok_or_else(|| CallbackError::Unknown { id: id.to_owned() })?;
        callback(payload);
        Ok(())
    }

    pub fn callbacks(&self) -> Ref<'_, CallbackRegistry> {
        self.shared.callbacks.borrow()
    }

    /// Own theme, else the inherited one, else the tree's default theme.
    pub fn theme(&self) -> &Theme {
        self.theme
            .as_deref()
            .or(self.inherited_theme.as_deref())
            .unwrap_or(&self.shared.default_theme)
    }

    pub fn set_theme(&mut self, theme: Option<Rc<Theme>>) {
        self.theme = theme;
    }

    /// Own config, else the inherited one, else an empty config.
    pub fn config(&self) -> &AppConfig {
        self.config
            .as_deref()
            .or(self.inherited_config.as_deref())
            .unwrap_or(&self.shared.empty_config)
    }

    pub fn set_config(&mut self, config: Option<Rc<AppConfig>>) {
        self.config = config;
    }

    pub fn set_render_trigger(&self, trigger: Rc<dyn RenderTrigger>) {
        *self.shared.trigger.borrow_mut() = trigger;
    }

    /// Marks the tree dirty and forwards `reason` to the render trigger.
    pub fn request_render(&self, reason: &str) {
        self.shared.notify(reason);
    }

    pub fn is_dirty(&self) -> bool {
        self.shared.dirty.get()
    }

    pub fn mark_dirty(&self) {
        self.shared.dirty.set(true);
    }

    pub fn clear_dirty(&self) {
        self.shared.dirty.set(false);
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn cursor(&self) -> usize {
        self.slots.cursor()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("depth", &self.depth)
            .field("slots", &self.slots.len())
            .field("cursor", &self.slots.cursor())
            .field("children", &self.children)
            .field("children_cursor", &self.children_cursor)
            .field("theme", &self.theme().name)
            .finish()
    }
}

/// Configures a root [`RenderContext`].
#[derive(Default)]
pub struct RenderContextBuilder {
    default_theme: Option<Theme>,
    theme: Option<Theme>,
    config: Option<AppConfig>,
    trigger: Option<Rc<dyn RenderTrigger>>,
}

impl RenderContextBuilder {
    /// Theme used by any context that has no theme of its own in scope.
    pub fn default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = Some(theme);
        self
    }

    /// Theme override owned by the root context itself.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn trigger(mut self, trigger: impl RenderTrigger + 'static) -> Self {
        self.trigger = Some(Rc::new(trigger));
        self
    }

    pub fn build(self) -> RenderContext {
        let trigger = self.trigger.unwrap_or_else(|| Rc::new(NoopTrigger));
        let shared = Shared {
            callbacks: RefCell::new(CallbackRegistry::new()),
            trigger: RefCell::new(trigger),
            dirty: Cell::new(false),
            default_theme: Rc::new(self.default_theme.unwrap_or_default()),
            empty_config: AppConfig::default(),
        };
        RenderContext {
            slots: SlotArena::default(),
            children: Vec::new(),
            children_cursor: 0,
            theme: self.theme.map(Rc::new),
            config: self.config.map(Rc::new),
            inherited_theme: None,
            inherited_config: None,
            shared: Rc::new(shared),
            depth: 0,
        }
    }
}

impl fmt::Debug for RenderContextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContextBuilder")
            .field("default_theme", &self.default_theme)
            .field("theme", &self.theme)
            .field("config", &self.config)
            .field("trigger", &self.trigger.is_some())
            .finish()
    }
}

/// Handle to one hook-allocated state slot.
///
/// Writing through the handle marks the tree dirty and asks the render
/// trigger for a new pass. The new value is visible to the next pass.
pub struct State<T> {
    cell: SlotCell<T>,
    index: usize,
    shared: Rc<Shared>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            index: self.index,
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T> State<T> {
    /// Position of the slot in its context's arena.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.cell.with(f)
    }

    pub fn set(&self, value: T) {
        self.cell.replace(value);
        self.shared.notify(STATE_CHANGED);
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = self.cell.update(f);
        self.shared.notify(STATE_CHANGED);
        result
    }
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.cell.with(T::clone)
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cell.with(|value| {
            f.debug_struct("State")
                .field("index", &self.index)
                .field("value", value)
                .finish()
        })
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
