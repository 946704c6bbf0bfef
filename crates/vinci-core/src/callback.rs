//! Stable identifiers for render-bound callbacks.
//!
//! A native consumer only ever sees callback ids. Each id stays valid for as
//! long as the component that registered it keeps registering it; ids not
//! re-registered during a pass are swept when that pass ends.

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::collections::map::{HashMap, HashSet};
use crate::value::PropValue;

pub type Callback = Rc<dyn Fn(Option<&PropValue>)>;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackId(String);

impl CallbackId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CallbackId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CallbackId> for PropValue {
    fn from(id: CallbackId) -> Self {
        PropValue::Text(id.0)
    }
}

#[derive(Default)]
pub struct CallbackRegistry {
    entries: HashMap<CallbackId, Callback>,
    used: HashSet<CallbackId>,
    counter: u64,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a never-before-used id.
    pub fn issue_id(&mut self) -> CallbackId {
        self.counter += 1;
        CallbackId(format!("cb_{}", self.counter))
    }

    /// Stores `callback` under `id`, replacing any previous closure, and
    /// marks the id as used for the current pass.
    pub fn register(&mut self, id: CallbackId, callback: Callback) {
        self.used.insert(id.clone());
        self.entries.insert(id, callback);
    }

    pub fn get(&self, id: &str) -> Option<Callback> {
        self.entries.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets which ids were used. Called once at the start of a pass.
    pub fn begin_pass(&mut self) {
        self.used.clear();
    }

    /// Drops every entry that was not registered since [`begin_pass`].
    /// Returns the number of entries removed.
    ///
    /// [`begin_pass`]: CallbackRegistry::begin_pass
    pub fn purge_unused(&mut self) -> usize {
        let before = self.entries.len();
        let used = &self.used;
        self.entries.retain(|id, _| used.contains(id));
        before - self.entries.len()
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.entries.keys().map(CallbackId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("CallbackRegistry")
            .field("ids", &ids)
            .field("used", &self.used.len())
            .field("counter", &self.counter)
            .finish()
    }
}
