use std::any::{type_name, Any};
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SlotError;

/// Shared cell holding one hook slot's value.
///
/// The arena keeps one handle, state handles keep the others, so a value
/// written from an event callback is what the next pass reads back.
pub(crate) struct SlotCell<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for SlotCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> SlotCell<T> {
    fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    pub(crate) fn replace(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }
}

struct Slot {
    value: Box<dyn Any>,
    type_name: &'static str,
}

/// Append-only list of heterogeneous slots addressed by call order.
#[derive(Default)]
pub(crate) struct SlotArena {
    slots: Vec<Slot>,
    cursor: usize,
}

impl SlotArena {
    /// Returns the slot at the cursor, creating it with `init` on first use,
    /// and advances the cursor.
    pub(crate) fn remember<T: 'static>(
        &mut self,
        init: impl FnOnce() -> T,
    ) -> Result<(usize, SlotCell<T>), SlotError> {
        let index = self.cursor;
        self.cursor += 1;
        if let Some(slot) = self.slots.get(index) {
            return match slot.value.downcast_ref::<SlotCell<T>>() {
                Some(existing) => {
                    log::trace!("reusing hook slot {index}");
                    Ok((index, existing.clone()))
                }
                None => Err(SlotError::TypeMismatch {
                    index,
                    expected: type_name::<T>(),
                    found: slot.type_name,
                }),
            };
        }
        log::trace!("allocating hook slot {index} for `{}`", type_name::<T>());
        let cell = SlotCell::new(init());
        self.slots.push(Slot {
            value: Box::new(cell.clone()),
            type_name: type_name::<T>(),
        });
        Ok((index, cell))
    }

    pub(crate) fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}
