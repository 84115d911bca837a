use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Shared backing storage: the one buffer of element slots behind a
/// [`ZcVec`](crate::ZcVec) and every slice derived from it.
///
/// Cloning a handle never copies elements; all clones address the same cells,
/// and the buffer lives until the last handle is dropped. Only the owning
/// vector resizes it. Slices go through the handle on every access instead of
/// caching addresses, so reallocation on growth never leaves them dangling.
pub(crate) struct Storage<T> {
    cells: Rc<RefCell<Vec<T>>>,
}

impl<T> Storage<T> {
    pub(crate) fn new(cells: Vec<T>) -> Self {
        Self {
            cells: Rc::new(RefCell::new(cells)),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    pub(crate) fn borrow(&self) -> Ref<'_, Vec<T>> {
        self.cells.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Vec<T>> {
        self.cells.borrow_mut()
    }

    /// Recover the plain vector if this is the last handle, cloning otherwise.
    pub(crate) fn unwrap_or_clone(self) -> Vec<T>
    where
        T: Clone,
    {
        match Rc::try_unwrap(self.cells) {
            Ok(cells) => cells.into_inner(),
            Err(shared) => shared.borrow().clone(),
        }
    }
}

// Not derived: a handle copy must not require `T: Clone`.
impl<T> Clone for Storage<T> {
    fn clone(&self) -> Self {
        Self {
            cells: Rc::clone(&self.cells),
        }
    }
}
