use crate::Storage;

/// Lazy iterator over a [`ZcVec`](crate::ZcVec), yielding copies by index.
///
/// Each step re-reads the live storage: elements appended behind the cursor
/// are still yielded, and the iterator ends as soon as the cursor passes the
/// vector's *current* end. Callers that resize mid-traversal must treat the
/// resulting element sequence as unspecified. The cursor never rewinds;
/// restart with another [`iter`](crate::ZcVec::iter) call.
pub struct Iter<T> {
    storage: Storage<T>,
    index: usize,
}

impl<T> Iter<T> {
    pub(crate) fn new(storage: Storage<T>) -> Self {
        Self { storage, index: 0 }
    }
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.storage.borrow().get(self.index).cloned()?;
        self.index += 1;
        Some(item)
    }

    // Default size_hint: the live length may change before the cursor gets there.
}
