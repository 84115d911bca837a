use std::cell::{Ref, RefMut};

use crate::{Result, ZcVec, resolve_index};

mod private {
    pub trait Sealed {}
    impl<T> Sealed for crate::ZcVec<T> {}
    impl<T> Sealed for crate::ZcSlice<T> {}
}

/// Element access shared by [`ZcVec`] and [`ZcSlice`](crate::ZcSlice).
///
/// Every method addresses the backing storage as it is *now*: a vector
/// resolves to its whole buffer, a slice re-validates its window first and
/// fails with [`StaleSlice`](crate::Error::StaleSlice) if the root has shrunk
/// below it. Indices may be negative and count from the end, as in Python.
///
/// The trait is sealed; resolution is tied to the crate's own storage handles.
pub trait VecBase<T>: private::Sealed {
    /// Borrow the addressable cells, re-validated against current storage.
    #[doc(hidden)]
    fn cells(&self) -> Result<Ref<'_, [T]>>;

    /// Mutably borrow the addressable cells, re-validated as [`cells`](Self::cells).
    #[doc(hidden)]
    fn cells_mut(&self) -> Result<RefMut<'_, [T]>>;

    /// Returns the number of addressable elements.
    ///
    /// Live length for a vector; fixed window length for a slice.
    fn len(&self) -> usize;

    /// Returns `true` if there are no addressable elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`.
    fn get(&self, index: isize) -> Result<T>
    where
        T: Clone,
    {
        let cells = self.cells()?;
        let at = resolve_index(index, cells.len())?;
        Ok(cells[at].clone())
    }

    /// Overwrite the element at `index`.
    ///
    /// The write lands in the shared storage, so it is observed by every
    /// other handle over the same cells.
    fn set(&mut self, index: isize, value: T) -> Result<()> {
        let mut cells = self.cells_mut()?;
        let at = resolve_index(index, cells.len())?;
        cells[at] = value;
        Ok(())
    }

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.cells()?.iter().any(|cell| cell == value))
    }

    /// Returns the number of elements equal to `value`.
    fn count(&self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        Ok(self.cells()?.iter().filter(|cell| *cell == value).count())
    }

    /// Returns the position of the first element equal to `value`, if any.
    fn index_of(&self, value: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        Ok(self.cells()?.iter().position(|cell| cell == value))
    }

    /// Copy the addressable elements into a plain vector.
    fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(self.cells()?.to_vec())
    }

    /// Concatenate into a new vector with fresh, independent storage.
    ///
    /// The result never aliases either operand, whatever mix of vectors and
    /// slices they are: a concatenation cannot be described as one window
    /// into a single source.
    fn concat<S>(&self, other: &S) -> Result<ZcVec<T>>
    where
        S: VecBase<T>,
        T: Clone,
    {
        let mut cells = self.to_vec()?;
        let theirs = other.cells()?;
        cells.extend_from_slice(&theirs);
        Ok(ZcVec::adopt(cells))
    }

    /// Repeat the elements `n` times into a new vector with fresh storage.
    fn repeat(&self, n: usize) -> Result<ZcVec<T>>
    where
        T: Clone,
    {
        let cells = self.cells()?;
        let mut out = Vec::with_capacity(cells.len() * n);
        for _ in 0..n {
            out.extend_from_slice(&cells);
        }
        Ok(ZcVec::adopt(out))
    }
}
