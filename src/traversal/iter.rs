//! Bridge from cursors to `Iterator`, and cursor pairs.

use super::{Readable, Sentinel};

/// `Iterator` over a [`Readable`] sequence.
///
/// Holds the sequence by value; for borrowed sources pass a reference.
pub struct Iter<R: Readable> {
    seq: R,
    cur: R::Cursor,
    end: R::Sentinel,
}

impl<R: Readable> Iter<R> {
    pub fn new(seq: R) -> Self {
        let cur = seq.begin();
        let end = seq.end();
        Iter { seq, cur, end }
    }

    /// The cursor the next call to `next` will read.
    pub fn cursor(&self) -> &R::Cursor {
        &self.cur
    }
}

impl<R: Readable> Iterator for Iter<R> {
    type Item = R::Reference;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.end.is_end(&self.cur) {
            return None;
        }
        let item = self.seq.read(&self.cur);
        self.seq.inc(&mut self.cur);
        Some(item)
    }
}

/// Iterate any readable sequence.
pub fn iter<R: Readable>(seq: R) -> Iter<R> {
    Iter::new(seq)
}

/// A half-open cursor range `[begin, end)` holding `len` positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subrange<C> {
    pub begin: C,
    pub end: C,
    pub len: usize,
}

impl<C> Subrange<C> {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_over_borrowed_vec() {
        let v = vec![1, 2, 3];
        let doubled: Vec<i32> = iter(&v).map(|x| x * 2).collect();
        assert_eq!(doubled, [2, 4, 6]);
    }

    #[test]
    fn test_iter_over_slice() {
        let s: &[u8] = b"abc";
        assert_eq!(iter(s).count(), 3);
    }
}
