//! Forward-only positions into a sequence.
//!
//! A [`Cursor`] names one position of a sequence. It can read the element at
//! that position, step to the next one, and be compared with another cursor,
//! typically the past-the-end one. Algorithms written against cursors work for
//! slices, strings and any cloneable iterator alike.
//!
//! # Examples
//! ```
//! use cursor::{find, Cursor, SliceCursor};
//!
//! let a = [3, 1, 4, 1, 5];
//! let (first, last) = SliceCursor::bounds(&a);
//! let four = find(first, &last, |&x| x == 4);
//! assert_eq!(four.position(), 2);
//! assert_eq!(first.slice_to(&four), [3, 1]);
//! assert_eq!(four.walk_to(&last).copied().collect::<Vec<_>>(), [4, 1, 5]);
//! ```

use std::{fmt, iter::FusedIterator, ptr};

pub trait Cursor: Clone + PartialEq {
    type Item;

    /// Returns the element under the cursor.
    ///
    /// # Panics
    /// Panics if the cursor is past the end.
    fn get(&self) -> Self::Item;

    /// Moves to the next element.
    ///
    /// # Panics
    /// Panics if the cursor is past the end.
    fn advance(&mut self);

    /// Iterates over the elements of `[self, end)`.
    fn walk_to(self, end: &Self) -> Walk<Self> {
        Walk { cur: self, end: end.clone() }
    }
}

/// Returns the first position in `[first, last)` whose element satisfies
/// `pred`, or `last` if there is none.
pub fn find<C: Cursor>(
    mut first: C,
    last: &C,
    mut pred: impl FnMut(C::Item) -> bool,
) -> C {
    while first != *last && !pred(first.get()) {
        first.advance();
    }
    first
}

#[derive(Clone, Debug)]
pub struct Walk<C> {
    cur: C,
    end: C,
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;
    fn next(&mut self) -> Option<C::Item> {
        if self.cur == self.end {
            return None;
        }
        let elt = self.cur.get();
        self.cur.advance();
        Some(elt)
    }
}

impl<C: Cursor> FusedIterator for Walk<C> {}

pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn bounds(slice: &'a [T]) -> (Self, Self) {
        (Self { slice, pos: 0 }, Self { slice, pos: slice.len() })
    }
    pub fn position(&self) -> usize { self.pos }
    pub fn slice_to(&self, end: &Self) -> &'a [T] {
        debug_assert!(ptr::eq(self.slice, end.slice));
        &self.slice[self.pos..end.pos]
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self { *self }
}
impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}
impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SliceCursor({}/{})", self.pos, self.slice.len())
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;
    fn get(&self) -> &'a T { &self.slice[self.pos] }
    fn advance(&mut self) {
        assert!(self.pos < self.slice.len(), "advancing past the end");
        self.pos += 1;
    }
}

/// Cursor over the `char`s of a string; the position is a byte offset.
#[derive(Clone, Copy, Debug)]
pub struct CharCursor<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> CharCursor<'a> {
    pub fn bounds(s: &'a str) -> (Self, Self) {
        (Self { s, pos: 0 }, Self { s, pos: s.len() })
    }
    pub fn position(&self) -> usize { self.pos }
    pub fn str_to(&self, end: &Self) -> &'a str {
        debug_assert!(ptr::eq(self.s, end.s));
        &self.s[self.pos..end.pos]
    }
}

impl PartialEq for CharCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.s, other.s) && self.pos == other.pos
    }
}
impl Eq for CharCursor<'_> {}

impl Cursor for CharCursor<'_> {
    type Item = char;
    fn get(&self) -> char {
        match self.s[self.pos..].chars().next() {
            Some(c) => c,
            None => panic!("reading past the end"),
        }
    }
    fn advance(&mut self) { self.pos += self.get().len_utf8(); }
}

/// Cursor over any cloneable iterator.
///
/// Cursors compare by the number of steps taken from the beginning, so only
/// cursors derived from the same [`IterCursor::bounds`] call are meaningfully
/// comparable.
pub struct IterCursor<I: Iterator> {
    head: Option<I::Item>,
    rest: I,
    pos: usize,
}

impl<I> IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    /// Traverses a clone of `iter` once to locate the end.
    pub fn bounds(iter: impl IntoIterator<IntoIter = I>) -> (Self, Self) {
        let mut rest = iter.into_iter();
        let len = rest.clone().count();
        let head = rest.next();
        let end = Self { head: None, rest: rest.clone(), pos: len };
        (Self { head, rest, pos: 0 }, end)
    }
}

impl<I: Iterator> IterCursor<I> {
    pub fn position(&self) -> usize { self.pos }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self { head: self.head.clone(), rest: self.rest.clone(), pos: self.pos }
    }
}

impl<I: Iterator> PartialEq for IterCursor<I> {
    fn eq(&self, other: &Self) -> bool { self.pos == other.pos }
}
impl<I: Iterator> Eq for IterCursor<I> {}

impl<I: Iterator> fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IterCursor({})", self.pos)
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;
    fn get(&self) -> I::Item {
        match &self.head {
            Some(elt) => elt.clone(),
            None => panic!("reading past the end"),
        }
    }
    fn advance(&mut self) {
        assert!(self.head.is_some(), "advancing past the end");
        self.head = self.rest.next();
        self.pos += 1;
    }
}

#[test]
fn sanity_check() {
    let a = [1, 2, 3];
    let (mut first, last) = SliceCursor::bounds(&a);
    assert_eq!(*first.get(), 1);
    first.advance();
    assert_eq!(first.position(), 1);
    assert_eq!(first.slice_to(&last), [2, 3]);
    first.advance();
    first.advance();
    assert_eq!(first, last);

    let (first, last) = CharCursor::bounds("añb");
    let b = find(first, &last, |c| c == 'b');
    assert_eq!(b.position(), 3);
    assert_eq!(first.str_to(&b), "añ");
    assert_eq!(first.walk_to(&last).collect::<String>(), "añb");

    let (first, last) = IterCursor::bounds(10..13);
    assert_eq!(last.position(), 3);
    assert_eq!(first.clone().walk_to(&last).collect::<Vec<_>>(), [10, 11, 12]);
    assert_eq!(find(first, &last, |x| x > 20), last);
}

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    use super::*;

    #[test]
    fn empty() {
        let (first, last) = SliceCursor::<i32>::bounds(&[]);
        assert_eq!(first, last);
        assert_eq!(first.walk_to(&last).count(), 0);

        let (first, last) = CharCursor::bounds("");
        assert_eq!(first, last);

        let (first, last) = IterCursor::bounds(std::iter::empty::<u8>());
        assert_eq!(first, last);
        assert_eq!(find(first, &last, |_| true), last);
    }

    #[test]
    fn distinct_slices() {
        let a = [0; 4];
        let b = [0; 4];
        let (fa, _) = SliceCursor::bounds(&a);
        let (fb, _) = SliceCursor::bounds(&b);
        assert_ne!(fa, fb);
        let (fa2, _) = SliceCursor::bounds(&a[..]);
        assert_eq!(fa, fa2);
    }

    #[test]
    fn linked_list() {
        let list: LinkedList<_> = "xyz".chars().collect();
        let (first, last) = IterCursor::bounds(&list);
        let y = find(first.clone(), &last, |&c| c == 'y');
        assert_eq!(y.position(), 1);
        assert_eq!(first.walk_to(&y).collect::<String>(), "x");
        assert_eq!(y.walk_to(&last).collect::<String>(), "yz");
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SliceCursor<'_, i32>>();
        assert_send_sync::<SliceCursor<'_, String>>();
        assert_send_sync::<CharCursor<'_>>();
        assert_send_sync::<IterCursor<std::slice::Iter<'_, u8>>>();
        assert_send_sync::<Walk<CharCursor<'_>>>();
    }

    #[test]
    #[should_panic]
    fn read_past_end() {
        let (_, last) = CharCursor::bounds("a");
        last.get();
    }

    #[test]
    #[should_panic]
    fn advance_past_end() {
        let (_, mut last) = IterCursor::bounds([1, 2].iter());
        last.advance();
    }
}
