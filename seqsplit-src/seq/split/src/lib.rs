//! Splitting a sequence at separator occurrences.
//!
//! Every maximal run between separators, empty runs included, is handed to a
//! transform as a pair of cursors, and the results are appended to an output
//! in order. An input with `k` separators yields `k + 1` slices, and an empty
//! input yields none.
//!
//! # Examples
//! ```
//! use cursor::CharCursor;
//! use split::split;
//!
//! let (first, last) = CharCursor::bounds("a-b-c-d-e-f-g");
//! let mut out = vec![];
//! let end =
//!     split(first, last, &mut out, &'-', |s, e| s.str_to(&e).to_owned());
//! assert_eq!(out, ["a", "b", "c", "d", "e", "f", "g"]);
//! assert_eq!(end, last);
//! ```

use std::iter;

use cursor::{find, CharCursor, Cursor, SliceCursor};

/// Splits `[first, last)` at every element equal to `sep`, appending
/// `f(start, end)` for each slice to `out`. Returns `last`.
pub fn split<C, S, R, B, F>(first: C, last: C, out: &mut B, sep: &S, f: F) -> C
where
    C: Cursor,
    C::Item: PartialEq<S>,
    S: ?Sized,
    B: Extend<R>,
    F: FnMut(C, C) -> R,
{
    split_by(first, last, out, |x| x == *sep, f)
}

/// Like [`split`], with separators given by a predicate.
pub fn split_by<C, R, B, P, F>(
    mut first: C,
    last: C,
    out: &mut B,
    mut pred: P,
    mut f: F,
) -> C
where
    C: Cursor,
    B: Extend<R>,
    P: FnMut(C::Item) -> bool,
    F: FnMut(C, C) -> R,
{
    if first == last {
        return last;
    }
    loop {
        let end = find(first.clone(), &last, &mut pred);
        out.extend(iter::once(f(first, end.clone())));
        if end == last {
            return end;
        }
        first = end;
        first.advance();
    }
}

/// Like [`split_by`] with a fallible transform.
///
/// Stops at the first error and returns it as is. Slices transformed before
/// the error remain in `out`.
///
/// ```
/// use cursor::SliceCursor;
/// use split::try_split_by;
///
/// let a = [3, 0, 5, 0, 0, 0, 7];
/// let (first, last) = SliceCursor::bounds(&a);
/// let mut out = vec![];
/// let res = try_split_by(first, last, &mut out, |&x| x == 0, |s, e| {
///     let slice = s.slice_to(&e);
///     slice.first().copied().ok_or(s.position())
/// });
/// assert_eq!(res, Err(4));
/// assert_eq!(out, [3, 5]);
/// ```
pub fn try_split_by<C, R, E, B, P, F>(
    mut first: C,
    last: C,
    out: &mut B,
    mut pred: P,
    mut f: F,
) -> Result<C, E>
where
    C: Cursor,
    B: Extend<R>,
    P: FnMut(C::Item) -> bool,
    F: FnMut(C, C) -> Result<R, E>,
{
    if first == last {
        return Ok(last);
    }
    loop {
        let end = find(first.clone(), &last, &mut pred);
        out.extend(iter::once(f(first, end.clone())?));
        if end == last {
            return Ok(end);
        }
        first = end;
        first.advance();
    }
}

/// Returns the slices of [`split_by`] lazily as `(start, end)` pairs.
pub fn splits<C, P>(first: C, last: C, pred: P) -> Splits<C, P>
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    let first = (first != last).then_some(first);
    Splits { first, last, pred }
}

#[derive(Clone, Debug)]
pub struct Splits<C, P> {
    first: Option<C>,
    last: C,
    pred: P,
}

impl<C, P> Iterator for Splits<C, P>
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    type Item = (C, C);
    fn next(&mut self) -> Option<(C, C)> {
        let first = self.first.take()?;
        let end = find(first.clone(), &self.last, &mut self.pred);
        if end != self.last {
            let mut next = end.clone();
            next.advance();
            self.first = Some(next);
        }
        Some((first, end))
    }
}

impl<C, P> iter::FusedIterator for Splits<C, P>
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
}

pub trait SplitSep {
    type Sep: ?Sized;

    /// Appends `f(slice)` for every slice to `out` and returns the number of
    /// slices.
    fn split_sep_with<'a, R, B>(
        &'a self,
        sep: &Self::Sep,
        out: &mut B,
        f: impl FnMut(&'a Self) -> R,
    ) -> usize
    where
        B: Extend<R>;

    fn split_sep(&self, sep: &Self::Sep) -> Vec<&Self> {
        let mut res = vec![];
        self.split_sep_with(sep, &mut res, |s| s);
        res
    }
}

impl<T: PartialEq> SplitSep for [T] {
    type Sep = T;
    fn split_sep_with<'a, R, B>(
        &'a self,
        sep: &T,
        out: &mut B,
        mut f: impl FnMut(&'a [T]) -> R,
    ) -> usize
    where
        B: Extend<R>,
    {
        let (first, last) = SliceCursor::bounds(self);
        let mut count = 0;
        split_by(first, last, out, |x| x == sep, |s, e| {
            count += 1;
            f(s.slice_to(&e))
        });
        count
    }
}

impl SplitSep for str {
    type Sep = char;
    fn split_sep_with<'a, R, B>(
        &'a self,
        &sep: &char,
        out: &mut B,
        mut f: impl FnMut(&'a str) -> R,
    ) -> usize
    where
        B: Extend<R>,
    {
        let (first, last) = CharCursor::bounds(self);
        let mut count = 0;
        split_by(first, last, out, |c| c == sep, |s, e| {
            count += 1;
            f(s.str_to(&e))
        });
        count
    }
}

/// Concatenates `slices`, putting `sep` between consecutive ones.
///
/// ```
/// use split::{join, SplitSep};
///
/// let a = [1, 0, 0, 2, 3, 0];
/// assert_eq!(join(a.split_sep(&0), &0), a);
/// ```
pub fn join<'a, T, I>(slices: I, sep: &T) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a [T]>,
{
    let mut slices = slices.into_iter();
    let mut res = vec![];
    if let Some(first) = slices.next() {
        res.extend_from_slice(first);
    }
    for slice in slices {
        res.push(sep.clone());
        res.extend_from_slice(slice);
    }
    res
}

#[test]
fn sanity_check() {
    fn split_str(s: &str) -> Vec<&str> { s.split_sep(&'-') }

    assert_eq!(split_str(""), Vec::<&str>::new());
    assert_eq!(split_str("hello"), ["hello"]);
    assert_eq!(split_str("-a-"), ["", "a", ""]);
    assert_eq!(split_str("a--b"), ["a", "", "b"]);
    assert_eq!(split_str("-"), ["", ""]);
    assert_eq!(
        split_str("a-b-c-d-e-f-g"),
        ["a", "b", "c", "d", "e", "f", "g"]
    );
}
