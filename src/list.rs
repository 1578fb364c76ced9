//! # Cons Lists and Folds
//!
//! The immutable singly-linked list as an algebraic data type: a list is
//! either [`List::Empty`] or a [`Cell`] holding one element (`head`) and the
//! rest of the list (`tail`). In Scheme this is `'()` and `(cons h t)`; in
//! Rust we spell it as a two-variant enum and deconstruct it with pattern
//! matching.
//!
//! ## Philosophy
//!
//! Everything here is a pure function of its inputs. Operations never mutate
//! a list; they build a new one, sharing as much of the old structure as
//! possible. Sharing is safe precisely because nothing is ever mutated:
//!
//! - `cons`, [`List::tail`], [`List::set_head`], [`List::skip`] are O(1) and
//!   share the entire remaining spine
//! - [`List::append`] copies only its left argument and shares the right
//!
//! Edge cases are permissive by design: taking the tail of the empty list,
//! skipping past the end, or replacing the head of nothing all quietly yield
//! the empty list. No operation signals an error for structurally valid
//! input.
//!
//! ## Recursion depth
//!
//! [`List::fold_right`] and the operations defined through it (`sum`,
//! `product`, `append`, `map`, `concat`) as well as [`List::init`] recurse
//! once per element, so their stack use grows with list length. That is the
//! structural definition and it is kept honest here rather than papered
//! over. [`List::fold_left`] and everything built on it (`reverse`,
//! `length_iter`, `to_vec`, `mk_string`) run as an explicit loop and handle
//! lists of any finite length. Dropping a list is likewise iterative, so a
//! long list can at least always be reclaimed.
//!
//! ## Example
//!
//! ```
//! use fp_list::{list, List};
//!
//! let l = List::new().cons(3).cons(2).cons(1);
//! assert_eq!(l, list![1, 2, 3]);
//!
//! // fold_right rebuilds the cons structure from the right:
//! let rendered = l.fold_right("nil".to_string(), |x, acc| format!("({x} . {acc})"));
//! assert_eq!(rendered, "(1 . (2 . (3 . nil)))");
//! ```

use std::fmt;
use std::mem;
use std::sync::Arc;

/// Builds a [`List`] from its elements, in order.
///
/// # Example
///
/// ```
/// use fp_list::{list, List};
///
/// assert_eq!(list![1, 2, 3], List::of([1, 2, 3]));
///
/// let empty: List<i64> = list![];
/// assert_eq!(empty, List::new());
/// ```
#[macro_export]
macro_rules! list {
    () => { $crate::List::new() };
    ( $($x:expr),+ $(,)? ) => { $crate::List::of([ $($x),+ ]) };
}

/// A persistent, immutable singly-linked list.
///
/// Either the empty list or a reference-counted [`Cell`] carrying one
/// element and the remainder. Cloning a list is O(1) (one refcount bump)
/// and never clones elements. Two lists may share a common suffix.
///
/// # Example
///
/// ```
/// use fp_list::{list, List};
///
/// let l = list![1, 2, 3, 4, 5];
/// assert_eq!(l.tail(), list![2, 3, 4, 5]);
/// assert_eq!(l.length(), 5);
///
/// // The original is untouched by any operation:
/// assert_eq!(l, list![1, 2, 3, 4, 5]);
/// ```
pub enum List<T> {
    /// The zero-length list.
    Empty,
    /// One element plus the rest of the list.
    Cell(Arc<Cell<T>>),
}

/// A non-empty list node: one element and the remaining list.
pub struct Cell<T> {
    head: T,
    tail: List<T>,
}

impl<T> Cell<T> {
    /// The element stored in this cell.
    #[must_use]
    pub fn head(&self) -> &T {
        &self.head
    }

    /// The rest of the list after this cell.
    #[must_use]
    pub fn tail(&self) -> &List<T> {
        &self.tail
    }
}

impl<T> List<T> {
    /// Creates the empty list.
    #[must_use]
    pub fn new() -> Self {
        List::Empty
    }

    /// Builds a list whose element order matches the input order.
    ///
    /// Elements are prepended in reverse so the first input value ends up as
    /// the outermost cell's head. Empty input yields the empty list.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::List;
    ///
    /// let l = List::of([1, 2, 3]);
    /// assert_eq!(l.head(), Some(&1));
    /// assert_eq!(List::of(Vec::<i64>::new()), List::new());
    /// ```
    #[must_use]
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(List::Empty, |tail, head| tail.cons(head))
    }

    /// Prepends an element, consuming the list. O(1).
    ///
    /// The structural primitive everything else is built from.
    #[must_use]
    pub fn cons(self, head: T) -> Self {
        List::Cell(Arc::new(Cell { head, tail: self }))
    }

    /// Returns true if this is the empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, List::Empty)
    }

    /// Returns the first element, if any.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        match self {
            List::Empty => None,
            List::Cell(cell) => Some(&cell.head),
        }
    }

    /// Returns the list without its first element.
    ///
    /// On the empty list, returns the empty list (not an error). O(1); the
    /// result shares the entire remaining spine.
    #[must_use]
    pub fn tail(&self) -> Self {
        match self {
            List::Empty => List::Empty,
            List::Cell(cell) => cell.tail.clone(),
        }
    }

    /// Replaces the first element; on the empty list, returns it unchanged.
    ///
    /// The old tail is shared, not copied.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4, 5].set_head(6), list![6, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn set_head(&self, new_head: T) -> Self {
        match self {
            List::Empty => List::Empty,
            List::Cell(cell) => cell.tail.clone().cons(new_head),
        }
    }

    /// Removes up to `n` leading elements.
    ///
    /// Skipping zero elements or skipping past the end is a no-op in the
    /// obvious direction: the former returns the list as-is, the latter the
    /// empty list.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// let l = list![1, 2, 3, 4, 5];
    /// assert_eq!(l.skip(2), list![3, 4, 5]);
    /// assert_eq!(l.skip(9), list![]);
    /// ```
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        let mut cur = self;
        for _ in 0..n {
            match cur {
                List::Empty => break,
                List::Cell(cell) => cur = &cell.tail,
            }
        }
        cur.clone()
    }

    /// Removes leading elements while the predicate holds.
    ///
    /// Stops at the first element where the predicate is false, or at the
    /// end of the list.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// let l = list![1, 2, 3, 4, 5];
    /// assert_eq!(l.skip_while(|x| *x < 4), list![4, 5]);
    /// ```
    #[must_use]
    pub fn skip_while<F>(&self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        let mut cur = self;
        while let List::Cell(cell) = cur {
            if !predicate(&cell.head) {
                break;
            }
            cur = &cell.tail;
        }
        cur.clone()
    }

    /// Folds from the right: `f(e1, f(e2, ... f(en, seed)))`.
    ///
    /// Defined by structural recursion, so the rightmost element's
    /// contribution is combined first and stack use grows with list length.
    /// See the module docs on recursion depth.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// let sum = list![1, 2, 3].fold_right(0, |x, acc| x + acc);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold_right<B, F>(&self, seed: B, combine: F) -> B
    where
        F: Fn(&T, B) -> B,
    {
        fn go<T, B, F>(list: &List<T>, seed: B, combine: &F) -> B
        where
            F: Fn(&T, B) -> B,
        {
            match list {
                List::Empty => seed,
                List::Cell(cell) => {
                    let rest = go(&cell.tail, seed, combine);
                    combine(&cell.head, rest)
                }
            }
        }
        go(self, seed, &combine)
    }

    /// Folds from the left: `f(f(...f(seed, e1), e2...), en)`.
    ///
    /// Runs as an explicit loop (tail-call elimination by hand), so it is
    /// stack-safe for any finite list. This is the building block for
    /// [`reverse`](List::reverse), [`length_iter`](List::length_iter),
    /// [`to_vec`](List::to_vec) and [`mk_string`](List::mk_string).
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// let spelled = list![1, 2, 3].fold_left(String::from("0"), |acc, x| {
    ///     format!("({acc} + {x})")
    /// });
    /// assert_eq!(spelled, "(((0 + 1) + 2) + 3)");
    /// ```
    pub fn fold_left<B, F>(&self, seed: B, mut combine: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        let mut acc = seed;
        let mut cur = self;
        while let List::Cell(cell) = cur {
            acc = combine(acc, &cell.head);
            cur = &cell.tail;
        }
        acc
    }

    /// Number of elements, via `fold_right` with seed 0 and increment.
    ///
    /// Agrees with [`length_iter`](List::length_iter) on every finite list
    /// but inherits `fold_right`'s recursion depth.
    #[must_use]
    pub fn length(&self) -> usize {
        self.fold_right(0, |_, acc| acc + 1)
    }

    /// Number of elements, via `fold_left`. Stack-safe.
    #[must_use]
    pub fn length_iter(&self) -> usize {
        self.fold_left(0, |acc, _| acc + 1)
    }

    /// Applies `transform` to every element, preserving order and length.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// assert_eq!(list![1, 2, 3].map(|x| x * 10), list![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, transform: F) -> List<B>
    where
        F: Fn(&T) -> B,
    {
        self.fold_right(List::Empty, |head, tail| tail.cons(transform(head)))
    }
}

impl<T: Clone> List<T> {
    /// Reverses the list: `fold_left` prepending onto an empty accumulator.
    ///
    /// Satisfies `l.reverse().reverse() == l` for every finite list.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4, 5].reverse(), list![5, 4, 3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(List::Empty, |acc, head| acc.cons(head.clone()))
    }

    /// Concatenates two lists, preserving order.
    ///
    /// Copies the cells of `self`; the result shares `other`'s cells as its
    /// suffix. `List::new().append(&b)` is `b`.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// let joined = list![1, 2, 3, 4, 5].append(&list![7, 8, 9]);
    /// assert_eq!(joined, list![1, 2, 3, 4, 5, 7, 8, 9]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        match self {
            List::Empty => other.clone(),
            List::Cell(cell) => cell.tail.append(other).cons(cell.head.clone()),
        }
    }

    /// [`append`](List::append) expressed as a right fold. Agrees with the
    /// direct form on every pair of finite lists.
    #[must_use]
    pub fn append_with_fold(&self, other: &Self) -> Self {
        self.fold_right(other.clone(), |head, tail| tail.cons(head.clone()))
    }

    /// Returns all elements except the last.
    ///
    /// On the empty list and on a single-element list, returns the empty
    /// list. A single forward pass over the structure; no length is
    /// computed up front. Unlike [`tail`](List::tail) this cannot share the
    /// result (every cell but the last changes), so it copies and recurses.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4, 5].init(), list![1, 2, 3, 4]);
    /// assert_eq!(list![1].init(), list![]);
    /// ```
    #[must_use]
    pub fn init(&self) -> Self {
        match self {
            List::Empty => List::Empty,
            List::Cell(cell) => match &cell.tail {
                List::Empty => List::Empty,
                tail => tail.init().cons(cell.head.clone()),
            },
        }
    }

    /// Collects the elements into a `Vec`, bridging to the idiomatic Rust
    /// sequence type. Stack-safe (built on `fold_left`).
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.fold_left(Vec::new(), |mut out, head| {
            out.push(head.clone());
            out
        })
    }
}

impl<T: Clone> List<List<T>> {
    /// Flattens a list of lists, preserving outer and inner order.
    ///
    /// A right fold of [`append`](List::append), so each inner list's cells
    /// after the first copy are shared where `append` shares them.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// let nested = list![list![1, 2], list![3], list![4, 5]];
    /// assert_eq!(nested.concat(), list![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn concat(&self) -> List<T> {
        self.fold_right(List::Empty, |inner, acc| inner.append(&acc))
    }
}

impl List<i64> {
    /// Sum of the elements; 0 for the empty list. Direct structural
    /// recursion.
    #[must_use]
    pub fn sum(&self) -> i64 {
        match self {
            List::Empty => 0,
            List::Cell(cell) => cell.head + cell.tail.sum(),
        }
    }

    /// [`sum`](List::sum) expressed as a right fold. Agrees with the direct
    /// form on every finite list.
    #[must_use]
    pub fn sum_with_fold(&self) -> i64 {
        self.fold_right(0, |x, acc| x + acc)
    }
}

impl List<f64> {
    /// Product of the elements; 1.0 for the empty list.
    ///
    /// Short-circuits to 0.0 as soon as any element equals 0.0, skipping
    /// the rest of the list.
    #[must_use]
    pub fn product(&self) -> f64 {
        match self {
            List::Empty => 1.0,
            List::Cell(cell) if cell.head == 0.0 => 0.0,
            List::Cell(cell) => cell.head * cell.tail.product(),
        }
    }

    /// [`product`](List::product) expressed as a right fold. No
    /// short-circuit, but agrees with the direct form on every finite list.
    #[must_use]
    pub fn product_with_fold(&self) -> f64 {
        self.fold_right(1.0, |x, acc| x * acc)
    }
}

impl<T: fmt::Display> List<T> {
    /// Renders the elements concatenated in order with no separator.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4, 5].mk_string(), "12345");
    /// ```
    #[must_use]
    pub fn mk_string(&self) -> String {
        self.mk_string_with("")
    }

    /// Renders the elements in order, joined by `separator`.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_list::list;
    ///
    /// assert_eq!(list![1, 2, 3].mk_string_with(", "), "1, 2, 3");
    /// ```
    #[must_use]
    pub fn mk_string_with(&self, separator: &str) -> String {
        let parts = self.fold_left(Vec::new(), |mut parts, item| {
            parts.push(item.to_string());
            parts
        });
        parts.join(separator)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::Empty
    }
}

// Manual impl so cloning never requires T: Clone; it only bumps a refcount.
impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        match self {
            List::Empty => List::Empty,
            List::Cell(cell) => List::Cell(Arc::clone(cell)),
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List::of(iter)
    }
}

// Structural equality, computed iteratively. Shared suffixes compare equal
// without being walked.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self;
        let mut b = other;
        loop {
            match (a, b) {
                (List::Empty, List::Empty) => return true,
                (List::Cell(x), List::Cell(y)) => {
                    if Arc::ptr_eq(x, y) {
                        return true;
                    }
                    if x.head != y.head {
                        return false;
                    }
                    a = &x.tail;
                    b = &y.tail;
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

// Render like a slice, iteratively.
impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut cur = self;
        while let List::Cell(cell) = cur {
            entries.entry(&cell.head);
            cur = &cell.tail;
        }
        entries.finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

// Dropping must not recurse once per cell, or reclaiming a long list would
// overflow the stack. Walk the spine, detaching each uniquely-owned cell;
// stop at the first cell still shared with another list.
impl<T> Drop for Cell<T> {
    fn drop(&mut self) {
        let mut tail = mem::replace(&mut self.tail, List::Empty);
        while let List::Cell(cell) = tail {
            match Arc::try_unwrap(cell) {
                Ok(mut cell) => tail = mem::replace(&mut cell.tail, List::Empty),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_preserves_input_order() {
        let l = List::of([1, 2, 3]);
        assert_eq!(l.to_vec(), vec![1, 2, 3]);
        assert_eq!(List::of(Vec::<i64>::new()), List::new());
    }

    #[test]
    fn test_cons_prepends() {
        let l = List::new().cons(3).cons(2).cons(1);
        assert_eq!(l, list![1, 2, 3]);
        assert_eq!(l.head(), Some(&1));
    }

    #[test]
    fn test_from_iterator() {
        let l: List<i64> = (1..=4).collect();
        assert_eq!(l, list![1, 2, 3, 4]);
    }

    #[test]
    fn test_tail() {
        assert_eq!(list![1, 2, 3, 4, 5].tail(), list![2, 3, 4, 5]);
        assert_eq!(list![1].tail(), list![]);
        assert_eq!(List::<i64>::new().tail(), List::new());
    }

    #[test]
    fn test_set_head() {
        assert_eq!(list![1, 2, 3, 4, 5].set_head(6), list![6, 2, 3, 4, 5]);
        assert_eq!(List::new().set_head(6), List::new());
    }

    #[test]
    fn test_skip() {
        let l = list![1, 2, 3, 4, 5];
        assert_eq!(l.skip(0), l);
        assert_eq!(l.skip(2), list![3, 4, 5]);
        assert_eq!(l.skip(5), list![]);
        assert_eq!(l.skip(99), list![]);
        assert_eq!(List::<i64>::new().skip(3), List::new());
    }

    #[test]
    fn test_skip_while() {
        let l = list![1, 2, 3, 4, 5];
        assert_eq!(l.skip_while(|x| *x < 4), list![4, 5]);
        assert_eq!(l.skip_while(|x| *x < 99), list![]);
        assert_eq!(l.skip_while(|x| *x > 99), l);
    }

    #[test]
    fn test_init() {
        assert_eq!(list![1, 2, 3, 4, 5].init(), list![1, 2, 3, 4]);
        assert_eq!(list![1].init(), list![]);
        assert_eq!(List::<i64>::new().init(), List::new());
    }

    #[test]
    fn test_length_forms_agree() {
        let l = list![1, 2, 3, 4, 5];
        assert_eq!(l.length(), 5);
        assert_eq!(l.length_iter(), 5);
        assert_eq!(List::<i64>::new().length(), 0);
        assert_eq!(List::<i64>::new().length_iter(), 0);
    }

    #[test]
    fn test_fold_right_structure() {
        // fold_right with cons rebuilding: (1 . (2 . (3 . nil)))
        let rendered = list![1, 2, 3].fold_right("nil".to_string(), |x, acc| {
            format!("({x} . {acc})")
        });
        assert_eq!(rendered, "(1 . (2 . (3 . nil)))");
    }

    #[test]
    fn test_fold_left_is_left_associative() {
        let rendered = list![1, 2, 3].fold_left("0".to_string(), |acc, x| {
            format!("({acc} + {x})")
        });
        assert_eq!(rendered, "(((0 + 1) + 2) + 3)");
    }

    #[test]
    fn test_reverse() {
        let l = list![1, 2, 3, 4, 5];
        assert_eq!(l.reverse(), list![5, 4, 3, 2, 1]);
        assert_eq!(l.reverse().reverse(), l);
        assert_eq!(List::<i64>::new().reverse(), List::new());
    }

    #[test]
    fn test_append() {
        let a = list![1, 2, 3, 4, 5];
        let b = list![7, 8, 9];
        let joined = a.append(&b);
        assert_eq!(joined, list![1, 2, 3, 4, 5, 7, 8, 9]);
        assert_eq!(joined.length(), a.length() + b.length());
        assert_eq!(a.append_with_fold(&b), joined);
        assert_eq!(List::new().append(&b), b);
        assert_eq!(a.append(&List::new()), a);
    }

    #[test]
    fn test_concat() {
        let nested = list![list![1, 2, 3, 4, 5], list![7, 8, 9], list![10, 11, 12]];
        assert_eq!(
            nested.concat(),
            list![1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12]
        );
        assert_eq!(List::<List<i64>>::new().concat(), List::new());
    }

    #[test]
    fn test_map() {
        let l = list![1, 2, 3, 4, 5];
        assert_eq!(l.map(|x| x * x), list![1, 4, 9, 16, 25]);
        assert_eq!(l.map(|x| *x), l);
        assert_eq!(l.map(|x| x * 2).length(), l.length());
        assert_eq!(List::<i64>::new().map(|x| x * 2), List::new());
    }

    #[test]
    fn test_sum_forms_agree() {
        let l: List<i64> = list![1, 2, 3, 4, 5];
        assert_eq!(l.sum(), 15);
        assert_eq!(l.sum_with_fold(), 15);
        assert_eq!(List::<i64>::new().sum(), 0);
        assert_eq!(List::<i64>::new().sum_with_fold(), 0);
    }

    #[test]
    fn test_product_forms_agree() {
        let l: List<f64> = list![1.0, 2.0, 3.0, 4.0];
        assert_eq!(l.product(), 24.0);
        assert_eq!(l.product_with_fold(), 24.0);
        assert_eq!(List::<f64>::new().product(), 1.0);

        // The direct form short-circuits on a literal zero; both forms must
        // still agree on the result.
        let with_zero: List<f64> = list![1.0, 0.0, 3.0];
        assert_eq!(with_zero.product(), 0.0);
        assert_eq!(with_zero.product_with_fold(), 0.0);
    }

    #[test]
    fn test_mk_string() {
        assert_eq!(list![1, 2, 3, 4, 5].mk_string(), "12345");
        assert_eq!(list![1, 2, 3].mk_string_with(" -> "), "1 -> 2 -> 3");
        assert_eq!(List::<i64>::new().mk_string(), "");
    }

    #[test]
    fn test_debug_renders_like_a_slice() {
        assert_eq!(format!("{:?}", list![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format!("{:?}", List::<i64>::new()), "[]");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(list![1, 2, 3], List::of(vec![1, 2, 3]));
        assert_ne!(list![1, 2, 3], list![1, 2]);
        assert_ne!(list![1, 2, 3], list![1, 2, 4]);
    }

    #[test]
    fn test_tail_shares_cells() {
        let l = list![1, 2, 3];
        let rest = l.tail();
        match (&l, &rest) {
            (List::Cell(first), List::Cell(shared)) => match first.tail() {
                List::Cell(second) => assert!(Arc::ptr_eq(second, shared)),
                List::Empty => panic!("expected a second cell"),
            },
            _ => panic!("expected two non-empty lists"),
        }
        // set_head shares the same suffix too.
        let replaced = l.set_head(9);
        assert_eq!(replaced.tail(), rest);
    }

    #[test]
    fn test_fold_left_and_drop_on_long_list() {
        // fold_left must run as a loop, and teardown must not recurse per
        // cell; either failing shows up here as a stack overflow.
        let n = 200_000_i64;
        let long = List::of(0..n);
        assert_eq!(long.length_iter(), n as usize);
        assert_eq!(long.fold_left(0, |acc, x| acc + x), n * (n - 1) / 2);
        assert_eq!(long.reverse().head(), Some(&(n - 1)));
    }

    #[test]
    fn test_concurrent_reads_of_shared_list() {
        let l = List::of(1..=100_i64);
        std::thread::scope(|scope| {
            let workers: Vec<_> = (0..4).map(|_| scope.spawn(|| l.sum())).collect();
            for worker in workers {
                assert_eq!(worker.join().unwrap(), 5050);
            }
        });
    }

    #[test]
    fn test_fold_left_order_matches_im_vector() {
        let data = [1, 2, 3, 4, 5];
        let l = List::of(data);
        let vector: im::Vector<i32> = data.into_iter().collect();

        let ours = l.fold_left(Vec::new(), |mut acc, x| {
            acc.push(*x);
            acc
        });
        let theirs: Vec<i32> = vector.iter().copied().collect();
        assert_eq!(ours, theirs);
    }
}
