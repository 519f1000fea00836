//! Pagination over a filtered, sorted result set.
//!
//! Windowing is pure slice arithmetic; PageState carries the caller-owned
//! cursor and rejects navigation past the last page so the window can
//! never go out of range.

/// Number of pages needed for `total` items, 0 when the set is empty.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// The visible window for one page: `[index*size, index*size + size)`
/// clipped to the slice, empty when the page starts past the end.
pub fn window_of<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Caller-owned page cursor.
///
/// `index` is zero-based; `size` is fixed at construction and forced to be
/// at least 1. The cursor must be reset to the first page whenever a new
/// result set replaces the old one, since a stale index may exceed the new
/// page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    index: usize,
    size: usize,
}

impl PageState {
    pub fn new(size: usize) -> Self {
        Self {
            index: 0,
            size: size.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Jump to page 0.
    pub fn go_to_first(&mut self) {
        self.index = 0;
    }

    /// Jump to the last page for a result set of `total` items; page 0
    /// when the set is empty.
    pub fn go_to_last(&mut self, total: usize) {
        self.index = page_count(total, self.size).saturating_sub(1);
    }

    /// Jump to page `n` if it exists for `total` items; out-of-range
    /// targets are a no-op, never an error.
    pub fn go_to(&mut self, n: usize, total: usize) {
        if n < page_count(total, self.size) {
            self.index = n;
        }
    }

    /// The window of `items` this cursor currently points at.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        window_of(items, self.index, self.size)
    }
}
