//! Fixed-size page slicing.

use crate::store::Todo;

/// One page of the filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: Vec<&'a Todo>,
    /// 1-based; may exceed `page_count` when the list shrank under it.
    pub page: usize,
    pub page_count: usize,
    /// Size of the filtered list.
    pub total: usize,
}

impl Page<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Number of pages needed for `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slice out page `page` (1-based). Out-of-range pages come back empty.
pub fn paginate(filtered: Vec<&Todo>, page: usize, page_size: usize) -> Page<'_> {
    let total = filtered.len();
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_count: page_count(total, page_size),
        total,
    }
}
