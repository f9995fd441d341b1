//! Paginator: slice a filtered view into pages and describe the
//! navigation controls around the current page.

use serde::{Deserialize, Serialize};

use petalcart_core::DomainError;

use crate::product::Product;

/// Page sizes offered by the storefront's items-per-page selector.
///
/// `paginate` itself accepts any positive size; this enum constrains what
/// a session will set, making invalid selector values unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    Eight,
    #[default]
    Twelve,
    Sixteen,
    Twenty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Eight,
        PageSize::Twelve,
        PageSize::Sixteen,
        PageSize::Twenty,
    ];

    pub fn as_usize(self) -> usize {
        match self {
            PageSize::Eight => 8,
            PageSize::Twelve => 12,
            PageSize::Sixteen => 16,
            PageSize::Twenty => 20,
        }
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.as_usize() as u32
    }
}

impl TryFrom<u32> for PageSize {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(PageSize::Eight),
            12 => Ok(PageSize::Twelve),
            16 => Ok(PageSize::Sixteen),
            20 => Ok(PageSize::Twenty),
            other => Err(DomainError::validation(format!(
                "page size {other} is not one of 8, 12, 16, 20"
            ))),
        }
    }
}

impl core::fmt::Display for PageSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// One page of a filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Product>,
    pub total_items: usize,
    /// `ceil(total_items / page_size)`; 0 when there are no items.
    pub total_pages: u32,
    /// 0-based inclusive slice start.
    pub start_index: usize,
    /// Exclusive slice end, clamped to `total_items`.
    pub end_index: usize,
}

impl Page {
    /// 1-based "showing X-Y" bounds for display; `None` when the page is empty.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.start_index + 1, self.end_index))
        }
    }
}

/// Slice `items` into the requested page (1-based `page`).
///
/// Out-of-range pages yield an empty slice rather than an error; clamping
/// the requested page is the caller's concern. A zero `page_size` is
/// treated as 1 so the arithmetic stays total.
pub fn paginate(items: Vec<Product>, page: u32, page_size: usize) -> Page {
    let size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size) as u32;
    let start_index = (page.saturating_sub(1) as usize).saturating_mul(size);
    let end_index = (start_index + size).min(total_items);
    let page_items: Vec<Product> = items.into_iter().skip(start_index).take(size).collect();

    Page {
        items: page_items,
        total_items,
        total_pages,
        start_index,
        end_index,
    }
}

/// Entry in the page-number navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

/// Visible page numbers around `current`: a radius-2 window, always
/// anchored by page 1 and the last page, with ellipsis markers wherever
/// the window does not reach an edge contiguously.
pub fn visible_pages(current: u32, total_pages: u32) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }

    let lo = current.saturating_sub(2).max(2);
    let hi = (current + 2).min(total_pages.saturating_sub(1));

    let mut markers = vec![PageMarker::Page(1)];
    if current.saturating_sub(2) > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    for page in lo..=hi {
        markers.push(PageMarker::Page(page));
    }
    if current + 2 < total_pages.saturating_sub(1) {
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    } else if total_pages > 1 {
        markers.push(PageMarker::Page(total_pages));
    }
    markers
}
