//! The storefront session: state + derivation, no rendering.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use petalcart_cart::Cart;
use petalcart_catalog::{
    filter, paginate, visible_pages, Catalog, CategorySelector, FilterCriteria, PageMarker,
    PageSize, Product, ProductId,
};
use petalcart_core::{DomainError, DomainResult, StoreConfig};
use petalcart_order::{handoff_url, order_message, Handoff, OrderSummary};

/// Read-only derived view of the filtered, paginated catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseView {
    pub items: Vec<Product>,
    pub total_items: usize,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: PageSize,
    /// 1-based "showing X-Y" bounds; `None` when nothing matches.
    pub showing: Option<(usize, usize)>,
    pub page_markers: Vec<PageMarker>,
    /// Previous/next availability, so the presentation layer can disable
    /// boundary controls without re-deriving anything.
    pub has_previous: bool,
    pub has_next: bool,
    pub categories: Vec<String>,
}

/// One visitor's in-memory session.
///
/// Constructed per visitor, discarded on navigation away; never shared
/// across threads. All transitions happen synchronously in response to a
/// single user action.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    catalog: Catalog,
    config: StoreConfig,
    criteria: FilterCriteria,
    current_page: u32,
    page_size: PageSize,
    cart: Cart,
    cart_open: bool,
}

impl StorefrontSession {
    pub fn new(catalog: Catalog, config: StoreConfig) -> Self {
        Self {
            catalog,
            config,
            criteria: FilterCriteria::default(),
            current_page: 1,
            page_size: PageSize::default(),
            cart: Cart::new(),
            cart_open: false,
        }
    }

    /// Session over the embedded builtin catalog.
    pub fn builtin(config: StoreConfig) -> DomainResult<Self> {
        Ok(Self::new(Catalog::builtin()?, config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Change the category restriction. Resets to page 1 so a stale page
    /// number never outlives a shrunken result set.
    pub fn set_category(&mut self, category: CategorySelector) {
        debug!(?category, "category changed");
        self.criteria.category = category;
        self.current_page = 1;
    }

    /// Change the search term. Resets to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        debug!(term = %self.criteria.search_term, "search term changed");
        self.current_page = 1;
    }

    /// Move to `page`, clamped into `[1, max(1, total_pages)]` so the
    /// session stays valid even if a caller bypasses disabled controls.
    pub fn set_page(&mut self, page: u32) {
        let total_pages = self.total_pages();
        self.current_page = page.clamp(1, total_pages.max(1));
        debug!(page = self.current_page, "page changed");
    }

    /// Change the items-per-page selector. Always resets to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        debug!(%page_size, "page size changed");
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Add one unit of the identified product to the cart.
    pub fn add_to_cart(&mut self, id: ProductId) -> DomainResult<()> {
        let product = self
            .catalog
            .get(id)
            .ok_or(DomainError::NotFound)?
            .clone();
        debug!(product = %product.name, "added to cart");
        self.cart.add(product);
        Ok(())
    }

    /// Remove the whole line for `id`; absence is a valid terminal state,
    /// not an error.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        debug!(%id, "removed from cart");
        self.cart.remove(id);
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Derive the current browse view from criteria + page state.
    pub fn browse(&self) -> BrowseView {
        let filtered = filter(self.catalog.products(), &self.criteria);
        let page = paginate(filtered, self.current_page, self.page_size.as_usize());
        let page_markers = visible_pages(self.current_page, page.total_pages);
        let has_previous = self.current_page > 1;
        let has_next = self.current_page < page.total_pages;

        BrowseView {
            showing: page.showing(),
            items: page.items,
            total_items: page.total_items,
            total_pages: page.total_pages,
            current_page: self.current_page,
            page_size: self.page_size,
            page_markers,
            has_previous,
            has_next,
            categories: self
                .catalog
                .categories()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Hand the order off: format the cart, build the deep link, then clear
    /// the cart and close it. An empty cart aborts before any state change.
    pub fn checkout(&mut self) -> DomainResult<Handoff> {
        let summary = OrderSummary::from_lines(self.cart.lines(), &self.config.currency_prefix)?;
        let message = order_message(&summary, &self.config.currency_prefix);
        let url = handoff_url(&self.config, &message)?;

        info!(
            total = summary.total,
            lines = self.cart.line_count(),
            "order handed off"
        );
        self.cart.clear();
        self.cart_open = false;
        Ok(Handoff::new(message, url, &summary))
    }

    fn total_pages(&self) -> u32 {
        let matched = self
            .catalog
            .products()
            .iter()
            .filter(|p| self.criteria.matches(p))
            .count();
        matched.div_ceil(self.page_size.as_usize()) as u32
    }
}
