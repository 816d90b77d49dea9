//! Browsing session state
//!
//! The session owns the current result set together with the list and
//! gallery controls, and hands out navigation snapshots. Fetches are
//! sequenced with tickets: only the most recently started fetch may replace
//! the result set, so a slow request that resolves late cannot overwrite a
//! newer one.

use std::sync::Arc;

use crate::nasa::{
    project_gallery, project_list, GalleryQuery, ListQuery, MediaRecord, MediaType, Page,
    SortKey, SortOrder,
};
use crate::navigation::{Direction, Snapshot};

/// Generation number of a started fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Which projection the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Gallery,
    Detail,
}

#[derive(Debug, Clone)]
pub struct Session {
    query: String,
    results: Arc<[MediaRecord]>,
    list: ListQuery,
    gallery: GalleryQuery,
    view: View,
    origin: View,
    detail: Option<Snapshot>,
    issued: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Arc::from(Vec::new()),
            list: ListQuery::default(),
            gallery: GalleryQuery::default(),
            view: View::default(),
            origin: View::default(),
            detail: None,
            issued: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MediaRecord] {
        &self.results
    }

    pub fn list_query(&self) -> &ListQuery {
        &self.list
    }

    pub fn gallery_query(&self) -> &GalleryQuery {
        &self.gallery
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn detail(&self) -> Option<&Snapshot> {
        self.detail.as_ref()
    }

    /// Record that a fetch has started
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Whether `ticket` belongs to the most recently started fetch
    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply the records of a finished fetch
    ///
    /// Returns `false`, leaving the session untouched, when a newer fetch has
    /// been started since `ticket` was issued. On success the result set is
    /// replaced wholesale and both views return to their first page.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        query: &str,
        records: Vec<MediaRecord>,
    ) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.query = query.to_string();
        self.results = Arc::from(records);
        self.list.page = 1;
        self.gallery.page = 1;
        if self.view == View::Detail {
            self.view = self.origin;
        }
        self.detail = None;
        true
    }

    pub fn list_page(&self) -> Page {
        project_list(&self.results, &self.list)
    }

    pub fn gallery_page(&self) -> Page {
        project_gallery(&self.results, &self.gallery)
    }

    pub fn show_list(&mut self) {
        self.view = View::List;
    }

    pub fn show_gallery(&mut self, media_type: Option<MediaType>) {
        if let Some(media_type) = media_type {
            if media_type != self.gallery.media_type {
                self.gallery.media_type = media_type;
                self.gallery.page = 1;
            }
        }
        self.view = View::Gallery;
    }

    /// Projection the page and filter controls apply to
    ///
    /// While a detail is open this is the view it was opened from.
    fn controlling_view(&self) -> View {
        match self.view {
            View::Detail => self.origin,
            other => other,
        }
    }

    /// Set the title filter of the active list or gallery view
    pub fn set_filter(&mut self, filter: &str) {
        match self.controlling_view() {
            View::Gallery => {
                self.gallery.filter = filter.to_string();
                self.gallery.page = 1;
            }
            View::List | View::Detail => {
                self.list.filter = filter.to_string();
                self.list.page = 1;
            }
        }
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.list.sort_key = sort_key;
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.list.order = order;
    }

    pub fn toggle_order(&mut self) {
        self.list.order = self.list.order.toggle();
    }

    /// Jump to `page` of the active list or gallery view
    pub fn set_page(&mut self, page: usize) {
        match self.controlling_view() {
            View::Gallery => self.gallery.page = page,
            View::List | View::Detail => self.list.page = page,
        }
    }

    /// Move to the next page, staying put on the last one
    pub fn next_page(&mut self) -> bool {
        let page = self.active_page();
        if !page.pagination.has_next() {
            return false;
        }
        self.set_page(page.pagination.current_page + 1);
        true
    }

    /// Move to the previous page, staying put on the first one
    pub fn prev_page(&mut self) -> bool {
        let page = self.active_page();
        if !page.pagination.has_prev() {
            return false;
        }
        self.set_page(page.pagination.current_page - 1);
        true
    }

    /// Page of whichever projection is active, or of the one the open detail came from
    pub fn active_page(&self) -> Page {
        match self.controlling_view() {
            View::Gallery => self.gallery_page(),
            View::List | View::Detail => self.list_page(),
        }
    }

    /// Open the detail view for the item at `position` on the active page
    pub fn open(&mut self, position: usize) -> Option<&Snapshot> {
        let index = self.active_page().absolute_index(position)?;
        self.detail = Some(Snapshot::new(Arc::clone(&self.results), index));
        if self.view != View::Detail {
            self.origin = self.view;
        }
        self.view = View::Detail;
        self.detail.as_ref()
    }

    /// Move the open detail view, returning `false` at either end of the result set
    pub fn step(&mut self, direction: Direction) -> bool {
        let Some(current) = self.detail.as_ref() else {
            return false;
        };
        let next = current.navigate(direction);
        let moved = next.index() != current.index();
        self.detail = Some(next);
        moved
    }

    /// Leave the detail view and return to the projection it was opened from
    pub fn close_detail(&mut self) {
        self.detail = None;
        if self.view == View::Detail {
            self.view = self.origin;
        }
    }
}
