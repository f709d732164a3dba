//! Delegated-mode notifications.

/// What a delegated view needs next: a one-based page and its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// One-based page number.
    pub page: usize,
    /// Rows per page.
    pub perpage: usize,
}

/// A single notification, for listeners that queue rather than react.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataRequest {
    /// Page or page size changed.
    Paginate(PageRequest),
    /// Sort changed; `""` when cleared, else `"<key>:<asc|desc>"`.
    Sort(String),
}

/// Receiver of delegated-mode intent.
///
/// The view calls these after updating its own state. It never waits for
/// the answer; fresh rows arrive later through
/// [`TabularDataView::set_page_data`](super::TabularDataView::set_page_data).
pub trait DataRequests {
    /// The page or page size changed.
    fn on_paginate_change(&mut self, request: PageRequest);

    /// The sort changed.
    fn on_sort_change(&mut self, spec: &str);

    /// Hands back notifications queued since the last call.
    ///
    /// Listeners that react immediately have nothing queued.
    fn take_queued(&mut self) -> Vec<DataRequest> {
        Vec::new()
    }
}

impl DataRequests for Vec<DataRequest> {
    fn on_paginate_change(&mut self, request: PageRequest) {
        self.push(DataRequest::Paginate(request));
    }

    fn on_sort_change(&mut self, spec: &str) {
        self.push(DataRequest::Sort(spec.to_string()));
    }

    fn take_queued(&mut self) -> Vec<DataRequest> {
        std::mem::take(self)
    }
}

/// A [`DataRequests`] built from two closures.
///
/// # Example
///
/// ```
/// use tabula_lib::table::{Callbacks, DataRequests, PageRequest};
///
/// let mut pages = Vec::new();
/// let mut callbacks = Callbacks::new(|req: PageRequest| pages.push(req.page), |_spec: &str| {});
/// callbacks.on_paginate_change(PageRequest { page: 2, perpage: 10 });
/// drop(callbacks);
/// assert_eq!(pages, vec![2]);
/// ```
pub struct Callbacks<P, S> {
    on_paginate: P,
    on_sort: S,
}

impl<P, S> Callbacks<P, S>
where
    P: FnMut(PageRequest),
    S: FnMut(&str),
{
    /// Wraps a paginate callback and a sort callback.
    pub fn new(on_paginate: P, on_sort: S) -> Self {
        Self {
            on_paginate,
            on_sort,
        }
    }
}

impl<P, S> DataRequests for Callbacks<P, S>
where
    P: FnMut(PageRequest),
    S: FnMut(&str),
{
    fn on_paginate_change(&mut self, request: PageRequest) {
        (self.on_paginate)(request);
    }

    fn on_sort_change(&mut self, spec: &str) {
        (self.on_sort)(spec);
    }
}
