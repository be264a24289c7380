use crate::api::SkipOffering;

/// Messages driving the skip selection page.
///
/// Queued by `init()` and input handling, processed by the page's update
/// funnel. Fetch completion arrives here as an explicit loaded/failed pair
/// rather than being swallowed at the call site.
#[derive(Debug)]
pub enum SkipHireMsg {
    /// Start (or re-run) the offerings fetch.
    LoadOfferings,
    /// Fetch resolved with the server-ordered offerings.
    OfferingsLoaded(Vec<SkipOffering>),
    /// Fetch failed; the reason is kept for diagnostics only.
    LoadFailed(String),
    /// Commit the offering with this id as the current selection.
    Select(u64),
    /// Previous checkout step; placeholder with no target.
    NavigateBack,
    /// Next checkout step; placeholder with no target.
    ContinueCheckout,
}
