//! Commands for the skip selection page.
//!
//! These commands perform async operations and send results back through
//! the page's message channel. If the page is gone by the time a result
//! arrives, the send fails and is deliberately ignored.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use crate::api::SkipApi;
use crate::command::Command;
use crate::config::LocationConfig;
use crate::skip_hire::message::SkipHireMsg;

/// Fetch the offerings available for a location.
pub struct FetchOfferingsCmd {
    api: SkipApi,
    location: LocationConfig,
    tx: UnboundedSender<SkipHireMsg>,
}

impl FetchOfferingsCmd {
    pub fn new(api: SkipApi, location: LocationConfig, tx: UnboundedSender<SkipHireMsg>) -> Self {
        Self { api, location, tx }
    }
}

#[async_trait]
impl Command for FetchOfferingsCmd {
    fn name(&self) -> String {
        format!(
            "Loading skip options for {} ({})",
            self.location.postcode, self.location.area
        )
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        match self.api.list_by_location(&self.location).await {
            Ok(offerings) => {
                let _ = self.tx.send(SkipHireMsg::OfferingsLoaded(offerings));
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch skip offerings");
                let _ = self.tx.send(SkipHireMsg::LoadFailed(e.to_string()));
            }
        }
        Ok(())
    }
}
