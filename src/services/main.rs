use crate::alerts::{Alert, SUMMARY_FAILED};
use crate::domain::event::ScrapingEvent;
use crate::domain::stats::Stats;
use crate::repository::{CategoryReader, EventListQuery, EventReader, StatsReader};

/// How many events the dashboard section lists.
pub const RECENT_EVENTS_LIMIT: usize = 5;

/// Data behind the dashboard section and the summary counters.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub stats: Stats,
    pub categories: Vec<String>,
    pub recent_events: Vec<ScrapingEvent>,
    /// Raised when the last refresh could not fetch every part.
    pub alert: Option<Alert>,
}

impl Summary {
    /// Refreshes stats, categories and recent events one after another.
    ///
    /// A part that fails keeps its previous value. Returns `true` when every
    /// part was refreshed.
    pub async fn refresh<R>(&mut self, repo: &R) -> bool
    where
        R: StatsReader + CategoryReader + EventReader,
    {
        let mut complete = true;

        match repo.get_stats().await {
            Ok(stats) => self.stats = stats,
            Err(e) => {
                log::error!("Failed to refresh stats: {e}");
                complete = false;
            }
        }

        match repo.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => {
                log::error!("Failed to refresh categories: {e}");
                complete = false;
            }
        }

        let query = EventListQuery::default().limit(RECENT_EVENTS_LIMIT);
        match repo.list_events(query).await {
            Ok(events) => self.recent_events = events,
            Err(e) => {
                log::error!("Failed to refresh recent events: {e}");
                complete = false;
            }
        }

        self.alert = (!complete).then(|| Alert::danger(SUMMARY_FAILED));
        complete
    }
}
