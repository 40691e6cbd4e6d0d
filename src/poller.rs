//! Background refresh of the dashboard summary.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::repository::{CategoryReader, EventReader, StatsReader};
use crate::services::main::Summary;

/// Latest summary, shared between the poller and the request handlers.
pub type SharedSummary = Arc<RwLock<Summary>>;

/// Copy of the current summary. A poisoned lock still yields its data.
pub fn snapshot(summary: &SharedSummary) -> Summary {
    match summary.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn publish(summary: &SharedSummary, next: Summary) {
    match summary.write() {
        Ok(mut guard) => *guard = next,
        Err(poisoned) => *poisoned.into_inner() = next,
    }
}

/// Refreshes a copy of the shared summary and swaps it in, so readers never
/// wait on the network.
async fn refresh_shared<R>(repo: &R, summary: &SharedSummary)
where
    R: StatsReader + CategoryReader + EventReader,
{
    let mut next = snapshot(summary);
    log::debug!("Refreshing dashboard summary");
    if !next.refresh(repo).await {
        log::warn!("Dashboard summary refreshed partially");
    }
    publish(summary, next);
}

/// Periodic summary loader with explicit start and stop.
///
/// The first refresh happens right after [`SummaryPoller::start`]. A stop
/// request interrupts an in-flight refresh, which then leaves the shared
/// summary untouched.
pub struct SummaryPoller {
    summary: SharedSummary,
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SummaryPoller {
    /// Spawns the polling task on the current actix runtime.
    pub fn start<R>(repo: R, period: Duration) -> Self
    where
        R: StatsReader + CategoryReader + EventReader + 'static,
    {
        let summary = SharedSummary::default();
        let (shutdown, mut stop_rx) = watch::channel(false);

        let shared = Arc::clone(&summary);
        let handle = actix_web::rt::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = stop_rx.changed() => break,
                    _ = async {
                        ticker.tick().await;
                        refresh_shared(&repo, &shared).await;
                    } => {}
                }
            }
            log::info!("Summary poller stopped");
        });

        log::info!("Summary poller started, refreshing every {}s", period.as_secs());
        Self {
            summary,
            shutdown,
            handle,
        }
    }

    pub fn summary(&self) -> SharedSummary {
        Arc::clone(&self.summary)
    }

    /// Signals the task and waits for it to finish.
    pub async fn stop(self) {
        if self.shutdown.send(true).is_err() {
            log::warn!("Summary poller already finished");
        }
        if let Err(e) = self.handle.await {
            log::error!("Summary poller task failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::{ProductStats, Stats};
    use crate::repository::RepositoryError;
    use crate::repository::test::TestRepository;

    const HOUR: Duration = Duration::from_secs(3600);

    fn repo_with_active(active: u64) -> TestRepository {
        TestRepository::default()
            .with_stats(Stats {
                products: ProductStats {
                    active,
                    ..ProductStats::default()
                },
                ..Stats::default()
            })
            .with_categories(vec!["Herramientas"])
    }

    async fn wait_for_calls(repo: &TestRepository, calls: usize) {
        for _ in 0..200 {
            if repo.calls() >= calls {
                return;
            }
            time::sleep(Duration::from_millis(5)).await;
        }
        panic!("poller issued {} calls, expected {calls}", repo.calls());
    }

    #[actix_web::test]
    async fn refreshes_immediately_on_start() {
        let repo = repo_with_active(7);
        let poller = SummaryPoller::start(repo.clone(), HOUR);

        wait_for_calls(&repo, 3).await;
        time::sleep(Duration::from_millis(10)).await;

        let summary = snapshot(&poller.summary());
        assert_eq!(summary.stats.products.active, 7);
        assert_eq!(summary.categories, vec!["Herramientas"]);
        assert!(summary.alert.is_none());

        poller.stop().await;
    }

    #[actix_web::test]
    async fn keeps_polling_at_the_period() {
        let repo = repo_with_active(1);
        let poller = SummaryPoller::start(repo.clone(), Duration::from_millis(20));

        wait_for_calls(&repo, 9).await;
        poller.stop().await;
    }

    #[actix_web::test]
    async fn no_requests_after_stop() {
        let repo = repo_with_active(1);
        let poller = SummaryPoller::start(repo.clone(), Duration::from_millis(10));
        wait_for_calls(&repo, 3).await;

        poller.stop().await;
        let calls = repo.calls();
        time::sleep(Duration::from_millis(50)).await;

        assert_eq!(repo.calls(), calls);
    }

    #[actix_web::test]
    async fn failed_refresh_publishes_alert() {
        let repo = repo_with_active(1).failing("stats", RepositoryError::Transport("refused".into()));
        let poller = SummaryPoller::start(repo.clone(), HOUR);

        wait_for_calls(&repo, 3).await;
        time::sleep(Duration::from_millis(10)).await;

        let summary = snapshot(&poller.summary());
        assert!(summary.alert.is_some());
        assert_eq!(summary.categories, vec!["Herramientas"]);

        poller.stop().await;
    }
}
