use tokio::sync::Mutex;

use crate::poller::SharedSummary;
use crate::services::calendar::CalendarView;
use crate::services::files::FilesView;
use crate::services::products::ProductsView;

/// Per-process view state shared by every request.
///
/// Each view sits behind its own async lock, so concurrent requests for the
/// same view run one after another.
#[derive(Default)]
pub struct DashboardState {
    pub products: Mutex<ProductsView>,
    pub files: Mutex<FilesView>,
    pub calendar: Mutex<CalendarView>,
    pub summary: SharedSummary,
}

impl DashboardState {
    pub fn new(summary: SharedSummary) -> Self {
        Self {
            summary,
            ..Self::default()
        }
    }
}
