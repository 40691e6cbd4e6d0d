use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::alerts::copy_notice as copy_notice_alert;
use crate::dto::summary::SummaryView;
use crate::forms::files::CopyNoticeQuery;
use crate::forms::products::{CategoryOptionsQuery, ProductsQueryPayload};
use crate::poller::snapshot;
use crate::repository::http::HttpRepository;
use crate::routes::calendar::calendar_fragment;
use crate::routes::files::files_fragment;
use crate::routes::products::products_fragment;
use crate::routes::{base_context, render_alert, render_template};
use crate::sections::Section;
use crate::state::DashboardState;

fn summary_view(state: &DashboardState) -> SummaryView {
    SummaryView::from(&snapshot(&state.summary))
}

fn summary_fragment(state: &DashboardState, tera: &Tera) -> HttpResponse {
    let mut context = Context::new();
    context.insert("summary", &summary_view(state));
    render_template(tera, "main/summary.html", &context)
}

#[get("/")]
pub async fn index(state: web::Data<DashboardState>, tera: web::Data<Tera>) -> impl Responder {
    let summary_data = summary_view(&state);
    let mut context = base_context(Section::Dashboard);
    context.insert("categories", &summary_data.categories);
    context.insert("selected", &None::<String>);
    context.insert("summary", &summary_data);
    render_template(&tera, "main/index.html", &context)
}

/// Latest poller snapshot; never touches the backend.
#[get("/summary")]
pub async fn summary(state: web::Data<DashboardState>, tera: web::Data<Tera>) -> impl Responder {
    summary_fragment(&state, &tera)
}

/// Category dropdown options from the latest snapshot, keeping `selected`.
#[get("/categories")]
pub async fn category_options(
    params: web::Query<CategoryOptionsQuery>,
    state: web::Data<DashboardState>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = Context::new();
    context.insert("categories", &snapshot(&state.summary).categories);
    context.insert("selected", &params.into_inner().selected);
    render_template(&tera, "main/categories.html", &context)
}

/// Runs the loader of the requested section. Unknown names never reach the
/// handler: the path extractor answers `404`.
#[get("/sections/{section}")]
pub async fn show_section(
    section: web::Path<Section>,
    state: web::Data<DashboardState>,
    repo: web::Data<HttpRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    log::debug!("Loading section {section}");
    match section.into_inner() {
        Section::Dashboard => summary_fragment(&state, &tera),
        Section::Products => {
            let first_page = ProductsQueryPayload {
                page: 1,
                category: None,
                search: None,
            };
            products_fragment(first_page, &state, &repo, &tera).await
        }
        Section::Files => files_fragment(&state, &repo, &tera).await,
        Section::Calendar => calendar_fragment(&state, &repo, &tera).await,
    }
}

/// Notice shown after the page tried to copy a hash to the clipboard.
#[get("/alerts/copy")]
pub async fn copy_notice(params: web::Query<CopyNoticeQuery>, tera: web::Data<Tera>) -> impl Responder {
    render_alert(&tera, &copy_notice_alert(params.ok))
}
