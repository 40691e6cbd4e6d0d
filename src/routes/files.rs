use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::alerts::FILES_FAILED;
use crate::dto::files::FileRow;
use crate::forms::files::FileFilterQuery;
use crate::repository::http::HttpRepository;
use crate::routes::{alert_response, render_template};
use crate::state::DashboardState;

fn render_table(tera: &Tera, files: &[FileRow]) -> HttpResponse {
    let mut context = Context::new();
    context.insert("files", files);
    render_template(tera, "files/table.html", &context)
}

/// Fetches the file list and renders the whole table.
pub(crate) async fn files_fragment(
    state: &DashboardState,
    repo: &HttpRepository,
    tera: &Tera,
) -> HttpResponse {
    let mut view = state.files.lock().await;
    match view.load_files(repo).await {
        Ok(files) => render_table(tera, &files),
        Err(err) => {
            log::error!("Failed to render files: {err}");
            alert_response(tera, &err.alert(FILES_FAILED))
        }
    }
}

#[get("/files")]
pub async fn list_files(
    state: web::Data<DashboardState>,
    repo: web::Data<HttpRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    files_fragment(&state, &repo, &tera).await
}

#[get("/files/filter")]
pub async fn filter_files(
    params: web::Query<FileFilterQuery>,
    state: web::Data<DashboardState>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let view = state.files.lock().await;
    let files = view.filter_files_by_type(params.file_type.as_deref());
    render_table(&tera, &files)
}
