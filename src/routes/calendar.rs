use actix_web::{HttpResponse, Responder, get, post, web};
use tera::{Context, Tera};

use crate::alerts::{Alert, CALENDAR_FAILED};
use crate::forms::calendar::{AddScrapingEventForm, AddScrapingEventPayload};
use crate::repository::http::HttpRepository;
use crate::routes::{alert_response, render_template};
use crate::state::DashboardState;

/// Rebuilds the calendar from the backend and renders the section.
///
/// On any failure the calendar is left initialized and empty; the page
/// builds the widget anyway and shows the calendar alert.
pub(crate) async fn calendar_fragment(
    state: &DashboardState,
    repo: &HttpRepository,
    tera: &Tera,
) -> HttpResponse {
    let mut view = state.calendar.lock().await;
    match view.init_calendar(repo).await {
        Ok(events) => {
            let mut context = Context::new();
            context.insert("event_count", &events.len());
            render_template(tera, "calendar/section.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render calendar: {err}");
            alert_response(tera, &Alert::danger(CALENDAR_FAILED))
        }
    }
}

/// Events of the current calendar in the widget's JSON shape.
#[get("/calendar/events")]
pub async fn list_events(state: web::Data<DashboardState>) -> impl Responder {
    let view = state.calendar.lock().await;
    HttpResponse::Ok().json(view.events())
}

#[post("/calendar/events")]
pub async fn add_event(
    form: web::Json<AddScrapingEventForm>,
    state: web::Data<DashboardState>,
) -> impl Responder {
    let payload = match AddScrapingEventPayload::try_from(form.into_inner()) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("{e}");
            return HttpResponse::BadRequest().finish();
        }
    };

    let mut view = state.calendar.lock().await;
    match view.add_scraping_event(payload.data) {
        Some(event) => HttpResponse::Created().json(event),
        None => {
            log::debug!("Calendar not initialized, event dropped");
            HttpResponse::NoContent().finish()
        }
    }
}

#[get("/calendar/events/{event_id}")]
pub async fn event_detail(
    event_id: web::Path<String>,
    state: web::Data<DashboardState>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let view = state.calendar.lock().await;
    match view.event_detail(&event_id) {
        Some(event) => {
            let mut context = Context::new();
            context.insert("event", &event);
            render_template(&tera, "calendar/event_detail.html", &context)
        }
        None => HttpResponse::NotFound().finish(),
    }
}
