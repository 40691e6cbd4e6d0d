use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

use crate::alerts::{ALERT_DISMISS_MS, Alert};
use crate::sections::Section;

pub mod calendar;
pub mod files;
pub mod main;
pub mod products;

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok().body(render_body(tera, template, context))
}

fn render_body(tera: &Tera, template: &str, context: &Context) -> String {
    tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    })
}

/// Alert fragment alone, with `200 OK`.
pub fn render_alert(tera: &Tera, alert: &Alert) -> HttpResponse {
    render_template(tera, "partials/alert.html", &alert_context(alert))
}

/// Alert fragment answered when the backend could not serve a view.
pub fn alert_response(tera: &Tera, alert: &Alert) -> HttpResponse {
    HttpResponse::BadGateway().body(render_body(tera, "partials/alert.html", &alert_context(alert)))
}

fn alert_context(alert: &Alert) -> Context {
    let mut context = Context::new();
    context.insert("alert", alert);
    context.insert("alert_dismiss_ms", &ALERT_DISMISS_MS);
    context
}

pub fn base_context(current_section: Section) -> Context {
    let sections = Section::ALL
        .iter()
        .map(|s| (s.id(), s.title()))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("sections", &sections);
    context.insert("current_section", current_section.id());
    context.insert("alert_dismiss_ms", &ALERT_DISMISS_MS);
    context
}

/// Registers every dashboard route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index)
        .service(main::summary)
        .service(main::category_options)
        .service(main::show_section)
        .service(main::copy_notice)
        .service(products::list_products)
        .service(products::product_detail)
        .service(files::list_files)
        .service(files::filter_files)
        .service(calendar::list_events)
        .service(calendar::add_event)
        .service(calendar::event_detail);
}
