use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::alerts::{Alert, PRODUCT_DETAIL_FAILED, PRODUCTS_FAILED};
use crate::domain::types::ProductId;
use crate::forms::products::{ProductsQuery, ProductsQueryPayload};
use crate::repository::http::HttpRepository;
use crate::routes::{alert_response, render_template};
use crate::services::products::ProductsView;
use crate::state::DashboardState;

/// Loads a products page and renders the table with its pagination.
pub(crate) async fn products_fragment(
    params: ProductsQueryPayload,
    state: &DashboardState,
    repo: &HttpRepository,
    tera: &Tera,
) -> HttpResponse {
    let mut view = state.products.lock().await;
    match view
        .load_products(
            repo,
            params.page,
            params.category.as_deref(),
            params.search.as_deref(),
        )
        .await
    {
        Ok(listing) => {
            let mut context = Context::new();
            context.insert("listing", &listing);
            render_template(tera, "products/listing.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render products: {err}");
            alert_response(tera, &err.alert(PRODUCTS_FAILED))
        }
    }
}

#[get("/products")]
pub async fn list_products(
    params: web::Query<ProductsQuery>,
    state: web::Data<DashboardState>,
    repo: web::Data<HttpRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let payload = match ProductsQueryPayload::try_from(params.into_inner()) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("{e}");
            return HttpResponse::BadRequest().finish();
        }
    };
    products_fragment(payload, &state, &repo, &tera).await
}

#[get("/products/{product_id}")]
pub async fn product_detail(
    product_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = match ProductId::new(product_id.into_inner()) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Invalid product id: {e}");
            return HttpResponse::NotFound().finish();
        }
    };

    match ProductsView::view_product_detail(repo.get_ref(), product_id).await {
        Ok(Some(product)) => {
            let mut context = Context::new();
            context.insert("product", &product);
            render_template(&tera, "products/detail.html", &context)
        }
        Ok(None) => HttpResponse::NoContent().finish(),
        Err(err) => {
            log::error!("Failed to render product {product_id}: {err}");
            alert_response(&tera, &Alert::danger(PRODUCT_DETAIL_FAILED))
        }
    }
}
