//! Helpers for integration tests.
#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde::Deserialize;
use serde_json::{Value, json};

pub const PRODUCT_COUNT: i64 = 45;

/// Category value that makes the fake backend leave `total` out.
pub const OMIT_TOTAL: &str = "sin-total";

/// How the fake scraping backend answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Healthy,
    /// Every endpoint answers `success: false`.
    Rejecting,
    /// Every endpoint answers an HTML error page.
    Garbage,
}

#[derive(Clone)]
struct Backend {
    mode: Mode,
    hits: Arc<AtomicUsize>,
}

/// Fake scraping backend listening on an ephemeral port.
pub struct FakeBackend {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    handle: ServerHandle,
}

impl FakeBackend {
    pub async fn start(mode: Mode) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let backend = Backend {
            mode,
            hits: Arc::clone(&hits),
        };

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(backend.clone()))
                .route("/api/products", web::get().to(products))
                .route("/api/products/{id}", web::get().to(product))
                .route("/api/files", web::get().to(files))
                .route("/api/events", web::get().to(events))
                .route("/api/stats", web::get().to(stats))
                .route("/api/categories", web::get().to(categories))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind fake backend");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        FakeBackend {
            base_url: format!("http://{addr}"),
            hits,
            handle,
        }
    }

    /// Requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Base URL on which nothing listens.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind a free port");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{addr}")
}

fn ok(data: Value) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true, "data": data }))
}

/// Shared answer for the failure modes; `None` means serve real data.
fn failure(backend: &Backend) -> Option<HttpResponse> {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    match backend.mode {
        Mode::Healthy => None,
        Mode::Rejecting => Some(
            HttpResponse::InternalServerError().json(json!({ "success": false, "error": "db down" })),
        ),
        Mode::Garbage => Some(
            HttpResponse::InternalServerError()
                .content_type("text/html")
                .body("<html><body>Internal Server Error</body></html>"),
        ),
    }
}

pub fn product_json(id: i64) -> Value {
    let title = if id == 3 {
        "Martillo de goma".to_string()
    } else {
        format!("Producto {id}")
    };
    json!({
        "id": id,
        "title": title,
        "price": 10.5,
        "original_price": 12.0,
        "discount_percentage": 12.5,
        "category": if id % 2 == 0 { "Herramientas" } else { "Jardín" },
        "quantity": 4,
        "page_number": 1,
        "image_url": null,
        "url": format!("https://tienda.example/p/{id}"),
        "description": "Producto de prueba",
        "scraped_date": "2024-01-15T10:30:00",
        "last_modified": "2024-01-15T10:30:00"
    })
}

#[derive(Deserialize)]
struct ProductsParams {
    page: usize,
    limit: usize,
    category: Option<String>,
}

async fn products(backend: web::Data<Backend>, params: web::Query<ProductsParams>) -> HttpResponse {
    if let Some(response) = failure(&backend) {
        return response;
    }
    let matching: Vec<Value> = (1..=PRODUCT_COUNT)
        .map(product_json)
        .filter(|p| match params.category.as_deref() {
            None | Some(OMIT_TOTAL) => true,
            Some(category) => p["category"] == category,
        })
        .collect();
    let total = matching.len();
    let page: Vec<Value> = matching
        .into_iter()
        .skip((params.page.max(1) - 1) * params.limit)
        .take(params.limit)
        .collect();

    if params.category.as_deref() == Some(OMIT_TOTAL) {
        return ok(json!(page));
    }
    HttpResponse::Ok().json(json!({ "success": true, "data": page, "total": total }))
}

async fn product(backend: web::Data<Backend>, id: web::Path<i64>) -> HttpResponse {
    if let Some(response) = failure(&backend) {
        return response;
    }
    let id = id.into_inner();
    if (1..=PRODUCT_COUNT).contains(&id) {
        ok(product_json(id))
    } else {
        HttpResponse::NotFound().json(json!({ "success": false, "error": "Product not found" }))
    }
}

async fn files(backend: web::Data<Backend>) -> HttpResponse {
    if let Some(response) = failure(&backend) {
        return response;
    }
    ok(json!([
        {
            "id": 1,
            "filename": "catalogo.pdf",
            "file_type": "application/pdf",
            "file_size": 1048576,
            "file_hash": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4",
            "scraped_date": "2024-01-15T10:30:00",
            "last_modified": "2024-02-01T08:00:00"
        },
        {
            "id": 2,
            "filename": "portada.png",
            "file_type": "image/png",
            "file_size": 2048,
            "file_hash": "abc123",
            "scraped_date": "2024-01-15T10:30:00",
            "last_modified": "2024-01-15T10:30:00"
        },
        {
            "id": 3,
            "filename": "notas.txt",
            "file_type": null,
            "file_size": 0,
            "file_hash": null,
            "scraped_date": "2024-01-15T10:30:00",
            "last_modified": "2024-01-15T10:30:00"
        }
    ]))
}

#[derive(Deserialize)]
struct EventsParams {
    limit: Option<usize>,
}

async fn events(backend: web::Data<Backend>, params: web::Query<EventsParams>) -> HttpResponse {
    if let Some(response) = failure(&backend) {
        return response;
    }
    let all = [
        ("scrape_products", "success"),
        ("download_files", "error"),
        ("scrape_products", "warning"),
        ("cleanup", "running"),
        ("scrape_products", "success"),
        ("download_files", "success"),
        ("scrape_products", "success"),
    ];
    let events: Vec<Value> = all
        .iter()
        .enumerate()
        .take(params.limit.unwrap_or(usize::MAX))
        .map(|(i, (event_type, status))| {
            json!({
                "id": i + 1,
                "event_type": event_type,
                "event_date": "2024-01-15T10:30:00",
                "event_description": format!("{event_type} run"),
                "status": status,
                "affected_records": 10,
                "execution_time": 2.5,
                "error_message": if *status == "error" { json!("timeout") } else { Value::Null }
            })
        })
        .collect();
    ok(json!(events))
}

async fn stats(backend: web::Data<Backend>) -> HttpResponse {
    if let Some(response) = failure(&backend) {
        return response;
    }
    ok(json!({
        "products": { "active": PRODUCT_COUNT, "inactive": 2, "categories": 2, "avg_price": 10.5 },
        "files": { "total": 3, "total_size_mb": 1.0, "types": 2 },
        "events_24h": { "total": 7, "successful": 4, "failed": 1 }
    }))
}

async fn categories(backend: web::Data<Backend>) -> HttpResponse {
    if let Some(response) = failure(&backend) {
        return response;
    }
    ok(json!(["Herramientas", "Jardín"]))
}
