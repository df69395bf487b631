use crate::store::RecordSource;
use crate::view::{EmployeeView, render_page};
use actix_web::{HttpResponse, Responder, web};
use tracing::error;

/// The employee page. Each request is one page load: a fresh view is
/// mounted with the shared store, the single fetch runs to settlement, and
/// the settled state is rendered. A failed fetch is still a 200 — the
/// failure is page text, not an HTTP error.
pub async fn employees_page(source: web::Data<dyn RecordSource>) -> impl Responder {
    let view = EmployeeView::new();

    let fetch = view.mount(source.into_inner());
    if let Err(e) = fetch.await {
        error!(error = %e, "Employee fetch task failed to settle");
    }

    let html = render_page(&view.state());
    view.unmount();

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
