use crate::api::employee;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // The whole surface: one page.
    cfg.service(web::resource("/").route(web::get().to(employee::employees_page)));
}
