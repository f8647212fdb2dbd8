use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod auth;
mod certificates;
mod json_error;
mod messages;
mod projects;
mod resume;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(auth::config_routes)
            .configure(messages::config_routes)
            .configure(projects::config_routes)
            .configure(certificates::config_routes)
            .configure(resume::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
