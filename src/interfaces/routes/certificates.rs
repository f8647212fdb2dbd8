use actix_web::web;

use crate::handlers::certificates;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/certificates")
            .service(
                web::resource("")
                    .route(web::get().to(certificates::list_certificates))
                    .route(web::post().to(certificates::create_certificate))
            )
            .service(
                web::resource("/{certificate_id}")
                    .route(web::put().to(certificates::update_certificate))
                    .route(web::delete().to(certificates::delete_certificate))
            )
    );
}
