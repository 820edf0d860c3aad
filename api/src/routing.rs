use crate::controllers::*;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    // Fixed paths are registered ahead of the `{id}` resources so that
    // "search" and "create" are never captured as ids
    cfg.service(web::resource("/").route(web::get().to(status::home)))
        .service(web::resource("/status").route(web::get().to(status::check)))
        .service(web::resource("/venues/search").route(web::post().to(venues::search)))
        .service(
            web::resource("/venues/create")
                .route(web::get().to(venues::new_form))
                .route(web::post().to(venues::create)),
        )
        .service(
            web::resource("/venues/{id}/edit")
                .route(web::get().to(venues::edit_form))
                .route(web::post().to(venues::update)),
        )
        .service(web::resource("/venues/{id}").route(web::get().to(venues::show)))
        .service(web::resource("/venues").route(web::get().to(venues::index)))
        .service(web::resource("/artists/search").route(web::post().to(artists::search)))
        .service(
            web::resource("/artists/create")
                .route(web::get().to(artists::new_form))
                .route(web::post().to(artists::create)),
        )
        .service(
            web::resource("/artists/{id}/edit")
                .route(web::get().to(artists::edit_form))
                .route(web::post().to(artists::update)),
        )
        .service(web::resource("/artists/{id}").route(web::get().to(artists::show)))
        .service(web::resource("/artists").route(web::get().to(artists::index)))
        .service(
            web::resource("/shows/create")
                .route(web::get().to(shows::new_form))
                .route(web::post().to(shows::create)),
        )
        .service(web::resource("/shows").route(web::get().to(shows::index)));
}
