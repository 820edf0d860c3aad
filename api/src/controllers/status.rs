use crate::server::AppState;
use actix_web::{web::Data, HttpResponse};

pub async fn home(state: Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "app": state.config.app_name,
        "message": "Browse venues and artists, or list a new show",
    }))
}

pub async fn check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
