use crate::db::Connection;
use crate::errors::ApiError;
use crate::extractors::*;
use actix_web::HttpResponse;
use gigboard_db::models::*;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let shows = Show::all_with_details(connection)?;

    Ok(HttpResponse::Ok().json(&shows))
}

pub async fn new_form() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(json!({
        "form": {
            "venue_id": null,
            "artist_id": null,
            "start_time": null,
        },
    })))
}

pub async fn create(
    (connection, new_show): (Connection, Json<NewShow>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let show = new_show.into_inner().commit(connection)?;
    info!("Show listed at venue {}", show.venue_id);

    Ok(HttpResponse::Created().json(&show))
}
