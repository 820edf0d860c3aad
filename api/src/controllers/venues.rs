use crate::db::Connection;
use crate::errors::ApiError;
use crate::extractors::*;
use crate::models::{PathParameters, SearchParameters, VenueDetail, VenueSearchResult};
use actix_web::{web::Path, HttpResponse};
use chrono::Utc;
use gigboard_db::models::*;
use uuid::Uuid;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let venues = Venue::all(connection)?;

    Ok(HttpResponse::Ok().json(&VenueArea::group(venues)))
}

pub async fn search(
    (connection, parameters): (Connection, Json<SearchParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let now = Utc::now().naive_utc();

    let venues = Venue::search(parameters.into_inner().search_term, connection)?;
    let venue_ids: Vec<Uuid> = venues.iter().map(|venue| venue.id).collect();
    let shows = Show::find_for_venues(venue_ids, connection)?;
    let upcoming_totals = Show::upcoming_totals_by_venue(&shows, now);

    Ok(HttpResponse::Ok().json(&VenueSearchResult::collect(venues, &upcoming_totals)))
}

pub async fn show(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let venue = Venue::find(parameters.id, connection)?;

    let now = Utc::now().naive_utc();
    let shows = Show::find_for_venue(venue.id, connection)?;
    let (past_shows, upcoming_shows) = VenueShow::partition_past_upcoming(shows, now);

    Ok(HttpResponse::Ok().json(&VenueDetail::new(venue, past_shows, upcoming_shows)))
}

pub async fn new_form() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(json!({
        "form": NewVenue::default(),
        "states": UsState::values(),
        "genres": MUSIC_GENRES,
    })))
}

pub async fn create(
    (connection, new_venue): (Connection, Json<NewVenue>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let venue = new_venue.into_inner().commit(connection)?;
    info!("Venue {} listed", venue.name);

    Ok(HttpResponse::Created().json(&venue))
}

pub async fn edit_form(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let venue = Venue::find(parameters.id, connection)?;

    Ok(HttpResponse::Ok().json(json!({
        "form": venue,
        "states": UsState::values(),
        "genres": MUSIC_GENRES,
    })))
}

pub async fn update(
    (connection, parameters, venue_parameters): (
        Connection,
        Path<PathParameters>,
        Json<VenueEditableAttributes>,
    ),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let venue = Venue::find(parameters.id, connection)?;
    let updated_venue = venue.update(venue_parameters.into_inner(), connection)?;

    Ok(HttpResponse::Ok().json(&updated_venue))
}
