use crate::db::Connection;
use crate::errors::ApiError;
use crate::extractors::*;
use crate::models::{ArtistDetail, ArtistSearchResult, PathParameters, SearchParameters};
use actix_web::{web::Path, HttpResponse};
use chrono::Utc;
use gigboard_db::models::*;
use uuid::Uuid;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let artists = Artist::all(connection)?;
    let summaries: Vec<ArtistSummary> = artists.into_iter().map(ArtistSummary::from).collect();

    Ok(HttpResponse::Ok().json(&summaries))
}

pub async fn search(
    (connection, parameters): (Connection, Json<SearchParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let now = Utc::now().naive_utc();

    let artists = Artist::search(parameters.into_inner().search_term, connection)?;
    let artist_ids: Vec<Uuid> = artists.iter().map(|artist| artist.id).collect();
    let shows = Show::find_for_artists(artist_ids, connection)?;
    let upcoming_totals = Show::upcoming_totals_by_artist(&shows, now);

    Ok(HttpResponse::Ok().json(&ArtistSearchResult::collect(artists, &upcoming_totals)))
}

pub async fn show(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let artist = Artist::find(parameters.id, connection)?;

    let now = Utc::now().naive_utc();
    let shows = Show::find_for_artist(artist.id, connection)?;
    let (past_shows, upcoming_shows) = ArtistShow::partition_past_upcoming(shows, now);

    Ok(HttpResponse::Ok().json(&ArtistDetail::new(artist, past_shows, upcoming_shows)))
}

pub async fn new_form() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(json!({
        "form": NewArtist::default(),
        "states": UsState::values(),
        "genres": MUSIC_GENRES,
    })))
}

pub async fn create(
    (connection, new_artist): (Connection, Json<NewArtist>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let artist = new_artist.into_inner().commit(connection)?;
    info!("Artist {} listed", artist.name);

    Ok(HttpResponse::Created().json(&artist))
}

pub async fn edit_form(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let artist = Artist::find(parameters.id, connection)?;

    Ok(HttpResponse::Ok().json(json!({
        "form": artist,
        "states": UsState::values(),
        "genres": MUSIC_GENRES,
    })))
}

pub async fn update(
    (connection, parameters, artist_parameters): (
        Connection,
        Path<PathParameters>,
        Json<ArtistEditableAttributes>,
    ),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let artist = Artist::find(parameters.id, connection)?;
    let updated_artist = artist.update(artist_parameters.into_inner(), connection)?;

    Ok(HttpResponse::Ok().json(&updated_artist))
}
