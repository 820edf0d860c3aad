use gigboard_db::models::{Artist, ArtistShow};
use uuid::Uuid;

#[derive(Debug, PartialEq, Serialize)]
pub struct ArtistDetail {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub image_url: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(
        artist: Artist,
        past_shows: Vec<ArtistShow>,
        upcoming_shows: Vec<ArtistShow>,
    ) -> ArtistDetail {
        ArtistDetail {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website_url: artist.website_url,
            facebook_url: artist.facebook_url,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_url: artist.image_url,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
