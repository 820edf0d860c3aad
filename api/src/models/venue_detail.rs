use gigboard_db::models::{Venue, VenueShow};
use uuid::Uuid;

#[derive(Debug, PartialEq, Serialize)]
pub struct VenueDetail {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_url: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(
        venue: Venue,
        past_shows: Vec<VenueShow>,
        upcoming_shows: Vec<VenueShow>,
    ) -> VenueDetail {
        VenueDetail {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website_url: venue.website_url,
            facebook_url: venue.facebook_url,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_url: venue.image_url,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
