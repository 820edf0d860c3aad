use gigboard_db::models::{Artist, Venue};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, PartialEq, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VenueSearchResult {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: u32,
}

impl VenueSearchResult {
    pub fn collect(
        venues: Vec<Venue>,
        upcoming_totals: &HashMap<Uuid, u32>,
    ) -> SearchResults<VenueSearchResult> {
        let data: Vec<VenueSearchResult> = venues
            .into_iter()
            .map(|venue| VenueSearchResult {
                num_upcoming_shows: upcoming_totals.get(&venue.id).cloned().unwrap_or(0),
                id: venue.id,
                name: venue.name,
            })
            .collect();

        SearchResults {
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ArtistSearchResult {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: u32,
}

impl ArtistSearchResult {
    pub fn collect(
        artists: Vec<Artist>,
        upcoming_totals: &HashMap<Uuid, u32>,
    ) -> SearchResults<ArtistSearchResult> {
        let data: Vec<ArtistSearchResult> = artists
            .into_iter()
            .map(|artist| ArtistSearchResult {
                num_upcoming_shows: upcoming_totals.get(&artist.id).cloned().unwrap_or(0),
                id: artist.id,
                name: artist.name,
            })
            .collect();

        SearchResults {
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn venue(name: &str) -> Venue {
        Venue {
            id: Uuid::new_v4(),
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: None,
            genres: vec!["Jazz".to_string()],
            image_url: None,
            facebook_url: None,
            website_url: None,
            seeking_talent: false,
            seeking_description: "".to_string(),
            created_at: NaiveDate::from_ymd(2019, 6, 1).and_hms(12, 0, 0),
            updated_at: NaiveDate::from_ymd(2019, 6, 1).and_hms(12, 0, 0),
        }
    }

    #[test]
    fn collect_annotates_upcoming_show_totals() {
        let musical_hop = venue("The Musical Hop");
        let park_square = venue("Park Square Live Music & Coffee");
        let mut totals = HashMap::new();
        totals.insert(musical_hop.id, 2);

        let results =
            VenueSearchResult::collect(vec![musical_hop.clone(), park_square.clone()], &totals);

        assert_eq!(results.count, 2);
        assert_eq!(results.data[0].id, musical_hop.id);
        assert_eq!(results.data[0].num_upcoming_shows, 2);
        assert_eq!(results.data[1].id, park_square.id);
        assert_eq!(results.data[1].num_upcoming_shows, 0);
    }
}
