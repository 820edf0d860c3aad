use crate::models::*;
use crate::schema::{artists, shows, venues};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Associations, Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(Venue)]
#[belongs_to(Artist)]
#[table_name = "shows"]
pub struct Show {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub artist_id: Uuid,
    pub start_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, PartialEq, Debug, Clone)]
#[table_name = "shows"]
pub struct NewShow {
    pub venue_id: Uuid,
    pub artist_id: Uuid,
    pub start_time: NaiveDateTime,
}

impl NewShow {
    pub fn commit(&self, conn: &PgConnection) -> Result<Show, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new show",
            diesel::insert_into(shows::table)
                .values(self)
                .get_result(conn),
        )
    }
}

impl Show {
    /// Loads a venue's shows with the performing artist resolved in one query
    pub fn find_for_venue(
        venue_id: Uuid,
        conn: &PgConnection,
    ) -> Result<Vec<VenueShow>, DatabaseError> {
        let results: Vec<(Show, Artist)> = shows::table
            .inner_join(artists::table)
            .filter(shows::venue_id.eq(venue_id))
            .order_by(shows::start_time.asc())
            .select((shows::all_columns, artists::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows for venue")?;

        Ok(results
            .into_iter()
            .map(|(show, artist)| VenueShow {
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_url: artist.image_url,
                start_time: show.start_time,
            })
            .collect())
    }

    /// Loads an artist's shows with the hosting venue resolved in one query
    pub fn find_for_artist(
        artist_id: Uuid,
        conn: &PgConnection,
    ) -> Result<Vec<ArtistShow>, DatabaseError> {
        let results: Vec<(Show, Venue)> = shows::table
            .inner_join(venues::table)
            .filter(shows::artist_id.eq(artist_id))
            .order_by(shows::start_time.asc())
            .select((shows::all_columns, venues::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows for artist")?;

        Ok(results
            .into_iter()
            .map(|(show, venue)| ArtistShow {
                venue_id: venue.id,
                venue_name: venue.name,
                venue_image_url: venue.image_url,
                start_time: show.start_time,
            })
            .collect())
    }

    pub fn find_for_venues(
        venue_ids: Vec<Uuid>,
        conn: &PgConnection,
    ) -> Result<Vec<Show>, DatabaseError> {
        shows::table
            .filter(shows::venue_id.eq_any(venue_ids))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load shows by venue ids")
    }

    pub fn find_for_artists(
        artist_ids: Vec<Uuid>,
        conn: &PgConnection,
    ) -> Result<Vec<Show>, DatabaseError> {
        shows::table
            .filter(shows::artist_id.eq_any(artist_ids))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load shows by artist ids")
    }

    /// Every show with its venue and artist names resolved by a single join
    pub fn all_with_details(conn: &PgConnection) -> Result<Vec<ShowListing>, DatabaseError> {
        let results: Vec<(Show, Venue, Artist)> = shows::table
            .inner_join(venues::table)
            .inner_join(artists::table)
            .order_by(shows::start_time.asc())
            .select((
                shows::all_columns,
                venues::all_columns,
                artists::all_columns,
            ))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all shows")?;

        Ok(results
            .into_iter()
            .map(|(show, venue, artist)| ShowListing {
                venue_id: venue.id,
                venue_name: venue.name,
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_url: artist.image_url,
                start_time: show.start_time,
            })
            .collect())
    }

    pub fn upcoming_totals_by_venue(shows: &[Show], now: NaiveDateTime) -> HashMap<Uuid, u32> {
        let mut totals = HashMap::new();
        for show in shows {
            if show.start_time > now {
                *totals.entry(show.venue_id).or_insert(0) += 1;
            }
        }
        totals
    }

    pub fn upcoming_totals_by_artist(shows: &[Show], now: NaiveDateTime) -> HashMap<Uuid, u32> {
        let mut totals = HashMap::new();
        for show in shows {
            if show.start_time > now {
                *totals.entry(show.artist_id).or_insert(0) += 1;
            }
        }
        totals
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueShow {
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_url: Option<String>,
    pub start_time: NaiveDateTime,
}

impl VenueShow {
    /// Splits shows into (past, upcoming) around `now`; both comparisons are
    /// strict, so a show starting exactly at `now` lands in neither bucket
    pub fn partition_past_upcoming(
        shows: Vec<VenueShow>,
        now: NaiveDateTime,
    ) -> (Vec<VenueShow>, Vec<VenueShow>) {
        let mut past = Vec::new();
        let mut upcoming = Vec::new();
        for show in shows {
            if show.start_time < now {
                past.push(show);
            } else if show.start_time > now {
                upcoming.push(show);
            }
        }
        (past, upcoming)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArtistShow {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub venue_image_url: Option<String>,
    pub start_time: NaiveDateTime,
}

impl ArtistShow {
    pub fn partition_past_upcoming(
        shows: Vec<ArtistShow>,
        now: NaiveDateTime,
    ) -> (Vec<ArtistShow>, Vec<ArtistShow>) {
        let mut past = Vec::new();
        let mut upcoming = Vec::new();
        for show in shows {
            if show.start_time < now {
                past.push(show);
            } else if show.start_time > now {
                upcoming.push(show);
            }
        }
        (past, upcoming)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ShowListing {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_url: Option<String>,
    pub start_time: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd(2019, 6, 15).and_hms(20, 0, 0)
    }

    fn venue_show(start_time: NaiveDateTime) -> VenueShow {
        VenueShow {
            artist_id: Uuid::new_v4(),
            artist_name: "Guns N Petals".to_string(),
            artist_image_url: None,
            start_time,
        }
    }

    fn show(venue_id: Uuid, artist_id: Uuid, start_time: NaiveDateTime) -> Show {
        Show {
            id: Uuid::new_v4(),
            venue_id,
            artist_id,
            start_time,
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn partition_splits_on_strict_inequalities() {
        let shows = vec![
            venue_show(now() - Duration::seconds(1)),
            venue_show(now() + Duration::seconds(1)),
        ];

        let (past, upcoming) = VenueShow::partition_past_upcoming(shows, now());

        assert_eq!(past.len(), 1);
        assert_eq!(upcoming.len(), 1);
        assert!(past[0].start_time < now());
        assert!(upcoming[0].start_time > now());
    }

    #[test]
    fn partition_drops_shows_starting_exactly_now() {
        let shows = vec![venue_show(now())];

        let (past, upcoming) = VenueShow::partition_past_upcoming(shows, now());

        assert!(past.is_empty());
        assert!(upcoming.is_empty());
    }

    #[test]
    fn artist_partition_matches_venue_partition_rules() {
        let shows = vec![
            ArtistShow {
                venue_id: Uuid::new_v4(),
                venue_name: "The Musical Hop".to_string(),
                venue_image_url: None,
                start_time: now() - Duration::seconds(1),
            },
            ArtistShow {
                venue_id: Uuid::new_v4(),
                venue_name: "Park Square Live Music & Coffee".to_string(),
                venue_image_url: None,
                start_time: now() + Duration::seconds(1),
            },
        ];

        let (past, upcoming) = ArtistShow::partition_past_upcoming(shows, now());
        assert_eq!(past.len(), 1);
        assert_eq!(upcoming.len(), 1);
    }

    #[test]
    fn upcoming_totals_count_only_strictly_future_shows() {
        let venue_one = Uuid::new_v4();
        let venue_two = Uuid::new_v4();
        let artist = Uuid::new_v4();
        let shows = vec![
            show(venue_one, artist, now() + Duration::seconds(1)),
            show(venue_one, artist, now() + Duration::days(7)),
            show(venue_one, artist, now() - Duration::seconds(1)),
            show(venue_one, artist, now()),
            show(venue_two, artist, now() - Duration::days(7)),
        ];

        let totals = Show::upcoming_totals_by_venue(&shows, now());

        assert_eq!(totals.get(&venue_one), Some(&2));
        assert_eq!(totals.get(&venue_two), None);
    }

    #[test]
    fn upcoming_totals_by_artist_keys_on_artist() {
        let venue = Uuid::new_v4();
        let artist_one = Uuid::new_v4();
        let artist_two = Uuid::new_v4();
        let shows = vec![
            show(venue, artist_one, now() + Duration::days(1)),
            show(venue, artist_two, now() - Duration::days(1)),
        ];

        let totals = Show::upcoming_totals_by_artist(&shows, now());

        assert_eq!(totals.get(&artist_one), Some(&1));
        assert_eq!(totals.get(&artist_two), None);
    }
}
