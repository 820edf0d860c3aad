use crate::models::*;
use crate::schema::venues;
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use crate::validators;
use chrono::NaiveDateTime;
use diesel::expression::dsl;
use diesel::prelude::*;
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[table_name = "venues"]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_url: Option<String>,
    pub facebook_url: Option<String>,
    pub website_url: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Default, Insertable, Serialize, Deserialize, PartialEq, Debug, Clone, Validate)]
#[table_name = "venues"]
pub struct NewVenue {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(custom = "validators::validate_state_code")]
    pub state: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(custom = "validators::validate_phone")]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub phone: Option<String>,
    #[validate(custom = "validators::validate_genres")]
    #[serde(default)]
    pub genres: Vec<String>,
    #[validate(url(message = "Image URL is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub image_url: Option<String>,
    #[validate(url(message = "Facebook URL is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub facebook_url: Option<String>,
    #[validate(url(message = "Website URL is invalid"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub website_url: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl NewVenue {
    pub fn commit(&self, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        self.validate_record()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new venue",
            diesel::insert_into(venues::table)
                .values(self)
                .get_result(conn),
        )
    }

    // seeking_description must not be null even when seeking_talent is false
    fn validate_record(&self) -> Result<(), DatabaseError> {
        let validation_errors = validators::append_validation_error(
            self.validate(),
            "seeking_description",
            if self.seeking_description.is_none() {
                Err(validators::create_validation_error(
                    "required",
                    "Seeking description is required",
                ))
            } else {
                Ok(())
            },
        );

        Ok(validation_errors?)
    }
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[table_name = "venues"]
pub struct VenueEditableAttributes {
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub city: Option<String>,
    #[validate(custom = "validators::validate_state_code")]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub phone: Option<Option<String>>,
    #[validate(custom = "validators::validate_genres")]
    pub genres: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub facebook_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub website_url: Option<Option<String>>,
    pub seeking_talent: Option<bool>,
    #[validate(length(min = 1, message = "Seeking description is required"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

impl Venue {
    pub fn find(id: Uuid, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading venue",
            venues::table.find(id).first::<Venue>(conn),
        )
    }

    pub fn all(conn: &PgConnection) -> Result<Vec<Venue>, DatabaseError> {
        venues::table
            .order_by(venues::name)
            .select(venues::all_columns)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all venues")
    }

    pub fn search(
        query_filter: Option<String>,
        conn: &PgConnection,
    ) -> Result<Vec<Venue>, DatabaseError> {
        let query_like = match query_filter {
            Some(n) => format!("%{}%", n),
            None => "%".to_string(),
        };
        venues::table
            .filter(venues::name.ilike(query_like))
            .order_by(venues::name)
            .select(venues::all_columns)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search venues")
    }

    pub fn update(
        &self,
        attributes: VenueEditableAttributes,
        conn: &PgConnection,
    ) -> Result<Venue, DatabaseError> {
        attributes.validate()?;
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Could not update venue",
            diesel::update(self)
                .set((attributes, venues::updated_at.eq(dsl::now)))
                .get_result(conn),
        )
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

impl VenueArea {
    /// Groups venues by their (city, state) pair with an explicit keyed
    /// mapping; the result does not depend on the order rows were loaded in
    pub fn group(venues: Vec<Venue>) -> Vec<VenueArea> {
        let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
        for venue in venues {
            areas
                .entry((venue.city.clone(), venue.state.clone()))
                .or_insert_with(Vec::new)
                .push(VenueSummary {
                    id: venue.id,
                    name: venue.name,
                });
        }

        areas
            .into_iter()
            .map(|((city, state), venues)| VenueArea {
                city,
                state,
                venues,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn venue(name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id: Uuid::new_v4(),
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
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

    fn new_venue() -> NewVenue {
        NewVenue {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            genres: vec!["Jazz".to_string(), "Reggae".to_string()],
            image_url: None,
            facebook_url: Some("https://www.facebook.com/TheMusicalHop".to_string()),
            website_url: Some("https://www.themusicalhop.com".to_string()),
            seeking_talent: true,
            seeking_description: Some(
                "We are on the lookout for a local artist to play every two weeks.".to_string(),
            ),
        }
    }

    #[test]
    fn group_collects_same_city_and_state_regardless_of_order() {
        let venues = vec![
            venue("The Musical Hop", "San Francisco", "CA"),
            venue("The Dueling Pianos Bar", "New York", "NY"),
            venue("Park Square Live Music & Coffee", "San Francisco", "CA"),
        ];

        let areas = VenueArea::group(venues);

        assert_eq!(areas.len(), 2);
        let san_francisco = areas
            .iter()
            .find(|a| a.city == "San Francisco" && a.state == "CA")
            .unwrap();
        assert_eq!(san_francisco.venues.len(), 2);
        let new_york = areas
            .iter()
            .find(|a| a.city == "New York" && a.state == "NY")
            .unwrap();
        assert_eq!(new_york.venues.len(), 1);
    }

    #[test]
    fn group_separates_same_city_in_different_states() {
        let venues = vec![
            venue("Harbor Lights", "Portland", "OR"),
            venue("The Old Port", "Portland", "ME"),
        ];

        let areas = VenueArea::group(venues);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn group_order_is_deterministic() {
        let first = VenueArea::group(vec![
            venue("A", "New York", "NY"),
            venue("B", "San Francisco", "CA"),
        ]);
        let second = VenueArea::group(vec![
            venue("B", "San Francisco", "CA"),
            venue("A", "New York", "NY"),
        ]);

        let first_keys: Vec<(&str, &str)> = first
            .iter()
            .map(|a| (a.city.as_str(), a.state.as_str()))
            .collect();
        let second_keys: Vec<(&str, &str)> = second
            .iter()
            .map(|a| (a.city.as_str(), a.state.as_str()))
            .collect();
        assert_eq!(first_keys, second_keys);
    }

    #[test]
    fn new_venue_validates() {
        assert!(new_venue().validate().is_ok());
    }

    #[test]
    fn new_venue_requires_seeking_description() {
        let mut venue = new_venue();
        venue.seeking_description = None;
        let error = venue.validate_record().unwrap_err();
        match error.error_code {
            ErrorCode::ValidationError { errors } => {
                assert!(errors.contains_key("seeking_description"))
            }
            _ => panic!("Expected validation error"),
        }
    }

    #[test]
    fn validation_failures_are_aggregated_per_field() {
        let mut venue = new_venue();
        venue.state = "Narnia".to_string();
        venue.seeking_description = None;
        let error = venue.validate_record().unwrap_err();
        match error.error_code {
            ErrorCode::ValidationError { errors } => {
                assert!(errors.contains_key("state"));
                assert!(errors.contains_key("seeking_description"));
            }
            _ => panic!("Expected validation error"),
        }
    }

    #[test]
    fn new_venue_rejects_unknown_state() {
        let mut venue = new_venue();
        venue.state = "Narnia".to_string();
        let errors = venue.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("state"));
    }

    #[test]
    fn new_venue_rejects_unknown_genre() {
        let mut venue = new_venue();
        venue.genres = vec!["Elevator".to_string()];
        let errors = venue.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("genres"));
    }

    #[test]
    fn new_venue_rejects_invalid_website() {
        let mut venue = new_venue();
        venue.website_url = Some("not a url".to_string());
        let errors = venue.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("website_url"));
    }

    #[test]
    fn submitted_null_seeking_description_is_a_validation_failure() {
        let venue_data = r#"{
            "name": "The Musical Hop",
            "city": "San Francisco",
            "state": "CA",
            "address": "1015 Folsom Street",
            "genres": ["Jazz"],
            "seeking_talent": false,
            "seeking_description": null
        }"#;
        let venue: NewVenue = serde_json::from_str(venue_data).unwrap();
        let error = venue.validate_record().unwrap_err();
        match error.error_code {
            ErrorCode::ValidationError { errors } => {
                assert!(errors.contains_key("seeking_description"))
            }
            _ => panic!("Expected validation error"),
        }
    }
}
