use crate::models::*;
use crate::schema::artists;
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use crate::validators;
use chrono::NaiveDateTime;
use diesel::expression::dsl;
use diesel::prelude::*;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[table_name = "artists"]
pub struct Artist {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_url: Option<String>,
    pub facebook_url: Option<String>,
    pub website_url: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Default, Insertable, Serialize, Deserialize, PartialEq, Debug, Clone, Validate)]
#[table_name = "artists"]
pub struct NewArtist {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(custom = "validators::validate_state_code")]
    pub state: String,
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
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl NewArtist {
    pub fn commit(&self, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        self.validate_record()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new artist",
            diesel::insert_into(artists::table)
                .values(self)
                .get_result(conn),
        )
    }

    // seeking_description must not be null even when seeking_venue is false
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
#[table_name = "artists"]
pub struct ArtistEditableAttributes {
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub city: Option<String>,
    #[validate(custom = "validators::validate_state_code")]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub state: Option<String>,
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
    pub seeking_venue: Option<bool>,
    #[validate(length(min = 1, message = "Seeking description is required"))]
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

impl Artist {
    pub fn find(id: Uuid, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading artist",
            artists::table.find(id).first::<Artist>(conn),
        )
    }

    pub fn all(conn: &PgConnection) -> Result<Vec<Artist>, DatabaseError> {
        artists::table
            .order_by(artists::name)
            .select(artists::all_columns)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all artists")
    }

    pub fn search(
        query_filter: Option<String>,
        conn: &PgConnection,
    ) -> Result<Vec<Artist>, DatabaseError> {
        let query_like = match query_filter {
            Some(n) => format!("%{}%", n),
            None => "%".to_string(),
        };
        artists::table
            .filter(artists::name.ilike(query_like))
            .order_by(artists::name)
            .select(artists::all_columns)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search artists")
    }

    pub fn update(
        &self,
        attributes: ArtistEditableAttributes,
        conn: &PgConnection,
    ) -> Result<Artist, DatabaseError> {
        attributes.validate()?;
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Error updating artist",
            diesel::update(self)
                .set((attributes, artists::updated_at.eq(dsl::now)))
                .get_result(conn),
        )
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArtistSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<Artist> for ArtistSummary {
    fn from(artist: Artist) -> Self {
        ArtistSummary {
            id: artist.id,
            name: artist.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_artist() -> NewArtist {
        NewArtist {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            genres: vec!["Rock n Roll".to_string()],
            image_url: None,
            facebook_url: Some("https://www.facebook.com/GunsNPetals".to_string()),
            website_url: Some("https://www.gunsnpetalsband.com".to_string()),
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
            ),
        }
    }

    #[test]
    fn new_artist_validates() {
        assert!(new_artist().validate().is_ok());
    }

    #[test]
    fn new_artist_requires_seeking_description() {
        let mut artist = new_artist();
        artist.seeking_description = None;
        let error = artist.validate_record().unwrap_err();
        match error.error_code {
            ErrorCode::ValidationError { errors } => {
                assert!(errors.contains_key("seeking_description"))
            }
            _ => panic!("Expected validation error"),
        }
    }

    #[test]
    fn new_artist_rejects_invalid_phone() {
        let mut artist = new_artist();
        artist.phone = Some("call me".to_string());
        let errors = artist.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn summary_keeps_identity_and_name() {
        let artist = Artist {
            id: Uuid::new_v4(),
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: vec!["Jazz".to_string()],
            image_url: None,
            facebook_url: None,
            website_url: None,
            seeking_venue: false,
            seeking_description: "".to_string(),
            created_at: NaiveDate::from_ymd(2019, 6, 1).and_hms(12, 0, 0),
            updated_at: NaiveDate::from_ymd(2019, 6, 1).and_hms(12, 0, 0),
        };
        let id = artist.id;

        let summary = ArtistSummary::from(artist);
        assert_eq!(summary.id, id);
        assert_eq!(summary.name, "The Wild Sax Band");
    }
}
