use crate::models::enums::MUSIC_GENRES;
use crate::validators::create_validation_error;
use validator::ValidationError;

pub fn validate_genres(genres: &Vec<String>) -> Result<(), ValidationError> {
    if genres.is_empty() {
        return Err(create_validation_error(
            "genres",
            "At least one genre is required",
        ));
    }

    for genre in genres {
        if !MUSIC_GENRES.contains(&genre.as_str()) {
            return Err(create_validation_error(
                "genres",
                "Genre is not in the genre catalog",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_catalog_genres() {
        let genres = vec!["Jazz".to_string(), "Reggae".to_string(), "Swing".to_string()];
        assert!(validate_genres(&genres).is_ok());
    }

    #[test]
    fn rejects_empty_list() {
        assert!(validate_genres(&Vec::new()).is_err());
    }

    #[test]
    fn rejects_unknown_genres() {
        let genres = vec!["Jazz".to_string(), "Elevator".to_string()];
        assert!(validate_genres(&genres).is_err());
    }
}
