pub use self::artists::*;
pub use self::enums::*;
pub use self::shows::*;
pub use self::venues::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

mod artists;
pub mod enums;
mod shows;
mod venues;

pub fn deserialize_unless_blank<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;

    if value.is_null() {
        Ok(None)
    } else if value.as_str().map_or(false, |v| v.is_empty()) {
        Ok(None)
    } else {
        Ok(T::deserialize(value).ok())
    }
}

pub fn double_option_deserialize_unless_blank<'de, T, D>(
    deserializer: D,
) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;

    if value.is_null() {
        Ok(T::deserialize(Value::Null).ok())
    } else if value.as_str().map_or(false, |v| !v.is_empty()) {
        Ok(T::deserialize(value).ok())
    } else {
        Ok(T::deserialize(Value::Null).ok())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::*;

    #[test]
    fn deserialize_unless_blank_treats_blank_as_absent() {
        let venue_data = r#"{"city": ""}"#;
        let attributes: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
        assert_eq!(attributes.city, None);

        let venue_data = r#"{"city": "San Francisco"}"#;
        let attributes: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
        assert_eq!(attributes.city, Some("San Francisco".to_string()));

        let venue_data = r#"{}"#;
        let attributes: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
        assert_eq!(attributes.city, None);
    }

    #[test]
    fn double_option_deserialize_unless_blank_distinguishes_clearing() {
        let venue_data = r#"{"name": "The Musical Hop"}"#;
        let attributes: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
        assert_eq!(attributes.name, Some("The Musical Hop".to_string()));
        assert_eq!(attributes.phone, None);

        let venue_data = r#"{"phone": null}"#;
        let attributes: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
        assert_eq!(attributes.phone, Some(None));

        let venue_data = r#"{"phone": ""}"#;
        let attributes: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
        assert_eq!(attributes.phone, Some(None));

        let venue_data = r#"{"phone": "123-123-1234"}"#;
        let attributes: VenueEditableAttributes = serde_json::from_str(&venue_data).unwrap();
        assert_eq!(attributes.phone, Some(Some("123-123-1234".to_string())));
    }
}
