use crate::validators::create_validation_error;
use regex::Regex;
use validator::ValidationError;

fn phone_number() -> Regex {
    Regex::new(r#"^\+?[0-9\-\.\s\(\)]{7,20}$"#).unwrap()
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone_number().is_match(phone) {
        Ok(())
    } else {
        Err(create_validation_error(
            "phone",
            "Phone number is invalid",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_formats() {
        assert!(validate_phone("123-123-1234").is_ok());
        assert!(validate_phone("(415) 386-1234").is_ok());
        assert!(validate_phone("+1 326 123 5000").is_ok());
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("").is_err());
    }
}
