use crate::models::enums::UsState;
use crate::validators::create_validation_error;
use validator::ValidationError;

pub fn validate_state_code(state: &str) -> Result<(), ValidationError> {
    match UsState::parse(state) {
        Ok(_) => Ok(()),
        Err(_) => Err(create_validation_error(
            "state_code",
            "State must be a US state code",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_state_codes() {
        assert!(validate_state_code("CA").is_ok());
        assert!(validate_state_code("NY").is_ok());
        assert!(validate_state_code("DC").is_ok());
    }

    #[test]
    fn rejects_unknown_state_codes() {
        assert!(validate_state_code("ZZ").is_err());
        assert!(validate_state_code("ca").is_err());
        assert!(validate_state_code("").is_err());
    }
}
