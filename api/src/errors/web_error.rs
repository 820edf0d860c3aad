use crate::errors::*;
use actix_web::{http::StatusCode, HttpResponse};
use diesel::result::Error as DieselError;
use gigboard_db::utils::errors::ErrorCode::ValidationError;
use gigboard_db::utils::errors::*;
use std::error::Error;
use std::fmt::Debug;
use std::string::ToString;

pub trait ConvertToWebError: Debug + Error + ToString {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn to_response(&self) -> HttpResponse;
}

fn internal_error(message: &str) -> HttpResponse {
    status_code_and_message(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn status_code_and_message(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(json!({"error": message.to_string()}))
}

impl ConvertToWebError for DieselError {
    fn to_response(&self) -> HttpResponse {
        error!("Diesel error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for r2d2::Error {
    fn to_response(&self) -> HttpResponse {
        error!("R2D2 error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for EnumParseError {
    fn to_response(&self) -> HttpResponse {
        error!("Enum parse error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for chrono::ParseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
    fn to_response(&self) -> HttpResponse {
        status_code_and_message(StatusCode::BAD_REQUEST, "Invalid input")
    }
}

impl ConvertToWebError for ApplicationError {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            ApplicationErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationErrorType::BadRequest => StatusCode::BAD_REQUEST,
            ApplicationErrorType::ServerConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn to_response(&self) -> HttpResponse {
        warn!("Application error: {}", self);

        let message = match self.error_type {
            ApplicationErrorType::BadRequest => &self.reason,
            _ => "Internal error",
        };
        status_code_and_message(self.status_code(), message)
    }
}

impl ConvertToWebError for DatabaseError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            1000 => StatusCode::BAD_REQUEST,
            2000 => StatusCode::NOT_FOUND,
            3400 => StatusCode::CONFLICT,
            7200 | 7300 => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn to_response(&self) -> HttpResponse {
        let message = match self.code {
            1000 => "Invalid input",
            2000 => "No results",
            3000 => "Query error",
            3100 => "Could not insert record",
            3200 => "Could not update record",
            3400 => self
                .cause
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or("Duplicate record exists"),
            4000 => "Connection error",
            7200 => match &self.error_code {
                ValidationError { errors } => {
                    return HttpResponse::UnprocessableEntity()
                        .json(json!({"error": "Validation error".to_string(), "fields": errors}))
                }
                _ => "Validation error",
            },
            7300 => "Referenced record does not exist",
            5000 => "Internal error",
            _ => "Unknown error",
        };
        status_code_and_message(self.status_code(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigboard_db::utils::errors::{DatabaseError, ErrorCode};

    #[test]
    fn no_results_maps_to_not_found() {
        let error = DatabaseError::new(ErrorCode::NoResults, None);
        assert_eq!(
            ConvertToWebError::status_code(&error),
            StatusCode::NOT_FOUND
        );
        assert_eq!(error.to_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_key_maps_to_conflict() {
        let error = DatabaseError::new(ErrorCode::DuplicateKeyError, None);
        assert_eq!(error.to_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn foreign_key_maps_to_unprocessable_entity() {
        let error = DatabaseError::new(ErrorCode::ForeignKeyError, None);
        assert_eq!(
            error.to_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn validation_failure_maps_to_unprocessable_entity() {
        let error =
            DatabaseError::validation_error::<()>("seeking_description", "required").unwrap_err();
        assert_eq!(
            error.to_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn query_failures_map_to_internal_error() {
        let error = DatabaseError::new(ErrorCode::QueryError, None);
        assert_eq!(
            error.to_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
