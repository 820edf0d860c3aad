pub use self::json::*;

mod json;
