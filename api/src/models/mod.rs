pub use self::artist_detail::*;
pub use self::path_parameters::*;
pub use self::search_parameters::*;
pub use self::search_results::*;
pub use self::venue_detail::*;

mod artist_detail;
mod path_parameters;
mod search_parameters;
mod search_results;
mod venue_detail;
