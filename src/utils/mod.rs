pub mod parameter_error_handler;
pub mod time;
pub mod validate;

pub use parameter_error_handler::{json_error_handler, path_error_handler, query_error_handler};
pub use time::parse_clock_time;
pub use validate::{validate_name, validate_room};
