pub mod gradebook;

pub mod offerings;

pub mod students;

pub use gradebook::configure_gradebook_routes;
pub use offerings::configure_offering_routes;
pub use students::configure_student_routes;
