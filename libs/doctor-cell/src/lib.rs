pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{Doctor, DoctorError, Speciality};
pub use services::directory::DoctorDirectory;
