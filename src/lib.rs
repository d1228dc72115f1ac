//! Request/response schemas for the department and lecture resources of
//! the course-management API. Validation and JSON shapes only; routing
//! and persistence live elsewhere.

pub mod errors;
pub mod models;
pub mod utils;

pub use errors::SchemaError;
pub use models::department::{Department, DepartmentCreate, DepartmentUpdate};
pub use models::lecture::{Lecture, LectureCreate, LectureUpdate};
pub use utils::validation::validate_payload;
