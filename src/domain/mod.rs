//! Domain layer - Core business entities and logic
//!
//! Contains the entities, value objects and validation rules that
//! represent the portal's business concepts, independent of
//! infrastructure concerns.

pub mod medication;
pub mod password;
pub mod user;
pub mod validation;

pub use medication::{Medication, MedicationLookup};
pub use password::Password;
pub use user::{User, UserResponse, UserRole};

#[cfg(any(test, feature = "test-utils"))]
pub use medication::MockMedicationLookup;
