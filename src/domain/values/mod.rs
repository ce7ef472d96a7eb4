//! Self-validating value types
//!
//! Each type can only be obtained through its validating constructor, so
//! holding one means holding a valid, canonical value.

pub mod birth_date;
pub mod cpf;
pub mod gender;
pub mod license;
pub mod location;
pub mod name;
pub mod vehicle;

pub use birth_date::BirthDate;
pub use cpf::Cpf;
pub use gender::Gender;
pub use license::LicenseClass;
pub use location::Location;
pub use name::Name;
pub use vehicle::VehicleClass;
