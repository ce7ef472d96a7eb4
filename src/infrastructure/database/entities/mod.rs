//! Database entities module

pub mod driver;
pub mod trip;

pub use driver::Entity as Driver;
pub use trip::Entity as Trip;
