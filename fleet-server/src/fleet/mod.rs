//! User and vehicle registry.
//!
//! Backs the registration, login and vehicle status pages. Storage is an
//! in-memory [`FleetStore`]; there is no database.

mod error;
mod store;
mod user;
mod vehicle;

pub use error::FleetError;
pub use store::FleetStore;
pub use user::{NewUser, User, hash_password, verify_password};
pub use vehicle::{LAST_UPDATED_FORMAT, NewVehicle, UNKNOWN_LOCATION, Vehicle};
