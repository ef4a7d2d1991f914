//! In-memory user and vehicle repository.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tokio::sync::RwLock;
use tracing::info;

use super::error::FleetError;
use super::user::{NewUser, User, hash_password, verify_password};
use super::vehicle::{NewVehicle, Vehicle};

#[derive(Debug, Default)]
struct Inner {
    /// Users keyed by email.
    users: HashMap<String, User>,
    next_user_id: u64,
    /// Vehicles in registration order.
    vehicles: Vec<Vehicle>,
}

/// Thread-safe registry of users and vehicles.
///
/// Contents live only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct FleetStore {
    inner: Arc<RwLock<Inner>>,
}

impl FleetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. Emails are unique.
    pub async fn register_user(&self, form: &NewUser) -> Result<User, FleetError> {
        let form = form.normalized()?;

        if self.inner.read().await.users.contains_key(&form.email) {
            return Err(FleetError::UserExists);
        }

        let password_hash = hash_password(&form.password)?;

        let mut guard = self.inner.write().await;
        // Re-check under the write lock; another request may have won
        if guard.users.contains_key(&form.email) {
            return Err(FleetError::UserExists);
        }

        guard.next_user_id += 1;
        let user = User {
            id: guard.next_user_id,
            username: form.username,
            email: form.email.clone(),
            password_hash,
            city: form.city,
        };
        guard.users.insert(form.email, user.clone());

        info!(user_id = user.id, "registered user");
        Ok(user)
    }

    /// Check an email/password pair.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, FleetError> {
        let guard = self.inner.read().await;
        let user = guard
            .users
            .get(email.trim())
            .ok_or(FleetError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(FleetError::InvalidCredentials);
        }

        Ok(user.clone())
    }

    /// Number of registered users.
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Register a vehicle, stamping it with `now`. Vehicle IDs are unique.
    pub async fn register_vehicle(
        &self,
        form: NewVehicle,
        now: NaiveDateTime,
    ) -> Result<Vehicle, FleetError> {
        let vehicle = form.into_vehicle(now)?;

        let mut guard = self.inner.write().await;
        if guard
            .vehicles
            .iter()
            .any(|v| v.vehicle_id == vehicle.vehicle_id)
        {
            return Err(FleetError::VehicleExists);
        }

        guard.vehicles.push(vehicle.clone());

        info!(vehicle_id = %vehicle.vehicle_id, "registered vehicle");
        Ok(vehicle)
    }

    /// All vehicles, oldest registration first.
    pub async fn vehicles(&self) -> Vec<Vehicle> {
        self.inner.read().await.vehicles.clone()
    }
}
