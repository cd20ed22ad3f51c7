//! In-memory record store - the authoritative collection of users
//!
//! The store owns every [`User`] exclusively. Enumeration order is
//! insertion order (load order, then add order) and stays stable for
//! the process lifetime. All mutations report their outcome as a value;
//! a rejected operation leaves the store untouched.

use crate::domain::result::{Error, Result};
use crate::domain::User;

/// Insertion-ordered collection of users keyed by `user_id`.
///
/// Backed by a `Vec` rather than a hash map so enumeration order is the
/// insertion order without extra bookkeeping. Data volumes are small and
/// single-user, so linear id lookup is fine.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    users: Vec<User>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new user with an empty record history.
    pub fn add_user(&mut self, user_id: &str, name: &str) -> Result<()> {
        if self.contains(user_id) {
            return Err(Error::already_exists(format!(
                "user with id '{}'",
                user_id
            )));
        }
        self.users.push(User::new(user_id, name));
        Ok(())
    }

    /// Remove a user, returning the removed entity with its records.
    ///
    /// The records are unrecoverable once the returned value is dropped.
    pub fn remove_user(&mut self, user_id: &str) -> Result<User> {
        let idx = self
            .position(user_id)
            .ok_or_else(|| Error::not_found(format!("user '{}'", user_id)))?;
        Ok(self.users.remove(idx))
    }

    /// Overwrite the display name of an existing user. Records untouched.
    pub fn update_user_name(&mut self, user_id: &str, new_name: &str) -> Result<()> {
        let user = self
            .get_user_mut(user_id)
            .ok_or_else(|| Error::not_found(format!("user '{}'", user_id)))?;
        user.name = new_name.to_string();
        Ok(())
    }

    /// Parse and append a consumption record for an existing user.
    ///
    /// A validation failure is scoped to this one record: it is surfaced
    /// to the caller and neither this user's history nor any other
    /// user's state changes.
    pub fn add_user_record(&mut self, user_id: &str, raw_amount: &str) -> Result<f64> {
        let user = self
            .get_user_mut(user_id)
            .ok_or_else(|| Error::not_found(format!("user '{}'", user_id)))?;
        user.add_record(raw_amount)
    }

    pub fn get_user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    pub fn get_user_mut(&mut self, user_id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.user_id == user_id)
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.position(user_id).is_some()
    }

    /// All users in insertion order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Get-or-create used by the persistence adapter: on the first
    /// sighting of an id the user is created with the given name, later
    /// sightings keep the original name.
    pub(crate) fn get_or_insert(&mut self, user_id: &str, name: &str) -> &mut User {
        if let Some(idx) = self.position(user_id) {
            &mut self.users[idx]
        } else {
            self.users.push(User::new(user_id, name));
            self.users.last_mut().expect("just pushed")
        }
    }

    fn position(&self, user_id: &str) -> Option<usize> {
        self.users.iter().position(|u| u.user_id == user_id)
    }
}
