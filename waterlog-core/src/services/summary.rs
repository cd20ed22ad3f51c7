//! Summary service - per-user and store-wide consumption summaries

use serde::Serialize;

use crate::domain::User;
use crate::store::RecordStore;

/// Summary of one user's consumption history
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub user_id: String,
    pub name: String,
    pub record_count: usize,
    pub total_liters: f64,
    pub average_liters: f64,
    pub records: Vec<f64>,
}

impl UserSummary {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.user_id.clone(),
            name: user.name.clone(),
            record_count: user.records.len(),
            total_liters: user.records.iter().sum(),
            average_liters: user.average_consumption(),
            records: user.records.clone(),
        }
    }
}

/// Summary of the whole store, in enumeration order
#[derive(Debug, Serialize)]
pub struct StoreSummary {
    pub total_users: usize,
    pub total_records: usize,
    pub users: Vec<UserSummary>,
}

impl StoreSummary {
    pub fn for_store(store: &RecordStore) -> Self {
        let users: Vec<UserSummary> = store.users().map(UserSummary::for_user).collect();
        Self {
            total_users: users.len(),
            total_records: users.iter().map(|u| u.record_count).sum(),
            users,
        }
    }
}
