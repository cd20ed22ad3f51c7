//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and presentation-facing views. Each
//! service focuses on a specific use case or feature area.

pub mod logging;
mod summary;

pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use summary::{StoreSummary, UserSummary};
