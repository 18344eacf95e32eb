mod health;
mod savings;

pub use health::HealthStatus;
pub use savings::{RoundingMode, SavingsRequest, SavingsResponse};
