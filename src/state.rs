use crate::services::savings_service::SavingsCalculator;

#[derive(Clone)]
pub struct AppState {
    pub calculator: SavingsCalculator,
}

impl AppState {
    pub fn new(calculator: SavingsCalculator) -> Self {
        Self { calculator }
    }
}
