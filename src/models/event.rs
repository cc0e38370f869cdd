use serde::Serialize;

/// A corporate event: either global (visible to everyone) or assigned to a
/// subset of employees. Events are a parallel date-range entity used for day
/// classification in the views; they take no part in conflict detection.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyEvent {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_global: bool,
    /// Meaningful only when `is_global` is false.
    pub assigned_employee_ids: Vec<String>,
}

impl CompanyEvent {
    pub fn applies_to(&self, employee_id: &str) -> bool {
        self.is_global || self.assigned_employee_ids.iter().any(|id| id == employee_id)
    }

    pub fn covers_day(&self, day_str: &str) -> bool {
        self.start_date.as_str() <= day_str && day_str <= self.end_date.as_str()
    }
}
