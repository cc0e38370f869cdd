//! Vacation overlap conflict detection.
//!
//! A conflict is an overlap between the target vacation and a vacation owned
//! by an employee listed in the target owner's incompatibility set. Detection
//! is driven by the owner's list alone: a one-sided entry still fires.
//!
//! This is a detector, not a blocker. The caller decides what to do with the
//! report (the CLI applies the configured conflict policy).

use crate::models::employee::Employee;
use crate::models::vacation::Vacation;

#[derive(Debug, Clone, Default)]
pub struct ConflictReport {
    /// Employees with at least one overlapping vacation, one entry each.
    pub conflicting_with: Vec<Employee>,
}

impl ConflictReport {
    pub fn has_conflict(&self) -> bool {
        !self.conflicting_with.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.conflicting_with
            .iter()
            .map(|e| e.name.as_str())
            .collect()
    }
}

/// Check `target` against every vacation of the owner's incompatible
/// employees. A missing owner, or an owner with no incompatibility entries,
/// yields an empty report. Entries pointing at deleted employees are skipped.
pub fn detect_conflict(
    target: &Vacation,
    all_vacations: &[Vacation],
    all_employees: &[Employee],
) -> ConflictReport {
    let Some(owner) = all_employees.iter().find(|e| e.id == target.employee_id) else {
        return ConflictReport::default();
    };
    if owner.incompatible_ids.is_empty() {
        return ConflictReport::default();
    }

    let mut conflicting_with: Vec<Employee> = Vec::new();

    for other in all_vacations {
        // Never compare the target with itself (edits keep their id).
        if other.id == target.id {
            continue;
        }
        if !owner.incompatible_ids.contains(&other.employee_id) {
            continue;
        }
        if !target.overlaps(other) {
            continue;
        }
        // One entry per employee, no matter how many vacations overlap.
        if conflicting_with.iter().any(|e| e.id == other.employee_id) {
            continue;
        }
        if let Some(peer) = all_employees.iter().find(|e| e.id == other.employee_id) {
            conflicting_with.push(peer.clone());
        }
    }

    ConflictReport { conflicting_with }
}
