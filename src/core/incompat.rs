//! Incompatibility graph reconciliation.
//!
//! The incompatibility relation is kept symmetric by convention: when employee
//! A is saved, every other employee whose adjacency disagrees with A's new
//! list gets a patch. The reconciliation itself is pure; the caller applies
//! each patch through the store and reports individual failures. There is no
//! rollback of A's own save when a patch fails.

use crate::models::employee::Employee;

/// Replacement incompatibility list for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompatPatch {
    pub employee_id: String,
    pub incompatible_ids: Vec<String>,
}

/// Diff `updated`'s incompatibility list against every other employee and
/// produce the patches needed to restore symmetry. Employees already in
/// agreement produce no patch.
pub fn reconcile_incompatibilities(
    updated: &Employee,
    all_employees: &[Employee],
) -> Vec<IncompatPatch> {
    let mut patches = Vec::new();

    for emp in all_employees {
        if emp.id == updated.id {
            continue;
        }

        let should_link = updated.incompatible_ids.contains(&emp.id);
        let has_link = emp.incompatible_ids.contains(&updated.id);

        if should_link && !has_link {
            let mut ids = emp.incompatible_ids.clone();
            ids.push(updated.id.clone());
            patches.push(IncompatPatch {
                employee_id: emp.id.clone(),
                incompatible_ids: ids,
            });
        } else if !should_link && has_link {
            let ids = emp
                .incompatible_ids
                .iter()
                .filter(|id| *id != &updated.id)
                .cloned()
                .collect();
            patches.push(IncompatPatch {
                employee_id: emp.id.clone(),
                incompatible_ids: ids,
            });
        }
    }

    patches
}
