use vacaplan::core::conflicts::detect_conflict;
use vacaplan::models::employee::Employee;
use vacaplan::models::vacation::Vacation;

fn emp(id: &str, name: &str, incompatible: &[&str]) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        role: None,
        pin: String::new(),
        incompatible_ids: incompatible.iter().map(|s| s.to_string()).collect(),
    }
}

fn vac(id: &str, employee: &str, from: &str, to: &str) -> Vacation {
    Vacation {
        id: id.to_string(),
        employee_id: employee.to_string(),
        start_date: from.to_string(),
        end_date: to.to_string(),
    }
}

#[test]
fn shared_boundary_day_is_a_conflict() {
    let employees = vec![emp("a", "Ana", &["b"]), emp("b", "Bruno", &["a"])];
    let existing = vec![vac("v1", "b", "2026-03-20", "2026-03-25")];
    let target = vac("v2", "a", "2026-03-10", "2026-03-20");

    let report = detect_conflict(&target, &existing, &employees);
    assert!(report.has_conflict());
    assert_eq!(report.names(), vec!["Bruno"]);
}

#[test]
fn adjacent_ranges_do_not_conflict() {
    let employees = vec![emp("a", "Ana", &["b"]), emp("b", "Bruno", &["a"])];
    let existing = vec![vac("v1", "b", "2026-03-20", "2026-03-25")];
    let target = vac("v2", "a", "2026-03-10", "2026-03-19");

    let report = detect_conflict(&target, &existing, &employees);
    assert!(!report.has_conflict());
}

#[test]
fn one_sided_incompatibility_still_fires() {
    // Only Ana lists Bruno; detection is driven by the owner's list alone.
    let employees = vec![emp("a", "Ana", &["b"]), emp("b", "Bruno", &[])];
    let existing = vec![vac("v1", "b", "2026-06-01", "2026-06-10")];
    let target = vac("v2", "a", "2026-06-05", "2026-06-07");

    let report = detect_conflict(&target, &existing, &employees);
    assert!(report.has_conflict());
}

#[test]
fn compatible_employees_never_conflict() {
    let employees = vec![emp("a", "Ana", &[]), emp("b", "Bruno", &[])];
    let existing = vec![vac("v1", "b", "2026-06-01", "2026-06-10")];
    let target = vac("v2", "a", "2026-06-05", "2026-06-07");

    assert!(!detect_conflict(&target, &existing, &employees).has_conflict());
}

#[test]
fn peer_appears_once_despite_multiple_overlaps() {
    let employees = vec![emp("a", "Ana", &["b"]), emp("b", "Bruno", &["a"])];
    let existing = vec![
        vac("v1", "b", "2026-06-01", "2026-06-03"),
        vac("v2", "b", "2026-06-05", "2026-06-08"),
    ];
    let target = vac("v3", "a", "2026-06-01", "2026-06-10");

    let report = detect_conflict(&target, &existing, &employees);
    assert_eq!(report.conflicting_with.len(), 1);
}

#[test]
fn missing_owner_yields_no_conflict() {
    let employees = vec![emp("b", "Bruno", &[])];
    let existing = vec![vac("v1", "b", "2026-06-01", "2026-06-10")];
    let target = vac("v2", "deleted", "2026-06-05", "2026-06-07");

    assert!(!detect_conflict(&target, &existing, &employees).has_conflict());
}

#[test]
fn dangling_incompatible_id_is_skipped() {
    // Ana lists a deleted employee whose vacation rows are gone too; a leftover
    // row would still resolve to no employee and be dropped from the report.
    let employees = vec![emp("a", "Ana", &["ghost"])];
    let existing = vec![vac("v1", "ghost", "2026-06-01", "2026-06-10")];
    let target = vac("v2", "a", "2026-06-05", "2026-06-07");

    let report = detect_conflict(&target, &existing, &employees);
    assert!(!report.has_conflict());
}

#[test]
fn target_is_never_compared_with_itself() {
    // Editing an existing vacation keeps its id; the stored copy must not
    // count as a conflicting vacation.
    let employees = vec![emp("a", "Ana", &["b"]), emp("b", "Bruno", &["a"])];
    let existing = vec![vac("v1", "a", "2026-06-01", "2026-06-10")];
    let target = vac("v1", "a", "2026-06-01", "2026-06-12");

    assert!(!detect_conflict(&target, &existing, &employees).has_conflict());
}
