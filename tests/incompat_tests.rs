use vacaplan::core::incompat::reconcile_incompatibilities;
use vacaplan::models::employee::Employee;

fn emp(id: &str, incompatible: &[&str]) -> Employee {
    Employee {
        id: id.to_string(),
        name: id.to_string(),
        role: None,
        pin: String::new(),
        incompatible_ids: incompatible.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn adding_an_edge_patches_the_peer() {
    let updated = emp("a", &["b"]);
    let all = vec![emp("a", &["b"]), emp("b", &[]), emp("c", &[])];

    let patches = reconcile_incompatibilities(&updated, &all);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].employee_id, "b");
    assert_eq!(patches[0].incompatible_ids, vec!["a".to_string()]);
}

#[test]
fn removing_an_edge_patches_the_peer() {
    let updated = emp("a", &[]);
    let all = vec![emp("a", &[]), emp("b", &["a", "c"]), emp("c", &["b"])];

    let patches = reconcile_incompatibilities(&updated, &all);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].employee_id, "b");
    // Unrelated edge b-c survives the patch.
    assert_eq!(patches[0].incompatible_ids, vec!["c".to_string()]);
}

#[test]
fn consistent_peers_produce_no_patch() {
    let updated = emp("a", &["b"]);
    let all = vec![emp("a", &["b"]), emp("b", &["a"]), emp("c", &[])];

    assert!(reconcile_incompatibilities(&updated, &all).is_empty());
}

#[test]
fn reconciliation_is_a_full_pass_over_all_employees() {
    // Several peers disagree at once; every one of them gets a patch.
    let updated = emp("a", &["b", "c"]);
    let all = vec![
        emp("a", &["b", "c"]),
        emp("b", &[]),         // missing the back edge
        emp("c", &[]),         // missing the back edge
        emp("d", &["a"]),      // stale back edge
        emp("e", &[]),         // in agreement
    ];

    let patches = reconcile_incompatibilities(&updated, &all);
    let ids: Vec<&str> = patches.iter().map(|p| p.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "d"]);
    assert!(patches[2].incompatible_ids.is_empty());
}

#[test]
fn the_updated_employee_is_never_patched() {
    let updated = emp("a", &["a", "b"]); // self id should never be considered
    let all = vec![emp("a", &["a", "b"]), emp("b", &["a"])];

    let patches = reconcile_incompatibilities(&updated, &all);
    assert!(patches.iter().all(|p| p.employee_id != "a"));
}
