use vacaplan::core::balance::yearly_balance;
use vacaplan::core::calendar::HolidayCalendar;
use vacaplan::models::vacation::Vacation;

fn vac(id: &str, employee: &str, from: &str, to: &str) -> Vacation {
    Vacation {
        id: id.to_string(),
        employee_id: employee.to_string(),
        start_date: from.to_string(),
        end_date: to.to_string(),
    }
}

#[test]
fn vacation_inside_year_with_allowance_22() {
    let cal = HolidayCalendar::empty();
    // 2026-04-06 (Mon) .. 2026-04-17 (Fri): 10 working days
    let vacations = vec![vac("v1", "a", "2026-04-06", "2026-04-17")];

    let balance = yearly_balance(&cal, "a", 2026, &vacations, 22);
    assert_eq!(balance.used, 10);
    assert_eq!(balance.remaining, 12);
}

#[test]
fn year_straddling_vacation_is_split() {
    let cal = HolidayCalendar::empty();
    // 2026-12-28 (Mon) .. 2027-01-01 (Fri)
    let vacations = vec![vac("v1", "a", "2026-12-28", "2027-01-01")];

    // 2026 portion: Mon 28 .. Thu 31
    let b2026 = yearly_balance(&cal, "a", 2026, &vacations, 22);
    assert_eq!(b2026.used, 4);

    // 2027 portion: Fri Jan 1 only
    let b2027 = yearly_balance(&cal, "a", 2027, &vacations, 22);
    assert_eq!(b2027.used, 1);
}

#[test]
fn other_employees_vacations_are_ignored() {
    let cal = HolidayCalendar::empty();
    let vacations = vec![
        vac("v1", "a", "2026-04-06", "2026-04-10"),
        vac("v2", "b", "2026-04-06", "2026-04-17"),
    ];

    let balance = yearly_balance(&cal, "a", 2026, &vacations, 22);
    assert_eq!(balance.used, 5);
}

#[test]
fn holidays_do_not_consume_allowance() {
    // 2026-04-02/03 (Thu/Fri) are holidays in the standard calendar, so the
    // Easter week from Mon 03-30 to Fri 04-03 costs only 3 working days.
    let cal = HolidayCalendar::standard();
    let vacations = vec![vac("v1", "a", "2026-03-30", "2026-04-03")];

    let balance = yearly_balance(&cal, "a", 2026, &vacations, 22);
    assert_eq!(balance.used, 3);
}

#[test]
fn overallocation_goes_negative() {
    let cal = HolidayCalendar::empty();
    let vacations = vec![vac("v1", "a", "2026-04-06", "2026-04-17")];

    let balance = yearly_balance(&cal, "a", 2026, &vacations, 4);
    assert_eq!(balance.used, 10);
    assert_eq!(balance.remaining, -6);
}

#[test]
fn no_vacations_means_full_allowance() {
    let cal = HolidayCalendar::standard();
    let balance = yearly_balance(&cal, "a", 2026, &[], 22);
    assert_eq!(balance.used, 0);
    assert_eq!(balance.remaining, 22);
}

#[test]
fn unparsable_dates_contribute_nothing() {
    let cal = HolidayCalendar::empty();
    let vacations = vec![vac("v1", "a", "garbage", "2026-04-17")];

    let balance = yearly_balance(&cal, "a", 2026, &vacations, 22);
    assert_eq!(balance.used, 0);
}
