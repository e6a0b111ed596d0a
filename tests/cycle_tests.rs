mod common;
use chrono::Days;
use common::{date, shop_zone};
use groombook::utils::date::weekday_index;
use groombook::core::cycle::{resolve_occurrence, resolve_occurrence_at};
use groombook::models::frequency::Frequency;
use groombook::models::occurrence::Occurrence;
use groombook::models::recurrence_rule::RecurrenceRule;

fn tuesday_rule(frequency: Frequency) -> RecurrenceRule {
    RecurrenceRule::new(2, "14:00", "Thor", frequency).starting(date("2025-01-07"))
}

#[test]
fn weekly_rotation_wraps_after_four_visits() {
    let rule = tuesday_rule(Frequency::Weekly);
    let today = date("2025-01-01");

    let expected = [
        ("2025-01-07", 1),
        ("2025-01-14", 2),
        ("2025-01-21", 3),
        ("2025-01-28", 4),
        ("2025-02-04", 1),
        ("2025-02-11", 2),
    ];
    for (d, ordinal) in expected {
        assert_eq!(
            resolve_occurrence_at(&rule, date(d), today),
            Occurrence::at(Some(ordinal)),
            "{}",
            d
        );
    }
}

#[test]
fn weekly_rotation_is_anchored_at_start_bath_number() {
    let rule = tuesday_rule(Frequency::Weekly).with_start_bath_number(3);
    let today = date("2025-01-01");

    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-07"), today).visit_ordinal, Some(3));
    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-14"), today).visit_ordinal, Some(4));
    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-21"), today).visit_ordinal, Some(1));
}

#[test]
fn weekly_rotation_survives_year_boundary() {
    let rule = RecurrenceRule::new(2, "09:00", "Luna", Frequency::Weekly).starting(date("2024-12-31"));
    let today = date("2024-12-01");

    assert_eq!(resolve_occurrence_at(&rule, date("2024-12-31"), today).visit_ordinal, Some(1));
    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-07"), today).visit_ordinal, Some(2));
    // 52 weeks later
    assert_eq!(resolve_occurrence_at(&rule, date("2025-12-30"), today).visit_ordinal, Some(1));
}

#[test]
fn bi_weekly_skips_odd_weeks() {
    let rule = tuesday_rule(Frequency::BiWeekly);
    let today = date("2025-01-01");

    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-07"), today), Occurrence::at(None));
    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-14"), today), Occurrence::none());
    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-21"), today), Occurrence::at(None));
    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-28"), today), Occurrence::none());
}

#[test]
fn nothing_happens_before_the_cycle_starts() {
    let today = date("2024-01-01");
    for freq in [Frequency::Weekly, Frequency::BiWeekly, Frequency::Monthly] {
        let rule = tuesday_rule(freq);
        for d in ["2024-12-31", "2024-12-24", "2023-01-03"] {
            assert!(!resolve_occurrence_at(&rule, date(d), today).occurs, "{:?} {}", freq, d);
        }
    }
}

#[test]
fn missing_cycle_start_counts_from_today() {
    let rule = RecurrenceRule::new(2, "14:00", "Thor", Frequency::BiWeekly);
    let today = date("2025-01-07");

    assert!(!resolve_occurrence_at(&rule, date("2024-12-31"), today).occurs);
    assert!(resolve_occurrence_at(&rule, date("2025-01-07"), today).occurs);
    assert!(!resolve_occurrence_at(&rule, date("2025-01-14"), today).occurs);
    assert!(resolve_occurrence_at(&rule, date("2025-01-21"), today).occurs);
}

#[test]
fn monthly_counts_from_cycle_start_then_restarts_each_month() {
    // 2nd Wednesday of January 2025
    let rule = RecurrenceRule::new(3, "10:00", "Mel", Frequency::Monthly).starting(date("2025-01-08"));
    let today = date("2025-01-01");

    let january = [("2025-01-08", 1), ("2025-01-15", 2), ("2025-01-22", 3), ("2025-01-29", 4)];
    for (d, ordinal) in january {
        assert_eq!(resolve_occurrence_at(&rule, date(d), today).visit_ordinal, Some(ordinal), "{}", d);
    }

    let february = [("2025-02-05", 1), ("2025-02-12", 2), ("2025-02-19", 3)];
    for (d, ordinal) in february {
        assert_eq!(resolve_occurrence_at(&rule, date(d), today).visit_ordinal, Some(ordinal), "{}", d);
    }
}

#[test]
fn monthly_same_month_applies_start_bath_number() {
    let rule = RecurrenceRule::new(3, "10:00", "Mel", Frequency::Monthly)
        .starting(date("2025-01-08"))
        .with_start_bath_number(2);
    let today = date("2025-01-01");

    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-08"), today).visit_ordinal, Some(2));
    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-15"), today).visit_ordinal, Some(3));
    // cross-month numbering ignores the initial offset
    assert_eq!(resolve_occurrence_at(&rule, date("2025-02-05"), today).visit_ordinal, Some(1));
}

#[test]
fn wrong_weekday_never_occurs() {
    let rule = tuesday_rule(Frequency::Weekly);
    let today = date("2025-01-01");

    assert!(!resolve_occurrence_at(&rule, date("2025-01-08"), today).occurs);
    assert!(!resolve_occurrence_at(&rule, date("2025-01-13"), today).occurs);
}

#[test]
fn malformed_rules_are_rejected() {
    let today = date("2025-01-01");

    let mut bad_day = tuesday_rule(Frequency::Weekly);
    bad_day.day_of_week = 9;
    assert!(!resolve_occurrence_at(&bad_day, date("2025-01-07"), today).occurs);

    let bad_bath = tuesday_rule(Frequency::Weekly).with_start_bath_number(0);
    assert!(!resolve_occurrence_at(&bad_bath, date("2025-01-07"), today).occurs);
}

#[test]
fn standalone_resolver_uses_explicit_cycle_start() {
    let rule = tuesday_rule(Frequency::Weekly);
    let zone = shop_zone();
    assert_eq!(resolve_occurrence(&rule, date("2025-01-21"), &zone).visit_ordinal, Some(3));
}

#[test]
fn standalone_resolver_counts_from_today_in_the_shop_zone() {
    let zone = shop_zone();
    let today = zone.today();
    let rule = RecurrenceRule::new(weekday_index(today), "14:00", "Thor", Frequency::BiWeekly);

    let in_two_weeks = today + Days::new(14);
    let next_week = today + Days::new(7);
    for d in [today, next_week, in_two_weeks] {
        assert_eq!(
            resolve_occurrence(&rule, d, &zone),
            resolve_occurrence_at(&rule, d, today),
            "{}",
            d
        );
    }
    assert!(resolve_occurrence(&rule, today, &zone).occurs);
    assert!(!resolve_occurrence(&rule, next_week, &zone).occurs);
    assert!(!resolve_occurrence(&rule, today - Days::new(14), &zone).occurs);
}

#[test]
fn monthly_start_month_can_reach_a_fifth_visit() {
    // January 2025 has five Wednesdays
    let rule = RecurrenceRule::new(3, "10:00", "Mel", Frequency::Monthly).starting(date("2025-01-01"));
    let today = date("2024-12-01");

    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-01"), today).visit_ordinal, Some(1));
    assert_eq!(resolve_occurrence_at(&rule, date("2025-01-29"), today).visit_ordinal, Some(5));
}

#[test]
fn monthly_same_month_of_a_later_year_restarts_numbering() {
    let rule = RecurrenceRule::new(3, "10:00", "Mel", Frequency::Monthly)
        .starting(date("2025-01-08"))
        .with_start_bath_number(3);
    let today = date("2024-12-01");

    // first Wednesday of January 2026 is the 7th
    assert_eq!(resolve_occurrence_at(&rule, date("2026-01-07"), today).visit_ordinal, Some(1));
    assert_eq!(resolve_occurrence_at(&rule, date("2026-01-14"), today).visit_ordinal, Some(2));
}
