mod common;
use common::{date, local_ts, options};
use groombook::core::availability::available_slots;
use groombook::core::projector::{project, project_selection};
use groombook::models::appointment::Appointment;
use groombook::models::frequency::Frequency;
use groombook::models::recurrence_rule::RecurrenceRule;
use groombook::models::schedule_entry::ScheduleEntry;

const WEDNESDAY: &str = "2099-03-04";

fn client(day: &str, hhmm: &str, name: &str) -> Appointment {
    let start = local_ts(day, hhmm);
    Appointment::booking(start, start + chrono::Duration::minutes(30), name, "Rex", "Banho Simples")
}

fn weekly(day: u32, time: &str, pet: &str) -> RecurrenceRule {
    RecurrenceRule::new(day, time, pet, Frequency::Weekly).starting(date("2099-03-01"))
}

#[test]
fn merges_and_orders_by_start_time() {
    let apts = vec![client(WEDNESDAY, "10:00", "Ana")];
    let rules = vec![weekly(3, "09:30", "Thor")];

    let entries = project(date(WEDNESDAY), &rules, &apts, &options(true, "2099-03-01"));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].time_str(), "09:30");
    assert!(entries[0].is_recurring());
    assert_eq!(entries[1].time_str(), "10:00");
    assert_eq!(entries[1].kind_str(), "client");
}

#[test]
fn empty_inputs_project_nothing() {
    let entries = project(date(WEDNESDAY), &[], &[], &options(true, "2099-03-01"));
    assert!(entries.is_empty());
}

#[test]
fn no_date_selected_projects_nothing() {
    let rules = vec![weekly(3, "09:30", "Thor")];
    let apts = vec![client(WEDNESDAY, "10:00", "Ana")];
    assert!(project_selection(None, &rules, &apts, &options(true, "2099-03-01")).is_empty());
    assert!(available_slots(None, &rules, &apts, &options(true, "2099-03-01")).is_empty());
}

#[test]
fn rules_only_apply_on_their_weekday() {
    let rules = vec![weekly(3, "09:30", "Thor"), weekly(4, "09:30", "Luna")];

    let wed = project(date(WEDNESDAY), &rules, &[], &options(true, "2099-03-01"));
    assert_eq!(wed.len(), 1);
    match &wed[0] {
        ScheduleEntry::Recurring { subject_name, .. } => assert_eq!(subject_name, "Thor"),
        other => panic!("unexpected entry {:?}", other),
    }

    let thu = project(date("2099-03-05"), &rules, &[], &options(true, "2099-03-01"));
    assert_eq!(thu.len(), 1);
    assert_eq!(thu[0].start_time().date(), date("2099-03-05"));
}

#[test]
fn appointments_on_other_days_are_ignored() {
    let apts = vec![client("2099-03-05", "10:00", "Ana")];
    assert!(project(date(WEDNESDAY), &[], &apts, &options(true, "2099-03-01")).is_empty());
}

#[test]
fn late_evening_booking_stays_on_shop_local_day() {
    // 22:00 at UTC-03:00 is already the next day in UTC
    let apts = vec![client(WEDNESDAY, "22:00", "Ana")];
    assert!(apts[0].start_time.date_naive() > date(WEDNESDAY));

    let entries = project(date(WEDNESDAY), &[], &apts, &options(true, "2099-03-01"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].time_str(), "22:00");

    assert!(project(date("2099-03-05"), &[], &apts, &options(true, "2099-03-01")).is_empty());
}

#[test]
fn blocked_appointments_follow_the_legacy_flag() {
    let start = local_ts(WEDNESDAY, "11:00");
    let apts = vec![Appointment::block(start, start + chrono::Duration::minutes(30))];

    let legacy = project(date(WEDNESDAY), &[], &apts, &options(true, "2099-03-01"));
    assert_eq!(legacy.len(), 1);
    assert_eq!(legacy[0].kind_str(), "blocked");

    let modern = project(date(WEDNESDAY), &[], &apts, &options(false, "2099-03-01"));
    assert!(modern.is_empty());
}

#[test]
fn rules_with_unreadable_time_are_skipped() {
    let rules = vec![weekly(3, "9h30", "Thor"), weekly(3, "10:30", "Luna")];
    let entries = project(date(WEDNESDAY), &rules, &[], &options(true, "2099-03-01"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].time_str(), "10:30");
}

#[test]
fn recurring_entries_carry_visit_number() {
    // cycle starts on Wednesday 2099-03-04, so the next Wednesday is visit 2
    let rules = vec![RecurrenceRule::new(3, "09:00", "Thor", Frequency::Weekly).starting(date(WEDNESDAY))];
    let entries = project(date("2099-03-11"), &rules, &[], &options(true, "2099-03-01"));

    match &entries[0] {
        ScheduleEntry::Recurring { visit_ordinal, label, .. } => {
            assert_eq!(*visit_ordinal, Some(2));
            assert_eq!(label, "Clubinho");
        }
        other => panic!("unexpected entry {:?}", other),
    }
}

#[test]
fn same_time_keeps_appointment_first() {
    let apts = vec![client(WEDNESDAY, "09:30", "Ana")];
    let rules = vec![weekly(3, "09:30", "Thor")];
    let entries = project(date(WEDNESDAY), &rules, &apts, &options(true, "2099-03-01"));
    assert_eq!(entries[0].kind_str(), "client");
    assert_eq!(entries[1].kind_str(), "recurring");
}

#[test]
fn availability_removes_occupied_slots() {
    let apts = vec![client(WEDNESDAY, "10:00", "Ana")];
    let rules = vec![weekly(3, "08:30", "Thor")];

    let free = available_slots(Some(date(WEDNESDAY)), &rules, &apts, &options(true, "2099-03-01"));
    assert_eq!(free.first().map(String::as_str), Some("08:00"));
    assert!(!free.contains(&"08:30".to_string()));
    assert!(!free.contains(&"10:00".to_string()));
    assert_eq!(free.len(), 17 - 2);
}

#[test]
fn availability_counts_blocks_only_in_legacy_mode() {
    let start = local_ts(WEDNESDAY, "11:00");
    let apts = vec![Appointment::block(start, start + chrono::Duration::minutes(30))];

    let legacy = available_slots(Some(date(WEDNESDAY)), &[], &apts, &options(true, "2099-03-01"));
    assert!(!legacy.contains(&"11:00".to_string()));

    let modern = available_slots(Some(date(WEDNESDAY)), &[], &apts, &options(false, "2099-03-01"));
    assert!(modern.contains(&"11:00".to_string()));
}

#[test]
fn past_days_and_sundays_have_no_availability() {
    assert!(available_slots(Some(date("2099-02-25")), &[], &[], &options(true, "2099-03-01")).is_empty());
    assert!(available_slots(Some(date("2099-03-08")), &[], &[], &options(true, "2099-03-01")).is_empty());
}
