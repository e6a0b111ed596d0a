use chrono::{Datelike, NaiveDate, Weekday};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse "YYYY-MM" into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&(s.trim().to_string() + "-01"), "%Y-%m-%d").ok()?;
    Some((first.year(), first.month()))
}

/// Sunday-based day index (Sunday = 0 … Saturday = 6).
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// First date in the given month falling on `weekday`.
pub fn first_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (7 + weekday.num_days_from_sunday() - first.weekday().num_days_from_sunday()) % 7;
    first.checked_add_days(chrono::Days::new(offset as u64))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

pub fn weekday_name_pt(day_index: u32) -> &'static str {
    match day_index {
        0 => "Domingo",
        1 => "Segunda-feira",
        2 => "Terça-feira",
        3 => "Quarta-feira",
        4 => "Quinta-feira",
        5 => "Sexta-feira",
        6 => "Sábado",
        _ => "",
    }
}

/// Map a weekday as typed in the shop spreadsheets ("terça", "Quarta-feira", "3")
/// to its Sunday-based index.
pub fn weekday_from_label(label: &str) -> Option<u32> {
    let l = label.trim().to_lowercase();
    if let Ok(n) = l.parse::<u32>() {
        return (n <= 6).then_some(n);
    }

    match l.trim_end_matches("-feira") {
        "domingo" => Some(0),
        "segunda" => Some(1),
        "terca" | "terça" => Some(2),
        "quarta" => Some(3),
        "quinta" => Some(4),
        "sexta" => Some(5),
        "sabado" | "sábado" => Some(6),
        _ => None,
    }
}
