use crate::config::Config;
use crate::core::availability::available_slots;
use crate::core::pricing::quote_cents;
use crate::core::projector::ProjectionOptions;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_appointment, insert_appointment, list_appointments, list_recurrence_rules};
use crate::errors::{AppError, AppResult};
use crate::models::appointment::Appointment;
use crate::models::service::{BathType, Extras, PetSize};
use crate::utils::date::weekday_index;
use crate::utils::time::{format_hhmm, minutes_of_day, require_time};
use chrono::{Duration, NaiveDate};

/// A customer's booking form.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub client_name: String,
    pub pet_name: String,
    pub pet_breed: String,
    pub pet_size: PetSize,
    pub contact: String,
    pub vaccinated: bool,
    pub date: NaiveDate,
    pub time: String,
    pub bath_type: BathType,
    pub extras: Extras,
    pub observations: String,
}

pub struct BookingLogic;

impl BookingLogic {
    fn check_form(req: &BookingRequest) -> AppResult<()> {
        if req.client_name.trim().chars().count() < 2 {
            return Err(AppError::Validation(
                "client name must have at least 2 characters".into(),
            ));
        }
        if req.pet_name.trim().chars().count() < 2 {
            return Err(AppError::Validation(
                "pet name must have at least 2 characters".into(),
            ));
        }
        if req.contact.trim().chars().count() < 10 {
            return Err(AppError::Validation("contact number looks too short".into()));
        }
        if !req.vaccinated {
            return Err(AppError::Validation(
                "the pet's vaccination must be up to date to book".into(),
            ));
        }
        Ok(())
    }

    fn check_open_day(date: NaiveDate, opts: &ProjectionOptions) -> AppResult<()> {
        if date < opts.today {
            return Err(AppError::InvalidDate(format!("{} is in the past", date)));
        }
        if weekday_index(date) == 0 {
            return Err(AppError::InvalidDate(format!("{} is a Sunday", date)));
        }
        Ok(())
    }

    /// Book a customer slot. The slot must still be free once existing
    /// bookings, blocks and recurring visits are projected onto the day.
    pub fn book(
        pool: &DbPool,
        cfg: &Config,
        opts: &ProjectionOptions,
        req: &BookingRequest,
    ) -> AppResult<Appointment> {
        Self::check_form(req)?;
        Self::check_open_day(req.date, opts)?;

        let time = format_hhmm(minutes_of_day(require_time(&req.time)?));

        let rules = list_recurrence_rules(pool)?;
        let day_apts = list_appointments(pool, opts.zone.days_range_utc(req.date, req.date))?;
        let free = available_slots(Some(req.date), &rules, &day_apts, opts);

        if !free.contains(&time) {
            return Err(AppError::SlotUnavailable {
                date: req.date.to_string(),
                time,
            });
        }

        let start = opts
            .zone
            .to_utc(req.date.and_time(require_time(&time)?))
            .ok_or_else(|| AppError::InvalidTime(format!("{} {} does not exist locally", req.date, time)))?;
        let end = start + Duration::minutes(i64::from(cfg.slot_interval));

        let mut apt = Appointment::booking(
            start,
            end,
            req.client_name.trim(),
            req.pet_name.trim(),
            req.bath_type.label(),
        );
        apt.contact = req.contact.trim().to_string();
        apt.total_price_cents = quote_cents(req.bath_type, req.pet_size, &req.extras);
        apt.notes = Self::notes(req);

        apt.id = insert_appointment(&pool.conn, &apt)?;
        ttlog(
            &pool.conn,
            "book",
            &apt.id.to_string(),
            &format!("{} ({}) {} {}", apt.subject_name, req.client_name.trim(), req.date, time),
        )?;

        Ok(apt)
    }

    fn notes(req: &BookingRequest) -> String {
        let mut parts = Vec::new();
        if !req.pet_breed.trim().is_empty() {
            parts.push(format!("raça: {}", req.pet_breed.trim()));
        }
        let extras = req.extras.describe();
        if !extras.is_empty() {
            parts.push(format!("extras: {}", extras));
        }
        if !req.observations.trim().is_empty() {
            parts.push(req.observations.trim().to_string());
        }
        parts.join("; ")
    }

    /// Block admin-grid slots of a day and return the ids of the new
    /// blocks. Only available while blocks are stored as flagged
    /// appointments. Already-blocked times are left alone.
    pub fn block(
        pool: &mut DbPool,
        cfg: &Config,
        opts: &ProjectionOptions,
        date: NaiveDate,
        times: &[String],
    ) -> AppResult<Vec<i64>> {
        if !cfg.legacy_blocked_appointments {
            return Err(AppError::BlockingUnsupported);
        }
        if times.is_empty() {
            return Err(AppError::Validation("select at least one time".into()));
        }
        Self::check_open_day(date, opts)?;

        let grid = cfg.admin_grid()?;
        let mut normalized = Vec::new();
        for t in times {
            let t = format_hhmm(minutes_of_day(require_time(t)?));
            if !grid.contains(&t) {
                return Err(AppError::InvalidTime(format!("{} is not a grid slot", t)));
            }
            if !normalized.contains(&t) {
                normalized.push(t);
            }
        }
        normalized.sort();

        let existing = list_appointments(pool, opts.zone.days_range_utc(date, date))?;
        let already_blocked: Vec<String> = existing
            .iter()
            .filter(|a| a.blocked)
            .map(|a| opts.zone.local(&a.start_time).format("%H:%M").to_string())
            .collect();

        let tx = pool.conn.transaction()?;
        let mut created = Vec::new();
        for t in &normalized {
            if already_blocked.contains(t) {
                continue;
            }
            let start = opts
                .zone
                .to_utc(date.and_time(require_time(t)?))
                .ok_or_else(|| AppError::InvalidTime(format!("{} {} does not exist locally", date, t)))?;
            let end = start + Duration::minutes(i64::from(cfg.slot_interval));
            created.push(insert_appointment(&tx, &Appointment::block(start, end))?);
        }
        ttlog(
            &tx,
            "block",
            &date.to_string(),
            &format!("Blocked {} slot(s): {}", created.len(), normalized.join(" ")),
        )?;
        tx.commit()?;

        Ok(created)
    }

    /// Cancel a booking or lift a block.
    pub fn cancel(pool: &DbPool, id: i64) -> AppResult<()> {
        if delete_appointment(&pool.conn, id)? == 0 {
            return Err(AppError::AppointmentNotFound(id));
        }
        ttlog(&pool.conn, "cancel", &id.to_string(), "Appointment cancelled")?;
        Ok(())
    }
}
