use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::{BookingLogic, BookingRequest};
use crate::core::projector::ProjectionOptions;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::service::Extras;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::format_cents;

/// Book a customer appointment.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        date: date_str,
        time,
        client,
        pet,
        breed,
        size,
        contact,
        bath,
        hydration,
        nails,
        ears,
        notes,
        not_vaccinated,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let req = BookingRequest {
            client_name: client.clone(),
            pet_name: pet.clone(),
            pet_breed: breed.clone(),
            pet_size: *size,
            contact: contact.clone(),
            vaccinated: !*not_vaccinated,
            date: d,
            time: time.clone(),
            bath_type: *bath,
            extras: Extras {
                hydration: *hydration,
                nail_trimming: *nails,
                ear_cleaning: *ears,
            },
            observations: notes.clone(),
        };

        let opts = ProjectionOptions::from_config(cfg)?;
        let pool = DbPool::open(cfg)?;
        let apt = BookingLogic::book(&pool, cfg, &opts, &req)?;

        success(format!(
            "Booking #{} confirmed for {} on {} at {}, total {}",
            apt.id,
            apt.subject_name,
            d,
            time,
            format_cents(apt.total_price_cents)
        ));
    }

    Ok(())
}
