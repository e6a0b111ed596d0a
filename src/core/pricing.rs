use crate::models::service::{BathType, Extras, PetSize};

/// Price of a booking in cents: bath base price scaled by pet size, plus extras.
pub fn quote_cents(bath: BathType, size: PetSize, extras: &Extras) -> i64 {
    bath.base_price_cents() * size.multiplier_pct() / 100 + extras.price_cents()
}
