//! Shop logic. `slots`, `cycle`, `projector` and `availability` are pure
//! functions of their inputs; the remaining modules pair them with storage.

pub mod agenda;
pub mod availability;
pub mod booking;
pub mod cycle;
pub mod import;
pub mod log;
pub mod pricing;
pub mod projector;
pub mod rules;
pub mod slots;
