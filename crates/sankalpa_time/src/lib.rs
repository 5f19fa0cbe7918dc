//! Civil calendar and time-scale helpers for sunrise-anchored computations.
//!
//! This crate provides:
//! - [`CivilDate`] and [`TzOffset`] with validated construction
//! - local midnight / local noon UTC instants for a civil date
//! - Julian Date conversions for `chrono` UTC instants
//! - Greenwich and local sidereal time

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilDate, MAX_OFFSET_HOURS, TzOffset, local_midnight_utc, local_noon_utc};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, UNIX_EPOCH_JD, centuries_since_j2000, date_to_jd_0h,
    instant_to_jd, jd_to_instant,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_at, gmst_rad, local_sidereal_time_rad};
