//! Vedic calendar primitives over typed ecliptic longitudes.
//!
//! This crate provides:
//! - [`Longitude`] tagged [`Sayana`] / [`Nirayana`], normalized to [0, 360)
//! - Ayanamsa correctors (linear approximation, Lahiri + precession)
//! - Tithi/paksha, nakshatra, masa (Amanta), yoga and karana lookups
//! - The calendar-date ayana rule
//!
//! Every division assigns an exact boundary to the element that begins there.

pub mod ayana;
pub mod ayanamsa;
pub mod karana;
pub mod longitude;
pub mod masa;
pub mod nakshatra;
pub mod precession;
pub mod tithi;
pub mod util;
pub mod yoga;

pub use ayana::{Ayana, ayana_from_month_day};
pub use ayanamsa::{
    Ayanamsa, AyanamsaModel, LAHIRI_J2000_DEG, LahiriAyanamsa, LinearAyanamsa, UnknownAyanamsa,
};
pub use karana::{Karana, KaranaInfo, karana_from_elongation};
pub use longitude::{Frame, Longitude, Nirayana, Sayana};
pub use masa::{ALL_MASAS, Masa, MasaInfo, masa_from_sun};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use precession::{general_precession_arcsec, general_precession_deg};
pub use tithi::{Paksha, Tithi, TithiInfo, tithi_from_elongation, tithi_from_longitudes};
pub use util::normalize_360;
pub use yoga::{ALL_YOGAS, Yoga, YogaInfo, yoga_from_longitudes, yoga_from_sum};
