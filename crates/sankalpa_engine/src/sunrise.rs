//! Sunrise Locator: the anchor instant for a civil date.
//!
//! The search starts `margin` before local midnight (UTC) and asks the
//! ephemeris for the next sunrise. If the ephemeris errors or finds none,
//! local civil noon is used instead. This stage never fails.

use chrono::{DateTime, Duration, Utc};
use sankalpa_ephem::{Ephemeris, GeoObserver};
use sankalpa_time::{CivilDate, TzOffset, local_midnight_utc, local_noon_utc};
use serde::Serialize;
use tracing::{debug, warn};

/// How the anchor instant was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    Sunrise,
    NoonFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SunriseAnchor {
    /// Instant at which all elements are evaluated.
    pub instant: DateTime<Utc>,
    pub kind: AnchorKind,
    /// UTC instant the sunrise search started from.
    pub search_start: DateTime<Utc>,
}

/// UTC instant `margin` before local midnight of `date`.
pub fn sunrise_search_start(date: CivilDate, tz: TzOffset, margin: Duration) -> DateTime<Utc> {
    local_midnight_utc(date, tz) - margin
}

/// First sunrise of `date` at `observer`, or local noon if none is found.
pub fn locate_sunrise<E: Ephemeris>(
    ephemeris: &E,
    observer: &GeoObserver,
    date: CivilDate,
    tz: TzOffset,
    margin: Duration,
) -> SunriseAnchor {
    let search_start = sunrise_search_start(date, tz, margin);

    let fallback = |why: &str| {
        let noon = local_noon_utc(date, tz);
        warn!(%date, %tz, reason = why, %noon, "sunrise unavailable, anchoring on local noon");
        SunriseAnchor {
            instant: noon,
            kind: AnchorKind::NoonFallback,
            search_start,
        }
    };

    match ephemeris.next_sunrise(observer, &search_start) {
        Ok(Some(instant)) => {
            debug!(%date, %search_start, %instant, "sunrise located");
            SunriseAnchor {
                instant,
                kind: AnchorKind::Sunrise,
                search_start,
            }
        }
        Ok(None) => fallback("no sunrise within search horizon"),
        Err(e) => fallback(&e.to_string()),
    }
}
