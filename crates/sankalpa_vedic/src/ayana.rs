//! Ayana (solar half-year) by calendar date.
//!
//! A fixed civil-calendar rule: 15 January through 15 July inclusive is
//! Uttarayana, every other day Dakshinayana. Year and location play no part.

use serde::Serialize;

/// First day of Uttarayana, encoded `month × 100 + day`.
pub const UTTARAYANA_FIRST: u32 = 115;
/// Last day of Uttarayana, encoded `month × 100 + day`.
pub const UTTARAYANA_LAST: u32 = 715;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ayana {
    /// Northward course of the Sun.
    Uttarayana,
    /// Southward course of the Sun.
    Dakshinayana,
}

impl Ayana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uttarayana => "Uttarāyaṇa",
            Self::Dakshinayana => "Dakṣiṇāyana",
        }
    }

    /// Locative form used in the sankalpam.
    pub const fn locative(self) -> &'static str {
        match self {
            Self::Uttarayana => "Uttarāyaṇe",
            Self::Dakshinayana => "Dakṣiṇāyane",
        }
    }
}

/// Ayana for a civil month (1-12) and day (1-31).
pub fn ayana_from_month_day(month: u32, day: u32) -> Ayana {
    let code = month * 100 + day;
    if (UTTARAYANA_FIRST..=UTTARAYANA_LAST).contains(&code) {
        Ayana::Uttarayana
    } else {
        Ayana::Dakshinayana
    }
}
