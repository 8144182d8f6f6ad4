use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::error::{FootballDataError, Result};

/// Countries whose listing pages this crate knows how to read.
///
/// The `Display` value is the token used in the index page URL
/// (`{token}m.php`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum Country {
    #[strum(serialize = "england")]
    England,
}

/// Leagues whose download links this crate knows how to resolve.
///
/// The `Display` value must equal the anchor text on the index page exactly;
/// link resolution matches on it verbatim.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum League {
    #[strum(serialize = "Premier League")]
    PremierLeague,
}

impl Country {
    pub(crate) fn parse(value: &str) -> Result<Self> {
        value
            .parse()
            .map_err(|_| FootballDataError::InvalidSelection {
                context: format!(
                    "country {value:?} is not supported (supported: {})",
                    Country::iter().join(", ")
                ),
            })
    }
}

impl League {
    pub(crate) fn parse(value: &str) -> Result<Self> {
        value
            .parse()
            .map_err(|_| FootballDataError::InvalidSelection {
                context: format!(
                    "league {value:?} is not supported (supported: {})",
                    League::iter().join(", ")
                ),
            })
    }
}
