use drivetime_core::destination::Destination;
use serde::Deserialize;
use tracing::warn;

use crate::opening_hours::{OpeningHours, RawOpeningHours};

/// A kitchen as listed by the kitchen API.
///
/// Hours and timezone are informational, they are not used to pick the
/// closest kitchen. Malformed hours fall back to [`OpeningHours::AlwaysOpen`].
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawKitchen")]
pub struct Kitchen {
    pub id: String,
    pub name: String,
    /// Street, city, state and zip code in a single line, as the directions API expects
    pub address: String,
    pub hours: OpeningHours,
    pub timezone: Option<String>,
}

#[derive(Deserialize)]
struct RawKitchen {
    id: String,
    name: String,
    address_1: Option<String>,
    address_2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    hours: Option<serde_json::Value>,
    timezone: Option<String>,
}

impl From<RawKitchen> for Kitchen {
    fn from(raw: RawKitchen) -> Self {
        let address = condense_address(&[
            ("", raw.address_1.as_deref()),
            (" ", raw.address_2.as_deref()),
            (", ", raw.city.as_deref()),
            (", ", raw.state.as_deref()),
            (", ", raw.zip_code.as_deref()),
        ]);

        let hours = parse_hours(&raw.id, raw.hours);

        Kitchen {
            id: raw.id,
            name: raw.name,
            address,
            hours,
            timezone: raw.timezone.filter(|timezone| !timezone.is_empty()),
        }
    }
}

fn parse_hours(kitchen_id: &str, hours: Option<serde_json::Value>) -> OpeningHours {
    let raw = match hours
        .map(serde_json::from_value::<RawOpeningHours>)
        .transpose()
    {
        Ok(raw) => raw,
        Err(err) => {
            warn!("Kitchen {} has unreadable hours, assuming always open: {}", kitchen_id, err);
            return OpeningHours::AlwaysOpen;
        }
    };

    OpeningHours::try_from(raw).unwrap_or_else(|err| {
        warn!("Kitchen {} has unreadable hours, assuming always open: {}", kitchen_id, err);
        OpeningHours::AlwaysOpen
    })
}

fn condense_address(parts: &[(&str, Option<&str>)]) -> String {
    let mut address = String::new();

    for (separator, part) in parts {
        if let Some(part) = part.filter(|part| !part.is_empty()) {
            address.push_str(separator);
            address.push_str(part);
        }
    }

    address
}

impl From<Kitchen> for Destination {
    fn from(kitchen: Kitchen) -> Self {
        Destination {
            id: kitchen.id,
            name: kitchen.name,
            address: kitchen.address,
        }
    }
}
