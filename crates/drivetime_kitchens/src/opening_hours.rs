use fxhash::FxHashMap;
use jiff::civil::{Time, Weekday};
use serde::Deserialize;
use thiserror::Error;

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Error)]
#[error("Invalid opening hours on {day}: {value}")]
pub struct InvalidHours {
    day: &'static str,
    value: String,
}

/// Opening hours as sent by the kitchen API: a list of `[open, close]` pairs per day.
#[derive(Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct RawOpeningHours(FxHashMap<String, Vec<Vec<String>>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayHours {
    Open { open: Time, close: Time },
    Closed,
}

impl DayHours {
    /// A close time before the open time means the kitchen closes after midnight.
    pub fn is_open_at(&self, time: Time) -> bool {
        match *self {
            DayHours::Closed => false,
            DayHours::Open { open, close } if open <= close => open <= time && time < close,
            DayHours::Open { open, close } => time >= open || time < close,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyHours {
    pub sunday: DayHours,
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
}

impl WeeklyHours {
    pub fn day(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Sunday => &self.sunday,
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpeningHours {
    AlwaysOpen,
    Weekly(WeeklyHours),
}

impl OpeningHours {
    pub fn is_open_at(&self, weekday: Weekday, time: Time) -> bool {
        match self {
            OpeningHours::AlwaysOpen => true,
            OpeningHours::Weekly(hours) => hours.day(weekday).is_open_at(time),
        }
    }
}

impl TryFrom<Option<RawOpeningHours>> for OpeningHours {
    type Error = InvalidHours;

    fn try_from(raw: Option<RawOpeningHours>) -> Result<Self, Self::Error> {
        let Some(RawOpeningHours(days)) = raw else {
            return Ok(OpeningHours::AlwaysOpen);
        };

        let day = |name: &'static str| parse_day(name, days.get(name));

        Ok(OpeningHours::Weekly(WeeklyHours {
            sunday: day("sunday")?,
            monday: day("monday")?,
            tuesday: day("tuesday")?,
            wednesday: day("wednesday")?,
            thursday: day("thursday")?,
            friday: day("friday")?,
            saturday: day("saturday")?,
        }))
    }
}

/// Only the first pair of a day is used. 01:00 to 01:01 marks a closed day.
fn parse_day(day: &'static str, pairs: Option<&Vec<Vec<String>>>) -> Result<DayHours, InvalidHours> {
    let Some(pair) = pairs.and_then(|pairs| pairs.first()) else {
        return Ok(DayHours::Closed);
    };

    let [open, close] = pair.as_slice() else {
        return Err(InvalidHours {
            day,
            value: format!("{pair:?}"),
        });
    };

    if open == "01:00" && close == "01:01" {
        return Ok(DayHours::Closed);
    }

    let parse_time = |value: &String| {
        Time::strptime(TIME_FORMAT, value).map_err(|_| InvalidHours {
            day,
            value: value.clone(),
        })
    };

    Ok(DayHours::Open {
        open: parse_time(open)?,
        close: parse_time(close)?,
    })
}
