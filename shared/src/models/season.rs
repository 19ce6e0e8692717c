//! Indian growing seasons and their planting months

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Agricultural growing season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Season {
    /// Monsoon season
    Kharif,
    /// Winter season
    Rabi,
    /// Short summer season between Rabi and Kharif
    Zaid,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    /// Planting months offered for this season, in selector order
    pub fn months(&self) -> [Month; 4] {
        match self {
            Season::Kharif => [Month::June, Month::July, Month::August, Month::September],
            Season::Rabi => [Month::October, Month::November, Month::December, Month::January],
            Season::Zaid => [Month::February, Month::March, Month::April, Month::May],
        }
    }

    pub fn contains(&self, month: Month) -> bool {
        self.months().contains(&month)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Season::Kharif => "Monsoon crops planted during the rainy season.",
            Season::Rabi => "Winter crops planted during the post-monsoon season.",
            Season::Zaid => {
                "Summer crops planted during the short season between Rabi and Kharif."
            }
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Kharif => write!(f, "Kharif"),
            Season::Rabi => write!(f, "Rabi"),
            Season::Zaid => write!(f, "Zaid"),
        }
    }
}

impl FromStr for Season {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kharif" => Ok(Season::Kharif),
            "rabi" => Ok(Season::Rabi),
            "zaid" => Ok(Season::Zaid),
            _ => Err(ParseError::UnknownSeason(s.to_string())),
        }
    }
}

/// Calendar month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// The season whose planting window includes this month
    pub fn season(&self) -> Season {
        match self {
            Month::June | Month::July | Month::August | Month::September => Season::Kharif,
            Month::October | Month::November | Month::December | Month::January => Season::Rabi,
            Month::February | Month::March | Month::April | Month::May => Season::Zaid,
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Month {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|month| month.name().to_lowercase() == wanted)
            .ok_or_else(|| ParseError::UnknownMonth(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_month_belongs_to_exactly_one_season() {
        for month in Month::ALL {
            let owners: Vec<Season> = Season::ALL
                .into_iter()
                .filter(|season| season.contains(month))
                .collect();
            assert_eq!(owners, vec![month.season()]);
        }
    }

    #[test]
    fn test_rabi_months() {
        assert_eq!(
            Season::Rabi.months(),
            [Month::October, Month::November, Month::December, Month::January]
        );
        assert!(!Season::Rabi.contains(Month::June));
    }

    #[test]
    fn test_parse_season_and_month() {
        assert_eq!("kharif".parse::<Season>(), Ok(Season::Kharif));
        assert_eq!("Zaid".parse::<Season>(), Ok(Season::Zaid));
        assert!("Monsoon".parse::<Season>().is_err());
        assert_eq!("november".parse::<Month>(), Ok(Month::November));
        assert!("Smarch".parse::<Month>().is_err());
    }
}
