//! Vertical transport types.

use std::fmt;

use super::coordinate::Coordinate;

/// Error returned when parsing an unrecognized travel type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown travel type: {0}")]
pub struct UnknownTravelType(pub String);

/// Kind of vertical transport connecting two floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelType {
    Lift,
    Stairs,
    Escalator,
    Ramp,
}

impl TravelType {
    /// Parse the wire spelling (`LIFT`, `STAIRS`, `ESCALATOR`, `RAMP`).
    ///
    /// # Examples
    ///
    /// ```
    /// use transfer_server::domain::TravelType;
    ///
    /// assert_eq!(TravelType::parse("LIFT").unwrap(), TravelType::Lift);
    /// assert!(TravelType::parse("lift").is_err());
    /// assert!(TravelType::parse("WALK").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, UnknownTravelType> {
        match s {
            "LIFT" => Ok(TravelType::Lift),
            "STAIRS" => Ok(TravelType::Stairs),
            "ESCALATOR" => Ok(TravelType::Escalator),
            "RAMP" => Ok(TravelType::Ramp),
            other => Err(UnknownTravelType(other.to_string())),
        }
    }

    /// Lowercase name used in instruction text.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelType::Lift => "lift",
            TravelType::Stairs => "stairs",
            TravelType::Escalator => "escalator",
            TravelType::Ramp => "ramp",
        }
    }

    /// Indefinite article to put in front of the name.
    pub fn article(&self) -> &'static str {
        match self {
            TravelType::Escalator => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lift, staircase, escalator or ramp at a point location.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalTransport {
    pub coordinate: Coordinate,
    pub kind: TravelType,
    /// Free-text direction from the data source (e.g. "up", "down").
    pub direction: Option<String>,
    pub source_floor: i32,
    pub destination_floor: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_kinds() {
        assert_eq!(TravelType::parse("LIFT"), Ok(TravelType::Lift));
        assert_eq!(TravelType::parse("STAIRS"), Ok(TravelType::Stairs));
        assert_eq!(TravelType::parse("ESCALATOR"), Ok(TravelType::Escalator));
        assert_eq!(TravelType::parse("RAMP"), Ok(TravelType::Ramp));
    }

    #[test]
    fn reject_unknown() {
        assert_eq!(
            TravelType::parse("ELEVATOR"),
            Err(UnknownTravelType("ELEVATOR".to_string()))
        );
        assert!(TravelType::parse("").is_err());
        assert!(TravelType::parse("Lift").is_err());
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(TravelType::Lift.to_string(), "lift");
        assert_eq!(TravelType::Escalator.to_string(), "escalator");
    }

    #[test]
    fn articles() {
        assert_eq!(TravelType::Lift.article(), "a");
        assert_eq!(TravelType::Stairs.article(), "a");
        assert_eq!(TravelType::Escalator.article(), "an");
        assert_eq!(TravelType::Ramp.article(), "a");
    }
}
