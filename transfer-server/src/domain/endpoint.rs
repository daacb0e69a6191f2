//! Named start and destination points of a transfer.

use super::coordinate::Coordinate;

/// Whether an endpoint starts or ends the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    From,
    To,
}

impl EndpointRole {
    /// Parse the wire spelling (`from` or `to`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "from" => Some(EndpointRole::From),
            "to" => Some(EndpointRole::To),
            _ => None,
        }
    }
}

/// A user-facing named location, e.g. "Track 31".
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub role: EndpointRole,
    pub coordinate: Coordinate,
    /// Floor the endpoint sits on (0 when the source omits it).
    pub floor: i32,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roles() {
        assert_eq!(EndpointRole::parse("from"), Some(EndpointRole::From));
        assert_eq!(EndpointRole::parse("to"), Some(EndpointRole::To));
        assert_eq!(EndpointRole::parse("via"), None);
        assert_eq!(EndpointRole::parse("FROM"), None);
    }
}
