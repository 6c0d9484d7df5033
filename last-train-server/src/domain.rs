//! Core domain types shared by the catalog and the web layer.

use serde::{Deserialize, Serialize};

/// Departure time shown for every station-pair lookup.
///
/// TODO: replace with a real last-departure lookup once a timetable
/// source is wired in; until then every query gets this value.
pub const PLACEHOLDER_DEPARTURE_TIME: &str = "23:44";

/// Live-departures link shown alongside the placeholder time.
pub const PLACEHOLDER_DEPARTURE_LINK: &str = "https://www.nationalrail.co.uk/live-trains/details/?sid=202507218936451&type=departures&targetCrs=ZFD&filterCrs=SAC";

/// A public station as served to the picker and the `/stations` feed.
///
/// Every value in the published catalog has passed the inclusion rules:
/// `code` is a non-blank 3ALPHA that does not start with `X`, and
/// `name` is a non-blank description clear of the operational-site
/// denylist. Duplicates from the source dataset are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Three-letter alpha code (the rail industry's station id).
    pub code: String,

    /// Human-readable station name.
    pub name: String,
}

impl Station {
    /// Create a station from its code and name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A calculation result as rendered on the home page.
///
/// The app has two form variants: a two-number adder and the
/// station-pair departure lookup. Both submit to `/calculate` and
/// both are stored in the session as this one tagged type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Calculation {
    /// Sum of two integers.
    Sum { first: i64, second: i64, total: i64 },

    /// Last departure between two stations.
    ///
    /// `time` and `link` are currently the fixed placeholders above.
    Departure {
        from: String,
        to: String,
        time: String,
        link: String,
    },
}

impl Calculation {
    /// Sum of two integers. Returns `None` if the sum overflows; the
    /// caller treats that like any other invalid submission.
    pub fn sum(first: i64, second: i64) -> Option<Self> {
        let total = first.checked_add(second)?;
        Some(Calculation::Sum {
            first,
            second,
            total,
        })
    }

    /// Departure lookup between two stations, using the placeholder
    /// time and link.
    pub fn departure(from: impl Into<String>, to: impl Into<String>) -> Self {
        Calculation::Departure {
            from: from.into(),
            to: to.into(),
            time: PLACEHOLDER_DEPARTURE_TIME.to_string(),
            link: PLACEHOLDER_DEPARTURE_LINK.to_string(),
        }
    }
}
