//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Calculation, Station};

/// Home page: station picker, quick-sum form, and the visitor's last
/// calculation result if one is waiting in their session.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    /// Public stations for the picker datalist.
    pub stations: &'a [Station],

    /// Departure result to show, if the last calculation was one.
    pub departure: Option<DepartureView>,

    /// Sum result to show, if the last calculation was one.
    pub sum: Option<SumView>,
}

impl<'a> IndexTemplate<'a> {
    /// Build the page, splitting the stored result (if any) into the
    /// per-variant fields the template matches on.
    pub fn new(stations: &'a [Station], result: Option<Calculation>) -> Self {
        let (departure, sum) = match result {
            Some(Calculation::Departure {
                from,
                to,
                time,
                link,
            }) => (
                Some(DepartureView {
                    from,
                    to,
                    time,
                    link,
                }),
                None,
            ),
            Some(Calculation::Sum {
                first,
                second,
                total,
            }) => (
                None,
                Some(SumView {
                    first,
                    second,
                    total,
                }),
            ),
            None => (None, None),
        };

        Self {
            stations,
            departure,
            sum,
        }
    }
}

/// Departure result view model.
#[derive(Debug, Clone)]
pub struct DepartureView {
    pub from: String,
    pub to: String,
    pub time: String,
    pub link: String,
}

/// Sum result view model.
#[derive(Debug, Clone)]
pub struct SumView {
    pub first: i64,
    pub second: i64,
    pub total: i64,
}
