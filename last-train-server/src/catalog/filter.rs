//! Inclusion rules for the public station list.
//!
//! The corpus mixes passenger stations with depots, sidings, yards and
//! other operational locations. Whether a record is publishable is
//! decided by one ordered rule list; the pipeline itself never changes
//! when a rule is added or removed.

use crate::domain::Station;

use super::corpus::CorpusRecord;

/// Description substrings that mark a location as an operational site
/// rather than a passenger station. Matching is case-sensitive, exactly
/// as the strings appear in the corpus.
pub const DESCRIPTION_DENYLIST: &[&str] = &[
    "DEPOT",
    "STORE",
    "SIDING",
    "YARD",
    "WORKS",
    "MAINT",
    "LOCOMOTIVE",
    "REPAIR",
    "BUS S",
    "SLIPWAY",
    "Metrolink",
    "MTLK",
];

/// A single inclusion rule applied to raw corpus records.
pub struct InclusionRule {
    /// Short name, used in tests and diagnostics.
    pub name: &'static str,

    /// Returns true if the record may be published.
    pub keep: fn(&CorpusRecord) -> bool,
}

/// The ordered rule list. A record must pass every rule to appear in
/// the public catalog.
pub const PUBLIC_STATION_RULES: &[InclusionRule] = &[
    InclusionRule {
        name: "alpha-present",
        keep: |r| !r.alpha.trim().is_empty(),
    },
    InclusionRule {
        // X-prefixed alpha codes are internal/non-passenger locations.
        name: "alpha-public",
        keep: |r| !r.alpha.starts_with('X'),
    },
    InclusionRule {
        name: "description-present",
        keep: |r| !r.description.trim().is_empty(),
    },
    InclusionRule {
        // Some corpus rows carry a bare "." where a name should be.
        name: "description-not-placeholder",
        keep: |r| r.description != ".",
    },
    InclusionRule {
        name: "description-allowed",
        keep: |r| {
            !DESCRIPTION_DENYLIST
                .iter()
                .any(|keyword| r.description.contains(keyword))
        },
    },
];

/// The name of the first rule that rejects this record, or `None` if
/// the record is publishable.
pub fn excluded_by(record: &CorpusRecord) -> Option<&'static str> {
    PUBLIC_STATION_RULES
        .iter()
        .find(|rule| !(rule.keep)(record))
        .map(|rule| rule.name)
}

/// Whether a record passes every inclusion rule.
pub fn is_public(record: &CorpusRecord) -> bool {
    excluded_by(record).is_none()
}

/// Apply the rule list and project the survivors to stations, sorted by
/// name case-insensitively. The sort is stable, so records sharing a
/// name keep their corpus order; duplicates are not removed.
pub fn public_stations(records: &[CorpusRecord]) -> Vec<Station> {
    let mut stations: Vec<Station> = records
        .iter()
        .filter(|record| is_public(record))
        .map(|record| Station::new(record.alpha.clone(), record.description.clone()))
        .collect();

    stations.sort_by_cached_key(|station| station.name.to_lowercase());
    stations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(alpha: &str, description: &str) -> CorpusRecord {
        CorpusRecord {
            nlc: 10000,
            stanox: "00000".into(),
            tiploc: "TIPLOC".into(),
            alpha: alpha.into(),
            uic: "700000".into(),
            description: description.into(),
            short_description: description.chars().take(16).collect(),
        }
    }

    fn codes(stations: &[Station]) -> Vec<&str> {
        stations.iter().map(|s| s.code.as_str()).collect()
    }

    #[test]
    fn blank_alpha_is_excluded() {
        assert_eq!(excluded_by(&record("", "SOMEWHERE")), Some("alpha-present"));
        assert_eq!(
            excluded_by(&record("   ", "SOMEWHERE")),
            Some("alpha-present")
        );
        assert!(public_stations(&[record("", "SOMEWHERE")]).is_empty());
    }

    #[test]
    fn x_prefixed_alpha_is_excluded() {
        assert_eq!(
            excluded_by(&record("XIF", "IMPERIAL WHARF")),
            Some("alpha-public")
        );
        // Only a leading X matters.
        assert!(is_public(&record("EXD", "EXETER ST DAVIDS")));
        assert!(is_public(&record("PAX", "PADDOCK WOOD")));
    }

    #[test]
    fn blank_or_placeholder_description_is_excluded() {
        assert_eq!(
            excluded_by(&record("AAA", "")),
            Some("description-present")
        );
        assert_eq!(
            excluded_by(&record("AAA", ".")),
            Some("description-not-placeholder")
        );
    }

    #[test]
    fn every_denylist_keyword_excludes() {
        for keyword in DESCRIPTION_DENYLIST {
            let description = format!("SOMEWHERE {keyword} NORTH");
            assert_eq!(
                excluded_by(&record("AAA", &description)),
                Some("description-allowed"),
                "keyword {keyword:?} should exclude"
            );
        }
    }

    #[test]
    fn denylist_matching_is_case_sensitive() {
        // "Depot" is not "DEPOT"; the corpus writes operational sites
        // in upper case, so the lower-case form passes.
        assert!(is_public(&record("AAA", "Depot Lane Halt")));
        // "Metrolink" is denylisted in mixed case; the upper-case form
        // is a different string and passes.
        assert!(is_public(&record("AAA", "METROLINK CORNER")));
        assert!(!is_public(&record("AAA", "Ashton Moss Metrolink")));
    }

    #[test]
    fn bus_station_is_caught_by_bus_s() {
        assert!(!is_public(&record("AAA", "NORWICH BUS STATION")));
    }

    #[test]
    fn passenger_station_survives_and_projects() {
        let stations = public_stations(&[record("FMA", "FENTON MANOR")]);
        assert_eq!(stations, vec![Station::new("FMA", "FENTON MANOR")]);
    }

    #[test]
    fn example_scenario_fma_kept_xif_depot_dropped() {
        // The XIF record is excluded twice over: X-prefix and DEPOT.
        let records = [record("FMA", "FENTON MANOR"), record("XIF", "SOME DEPOT")];

        let stations = public_stations(&records);

        assert_eq!(stations, vec![Station::new("FMA", "FENTON MANOR")]);
        assert_eq!(excluded_by(&records[1]), Some("alpha-public"));
    }

    #[test]
    fn output_is_sorted_case_insensitively() {
        let records = [
            record("ZZZ", "ZEALAND STREET"),
            record("MMM", "apperley bridge"),
            record("AAA", "ABERDEEN"),
        ];

        let stations = public_stations(&records);

        // Byte order would put "ZEALAND STREET" before the lower-case
        // name; case-insensitive order interleaves them.
        assert_eq!(codes(&stations), vec!["AAA", "MMM", "ZZZ"]);
    }

    #[test]
    fn equal_names_keep_corpus_order() {
        let records = [
            record("BBB", "PARKWAY"),
            record("AAA", "PARKWAY"),
            record("CCC", "PARKWAY"),
        ];

        let stations = public_stations(&records);

        assert_eq!(codes(&stations), vec!["BBB", "AAA", "CCC"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let records = [record("SAC", "ST ALBANS CITY"), record("SAC", "ST ALBANS CITY")];

        let stations = public_stations(&records);

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0], stations[1]);
    }

    #[test]
    fn rules_apply_in_declared_order() {
        // Fails both alpha rules and the denylist; the first rule wins.
        let rec = record("", "SOME DEPOT");
        assert_eq!(excluded_by(&rec), Some("alpha-present"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        /// Arbitrary corpus records: alpha codes and descriptions that
        /// wander across the keep/drop boundary.
        fn arb_record()(
            alpha in "[A-Z ]{0,3}",
            description in "[A-Za-z .]{0,20}",
            nlc in 0i64..1_000_000,
        ) -> CorpusRecord {
            CorpusRecord {
                nlc,
                stanox: "00000".into(),
                tiploc: "TIPLOC".into(),
                alpha,
                uic: "700000".into(),
                description,
                short_description: String::new(),
            }
        }
    }

    proptest! {
        /// Same input, same output: the pipeline is deterministic.
        #[test]
        fn deterministic(records in proptest::collection::vec(arb_record(), 0..40)) {
            prop_assert_eq!(public_stations(&records), public_stations(&records));
        }

        /// The output is always sorted by lowercased name.
        #[test]
        fn output_sorted(records in proptest::collection::vec(arb_record(), 0..40)) {
            let stations = public_stations(&records);
            let keys: Vec<String> = stations.iter().map(|s| s.name.to_lowercase()).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(keys, sorted);
        }

        /// No excluded record ever survives, and every survivor comes
        /// from some input record.
        #[test]
        fn survivors_pass_all_rules(records in proptest::collection::vec(arb_record(), 0..40)) {
            let stations = public_stations(&records);
            for station in &stations {
                prop_assert!(!station.code.trim().is_empty());
                prop_assert!(!station.code.starts_with('X'));
                prop_assert!(records.iter().any(
                    |r| r.alpha == station.code && r.description == station.name
                ));
            }
            let expected = records.iter().filter(|r| is_public(r)).count();
            prop_assert_eq!(stations.len(), expected);
        }
    }
}
