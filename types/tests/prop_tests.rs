use proptest::prelude::*;

use clearance_types::{ControlDate, CountryCode, TrackKind};

proptest! {
    /// Any two- or three-letter ASCII code is accepted and stored upper-case.
    #[test]
    fn country_code_accepts_letters(raw in "[a-zA-Z]{2,3}") {
        let code = CountryCode::new(&raw).unwrap();
        prop_assert_eq!(code.as_str(), raw.to_ascii_uppercase());
    }

    /// Codes containing anything other than letters are rejected.
    #[test]
    fn country_code_rejects_non_letters(raw in "[a-zA-Z]?[0-9_\\-][a-zA-Z]?") {
        prop_assert!(CountryCode::new(&raw).is_err());
    }

    /// Prefix classification does not depend on the case of the track.
    #[test]
    fn dcc_classification_ignores_case(body in "[A-Z0-9:]{0,40}") {
        let upper = format!("HC1:{body}");
        let lower = upper.to_ascii_lowercase();
        prop_assert_eq!(TrackKind::classify(&upper, "HC1:"), TrackKind::Dcc);
        prop_assert_eq!(TrackKind::classify(&lower, "HC1:"), TrackKind::Dcc);
    }

    /// The query-string form always has the fixed 19-character layout.
    #[test]
    fn control_date_has_fixed_layout(
        year in 1970i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let at = chrono::NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap();
        let rendered = ControlDate::new(at).to_string();
        prop_assert_eq!(rendered.len(), 19);
        prop_assert_eq!(&rendered[10..11], "T");
        prop_assert_eq!(ControlDate::parse(&rendered).unwrap().as_naive(), at);
    }
}
