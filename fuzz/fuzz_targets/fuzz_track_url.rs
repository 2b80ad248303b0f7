#![no_main]

use clearance_tac::{build_url, TacConfig};
use clearance_types::TrackKind;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|track: &str| {
    // Any track resolves to one of the two configured endpoints.
    let config = TacConfig::default();
    let (kind, url) = build_url(&config, track, None, None).expect("default endpoints parse");
    let expected = match kind {
        TrackKind::Dcc => config.dcc_endpoint.as_str(),
        TrackKind::TwoDDoc => config.two_d_doc_endpoint.as_str(),
    };
    assert_eq!(url.as_str(), expected);
});
