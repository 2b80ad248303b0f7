//! Endpoint lookup and request URL construction.

use reqwest::Url;

use clearance_types::{ControlDate, Route, TrackKind};

use crate::TacError;

/// Source of the authority's endpoint URLs.
///
/// Values are looked up on every call, so a provider backed by a live admin
/// store picks up changes without a restart.
pub trait EndpointProvider: Send + Sync {
    /// Base URL for the given kind of track, if configured.
    fn endpoint(&self, kind: TrackKind) -> Option<String>;

    /// Leading identifier of DCC tracks.
    fn dcc_track_prefix(&self) -> String;
}

/// Build the `POST` target for a track.
///
/// Query parameters, in order: `controlDate` when a control date is given,
/// then `fromCountry`, `toCountry` and `travelType` when a route is given.
/// Parameters already present on the configured endpoint are kept first.
pub fn build_url(
    provider: &dyn EndpointProvider,
    track: &str,
    control_date: Option<&ControlDate>,
    route: Option<&Route>,
) -> Result<(TrackKind, Url), TacError> {
    let kind = TrackKind::classify(track, &provider.dcc_track_prefix());
    let base = provider.endpoint(kind).ok_or_else(|| TacError::Endpoint {
        url: String::new(),
        reason: format!("no endpoint configured for {} tracks", kind.as_str()),
    })?;
    let mut url = Url::parse(base.trim()).map_err(|e| TacError::Endpoint {
        url: base.clone(),
        reason: e.to_string(),
    })?;

    let mut params: Vec<(&str, String)> = Vec::with_capacity(4);
    if let Some(date) = control_date {
        params.push(("controlDate", date.to_string()));
    }
    if let Some(route) = route {
        params.push(("fromCountry", route.from.to_string()));
        params.push(("toCountry", route.to.to_string()));
        params.push(("travelType", route.travel_type.as_str().to_string()));
    }

    // Values are digits, ASCII letters, '-', 'T' and ':' only, all legal in a
    // query component, so they are written verbatim.
    if !params.is_empty() {
        let mut query = url.query().map(str::to_string).unwrap_or_default();
        for (key, value) in params {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(key);
            query.push('=');
            query.push_str(&value);
        }
        url.set_query(Some(&query));
    }

    Ok((kind, url))
}
