//! TAC response model and structural validation.
//!
//! Every field is optional on the wire: a missing piece is a validation
//! outcome, not a decoding error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level body returned by the authority.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TacResponse {
    #[serde(default)]
    pub data: Option<TacData>,
}

/// Payload of a response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TacData {
    /// Absent in the legacy contract, which carries a flat lite status instead.
    #[serde(default)]
    pub resource_type: Option<ResourceType>,

    #[serde(default, alias = "dynamicDataList")]
    pub dynamic: Option<Vec<Option<DynamicData>>>,
}

/// One decoded certificate record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicData {
    #[serde(default)]
    pub lite_first_name: Option<String>,
    #[serde(default)]
    pub lite_last_name: Option<String>,
    #[serde(default)]
    pub lite_validity_status: Option<String>,
    #[serde(default)]
    pub vaccination_rule_engine_result: Option<RuleEngineResult>,
    #[serde(default)]
    pub test_rule_engine_result: Option<RuleEngineResult>,
    #[serde(default)]
    pub recovery_rule_engine_result: Option<RuleEngineResult>,
}

/// Outcome of the authority's rule engine for one kind of evidence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleEngineResult {
    #[serde(default)]
    pub country_result: Option<CountryResult>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResult {
    #[serde(default)]
    pub validity_status: Option<String>,
}

/// Category of clearance evidence carried by a response.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    Vaccination,
    Test,
    Recovery,
    /// Any tag this client does not know; never validates.
    Unknown(String),
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vaccination => "VACCINATION",
            Self::Test => "TEST",
            Self::Recovery => "RECOVERY",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for ResourceType {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "VACCINATION" => Self::Vaccination,
            "TEST" => Self::Test,
            "RECOVERY" => Self::Recovery,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<ResourceType> for String {
    fn from(rt: ResourceType) -> Self {
        rt.as_str().to_string()
    }
}

impl TacResponse {
    /// The only record consulted by validation. Later records are ignored.
    pub fn first_record(&self) -> Option<&DynamicData> {
        self.data
            .as_ref()?
            .dynamic
            .as_ref()?
            .first()?
            .as_ref()
    }

    /// Number of records beyond the first.
    pub fn ignored_records(&self) -> usize {
        self.data
            .as_ref()
            .and_then(|d| d.dynamic.as_ref())
            .map_or(0, |list| list.len().saturating_sub(1))
    }
}

impl DynamicData {
    /// The rule-engine result matching `resource_type`.
    pub fn rule_engine_result(&self, resource_type: &ResourceType) -> Option<&RuleEngineResult> {
        match resource_type {
            ResourceType::Vaccination => self.vaccination_rule_engine_result.as_ref(),
            ResourceType::Test => self.test_rule_engine_result.as_ref(),
            ResourceType::Recovery => self.recovery_rule_engine_result.as_ref(),
            ResourceType::Unknown(_) => None,
        }
    }
}

/// First structural problem found in a response.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShapeDefect {
    #[error("no response body")]
    MissingResponse,
    #[error("response has no data")]
    MissingData,
    #[error("dynamic data list is missing or empty")]
    EmptyDynamicData,
    #[error("first dynamic data record is null")]
    NullFirstRecord,
    #[error("unknown resource type {0:?}")]
    UnknownResourceType(String),
    #[error("no rule engine result for resource type {0}")]
    MissingRuleEngineResult(String),
    #[error("rule engine result has no country result")]
    MissingCountryResult,
    #[error("no validity status")]
    MissingStatus,
    #[error("validity status {0:?} is not valid")]
    NotValid(String),
}

/// Decides whether a response certifies a valid clearance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseValidator {
    valid_status: String,
    case_insensitive: bool,
}

impl ResponseValidator {
    pub fn new(valid_status: impl Into<String>, case_insensitive: bool) -> Self {
        Self {
            valid_status: valid_status.into(),
            case_insensitive,
        }
    }

    /// Check the response shape and status; on success return the first record.
    pub fn check<'a>(&self, response: Option<&'a TacResponse>) -> Result<&'a DynamicData, ShapeDefect> {
        let response = response.ok_or(ShapeDefect::MissingResponse)?;
        let data = response.data.as_ref().ok_or(ShapeDefect::MissingData)?;
        let first = data
            .dynamic
            .as_ref()
            .and_then(|list| list.first())
            .ok_or(ShapeDefect::EmptyDynamicData)?;
        let record = first.as_ref().ok_or(ShapeDefect::NullFirstRecord)?;

        let status = match &data.resource_type {
            None => record.lite_validity_status.as_deref(),
            Some(ResourceType::Unknown(raw)) => {
                return Err(ShapeDefect::UnknownResourceType(raw.clone()))
            }
            Some(resource_type) => {
                let result = record
                    .rule_engine_result(resource_type)
                    .ok_or_else(|| ShapeDefect::MissingRuleEngineResult(resource_type.as_str().to_string()))?;
                let country = result
                    .country_result
                    .as_ref()
                    .ok_or(ShapeDefect::MissingCountryResult)?;
                country.validity_status.as_deref()
            }
        };

        let status = status.ok_or(ShapeDefect::MissingStatus)?;
        if self.status_matches(status) {
            Ok(record)
        } else {
            Err(ShapeDefect::NotValid(status.to_string()))
        }
    }

    pub fn is_valid(&self, response: Option<&TacResponse>) -> bool {
        self.check(response).is_ok()
    }

    fn status_matches(&self, status: &str) -> bool {
        if self.case_insensitive {
            status.eq_ignore_ascii_case(&self.valid_status)
        } else {
            status == self.valid_status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ResponseValidator {
        ResponseValidator::new("VALID", true)
    }

    fn parse(json: &str) -> TacResponse {
        serde_json::from_str(json).expect("test fixture should parse")
    }

    #[test]
    fn vaccination_response_is_valid() {
        let resp = parse(
            r#"{"data":{"resourceType":"VACCINATION","dynamic":[{
                "liteFirstName":"MARIE","liteLastName":"DUPONT",
                "vaccinationRuleEngineResult":{"countryResult":{"validityStatus":"VALID"}}
            }]}}"#,
        );
        let record = validator().check(Some(&resp)).unwrap();
        assert_eq!(record.lite_last_name.as_deref(), Some("DUPONT"));
    }

    #[test]
    fn status_comparison_honours_case_policy() {
        let resp = parse(
            r#"{"data":{"resourceType":"test","dynamic":[{
                "testRuleEngineResult":{"countryResult":{"validityStatus":"valid"}}
            }]}}"#,
        );
        assert!(ResponseValidator::new("VALID", true).is_valid(Some(&resp)));
        assert_eq!(
            ResponseValidator::new("VALID", false).check(Some(&resp)),
            Err(ShapeDefect::NotValid("valid".into()))
        );
    }

    #[test]
    fn recovery_consults_only_recovery_field() {
        let resp = parse(
            r#"{"data":{"resourceType":"RECOVERY","dynamic":[{
                "vaccinationRuleEngineResult":{"countryResult":{"validityStatus":"VALID"}},
                "recoveryRuleEngineResult":{}
            }]}}"#,
        );
        assert_eq!(
            validator().check(Some(&resp)),
            Err(ShapeDefect::MissingCountryResult)
        );
    }

    #[test]
    fn unknown_resource_type_never_matches() {
        let resp = parse(
            r#"{"data":{"resourceType":"EXEMPTION","dynamic":[{
                "liteValidityStatus":"VALID",
                "vaccinationRuleEngineResult":{"countryResult":{"validityStatus":"VALID"}}
            }]}}"#,
        );
        assert_eq!(
            validator().check(Some(&resp)),
            Err(ShapeDefect::UnknownResourceType("EXEMPTION".into()))
        );
    }

    #[test]
    fn legacy_lite_status_used_without_resource_type() {
        let resp = parse(r#"{"data":{"dynamicDataList":[{"liteValidityStatus":"VALID"}]}}"#);
        assert!(validator().is_valid(Some(&resp)));
    }

    #[test]
    fn malformed_shapes_are_rejected() {
        let v = validator();
        assert_eq!(v.check(None), Err(ShapeDefect::MissingResponse));
        assert_eq!(v.check(Some(&parse("{}"))), Err(ShapeDefect::MissingData));
        assert_eq!(
            v.check(Some(&parse(r#"{"data":{"dynamic":[]}}"#))),
            Err(ShapeDefect::EmptyDynamicData)
        );
        assert_eq!(
            v.check(Some(&parse(r#"{"data":{"dynamic":[null]}}"#))),
            Err(ShapeDefect::NullFirstRecord)
        );
        assert_eq!(
            v.check(Some(&parse(r#"{"data":{"dynamic":[{}]}}"#))),
            Err(ShapeDefect::MissingStatus)
        );
    }

    #[test]
    fn only_first_record_is_consulted() {
        let resp = parse(
            r#"{"data":{"dynamic":[
                {"liteValidityStatus":"EXPIRED"},
                {"liteValidityStatus":"VALID"}
            ]}}"#,
        );
        assert_eq!(resp.ignored_records(), 1);
        assert_eq!(
            validator().check(Some(&resp)),
            Err(ShapeDefect::NotValid("EXPIRED".into()))
        );
    }

    #[test]
    fn resource_type_keeps_unknown_tag() {
        assert_eq!(ResourceType::from("Vaccination".to_string()), ResourceType::Vaccination);
        assert_eq!(
            ResourceType::from("DCC_EXEMPTION".to_string()).as_str(),
            "DCC_EXEMPTION"
        );
    }
}
