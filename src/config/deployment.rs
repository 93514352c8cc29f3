//! Deployment target (account / region pair).

use serde::{Deserialize, Deserializer, Serialize};

/// Where the stack is deployed. Either part may be left to the
/// deployment tooling's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeploymentEnv {
    /// Cloud account ID. Accepted as a YAML string or an unquoted number.
    #[serde(default, deserialize_with = "string_or_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Region, e.g. "ap-northeast-1".
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

// Account IDs are frequently written unquoted; a leading zero does not
// survive that, so such IDs have to be quoted.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}
