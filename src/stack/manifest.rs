//! Serializable description of a stack.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::DeploymentEnv;

/// What `synth` emits: everything provisioning needs, as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackManifest {
    pub id: String,
    pub stack_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<DeploymentEnv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<CustomDomain>,
    pub function_environment: BTreeMap<String, String>,
}

/// Custom domain for the Slack endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDomain {
    pub domain_name: String,
    pub certificate_arn: String,
}
