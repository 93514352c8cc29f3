//! Tests for stack module.

use super::*;

fn config_yaml(extra: &str) -> String {
    format!(
        r#"
stackName: bot-prod
slackSigningSecret: signing-secret
slackBotToken: xoxb-token
slackBotMemberId: U0123456
chatGpt:
  apiKey: sk-test
  model: gpt-4
{}"#,
        extra
    )
}

fn stack(extra: &str) -> Result<Stack, StackError> {
    let config = Config::from_yaml(&config_yaml(extra)).unwrap();
    Stack::new(STACK_ID, StackProps::from_config(config))
}

// ==================== Construction tests ====================

#[test]
fn test_props_from_config() {
    let config = Config::from_yaml(&config_yaml(
        "env:\n  account: \"111122223333\"\n  region: us-east-1\n",
    ))
    .unwrap();
    let props = StackProps::from_config(config.clone());

    assert_eq!(props.stack_name, "bot-prod");
    assert_eq!(props.env, config.env);
    assert_eq!(props.config, config);
}

#[test]
fn test_new_stack() {
    let s = stack("").unwrap();
    assert_eq!(s.id(), STACK_ID);
    assert_eq!(s.manifest().unwrap().stack_name, "bot-prod");
}

#[test]
fn test_empty_id_rejected() {
    let config = Config::from_yaml(&config_yaml("")).unwrap();
    let result = Stack::new("", StackProps::from_config(config));
    assert!(matches!(result, Err(StackError::EmptyId)));
}

#[test]
fn test_domain_without_certificate_rejected() {
    let err = stack("domainName: bot.example.com\n").unwrap_err();
    assert!(matches!(err, StackError::IncompleteCustomDomain("certificateArn")));
    assert!(err.to_string().contains("missing certificateArn"));
}

#[test]
fn test_certificate_without_domain_rejected() {
    let err = stack("certificateArn: arn:aws:acm:us-east-1:1:certificate/x\n").unwrap_err();
    assert!(matches!(err, StackError::IncompleteCustomDomain("domainName")));
}

// ==================== Function environment tests ====================

#[test]
fn test_function_environment() {
    let vars = stack("logLevel: DEBUG\n").unwrap().function_environment().unwrap();

    assert_eq!(vars.get(LOG_LEVEL_VAR).map(String::as_str), Some("DEBUG"));
    assert_eq!(
        vars.get(SLACK_SIGNING_SECRET_VAR).map(String::as_str),
        Some("signing-secret")
    );
    assert_eq!(vars.get(SLACK_BOT_TOKEN_VAR).map(String::as_str), Some("xoxb-token"));
    assert_eq!(vars.get(SLACK_BOT_MEMBER_ID_VAR).map(String::as_str), Some("U0123456"));
    assert_eq!(
        vars.get(CHATGPT_SETTINGS_VAR).map(String::as_str),
        Some(r#"{"apiKey":"sk-test","model":"gpt-4"}"#)
    );
    assert_eq!(vars.len(), 5);
}

#[test]
fn test_function_environment_without_log_level() {
    let vars = stack("").unwrap().function_environment().unwrap();
    assert!(!vars.contains_key(LOG_LEVEL_VAR));
    assert_eq!(vars.len(), 4);
}

#[test]
fn test_chatgpt_settings_include_stream() {
    let yaml = config_yaml("").replace("model: gpt-4", "model: gpt-4\n  stream: false");
    let config = Config::from_yaml(&yaml).unwrap();
    let s = Stack::new(STACK_ID, StackProps::from_config(config)).unwrap();

    let vars = s.function_environment().unwrap();
    let settings: serde_json::Value = serde_json::from_str(&vars[CHATGPT_SETTINGS_VAR]).unwrap();

    assert_eq!(settings["apiKey"], "sk-test");
    assert_eq!(settings["model"], "gpt-4");
    assert_eq!(settings["stream"], false);
}

// ==================== Manifest tests ====================

#[test]
fn test_manifest_with_custom_domain() {
    let s = stack(
        "domainName: bot.example.com\ncertificateArn: arn:aws:acm:us-east-1:1:certificate/x\n",
    )
    .unwrap();
    let manifest = s.manifest().unwrap();

    assert_eq!(
        manifest.custom_domain,
        Some(CustomDomain {
            domain_name: "bot.example.com".to_string(),
            certificate_arn: "arn:aws:acm:us-east-1:1:certificate/x".to_string(),
        })
    );
}

#[test]
fn test_synth_json_shape() {
    let s = stack("env:\n  region: ap-northeast-1\n").unwrap();
    let json: serde_json::Value = serde_json::from_str(&s.synth().unwrap()).unwrap();

    assert_eq!(json["id"], STACK_ID);
    assert_eq!(json["stackName"], "bot-prod");
    assert_eq!(json["env"]["region"], "ap-northeast-1");
    assert!(json["env"].get("account").is_none());
    assert!(json.get("customDomain").is_none());
    assert_eq!(json["functionEnvironment"][SLACK_BOT_TOKEN_VAR], "xoxb-token");
}
