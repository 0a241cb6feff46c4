use sk_protocol::*;
use std::path::PathBuf;

#[test]
fn test_template_definition_deserialization_from_yaml() {
    let yaml_str = r#"
name: Component
description: Create a new component
params:
  - key: name
    description: Component name
    default: MyComponent
  - key: style
    enum: [css, scss]
    default: css
files:
  - path: "{{name}}.tsx"
    open: true
    content: |
      export const {{name}} = () => null;
  - path: "{{name}}.{{style}}"
    content: ""
"#;

    let template: TemplateDefinition =
        serde_yaml::from_str(yaml_str).expect("Failed to deserialize TemplateDefinition");

    assert_eq!(template.name, "Component");
    assert_eq!(template.description.as_deref(), Some("Create a new component"));
    assert_eq!(template.parameters.len(), 2);
    assert_eq!(template.parameters[0].key, "name");
    assert_eq!(template.parameters[0].choices, None);
    assert_eq!(
        template.parameters[1].enumerated_choices(),
        Some(&["css".to_string(), "scss".to_string()][..])
    );
    assert_eq!(template.files.len(), 2);
    assert!(template.files[0].open);
    assert!(!template.files[1].open, "open should default to false");
}

#[test]
fn test_parameter_serialization_uses_document_keys() {
    let param = ParameterDefinition {
        key: "style".to_string(),
        choices: Some(vec!["css".to_string()]),
        description: None,
        default: "css".to_string(),
    };

    let json = serde_json::to_value(&param).expect("Failed to serialize ParameterDefinition");

    assert_eq!(json["enum"], serde_json::json!(["css"]));
    assert!(json.get("choices").is_none());
}

#[test]
fn test_empty_choices_are_not_enumerated() {
    let param = ParameterDefinition {
        key: "name".to_string(),
        choices: Some(Vec::new()),
        description: None,
        default: "Foo".to_string(),
    };

    assert_eq!(param.enumerated_choices(), None);
}

#[test]
fn test_global_config_defaults_from_empty_document() {
    let config: GlobalConfig = serde_json::from_str("{}").expect("Failed to deserialize GlobalConfig");

    assert!(!config.strict_placeholders);
    assert_eq!(config.user_template_dir, None);
    assert_eq!(config.bootstrap_template, None);
}

#[test]
fn test_op_serialization() {
    let op = Op::GenerateHere {
        target: PathBuf::from("/work/app"),
    };

    let json = serde_json::to_value(&op).expect("Failed to serialize Op");

    assert_eq!(json["type"], "generateHere");
    assert_eq!(json["payload"]["target"], "/work/app");

    let create = serde_json::to_value(Op::CreateTemplate { scope: Scope::Workspace })
        .expect("Failed to serialize Op");
    assert_eq!(create["payload"]["scope"], "workspace");
}

#[test]
fn test_outcome_serialization() {
    let outcome = Outcome::FilesWritten {
        count: 1,
        paths: vec![PathBuf::from("/work/Bar.txt")],
    };

    let json = serde_json::to_string(&outcome).expect("Failed to serialize Outcome");
    let deserialized: Outcome = serde_json::from_str(&json).expect("Failed to deserialize Outcome");

    assert_eq!(deserialized, outcome);
    assert!(!deserialized.is_cancelled());

    let cancelled = serde_json::to_value(Outcome::Cancelled).expect("Failed to serialize Outcome");
    assert_eq!(cancelled["type"], "cancelled");
}
