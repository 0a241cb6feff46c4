//! Tests for creating new template definitions.

mod common;

use common::*;
use sk_core::config::loader::workspace_template_dir;
use sk_core::ports::{Answer, ScriptedPrompt};
use sk_core::scaffold::{create_user_template, create_workspace_template, generate_here, run, ScaffoldError};
use sk_protocol::ipc::{Op, Outcome, Scope};

#[tokio::test]
async fn test_create_user_template_then_generate_from_it() {
    let env = TestEnv::new().expect("Failed to create test env");
    let (ctx, focus) = env.context();
    let prompt = ScriptedPrompt::new([Answer::Text("Widget".to_string())]);

    let outcome = create_user_template(&ctx, &prompt).await.unwrap();

    let path = env.user_dir.join("Widget.yaml");
    assert_eq!(outcome, Outcome::TemplateCreated { path: path.clone() });
    assert_eq!(focus.focused(), vec![path]);

    // The bootstrap template is immediately usable.
    let prompt = ScriptedPrompt::new([
        Answer::Pick(0),
        Answer::Text("parser".to_string()),
        Answer::Pick(0),
    ]);
    let outcome = generate_here(&ctx, &prompt, &env.workspace).await.unwrap();
    assert_files_written(&outcome, 2);
    assert!(env.path("parser/mod.rs").exists());
    assert!(env.path("parser/parser_impl.rs").exists());
}

#[tokio::test]
async fn test_create_template_that_exists_is_left_untouched() {
    let env = TestEnv::new().expect("Failed to create test env");
    let existing = env.add_user_template("Widget.yaml", COMPONENT_YAML).unwrap();
    let (ctx, focus) = env.context();
    let prompt = ScriptedPrompt::new([Answer::Text("Widget".to_string())]);

    let outcome = create_user_template(&ctx, &prompt).await.unwrap();

    assert_eq!(outcome, Outcome::TemplateExists { path: existing.clone() });
    assert_file_content(&existing, COMPONENT_YAML);
    assert_eq!(focus.focused(), vec![existing]);
}

#[tokio::test]
async fn test_create_workspace_template_uses_custom_bootstrap() {
    let env = TestEnv::new().expect("Failed to create test env");
    let (ctx, _focus) = env.context();
    let ctx = ctx.with_bootstrap_template(Some(
        "name: {{templateName}}\nparams: []\nfiles: []\n".to_string(),
    ));
    let prompt = ScriptedPrompt::new([Answer::Text("  Service ".to_string())]);

    let outcome = create_workspace_template(&ctx, &prompt).await.unwrap();

    let path = workspace_template_dir(&env.workspace).join("Service.yaml");
    assert_eq!(outcome, Outcome::TemplateCreated { path: path.clone() });
    assert_file_content(&path, "name: Service\nparams: []\nfiles: []\n");
}

#[tokio::test]
async fn test_empty_or_dismissed_name_cancels() {
    let env = TestEnv::new().expect("Failed to create test env");
    let (ctx, _focus) = env.context();

    for answer in [Answer::Text("   ".to_string()), Answer::Cancel] {
        let prompt = ScriptedPrompt::new([answer]);
        let outcome = run(&ctx, &prompt, &Op::CreateTemplate { scope: Scope::User })
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
    }
    assert!(!env.user_dir.exists(), "nothing should be written");
}

#[tokio::test]
async fn test_workspace_template_without_workspace_fails() {
    let env = TestEnv::new().expect("Failed to create test env");
    let (mut ctx, _focus) = env.context();
    ctx.workspaces.clear();

    let result = create_workspace_template(&ctx, &ScriptedPrompt::default()).await;

    assert!(matches!(result, Err(ScaffoldError::TargetResolution(_))));
}
