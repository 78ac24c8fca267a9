use celebrate_bot::{clients::template::TemplateStore, models::error::SendFailure};

/// Test: Birthday placeholders are substituted verbatim
#[tokio::test]
async fn test_birthday_placeholders() {
    let store = TemplateStore::with_root("templates", "Acme Corp");

    for template_no in 1..=5 {
        let body = store
            .birthday(template_no, "Jane Doe", "### a quote block ###")
            .await
            .unwrap();

        assert!(body.contains("Jane Doe"), "template {template_no} missing name");
        assert!(body.contains("### a quote block ###"), "template {template_no} missing quote");
        assert!(!body.contains("[Name]"));
        assert!(!body.contains("[Quote]"));
    }
}

/// Test: Anniversary placeholders are substituted verbatim
#[tokio::test]
async fn test_anniversary_placeholders() {
    let store = TemplateStore::with_root("templates", "Acme Corp");

    for template_no in 1..=5 {
        let body = store
            .anniversary(template_no, "Jane Doe", "Engineer", "15-Jun-2020", 4)
            .await
            .unwrap();

        assert!(body.contains("Jane Doe"));
        assert!(body.contains("Acme Corp"));
        assert!(body.contains("Engineer"));
        assert!(body.contains("15-Jun-2020"));
        assert!(!body.contains("[Company]"));
        assert!(!body.contains("[Current Position/Title]"));
        assert!(!body.contains("[Date of Joining]"));
        assert!(!body.contains("[number of years]"));
    }
}

/// Test: A missing template body surfaces as a template failure
#[tokio::test]
async fn test_missing_template() {
    let store = TemplateStore::with_root("templates", "Acme Corp");

    let result = store.birthday(9, "Jane Doe", "quote").await;

    assert!(matches!(result, Err(SendFailure::Template { .. })));
}
