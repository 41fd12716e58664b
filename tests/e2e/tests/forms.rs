use e2e::browser::Browser;
use e2e::test_server::TestServer;

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome"]
async fn test_contact_form_flags_missing_fields() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page_url("/contact")).expect("Failed to navigate");
    page.click(".contact_form button[type='submit']").expect("submit missing");

    let name_error = page.find_element("#name-error").expect("name error missing");
    assert!(name_error.contains("Please enter your name."));
    assert!(page.has_element("#message-error"));

    page.type_text("#name", "Ada").expect("typing failed");
    assert!(!page.has_element("#name-error"), "typing should clear the error");
}

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome"]
async fn test_contact_form_thanks_after_valid_submit() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page_url("/contact")).expect("Failed to navigate");
    page.type_text("#name", "Ada Lovelace").expect("name");
    page.type_text("#email", "ada@example.com").expect("email");
    page.type_text("#subject", "Distribution").expect("subject");
    page.type_text("#message", "Tell me more.").expect("message");
    page.click(".contact_form button[type='submit']").expect("submit missing");

    page.wait_for_text(".thank_you", "Message Sent").expect("no thank-you panel");
}

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome"]
async fn test_newsletter_rejects_bad_email() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    page.type_text("#footer-email", "not-an-email").expect("typing failed");
    page.click(".newsletter_submit").expect("submit missing");
    page.find_element("#footer-email-error").expect("error missing");
}

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome"]
async fn test_unticked_consent_is_flagged() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page_url("/supplier-application")).expect("Failed to navigate");
    page.click(".application_form button[type='submit']").expect("submit missing");

    let error = page.find_element("#confirmAuth-error").expect("consent error missing");
    assert!(error.contains("Please confirm you may represent this brand."));
    page.wait_for_value(
        "document.getElementById('confirmAuth').getAttribute('aria-invalid')",
        &serde_json::json!("true"),
    )
    .expect("checkbox not marked invalid");

    page.click("#confirmAuth").expect("checkbox missing");
    page.wait_for_value(
        "document.getElementById('confirmAuth-error') === null",
        &serde_json::json!(true),
    )
    .expect("ticking should clear the error");
    assert!(page.has_element("#confirmContact-error"));
}
