use e2e::browser::Browser;
use e2e::test_server::TestServer;
use ui::nav::SITE_PATHS;

#[tokio::test]
#[ignore = "needs the dx CLI"]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("<!DOCTYPE html>") || body.contains("<!doctype html>"));
}

#[tokio::test]
#[ignore = "needs the dx CLI"]
async fn test_every_route_is_served() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    for path in SITE_PATHS {
        let response = reqwest::get(server.page_url(path))
            .await
            .expect("Failed to fetch page");
        assert!(response.status().is_success(), "{path} returned {}", response.status());
    }
}

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome"]
async fn test_header_links_navigate() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    let brand = page.find_element(".site_header .brand").expect("brand missing");
    assert_eq!(brand.trim(), "Glowizon");

    page.click(".main_nav .nav_item > a[href='/retailers']").expect("retailers link missing");
    page.find_element(".accordion").expect("retailers accordion missing");
    assert!(page.url().expect("url").ends_with("/retailers"));
}

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome"]
async fn test_language_switch_persists() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page_url("/about")).expect("Failed to navigate");
    page.click(".lang_switch .lang_btn:not(.active)").expect("switch missing");
    page.wait_for_text(".top_bar", "À propos").expect("nav not translated");

    let stored = page
        .eval("localStorage.getItem('glowizon_lang')")
        .expect("eval failed");
    assert_eq!(stored, serde_json::json!("fr"));

    page.goto(&server.page_url("/")).expect("Failed to reload");
    page.wait_for_text(".top_bar", "À propos").expect("language not restored");
}

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome"]
async fn test_route_change_closes_menu_and_scrolls_top() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch_with_size(390, 844).expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page_url("/products")).expect("Failed to navigate");
    page.find_element(".site_main").expect("page did not render");
    page.eval("window.scrollTo(0, 800)").expect("scroll failed");
    page.wait_for_value("window.scrollY > 0", &serde_json::json!(true))
        .expect("page did not scroll");

    page.click(".menu_toggle").expect("menu toggle missing");
    page.find_element(".mobile_menu").expect("menu did not open");
    page.wait_for_value("document.body.style.overflow", &serde_json::json!("hidden"))
        .expect("body scroll not locked");

    page.click(".mobile_menu a[href='/about']").expect("about link missing");
    page.wait_for_value("location.pathname", &serde_json::json!("/about"))
        .expect("did not reach /about");

    page.wait_for_value("document.querySelector('.mobile_menu') === null", &serde_json::json!(true))
        .expect("menu still open");
    page.wait_for_value("document.body.style.overflow", &serde_json::json!(""))
        .expect("body scroll still locked");
    page.wait_for_value("window.scrollY", &serde_json::json!(0))
        .expect("page not at the top");
}
