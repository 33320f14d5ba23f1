//! End-to-end scrape of a fully scripted page, checked byte-for-byte
//! against golden JSON fixtures.

mod common;

use common::MockPage;
use upwork_crawler::profile_scraper::CrawlStamp;
use upwork_crawler::{home_scraper, profile_scraper, selectors};

const AVATAR_URL: &str = "https://www.upwork.com/profile-portraits/johndoe.jpg";

fn plain_job_card() -> String {
    [
        "Rust developer needed for data pipeline CLI",
        "Hourly: $50-$80 - Intermediate - Est. time: 1 to 3 months",
        "Posted 2 hours ago",
        "Hourly",
        "We need a command line tool that ingests CSV exports.",
        "Rust",
        "Command Line Interface",
        "Data Processing",
        "Proposals: 5 to 10",
        "Client information",
        "Payment verified",
        "Rating is 4.90 out of 5",
        "4.90",
        "($12K spent)",
        "Location",
        "United States",
    ]
    .join("\n")
}

fn shifted_job_card() -> String {
    // Carries both optional lines: the US-only disclaimer and a "more"
    // marker, so the description and skills slices shift.
    [
        "React dashboard fixes",
        "Fixed-price - Est. budget: $500",
        "Posted yesterday",
        "Fixed-price",
        "Only freelancers located in the United States may apply.",
        "Small fixes to an existing dashboard.",
        "more",
        "React",
        "TypeScript",
        "Proposals: Less than 5",
        "Client information",
        "Payment verified",
        "Rating is 5.00 out of 5",
        "5.00",
        "($3K spent)",
        "Location",
        "United States",
    ]
    .join("\n")
}

fn scripted_page() -> MockPage {
    let mut page = MockPage::default();

    // Sidebar
    page.set_attribute(
        selectors::SIDEBAR_PROFILE_LINK,
        "href",
        "/freelancers/~0123456789abcdef",
    );
    page.set_attribute(selectors::SIDEBAR_AVATAR, "src", AVATAR_URL);
    page.set_text(selectors::SIDEBAR_NAME, "John Doe");
    page.set_text(selectors::SIDEBAR_TITLE, "Systems Programmer");
    page.set_text(selectors::SIDEBAR_CONNECTS, "68 available connects");
    page.set_text(
        selectors::SIDEBAR_AVAILABILITY,
        "Availability\nMore than 30 hrs/week",
    );
    page.set_text(selectors::SIDEBAR_VISIBILITY, "Visibility\nPublic");
    page.text_lists.insert(
        selectors::SIDEBAR_CATEGORIES.to_string(),
        vec![
            "Web Development".to_string(),
            "Scripts & Utilities".to_string(),
        ],
    );
    page.text_lists.insert(
        selectors::JOB_TILES.to_string(),
        vec![plain_job_card(), shifted_job_card()],
    );

    // Public profile and contact-info settings
    page.set_text(selectors::PROFILE_HEADLINE, "John Doe | Acme Corp");
    page.reachable_urls = vec![selectors::CONTACT_INFO_URL.to_string()];
    page.set_input(selectors::FIRST_NAME_INPUT, "John");
    page.set_input(selectors::LAST_NAME_INPUT, "Doe");
    page.set_input(selectors::EMAIL_INPUT, "john.doe@example.com");
    page.set_text(selectors::ADDRESS_STREET, "123 Main St\nEdit");
    page.set_text(selectors::ADDRESS_STREET2, "Apt 4");
    page.set_text(selectors::ADDRESS_CITY, "Springfield");
    page.set_text(selectors::ADDRESS_STATE, "IL");
    page.set_text(selectors::ADDRESS_ZIP, "62704");
    page.set_text(selectors::ADDRESS_COUNTRY, "United States");
    page.set_text(selectors::PHONE, "+1 555 0100");

    page
}

#[tokio::test]
async fn home_info_matches_golden_fixture() {
    let page = scripted_page();

    let home = home_scraper::collect_home(&page).await.unwrap();
    let json = serde_json::to_string_pretty(&home).unwrap();
    assert_eq!(json, include_str!("fixtures/level1.json").trim_end());
}

#[tokio::test]
async fn profile_settings_match_golden_fixture() {
    let page = scripted_page();
    let stamp = CrawlStamp {
        id: "a1b2c3d4-0000-4000-8000-000000000001".to_string(),
        account: "a1b2c3d4-0000-4000-8000-000000000002".to_string(),
        crawled_at: "2026-08-23-12_00_00".to_string(),
    };

    let profile = profile_scraper::collect_profile(&page, &stamp).await.unwrap();
    let json = serde_json::to_string_pretty(&profile).unwrap();
    assert_eq!(json, include_str!("fixtures/level2.json").trim_end());
}

#[tokio::test]
async fn profile_scrape_navigates_profile_then_settings() {
    let page = scripted_page();
    let stamp = CrawlStamp {
        id: "x".to_string(),
        account: "y".to_string(),
        crawled_at: "2026-08-23-12_00_00".to_string(),
    };
    profile_scraper::collect_profile(&page, &stamp).await.unwrap();

    let calls = page.calls();
    let index_of = |needle: &str| {
        calls
            .iter()
            .position(|c| c.contains(needle))
            .unwrap_or_else(|| panic!("no call matching {:?} in {:?}", needle, calls))
    };
    // Public profile first, then the avatar menu into settings, then the
    // edit toggle that reveals the input fields.
    assert!(index_of("goto https://www.upwork.com/freelancers/~") < index_of("click .nav-right"));
    assert!(index_of("click .nav-right") < index_of("wait_for_url"));
    assert!(index_of("wait_for_url") < index_of("click .up-card"));
}

#[tokio::test]
async fn home_scrape_fails_whole_phase_on_a_short_card() {
    let mut page = scripted_page();
    page.text_lists.insert(
        selectors::JOB_TILES.to_string(),
        vec![plain_job_card(), "only\nthree\nlines".to_string()],
    );

    assert!(home_scraper::collect_home(&page).await.is_err());
}
