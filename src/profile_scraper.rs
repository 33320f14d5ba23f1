//! Level 2: the contact-info settings page, reached through the avatar
//! menu, plus the employer line from the public profile.
//!
//! Navigating via the menu instead of a direct URL lowers the chance of a
//! second OTP challenge; when one pops anyway a human has the URL-wait
//! window to answer it. Failures here abort the run.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use uuid::Uuid;

use crate::driver::PageDriver;
use crate::extractor;
use crate::models::{Address, ProfileSettings};
use crate::selectors;

/// Second manual-OTP window, on the settings-page transition.
const SETTINGS_OTP_WINDOW: Duration = Duration::from_secs(30);

/// Generated identifiers and the crawl timestamp for one level-2 record.
/// Built once per run; tests pass a fixed one.
#[derive(Debug, Clone)]
pub struct CrawlStamp {
    pub id: String,
    pub account: String,
    pub crawled_at: String,
}

impl CrawlStamp {
    pub fn generate() -> Self {
        CrawlStamp {
            id: Uuid::new_v4().to_string(),
            account: Uuid::new_v4().to_string(),
            crawled_at: Local::now().format("%Y-%m-%d-%H_%M_%S").to_string(),
        }
    }
}

/// Scrapes the profile-settings tier into a [`ProfileSettings`] record.
/// Assumes the page is on the authenticated landing.
pub async fn collect_profile(
    page: &dyn PageDriver,
    stamp: &CrawlStamp,
) -> Result<ProfileSettings> {
    let picture_url = page.attribute(selectors::SIDEBAR_AVATAR, "src").await?;

    // Employer only shows on the public profile headline.
    let profile_href = page
        .attribute(selectors::SIDEBAR_PROFILE_LINK, "href")
        .await?;
    page.goto(&format!("{}{}", selectors::BASE_URL, profile_href))
        .await?;
    let headline = page.inner_text(selectors::PROFILE_HEADLINE).await?;
    let employer = extractor::employer_segment(&headline)
        .with_context(|| "profile headline carried no employer")?;

    // Into settings through the upper-right menu.
    page.click(selectors::NAV_AVATAR).await?;
    page.click(selectors::NAV_SETTINGS_ITEM).await?;
    page.wait_for_url(selectors::CONTACT_INFO_URL, SETTINGS_OTP_WINDOW)
        .await
        .context("settings page never loaded (second OTP challenge unanswered?)")?;
    info!("Reached contact-info settings.");

    // Name and email hide behind the edit toggle, as input values.
    page.click(selectors::CONTACT_EDIT_TOGGLE).await?;
    let first_name = page.input_value(selectors::FIRST_NAME_INPUT).await?;
    let last_name = page.input_value(selectors::LAST_NAME_INPUT).await?;
    let email = page.input_value(selectors::EMAIL_INPUT).await?;

    let address = Address {
        line1: Some(extractor::first_line(
            &page.inner_text(selectors::ADDRESS_STREET).await?,
        )),
        line2: Some(extractor::first_line(
            &page.inner_text(selectors::ADDRESS_STREET2).await?,
        )),
        city: Some(page.inner_text(selectors::ADDRESS_CITY).await?),
        state: Some(extractor::last_word(
            &page.inner_text(selectors::ADDRESS_STATE).await?,
        )),
        postal_code: Some(page.inner_text(selectors::ADDRESS_ZIP).await?),
        country: Some(page.inner_text(selectors::ADDRESS_COUNTRY).await?),
    };
    let phone_number = page.inner_text(selectors::PHONE).await?;

    let full_name = format!("{} {}", first_name, last_name);
    Ok(ProfileSettings {
        id: stamp.id.clone(),
        account: stamp.account.clone(),
        employer: Some(employer),
        created_at: None,
        updated_at: None,
        first_name,
        last_name,
        full_name,
        email,
        phone_number: Some(phone_number),
        birth_date: None,
        picture_url,
        address: Some(address),
        ssn: None,
        marital_status: None,
        gender: None,
        metadata: Some(format!("User crawled at {}", stamp.crawled_at)),
    })
}
