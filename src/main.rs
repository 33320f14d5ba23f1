use anyhow::Result;
use chrono::Local;
use log::{error, info, warn};

use upwork_crawler::{home_scraper, logger, login, output_manager, profile_scraper, selectors};
use upwork_crawler::{
    BrowserSession, CdpPage, CrawlStamp, Credentials, LoginOutcome, OutputPaths, PageDriver,
};

const FEED_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();
    info!("Starting Upwork crawler...");

    // 1. Credentials and output tree
    let credentials = Credentials::from_env()?;
    let paths = OutputPaths::for_user(&credentials.username);
    paths.ensure()?;

    // 2. Browser session
    let session = BrowserSession::launch().await?;
    let page = CdpPage::new(session.page().clone());

    // 3. The whole crawl; the browser is released whichever way it ends.
    let result = run(&page, &credentials, &paths).await;
    session.close().await;
    result
}

async fn run(page: &CdpPage, credentials: &Credentials, paths: &OutputPaths) -> Result<()> {
    let outcome = login::login(page, credentials).await?;
    let timestamp = Local::now().format("%Y-%m-%d-%H_%M_%S").to_string();

    if outcome != LoginOutcome::Success {
        capture_login_screenshot(page, paths, &timestamp, false).await;
        warn!(
            "Login was unsuccessful: {}. Check the screenshots folder for additional info.",
            outcome.describe()
        );
        return Ok(());
    }

    // Wait until the job feed gets rendered, and document the landing.
    page.wait_for_selector(selectors::FEED_BEST_MATCH, FEED_TIMEOUT)
        .await?;
    capture_login_screenshot(page, paths, &timestamp, true).await;

    // Level 1. A failed home scrape is logged and skipped; the run goes on.
    match home_scraper::collect_home(page).await {
        Ok(home) => output_manager::write_json(&paths.level1(), &home)?,
        Err(e) => error!("Home feed scrape failed, no level1 output: {:#}", e),
    }

    // Level 2. Failures here end the run.
    let stamp = CrawlStamp::generate();
    let profile = profile_scraper::collect_profile(page, &stamp).await?;
    profile.log_fields();
    output_manager::write_json(&paths.level2(), &profile)?;

    Ok(())
}

async fn capture_login_screenshot(
    page: &CdpPage,
    paths: &OutputPaths,
    timestamp: &str,
    successful: bool,
) {
    match page.screenshot_full_page().await {
        Ok(png) => {
            let path = paths.login_screenshot(timestamp, successful);
            if let Err(e) = output_manager::write_screenshot(&path, &png) {
                warn!("Could not save login screenshot: {:#}", e);
            }
        }
        Err(e) => warn!("Could not capture login screenshot: {}", e),
    }
}
