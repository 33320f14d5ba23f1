//! Level 1: sidebar profile fields and the best-match job cards from the
//! authenticated landing page.

use anyhow::{Context, Result};
use log::info;

use crate::driver::PageDriver;
use crate::extractor;
use crate::models::HomeInfo;
use crate::selectors;

/// Scrapes the home feed into a [`HomeInfo`] record.
///
/// Assumes the feed has already rendered. Any missing selector or
/// mis-shaped blob fails the whole phase; the caller decides whether the
/// run continues.
pub async fn collect_home(page: &dyn PageDriver) -> Result<HomeInfo> {
    let categories = page.inner_texts(selectors::SIDEBAR_CATEGORIES).await?;

    let mut best_job_matches = Vec::new();
    for card in page.inner_texts(selectors::JOB_TILES).await? {
        let job = extractor::parse_job_card(&card)
            .with_context(|| format!("unparseable job card: {:?}", extractor::first_line(&card)))?;
        best_job_matches.push(job);
    }
    info!(
        "Collected {} job cards and {} categories.",
        best_job_matches.len(),
        categories.len()
    );

    let profile_href = page
        .attribute(selectors::SIDEBAR_PROFILE_LINK, "href")
        .await?;
    let avatar_url = page.attribute(selectors::SIDEBAR_AVATAR, "src").await?;
    let name = page.inner_text(selectors::SIDEBAR_NAME).await?;
    let title = page.inner_text(selectors::SIDEBAR_TITLE).await?;
    let connections =
        extractor::leading_int(&page.inner_text(selectors::SIDEBAR_CONNECTS).await?)?;
    let week_availability =
        extractor::last_line(&page.inner_text(selectors::SIDEBAR_AVAILABILITY).await?);
    let profile_visibility =
        extractor::last_line(&page.inner_text(selectors::SIDEBAR_VISIBILITY).await?);

    Ok(HomeInfo {
        upwork_hash: extractor::profile_hash(&profile_href),
        avatar_url,
        name,
        title,
        connections,
        week_availability,
        profile_visibility,
        categories,
        best_job_matches,
    })
}
