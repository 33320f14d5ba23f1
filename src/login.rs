//! Login flow with an explicit outcome taxonomy.
//!
//! Submitting the form starts a three-way race: either a bad-password
//! message appears, a validation banner (the CAPTCHA path) appears, or the
//! page eventually redirects to the authenticated feed. The checks run in
//! that order, first match wins;
//! the password-error probe must come before the success wait or a slow
//! redirect masks a rejected login.

use std::time::Duration;

use anyhow::Result;
use log::info;

use crate::credentials::Credentials;
use crate::driver::{DriverError, PageDriver};
use crate::selectors;

/// Bounded window for the two negative-outcome probes.
const OUTCOME_CHECK: Duration = Duration::from_secs(3);

/// Window for the redirect to the authenticated feed. Generous because a
/// human may be typing a one-time passcode.
const OTP_WINDOW: Duration = Duration::from_secs(30);

/// Terminal outcome of one login attempt. All four are data, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    BadCredentials,
    CaptchaChallenge,
    Timeout,
}

impl LoginOutcome {
    pub fn describe(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "successful login",
            LoginOutcome::BadCredentials => "password rejected",
            LoginOutcome::CaptchaChallenge => "validation errors on the login form (CAPTCHA)",
            LoginOutcome::Timeout => "no redirect to the job feed (OTP not entered in time?)",
        }
    }
}

/// Drives the login form and classifies the result.
pub async fn login(page: &dyn PageDriver, credentials: &Credentials) -> Result<LoginOutcome> {
    page.goto(selectors::LOGIN_URL).await?;
    page.fill(selectors::USERNAME_INPUT, &credentials.username)
        .await?;
    page.click_text(selectors::CONTINUE_WITH_EMAIL).await?;
    page.fill(selectors::PASSWORD_INPUT, &credentials.password)
        .await?;
    page.click(selectors::REMEMBER_ME_CHECKBOX).await?;
    page.click(selectors::LOGIN_SUBMIT).await?;

    // Short-circuits first: a rejected password or a validation banner
    // settles the attempt without burning the full OTP window.
    if page
        .wait_for_text(selectors::BAD_PASSWORD_TEXT, OUTCOME_CHECK)
        .await?
    {
        return Ok(LoginOutcome::BadCredentials);
    }
    if page
        .wait_for_text(selectors::VALIDATION_ERROR_TEXT, OUTCOME_CHECK)
        .await?
    {
        return Ok(LoginOutcome::CaptchaChallenge);
    }

    match page
        .wait_for_url(selectors::BEST_MATCHES_URL, OTP_WINDOW)
        .await
    {
        Ok(()) => {
            info!("Successful login attempt.");
            Ok(LoginOutcome::Success)
        }
        Err(DriverError::WaitTimeout { .. }) => Ok(LoginOutcome::Timeout),
        Err(e) => Err(e.into()),
    }
}
