//! CSS selectors and literal URLs for Upwork's current markup.
//!
//! Everything here is coupled to one website's rendering. When a scrape
//! phase starts mis-reading fields, look at this file first.

pub const LOGIN_URL: &str = "https://www.upwork.com/ab/account-security/login";
pub const BEST_MATCHES_URL: &str = "https://www.upwork.com/nx/find-work/best-matches";
pub const CONTACT_INFO_URL: &str = "https://www.upwork.com/freelancers/settings/contactInfo";
pub const BASE_URL: &str = "https://www.upwork.com";

// Login form
pub const USERNAME_INPUT: &str = "[placeholder=\"Username or Email\"]";
pub const CONTINUE_WITH_EMAIL: &str = "Continue with Email";
pub const PASSWORD_INPUT: &str = "#login_password";
pub const REMEMBER_ME_CHECKBOX: &str =
    ".side-by-side > div > .up-form-group > .mb-0 > .up-checkbox-label";
pub const LOGIN_SUBMIT: &str = "#login_control_continue";

// Terminal login outcomes, probed as visible page text
pub const BAD_PASSWORD_TEXT: &str = "Oops! Password is incorrect";
pub const VALIDATION_ERROR_TEXT: &str = "Please fix the errors below";

// Home feed
pub const FEED_BEST_MATCH: &str = "[data-test=\"feed-best-match\"]";
pub const JOB_TILES: &str = "[data-test=\"job-tile-list\"] > *";
pub const SIDEBAR_CATEGORIES: &str = ".d-block.pb-10";
pub const SIDEBAR_PROFILE_LINK: &str = "#fwh-sidebar-profile > a";
pub const SIDEBAR_AVATAR: &str = "#fwh-sidebar-profile > a > img";
pub const SIDEBAR_NAME: &str = ".profile-title";
pub const SIDEBAR_TITLE: &str = "#fwh-sidebar-profile > div > p";
pub const SIDEBAR_CONNECTS: &str = "[data-test=sidebar-available-connects]";
pub const SIDEBAR_AVAILABILITY: &str = "[data-test=freelancer-sidebar-availability]";
pub const SIDEBAR_VISIBILITY: &str = "[data-test=freelancer-sidebar-visibility]";

// Public profile page
pub const PROFILE_HEADLINE: &str = "h4.my-0";

// Upper-right navigation into settings
pub const NAV_AVATAR: &str =
    ".nav-right > .nav-d-none > .nav-item > .nav-item-label > .nav-avatar";
pub const NAV_SETTINGS_ITEM: &str = ".nav-d-none > .nav-dropdown-menu > .nav-options-desktop > \
     ul > li:nth-child(1) > .nav-menu-item > .up-s-nav-icon > svg";

// Contact-info settings page
pub const CONTACT_EDIT_TOGGLE: &str =
    ".up-card:nth-child(2) > .up-card-header > .up-btn > .up-icon > svg";
pub const FIRST_NAME_INPUT: &str = "input[aria-label^=\"First name\"]";
pub const LAST_NAME_INPUT: &str = "input[aria-label^=\"Last name\"]";
pub const EMAIL_INPUT: &str = "input[aria-label^=\"Email\"]";
pub const ADDRESS_STREET: &str = "[data-test=\"addressStreet\"]";
pub const ADDRESS_STREET2: &str = "[data-test=\"addressStreet2\"]";
pub const ADDRESS_CITY: &str = "[data-test=\"addressCity\"]";
pub const ADDRESS_STATE: &str = "[data-test=\"addressState\"]";
pub const ADDRESS_ZIP: &str = "[data-test=\"addressZip\"]";
pub const ADDRESS_COUNTRY: &str = "[data-test=\"addressCountry\"]";
pub const PHONE: &str = "[data-test=\"phone\"]";
