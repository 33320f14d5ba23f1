pub mod browser;
pub mod credentials;
pub mod driver;
pub mod extractor;
pub mod home_scraper;
pub mod logger;
pub mod login;
pub mod models;
pub mod output_manager;
pub mod profile_scraper;
pub mod selectors;

// Exporting types for convenience
pub use browser::BrowserSession;
pub use credentials::Credentials;
pub use driver::{CdpPage, DriverError, PageDriver};
pub use login::LoginOutcome;
pub use models::{Address, HomeInfo, JobMatch, ProfileSettings};
pub use output_manager::OutputPaths;
pub use profile_scraper::CrawlStamp;
