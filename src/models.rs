use log::info;
use serde::{Deserialize, Serialize};

/// One job card from the best-matches feed, reconstructed from the card's
/// flattened text blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    #[serde(rename = "job_title")]
    pub title: String,
    #[serde(rename = "job_type")]
    pub kind: String,
    #[serde(rename = "job_description")]
    pub description: String,
    #[serde(rename = "job_skills")]
    pub skills: Vec<String>,
    #[serde(rename = "job_proposals")]
    pub proposals: String,
    #[serde(rename = "job_verified")]
    pub verified: String,
    #[serde(rename = "job_rating")]
    pub rating: String,
    #[serde(rename = "job_client_spendings")]
    pub client_spend: String,
    #[serde(rename = "job_country")]
    pub country: String,
}

/// Level 1: everything readable from the authenticated landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeInfo {
    pub upwork_hash: String,
    pub avatar_url: String,
    pub name: String,
    pub title: String,
    pub connections: i64,
    pub week_availability: String,
    pub profile_visibility: String,
    pub categories: Vec<String>,
    pub best_job_matches: Vec<JobMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Level 2: the argyle-style user record assembled from the contact-info
/// settings page. Fields the crawl cannot observe stay null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub id: String,
    pub account: String,
    pub employer: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub birth_date: Option<String>,
    pub picture_url: String,
    pub address: Option<Address>,
    pub ssn: Option<String>,
    pub marital_status: Option<String>,
    pub gender: Option<String>,
    pub metadata: Option<String>,
}

impl ProfileSettings {
    /// Echoes every field, nulls included, so a run leaves a readable record
    /// of what was actually captured.
    pub fn log_fields(&self) {
        let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "null".to_string());
        info!("Crawled fields:");
        info!("id: {}", self.id);
        info!("account: {}", self.account);
        info!("employer: {}", opt(&self.employer));
        info!("created_at: {}", opt(&self.created_at));
        info!("updated_at: {}", opt(&self.updated_at));
        info!("first_name: {}", self.first_name);
        info!("last_name: {}", self.last_name);
        info!("full_name: {}", self.full_name);
        info!("email: {}", self.email);
        info!("phone_number: {}", opt(&self.phone_number));
        info!("birth_date: {}", opt(&self.birth_date));
        info!("picture_url: {}", self.picture_url);
        match &self.address {
            Some(a) => {
                info!("address_line1: {}", opt(&a.line1));
                info!("address_line2: {}", opt(&a.line2));
                info!("address_city: {}", opt(&a.city));
                info!("address_state: {}", opt(&a.state));
                info!("address_postal_code: {}", opt(&a.postal_code));
                info!("address_country: {}", opt(&a.country));
            }
            None => info!("address: null"),
        }
        info!("ssn: {}", opt(&self.ssn));
        info!("marital_status: {}", opt(&self.marital_status));
        info!("gender: {}", opt(&self.gender));
        info!("metadata: {}", opt(&self.metadata));
    }
}
