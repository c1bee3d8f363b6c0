//! Simulated public-profile text for social profile URLs.
//!
//! No network access: the URL only selects a canned profile template and
//! supplies the handle that gets interpolated into it.

use sentinel_core::{Error, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    X,
    Facebook,
}

impl Platform {
    /// Baseline exposure of an unhardened profile on this platform.
    pub fn baseline_risk(&self) -> u8 {
        match self {
            Platform::LinkedIn => 85,
            Platform::X => 75,
            Platform::Facebook => 95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatedProfile {
    pub platform: Platform,
    pub handle: String,
    pub text: String,
}

impl SimulatedProfile {
    pub fn baseline_risk(&self) -> u8 {
        self.platform.baseline_risk()
    }
}

/// Build the simulated profile for `url`.
///
/// Platform detection is a substring check on the lowercased URL, tried in
/// order LinkedIn, X, Facebook.
pub fn simulate_profile(url: &str) -> Result<SimulatedProfile> {
    let url = url.to_lowercase();

    if url.contains("linkedin.com") {
        let handle = url
            .rsplit("/in/")
            .next()
            .unwrap_or_default()
            .trim_matches('/')
            .to_string();
        let text = format!(
            "LinkedIn Profile: {handle}. Manager at Google and Microsoft. Reach me at {handle}@google.com"
        );
        return Ok(SimulatedProfile {
            platform: Platform::LinkedIn,
            handle,
            text,
        });
    }

    if url.contains("twitter.com") || url.contains("x.com") {
        let handle = last_segment(&url).trim_matches('@').to_string();
        let text = format!(
            "X handle: @{handle}. Senior Engineer at Microsoft. Email: {handle}@outlook.com"
        );
        return Ok(SimulatedProfile {
            platform: Platform::X,
            handle,
            text,
        });
    }

    if url.contains("facebook.com") {
        let handle = if url.contains('/') {
            last_segment(&url).to_string()
        } else {
            "User".to_string()
        };
        let text = format!(
            "Facebook: {handle}. Lives in Hyderabad. Works at Google. Contact: 9876543210"
        );
        return Ok(SimulatedProfile {
            platform: Platform::Facebook,
            handle,
            text,
        });
    }

    Err(Error::UnsupportedUrl(url))
}

fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or_default()
}
