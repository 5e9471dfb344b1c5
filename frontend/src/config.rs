#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;

/// Everything the page needs to know about the outside world.
///
/// Handed to components through a `ContextProvider` so the submission logic
/// never reaches for globals and tests can point it at a fake endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub lead_endpoint: String,
    pub phone_display: String,
    pub phone_raw: String,
    pub telegram_url: String,
    pub reveal_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let lead_endpoint = match option_env!("LEAD_ENDPOINT") {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("{}/api/send-lead", get_backend_url()),
        };

        Self {
            lead_endpoint,
            phone_display: "+7 978 529-04-68".to_string(),
            phone_raw: "+79785290468".to_string(),
            telegram_url: "https://t.me/+79785290468".to_string(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

impl SiteConfig {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_points_at_send_lead() {
        let config = SiteConfig::default();
        assert!(config.lead_endpoint.ends_with("/api/send-lead"));
        assert_eq!(config.reveal_threshold, 0.15);
    }

    #[test]
    fn tel_href_uses_raw_number() {
        let config = SiteConfig::default();
        assert_eq!(config.tel_href(), "tel:+79785290468");
    }
}
