use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub reschedule_api_base_url: Option<String>,
    pub reschedule_fallback_enabled: bool,
    pub payment_decline_rate: f64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(|| {
                warn!("PORT not set or invalid, using default 3001");
                3001
            });

        let reschedule_api_base_url = env::var("RESCHEDULE_API_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty());

        let reschedule_fallback_enabled = env::var("RESCHEDULE_FALLBACK")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let payment_decline_rate = env::var("PAYMENT_DECLINE_RATE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|rate| (0.0..=1.0).contains(rate))
            .unwrap_or(0.0);

        if reschedule_api_base_url.is_none() {
            warn!("RESCHEDULE_API_BASE_URL not set, reschedules apply locally only");
        }

        Self {
            port,
            reschedule_api_base_url,
            reschedule_fallback_enabled,
            payment_decline_rate,
        }
    }

    pub fn uses_remote_reschedule(&self) -> bool {
        self.reschedule_api_base_url.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            reschedule_api_base_url: None,
            reschedule_fallback_enabled: false,
            payment_decline_rate: 0.0,
        }
    }
}
