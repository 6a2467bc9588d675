use std::env;
use std::net::SocketAddr;
use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DASHBOARD_PREVIEW_LIMIT: usize = 2;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub seed_demo_data: bool,
    pub dashboard_preview_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            seed_demo_data: true,
            dashboard_preview_limit: DEFAULT_DASHBOARD_PREVIEW_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_addr = match env::var("MEDITRACK_BIND_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("MEDITRACK_BIND_ADDR '{}' is not a socket address, using {}", raw, DEFAULT_BIND_ADDR);
                defaults.bind_addr
            }),
            Err(_) => defaults.bind_addr,
        };

        let seed_demo_data = match env::var("MEDITRACK_SEED_DEMO_DATA") {
            Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("MEDITRACK_SEED_DEMO_DATA '{}' is not a boolean, seeding demo data", raw);
                defaults.seed_demo_data
            }),
            Err(_) => defaults.seed_demo_data,
        };

        let dashboard_preview_limit = match env::var("MEDITRACK_DASHBOARD_PREVIEW_LIMIT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    "MEDITRACK_DASHBOARD_PREVIEW_LIMIT '{}' is not a number, using {}",
                    raw, DEFAULT_DASHBOARD_PREVIEW_LIMIT
                );
                defaults.dashboard_preview_limit
            }),
            Err(_) => defaults.dashboard_preview_limit,
        };

        Self {
            bind_addr,
            seed_demo_data,
            dashboard_preview_limit,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
