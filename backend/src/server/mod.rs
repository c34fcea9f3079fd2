//! Server configuration and route wiring.
//!
//! `configure_api` is the single place the user routes, extractor
//! configuration, and the method-not-allowed fallback are assembled, so the
//! binary and the test harnesses build identical applications.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use crate::inbound::http::error::{json_config, path_config, unmatched_route};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::outbound::persistence::InMemoryUserRepository;

/// Default bind address when `USER_SERVICE_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Environment-driven server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Seed the store with the five demo users at startup.
    pub seed_sample_data: bool,
}

impl ServerConfig {
    /// Read settings from the environment, falling back to defaults on
    /// missing or unparseable values (logged at warn, never fatal).
    pub fn from_env() -> Self {
        let raw_addr =
            env::var("USER_SERVICE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_addr.parse().unwrap_or_else(|e| {
            warn!(addr = %raw_addr, error = %e, "invalid bind address, using default");
            SocketAddr::from(([0, 0, 0, 0], 8080))
        });
        let seed_sample_data = env::var("USER_SERVICE_SEED_SAMPLE_DATA")
            .map(|v| v != "0")
            .unwrap_or(true);
        Self {
            bind_addr,
            seed_sample_data,
        }
    }
}

/// Build the handler state according to configuration.
pub fn build_state(config: &ServerConfig) -> HttpState {
    let repo = if config.seed_sample_data {
        InMemoryUserRepository::with_sample_data()
    } else {
        InMemoryUserRepository::new()
    };
    HttpState::new(Arc::new(repo))
}

/// Register the user routes plus extractor and fallback configuration.
pub fn configure_api(cfg: &mut web::ServiceConfig, state: web::Data<HttpState>) {
    cfg.app_data(state)
        .app_data(json_config())
        .app_data(path_config())
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .default_service(web::route().to(unmatched_route));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr_parses() {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse().expect("default parses");
        assert_eq!(addr.port(), 8080);
    }
}
