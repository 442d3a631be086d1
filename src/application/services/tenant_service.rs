//! Hostname to tenant configuration resolution service.

use tracing::info;

use crate::domain::entities::{TenantConfig, TenantRegistry};

/// Resolves the Host header of a request to a complete tenant configuration.
///
/// Registered hostnames get their registry entry merged over the defaults.
/// Unregistered hostnames still get a full configuration: the default ad
/// identifiers plus a site name generated from the hostname itself, so a
/// newly pointed domain serves branded pages with no deploy.
pub struct TenantService {
    registry: TenantRegistry,
}

impl TenantService {
    /// Creates a tenant service over a loaded registry.
    pub fn new(registry: TenantRegistry) -> Self {
        Self { registry }
    }

    /// Resolves a raw Host header value to a tenant configuration.
    ///
    /// Matching is exact after lowercasing: `localhost:3000` and
    /// `localhost` are distinct keys, so a registry entry that includes a
    /// port only matches requests carrying that port.
    ///
    /// Resolution never fails. Unknown hosts fall back to the default
    /// configuration with a generated site name.
    pub fn resolve(&self, host: &str) -> TenantConfig {
        let hostname = host.to_ascii_lowercase();

        if let Some(config) = self.registry.merged(&hostname) {
            return config;
        }

        info!("Unregistered host, using generated tenant: {hostname}");

        let mut config = self.registry.defaults_config();
        if let Some(site_name) = generate_site_name(&hostname) {
            config.site_name = site_name;
        }
        config
    }

    /// Whether the hostname has an explicit registry entry.
    pub fn is_registered(&self, host: &str) -> bool {
        self.registry.contains(&host.to_ascii_lowercase())
    }

    /// The underlying registry, for inspection tooling.
    pub fn registry(&self) -> &TenantRegistry {
        &self.registry
    }
}

/// Derives a site name from an unregistered hostname.
///
/// The first DNS label, capitalized, plus a "News" suffix:
/// `sports.example.com` becomes `Sports News`. Returns `None` for
/// single-label hosts (`localhost`), which keep the default site name.
fn generate_site_name(hostname: &str) -> Option<String> {
    let without_port = hostname.split(':').next().unwrap_or(hostname);

    let mut labels = without_port.split('.');
    let first = labels.next().unwrap_or(without_port);
    labels.next()?;

    Some(format!("{} News", capitalize(first)))
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
