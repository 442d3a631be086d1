//! Tenant configuration entities and the hostname registry.
//!
//! One deployment serves many hostnames. Each registered hostname carries a
//! sparse [`TenantSettings`] override set; merging it over the registry
//! defaults yields the complete [`TenantConfig`] a request renders with.
//! Unregistered hostnames are served too, with defaults and a generated
//! site name (the resolver's concern, not the registry's).

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Built-in registry shipped with the binary.
const BUILTIN_REGISTRY_JSON: &str = include_str!("tenants.json");

/// Identifier set for the ad networks a tenant page can carry.
///
/// An empty string disables the network for that tenant; fragment builders
/// skip the slot entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdNetworkIds {
    /// Display network client id (rendered as `ca-pub-<id>`).
    pub display_client_id: String,
    /// Display slot placed after the headline.
    pub display_slot_primary: String,
    /// Display slot placed inside the article body.
    pub display_slot_secondary: String,
    /// Native widget placed inside the article body.
    pub native_widget_id: String,
    /// Native feed widget placed after the article body.
    pub native_feed_id: String,
    /// Keeper network site source id.
    pub keeper_src: String,
    /// Per-tenant video loader script name.
    pub video_script: String,
    /// Per-tenant display loader script name.
    pub display_script: String,
}

/// Fully merged configuration for one request.
///
/// Every field holds a value after merging (possibly `""`); handlers and
/// builders never see an unset field. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantConfig {
    pub site_name: String,
    pub analytics_tag_id: String,
    pub ads: AdNetworkIds,
    pub custom_scripts: String,
}

/// Sparse per-hostname overrides as stored in the registry.
///
/// `None` means "inherit from defaults". The registry file uses the same
/// snake_case field names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantSettings {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub analytics_tag_id: Option<String>,
    #[serde(default)]
    pub display_client_id: Option<String>,
    #[serde(default)]
    pub display_slot_primary: Option<String>,
    #[serde(default)]
    pub display_slot_secondary: Option<String>,
    #[serde(default)]
    pub native_widget_id: Option<String>,
    #[serde(default)]
    pub native_feed_id: Option<String>,
    #[serde(default)]
    pub keeper_src: Option<String>,
    #[serde(default)]
    pub video_script: Option<String>,
    #[serde(default)]
    pub display_script: Option<String>,
    #[serde(default)]
    pub custom_scripts: Option<String>,
}

impl TenantSettings {
    /// Fills unset fields from `defaults`, producing a complete config.
    fn merge_over(&self, defaults: &TenantSettings) -> TenantConfig {
        fn pick(field: &Option<String>, default: &Option<String>) -> String {
            field
                .clone()
                .or_else(|| default.clone())
                .unwrap_or_default()
        }

        TenantConfig {
            site_name: pick(&self.site_name, &defaults.site_name),
            analytics_tag_id: pick(&self.analytics_tag_id, &defaults.analytics_tag_id),
            ads: AdNetworkIds {
                display_client_id: pick(&self.display_client_id, &defaults.display_client_id),
                display_slot_primary: pick(
                    &self.display_slot_primary,
                    &defaults.display_slot_primary,
                ),
                display_slot_secondary: pick(
                    &self.display_slot_secondary,
                    &defaults.display_slot_secondary,
                ),
                native_widget_id: pick(&self.native_widget_id, &defaults.native_widget_id),
                native_feed_id: pick(&self.native_feed_id, &defaults.native_feed_id),
                keeper_src: pick(&self.keeper_src, &defaults.keeper_src),
                video_script: pick(&self.video_script, &defaults.video_script),
                display_script: pick(&self.display_script, &defaults.display_script),
            },
            custom_scripts: pick(&self.custom_scripts, &defaults.custom_scripts),
        }
    }
}

/// Immutable hostname → settings table, loaded once at startup.
///
/// Registry keys are lowercase hostnames and may include a port
/// (`localhost:3000` is a registered development tenant).
#[derive(Debug, Clone, Deserialize)]
pub struct TenantRegistry {
    #[serde(default)]
    defaults: TenantSettings,
    #[serde(default)]
    tenants: HashMap<String, TenantSettings>,
}

impl TenantRegistry {
    /// Returns the registry compiled into the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON is malformed, which is a build defect.
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_REGISTRY_JSON).expect("Failed to parse built-in registry")
    }

    /// Parses a registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON does not match the registry schema.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid tenant registry JSON")
    }

    /// Loads a registry from a JSON file, replacing the built-in table.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tenant registry {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse tenant registry {}", path.display()))
    }

    /// Number of registered hostnames.
    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    /// Returns true when no hostnames are registered.
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    /// Registered hostnames, unordered.
    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.tenants.keys().map(String::as_str)
    }

    /// Returns true when `hostname` (already lowercased) is registered.
    pub fn contains(&self, hostname: &str) -> bool {
        self.tenants.contains_key(hostname)
    }

    /// Merged configuration for a registered hostname, `None` otherwise.
    pub fn merged(&self, hostname: &str) -> Option<TenantConfig> {
        self.tenants
            .get(hostname)
            .map(|settings| settings.merge_over(&self.defaults))
    }

    /// Configuration carrying only the registry defaults.
    pub fn defaults_config(&self) -> TenantConfig {
        TenantSettings::default().merge_over(&self.defaults)
    }
}
