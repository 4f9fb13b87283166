//! Merging of per-role policies into a user's effective policy.

use crate::board::domain::{EffectivePolicy, InvalidRoleSet, Role, RoleSet, policy_for};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// How role names that match no known role are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRoleHandling {
    /// Skip the name; it contributes no permissions.
    #[default]
    Ignore,
    /// Fail parsing with [`InvalidRoleSet::UnrecognizedRole`].
    Reject,
}

/// Configuration for policy resolution.
///
/// # Examples
///
/// ```
/// use taskboard::board::services::{PolicyConfig, UnknownRoleHandling};
///
/// let config = PolicyConfig::default();
/// assert_eq!(config.unknown_roles, UnknownRoleHandling::Ignore);
/// assert!(config.privileged_override);
///
/// let strict = PolicyConfig::strict();
/// assert_eq!(strict.unknown_roles, UnknownRoleHandling::Reject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Treatment of unrecognized role names.
    pub unknown_roles: UnknownRoleHandling,
    /// Whether administrators and managers are flagged as full access.
    ///
    /// Their catalogue tables already permit every move, so this does not
    /// change which columns they see or which moves the gate allows. It
    /// decides whether they may move tasks assigned to other users.
    pub privileged_override: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            unknown_roles: UnknownRoleHandling::Ignore,
            privileged_override: true,
        }
    }
}

impl PolicyConfig {
    /// Creates a configuration that rejects unknown role names.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            unknown_roles: UnknownRoleHandling::Reject,
            privileged_override: true,
        }
    }

    /// Parses a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Combines the policies of every role a user holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyMerger {
    config: PolicyConfig,
}

impl PolicyMerger {
    /// Creates a merger with the given configuration.
    #[must_use]
    pub const fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Resolves the effective policy for `roles`.
    ///
    /// An empty set yields the deny-all policy. A privileged role yields full
    /// access unless the override is disabled. Otherwise visible statuses and
    /// drag sources are unioned, and drop targets are unioned per source.
    #[must_use]
    pub fn resolve(&self, roles: &RoleSet) -> EffectivePolicy {
        if roles.is_empty() {
            debug!("resolving policy for empty role set");
            return EffectivePolicy::deny_all();
        }
        if self.config.privileged_override && roles.has_privileged() {
            debug!(roles = ?roles, full_access = true, "privileged role overrides policy merge");
            return EffectivePolicy::full_access();
        }

        let merged = roles.iter().fold(EffectivePolicy::deny_all(), |mut policy, role| {
            policy.absorb(policy_for(role));
            policy
        });
        debug!(
            roles = ?roles,
            full_access = false,
            visible = merged.allowed_statuses().len(),
            draggable = merged.drag_sources().len(),
            "merged role policies"
        );
        merged
    }

    /// Parses role names according to the configured unknown-role handling.
    ///
    /// An empty input parses to an empty set, which resolves to deny-all.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRoleSet::UnrecognizedRole`] for the first unknown name
    /// when unknown roles are rejected.
    pub fn parse_roles<I, S>(&self, names: I) -> Result<RoleSet, InvalidRoleSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roles = Vec::new();
        for name in names {
            match Role::try_from(name.as_ref()) {
                Ok(role) => roles.push(role),
                Err(err) => match self.config.unknown_roles {
                    UnknownRoleHandling::Reject => return Err(err.into()),
                    UnknownRoleHandling::Ignore => {
                        warn!(role = %err.0, "ignoring unrecognized role");
                    }
                },
            }
        }
        Ok(roles.into_iter().collect())
    }
}

/// Resolves the effective policy for `roles` with the default configuration.
#[must_use]
pub fn resolve_policy(roles: &RoleSet) -> EffectivePolicy {
    PolicyMerger::default().resolve(roles)
}

/// Policy resolver memoising results per role set.
///
/// Resolution is deterministic, so a cached policy never goes stale while the
/// configuration is unchanged.
#[derive(Debug, Default)]
pub struct CachedPolicyResolver {
    merger: PolicyMerger,
    cache: RwLock<HashMap<RoleSet, Arc<EffectivePolicy>>>,
}

impl CachedPolicyResolver {
    /// Creates an empty cache over the given merger.
    #[must_use]
    pub fn new(merger: PolicyMerger) -> Self {
        Self {
            merger,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached policy for `roles`, resolving it on first use.
    ///
    /// A poisoned cache lock falls back to uncached resolution.
    #[must_use]
    pub fn resolve(&self, roles: &RoleSet) -> Arc<EffectivePolicy> {
        if let Ok(cache) = self.cache.read()
            && let Some(policy) = cache.get(roles)
        {
            return Arc::clone(policy);
        }

        let policy = Arc::new(self.merger.resolve(roles));
        if let Ok(mut cache) = self.cache.write() {
            cache
                .entry(roles.clone())
                .or_insert_with(|| Arc::clone(&policy));
        }
        policy
    }

    /// Returns the number of cached role sets.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.read().map_or(0, |cache| cache.len())
    }
}
