//! User roles and role sets.

use super::{InvalidRoleSet, ParseRoleError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Role a user may hold within a project.
///
/// Roles are assigned outside this crate and are immutable inputs here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Implements requirement work.
    SoftwareDeveloper,
    /// Verifies delivered work.
    QcEngineer,
    /// Produces design work for requirements.
    UiUxDesigner,
    /// Refines requirements and tracks analysis work.
    BusinessAnalyst,
    /// Follows progress without moving tasks.
    Stakeholder,
    /// Manages project delivery.
    ProjectManager,
    /// Owns the product backlog.
    ProductManager,
    /// Coordinates releases across projects.
    DeliveryManager,
    /// Administers the whole workspace.
    Administrator,
}

impl Role {
    /// Every known role, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::SoftwareDeveloper,
        Self::QcEngineer,
        Self::UiUxDesigner,
        Self::BusinessAnalyst,
        Self::Stakeholder,
        Self::ProjectManager,
        Self::ProductManager,
        Self::DeliveryManager,
        Self::Administrator,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SoftwareDeveloper => "software_developer",
            Self::QcEngineer => "qc_engineer",
            Self::UiUxDesigner => "ui_ux_designer",
            Self::BusinessAnalyst => "business_analyst",
            Self::Stakeholder => "stakeholder",
            Self::ProjectManager => "project_manager",
            Self::ProductManager => "product_manager",
            Self::DeliveryManager => "delivery_manager",
            Self::Administrator => "administrator",
        }
    }

    /// Returns `true` for a manager variant.
    #[must_use]
    pub const fn is_manager(self) -> bool {
        matches!(
            self,
            Self::ProjectManager | Self::ProductManager | Self::DeliveryManager
        )
    }

    /// Returns `true` for roles with unrestricted board control.
    #[must_use]
    pub const fn is_privileged(self) -> bool {
        matches!(self, Self::Administrator) || self.is_manager()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| ParseRoleError(value.to_owned()))
    }
}

/// Set of roles held by one user.
///
/// An empty set is representable so that a user whose roles have not been
/// loaded yet still resolves to a (deny-all) policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// Creates an empty role set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a role set holding a single role.
    #[must_use]
    pub fn single(role: Role) -> Self {
        Self(BTreeSet::from([role]))
    }

    /// Parses role names, rejecting unknown names and empty input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRoleSet::Empty`] when no names are given and
    /// [`InvalidRoleSet::UnrecognizedRole`] for the first unknown name.
    pub fn parse<I, S>(names: I) -> Result<Self, InvalidRoleSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roles = names
            .into_iter()
            .map(|name| Role::try_from(name.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        if roles.is_empty() {
            return Err(InvalidRoleSet::Empty);
        }
        Ok(Self(roles))
    }

    /// Returns `true` when the set holds no roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of roles in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the set holds the given role.
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Returns `true` when any role in the set is privileged.
    #[must_use]
    pub fn has_privileged(&self) -> bool {
        self.0.iter().any(|role| role.is_privileged())
    }

    /// Iterates the roles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    /// Returns the union of both sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).copied().collect())
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}
