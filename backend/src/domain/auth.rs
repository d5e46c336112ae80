//! Caller roles and the precondition checks the services evaluate.
//!
//! The transport layer resolves the caller's role set before a request
//! reaches the core; every service operation takes that set as an explicit
//! parameter rather than reading ambient context.

use serde::{Deserialize, Serialize};

use crate::domain::error::Error;

/// Access tier held by a caller. A caller may hold both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read access to every resource.
    User,
    /// Read and write access to every resource.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// The set of roles resolved for the current caller.
///
/// An anonymous caller carries the empty set and fails every precondition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    /// The empty role set (anonymous caller).
    pub const fn anonymous() -> Self {
        Self(Vec::new())
    }

    /// Build a role set from the given roles, dropping duplicates.
    pub fn from_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut set = Vec::new();
        for role in roles {
            if !set.contains(&role) {
                set.push(role);
            }
        }
        Self(set)
    }

    /// Whether the set contains `role` exactly (no implication between tiers).
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Read precondition: the set must contain "user" or "admin".
    pub fn require_reader(&self) -> Result<(), Error> {
        if self.contains(Role::User) || self.contains(Role::Admin) {
            Ok(())
        } else {
            Err(Error::forbidden(Role::User))
        }
    }

    /// Write precondition: the set must contain "admin".
    pub fn require_admin(&self) -> Result<(), Error> {
        if self.contains(Role::Admin) {
            Ok(())
        } else {
            Err(Error::forbidden(Role::Admin))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn roles(roles: &[Role]) -> RoleSet {
        RoleSet::from_roles(roles.iter().copied())
    }

    #[rstest]
    #[case(roles(&[Role::User]), true, false)]
    #[case(roles(&[Role::Admin]), true, true)]
    #[case(roles(&[Role::User, Role::Admin]), true, true)]
    #[case(RoleSet::anonymous(), false, false)]
    fn preconditions_follow_role_tiers(
        #[case] caller: RoleSet,
        #[case] can_read: bool,
        #[case] can_write: bool,
    ) {
        assert_eq!(caller.require_reader().is_ok(), can_read);
        assert_eq!(caller.require_admin().is_ok(), can_write);
    }

    #[test]
    fn failed_admin_check_names_the_missing_role() {
        let err = roles(&[Role::User]).require_admin().expect_err("forbidden");
        assert_eq!(err, Error::forbidden(Role::Admin));
    }

    #[test]
    fn from_roles_drops_duplicates() {
        let set = RoleSet::from_roles([Role::User, Role::User, Role::Admin]);
        assert_eq!(set, roles(&[Role::User, Role::Admin]));
    }
}
