//! Who works here.

use std::collections::BTreeSet;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Server,
    Cook,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Server => f.write_str("Server"),
            Role::Cook => f.write_str("Cook"),
        }
    }
}

/// Servers and cooks by id.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    servers: BTreeSet<String>,
    cooks: BTreeSet<String>,
}

impl Roster {
    pub fn new<S, C>(servers: S, cooks: C) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            servers: servers.into_iter().map(Into::into).collect(),
            cooks: cooks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has(&self, worker: &str, role: Role) -> bool {
        match role {
            Role::Server => self.servers.contains(worker),
            Role::Cook => self.cooks.contains(worker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_separate() {
        let roster = Roster::new(["server1"], ["cook1", "cook2"]);
        assert!(roster.has("server1", Role::Server));
        assert!(!roster.has("server1", Role::Cook));
        assert!(roster.has("cook2", Role::Cook));
        assert!(!roster.has("cook3", Role::Cook));
    }
}
