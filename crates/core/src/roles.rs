//! The closed set of user roles.
//!
//! Role names must match the CHECK constraint on `users.role` in the
//! migration that creates the users table. No role enforcement happens in
//! the current flows; the set exists so future authorization work has a
//! fixed vocabulary to build on.

pub const ROLE_USER: &str = "user";
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// A user's role. Stored in the database as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    /// Standard account, assigned at registration.
    #[default]
    User,
    SuperAdmin,
}

impl UserRole {
    /// The database/text representation of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => ROLE_USER,
            UserRole::SuperAdmin => ROLE_SUPER_ADMIN,
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_USER => Ok(UserRole::User),
            ROLE_SUPER_ADMIN => Ok(UserRole::SuperAdmin),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}
