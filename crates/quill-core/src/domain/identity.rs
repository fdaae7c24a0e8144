use uuid::Uuid;

/// The authenticated caller, as supplied by the identity service.
///
/// The domain layer treats identity as an opaque capability: the caller's id
/// and whether they hold the administrator role.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
}

impl Identity {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }

    /// True if the caller owns the resource or holds the admin capability.
    pub fn can_access(&self, owner_id: Uuid) -> bool {
        self.user_id == owner_id || self.is_admin()
    }
}
