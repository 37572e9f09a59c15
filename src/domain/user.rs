pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// A row from the `users` table. Owned by the external auth collaborator;
/// read here to resolve principals and check roles.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_is_recognized() {
        let user = User {
            user_id: 1,
            username: "admin".into(),
            role: ROLE_ADMIN.into(),
        };
        assert!(user.is_admin());
    }

    #[test]
    fn plain_user_is_not_admin() {
        let user = User {
            user_id: 2,
            username: "george".into(),
            role: "ROLE_USER".into(),
        };
        assert!(!user.is_admin());
    }
}
