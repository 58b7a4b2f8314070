use super::value_objects::HashedPassword;
use crate::domain::shared::value_objects::UserId;

/// A pre-provisioned account. This layer never creates users.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub password: HashedPassword,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        password: HashedPassword,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            user_id,
            password,
            first_name,
            last_name,
        }
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
