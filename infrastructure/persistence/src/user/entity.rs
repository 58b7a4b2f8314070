use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::value_objects::HashedPassword;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub user_id: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            UserId::new(self.user_id),
            HashedPassword::from_repository(self.password),
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
        )
    }
}
