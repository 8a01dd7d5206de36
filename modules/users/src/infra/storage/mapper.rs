use crate::contract::model::User;
use crate::infra::storage::entity::Model as UserEntity;

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        User {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password: entity.password,
            created_at: entity.created_at,
        }
    }
}
