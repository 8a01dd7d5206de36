//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it can be constructed with a
//! `DatabaseConnection` or a transactional connection.

use anyhow::Context;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::contract::model::User;
use crate::domain::repo::UsersRepository;
use crate::infra::storage::entity::{ActiveModel as UserAM, Column, Entity as UserEntity};

pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("find_by_email failed")?;
        Ok(found.map(Into::into))
    }

    async fn insert(&self, u: User) -> anyhow::Result<()> {
        let m = UserAM {
            id: Set(u.id),
            name: Set(u.name),
            email: Set(u.email),
            password: Set(u.password),
            created_at: Set(u.created_at),
        };
        let _ = m.insert(&self.conn).await.context("insert failed")?;
        Ok(())
    }

    async fn update(&self, id: &str, u: User) -> anyhow::Result<()> {
        // Keyed on the stored id: `u.id` may carry a rename.
        // created_at is immutable and deliberately left out.
        UserEntity::update_many()
            .col_expr(Column::Id, Expr::value(u.id))
            .col_expr(Column::Name, Expr::value(u.name))
            .col_expr(Column::Email, Expr::value(u.email))
            .col_expr(Column::Password, Expr::value(u.password))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .context("update failed")?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let res = UserEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn search(&self, query: Option<&str>) -> anyhow::Result<Vec<User>> {
        let mut find = UserEntity::find().order_by_asc(Column::CreatedAt);

        if let Some(q) = query.filter(|q| !q.is_empty()) {
            let needle = format!("%{}%", q.to_lowercase());
            // lower() on both sides keeps the match case-insensitive
            // regardless of backend collation.
            let cond = Condition::any()
                .add(Expr::expr(Func::lower(Expr::col(Column::Name))).like(needle.clone()))
                .add(Expr::expr(Func::lower(Expr::col(Column::Email))).like(needle));
            find = find.filter(cond);
        }

        let rows = find.all(&self.conn).await.context("search failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
