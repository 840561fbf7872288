//! User table binding and finders

use amc_core::entities::User;
use amc_core::traits::RepoResult;

use crate::models::UserModel;

use super::generic::PgRepository;
use super::table::{PgQuery, Table};

impl Table for User {
    type Row = UserModel;

    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "username",
        "password_hash",
        "email",
        "admin",
        "join_date",
        "last_active",
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.username.as_deref())
            .bind(self.password_hash.as_deref())
            .bind(self.email.as_deref())
            .bind(self.admin)
            .bind(self.join_date)
            .bind(self.last_active)
    }
}

impl PgRepository<User> {
    /// Users with the given username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Vec<User>> {
        self.find_by("username", username).await
    }

    /// Users with the given email address
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Vec<User>> {
        self.find_by("email", email).await
    }

    /// Users carrying the site-admin flag
    pub async fn find_admins(&self) -> RepoResult<Vec<User>> {
        self.find_by("admin", true).await
    }
}
