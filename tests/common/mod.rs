#![allow(dead_code)]

use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;

pub mod user_entity;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Database with a handful of users to search through
pub async fn setup_seeded_db() -> Result<DatabaseConnection, DbErr> {
    let db = setup_test_db().await?;

    let users = [
        ("Alice Smith", "alice@example.com", r#"{"postcode": "AB12 3CD", "city": "Leeds"}"#),
        ("Bob Jones", "bob@example.org", r#"{"postcode": "XY99 8ZZ", "city": "York"}"#),
        ("Carol Hello", "carol@example.com", r#"{"postcode": "LS1 4AP", "city": "Hull"}"#),
        ("Dave Brown", "hello@dave.dev", r#"{"postcode": "HE11 0AA", "city": "Bath"}"#),
    ];

    for (name, email, address) in users {
        user_entity::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            address: Set(address.to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    Ok(db)
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateUserTable)]
    }
}

pub struct CreateUserTable;

#[async_trait::async_trait]
impl MigrationName for CreateUserTable {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_user_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateUserTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(UserEntity)
            .if_not_exists()
            .col(
                ColumnDef::new(UserColumn::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(UserColumn::Name).string().not_null())
            .col(ColumnDef::new(UserColumn::Email).string().not_null())
            .col(ColumnDef::new(UserColumn::Address).text().not_null())
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserEntity).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum UserColumn {
    Id,
    Name,
    Email,
    Address,
}

impl Iden for UserColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::Id => "id",
                Self::Name => "name",
                Self::Email => "email",
                Self::Address => "address",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct UserEntity;

impl Iden for UserEntity {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "users").unwrap();
    }
}
