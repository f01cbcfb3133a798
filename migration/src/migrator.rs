use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202510140001_create_users::Migration),
            Box::new(migrations::m202510140002_create_profiles::Migration),
            Box::new(migrations::m202510140003_create_courses::Migration),
            Box::new(migrations::m202510140004_create_enrollments::Migration),
            Box::new(migrations::m202510140005_create_reviews::Migration),
        ]
    }
}
