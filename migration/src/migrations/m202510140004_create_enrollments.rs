use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510140004_create_enrollments"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("enrollments"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("course_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("user_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("enrolled_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .primary_key(
                        Index::create()
                            .col(Alias::new("course_id"))
                            .col(Alias::new("user_id")),
                    )
                    .to_owned(),
            )
            .await?;

        // Serves the "courses of a user" lookup; the primary key already covers course-first access.
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_user_id")
                    .if_not_exists()
                    .table(Alias::new("enrollments"))
                    .col(Alias::new("user_id"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("enrollments")).to_owned())
            .await
    }
}
