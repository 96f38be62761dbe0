use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PersonalInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PersonalInfo::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // At most one row: every insert carries TRUE
                    .col(
                        ColumnDef::new(PersonalInfo::Singleton)
                            .boolean()
                            .not_null()
                            .default(true)
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PersonalInfo::Name).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Title).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Bio).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Email).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Phone).text())
                    .col(ColumnDef::new(PersonalInfo::Location).text())
                    .col(ColumnDef::new(PersonalInfo::Company).text())
                    .col(ColumnDef::new(PersonalInfo::JoinDate).date())
                    .col(
                        ColumnDef::new(PersonalInfo::Avatar)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::SocialLinks)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(ColumnDef::new(PersonalInfo::ResumeUrl).text())
                    .col(
                        ColumnDef::new(PersonalInfo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_personal_info_updated_at
                BEFORE UPDATE ON personal_info
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_personal_info_updated_at ON personal_info;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PersonalInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PersonalInfo {
    Table,
    Id,
    Singleton,
    Name,
    Title,
    Bio,
    Email,
    Phone,
    Location,
    Company,
    JoinDate,
    Avatar,
    SocialLinks,
    ResumeUrl,
    CreatedAt,
    UpdatedAt,
}
