pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_updated_at_function;
mod m20250801_000002_create_table_projects;
mod m20250801_000003_create_table_skills;
mod m20250801_000004_create_table_experiences;
mod m20250801_000005_create_table_technologies;
mod m20250801_000006_create_table_personal_info;
mod m20250801_000007_create_table_contact_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_updated_at_function::Migration),
            Box::new(m20250801_000002_create_table_projects::Migration),
            Box::new(m20250801_000003_create_table_skills::Migration),
            Box::new(m20250801_000004_create_table_experiences::Migration),
            Box::new(m20250801_000005_create_table_technologies::Migration),
            Box::new(m20250801_000006_create_table_personal_info::Migration),
            Box::new(m20250801_000007_create_table_contact_messages::Migration),
        ]
    }
}
