use sea_orm_migration::{prelude::*, schema::*};

use super::m20260111_000005_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(integer(TeamMember::DepartmentId))
                    .col(string(TeamMember::Name))
                    .col(string(TeamMember::Title))
                    .col(string_null(TeamMember::AvatarUrl))
                    .col(string_null(TeamMember::DiscordTag))
                    .col(integer(TeamMember::SortOrder))
                    .col(boolean(TeamMember::Active))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_member_department_id")
                            .from(TeamMember::Table, TeamMember::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMember {
    Table,
    Id,
    DepartmentId,
    Name,
    Title,
    AvatarUrl,
    DiscordTag,
    SortOrder,
    Active,
}
