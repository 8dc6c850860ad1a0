use crate::service::team::TeamService;
use entity::prelude::{Department, TeamMember};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that members are grouped under their department.
#[tokio::test]
async fn groups_members_by_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Department)
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let engineering = factory::team::DepartmentFactory::new(db)
        .name("Engineering")
        .sort_order(0)
        .build()
        .await?;
    let community = factory::team::DepartmentFactory::new(db)
        .name("Community")
        .sort_order(1)
        .build()
        .await?;

    factory::team::create_team_member(db, engineering.id).await?;
    factory::team::create_team_member(db, engineering.id).await?;
    factory::team::create_team_member(db, community.id).await?;

    let service = TeamService::new(db);
    let departments = service.departments().await?;

    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0].name, "Engineering");
    assert_eq!(departments[0].members.len(), 2);
    assert_eq!(departments[1].name, "Community");
    assert_eq!(departments[1].members.len(), 1);

    Ok(())
}

/// Tests that inactive members are left out of the listing.
#[tokio::test]
async fn omits_inactive_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Department)
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::team::create_department(db).await?;

    let active = factory::team::TeamMemberFactory::new(db, department.id)
        .name("Active Member")
        .build()
        .await?;
    factory::team::TeamMemberFactory::new(db, department.id)
        .name("Former Member")
        .active(false)
        .build()
        .await?;

    let service = TeamService::new(db);
    let departments = service.departments().await?;

    assert_eq!(departments[0].members.len(), 1);
    assert_eq!(departments[0].members[0].name, active.name);

    Ok(())
}

/// Tests that a department with no members still appears, empty.
#[tokio::test]
async fn keeps_empty_departments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Department)
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team::DepartmentFactory::new(db)
        .name("Hiring Soon")
        .build()
        .await?;

    let service = TeamService::new(db);
    let departments = service.departments().await?;

    assert_eq!(departments.len(), 1);
    assert!(departments[0].members.is_empty());

    Ok(())
}
