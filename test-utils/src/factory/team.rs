//! Factories for departments and team members.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    sort_order: i32,
}

impl<'a> DepartmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Department {}", id),
            sort_order: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            sort_order: ActiveValue::Set(self.sort_order),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating test team members. Defaults to active.
pub struct TeamMemberFactory<'a> {
    db: &'a DatabaseConnection,
    department_id: i32,
    name: String,
    title: String,
    sort_order: i32,
    active: bool,
}

impl<'a> TeamMemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, department_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            department_id,
            name: format!("Member {}", id),
            title: "Developer".to_string(),
            sort_order: 0,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::team_member::Model, DbErr> {
        entity::team_member::ActiveModel {
            id: ActiveValue::NotSet,
            department_id: ActiveValue::Set(self.department_id),
            name: ActiveValue::Set(self.name),
            title: ActiveValue::Set(self.title),
            avatar_url: ActiveValue::Set(None),
            discord_tag: ActiveValue::Set(None),
            sort_order: ActiveValue::Set(self.sort_order),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values.
pub async fn create_department(
    db: &DatabaseConnection,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}

/// Creates an active team member in the given department.
pub async fn create_team_member(
    db: &DatabaseConnection,
    department_id: i32,
) -> Result<entity::team_member::Model, DbErr> {
    TeamMemberFactory::new(db, department_id).build().await
}
