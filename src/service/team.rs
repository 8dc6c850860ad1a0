use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::team::{DepartmentRepository, TeamMemberRepository},
    error::AppError,
    model::team::{DepartmentDto, TeamMemberDto},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns departments with their active members, both in display order.
    pub async fn departments(&self) -> Result<Vec<DepartmentDto>, AppError> {
        let departments = DepartmentRepository::new(self.db).get_all().await?;
        let members = TeamMemberRepository::new(self.db).get_active().await?;

        let mut by_department: HashMap<i32, Vec<TeamMemberDto>> = HashMap::new();
        for member in members {
            by_department
                .entry(member.department_id)
                .or_default()
                .push(TeamMemberDto::from_entity(member));
        }

        Ok(departments
            .into_iter()
            .map(|department| {
                let members = by_department.remove(&department.id).unwrap_or_default();
                DepartmentDto::from_entity(department, members)
            })
            .collect())
    }
}
