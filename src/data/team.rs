use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::department::Model>, DbErr> {
        entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::SortOrder)
            .all(self.db)
            .await
    }
}

pub struct TeamMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns active members across all departments, ordered by sort order.
    /// Grouping by department happens in the service layer so departments
    /// without active members still appear.
    pub async fn get_active(&self) -> Result<Vec<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::Active.eq(true))
            .order_by_asc(entity::team_member::Column::SortOrder)
            .all(self.db)
            .await
    }
}
