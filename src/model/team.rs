use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberDto {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub avatar_url: Option<String>,
    pub discord_tag: Option<String>,
}

impl TeamMemberDto {
    pub fn from_entity(entity: entity::team_member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            title: entity.title,
            avatar_url: entity.avatar_url,
            discord_tag: entity.discord_tag,
        }
    }
}

/// Department with its active members, both already sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentDto {
    pub id: i32,
    pub name: String,
    pub members: Vec<TeamMemberDto>,
}

impl DepartmentDto {
    pub fn from_entity(entity: entity::department::Model, members: Vec<TeamMemberDto>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            members,
        }
    }
}
