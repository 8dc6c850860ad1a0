use sea_orm::entity::prelude::*;

/// Pricing plan row. `features` holds a JSON array of feature strings; parsing
/// happens at the model boundary, not here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pricing_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub tier: String,
    pub price_cents: i32,
    pub period: String,
    #[sea_orm(column_type = "Text")]
    pub features: String,
    pub highlighted: bool,
    pub cta_label: String,
    pub cta_url: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
