pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_user_table;
mod m20260110_000002_create_blog_category_table;
mod m20260110_000003_create_blog_post_table;
mod m20260110_000004_create_faq_entry_table;
mod m20260111_000005_create_department_table;
mod m20260111_000006_create_team_member_table;
mod m20260111_000007_create_partner_table;
mod m20260111_000008_create_testimonial_table;
mod m20260112_000009_create_pricing_plan_table;
mod m20260112_000010_create_navigation_item_table;
mod m20260112_000011_create_site_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_user_table::Migration),
            Box::new(m20260110_000002_create_blog_category_table::Migration),
            Box::new(m20260110_000003_create_blog_post_table::Migration),
            Box::new(m20260110_000004_create_faq_entry_table::Migration),
            Box::new(m20260111_000005_create_department_table::Migration),
            Box::new(m20260111_000006_create_team_member_table::Migration),
            Box::new(m20260111_000007_create_partner_table::Migration),
            Box::new(m20260111_000008_create_testimonial_table::Migration),
            Box::new(m20260112_000009_create_pricing_plan_table::Migration),
            Box::new(m20260112_000010_create_navigation_item_table::Migration),
            Box::new(m20260112_000011_create_site_setting_table::Migration),
        ]
    }
}
