pub use super::blog_category::Entity as BlogCategory;
pub use super::blog_post::Entity as BlogPost;
pub use super::department::Entity as Department;
pub use super::faq_entry::Entity as FaqEntry;
pub use super::navigation_item::Entity as NavigationItem;
pub use super::partner::Entity as Partner;
pub use super::pricing_plan::Entity as PricingPlan;
pub use super::site_setting::Entity as SiteSetting;
pub use super::team_member::Entity as TeamMember;
pub use super::testimonial::Entity as Testimonial;
pub use super::user::Entity as User;
