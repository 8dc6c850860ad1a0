use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
    QueryOrder,
};

pub struct FaqRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns published FAQ entries ordered by sort order.
    ///
    /// The optional search term is a case-insensitive substring match over both
    /// question and answer; lowering both sides keeps the behavior independent
    /// of database collation.
    pub async fn get_published(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<entity::faq_entry::Model>, DbErr> {
        let mut query = entity::prelude::FaqEntry::find()
            .filter(entity::faq_entry::Column::Published.eq(true));

        if let Some(term) = search {
            let pattern = format!("%{}%", term.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::faq_entry::Column::Question)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::faq_entry::Column::Answer)))
                            .like(pattern),
                    ),
            );
        }

        query
            .order_by_asc(entity::faq_entry::Column::SortOrder)
            .all(self.db)
            .await
    }
}
