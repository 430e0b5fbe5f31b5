use sea_orm::{QueryOrder, prelude::*};

use crate::{
    Expense, ResultEngine, expenses,
    query::{ApplyExpenseFilters, ExpenseListFilter, ExpenseSort, SortDirection, keyword_matches},
};

use super::Engine;

impl Engine {
    /// Lists expenses matching `filter`, ordered by `sort`.
    ///
    /// Ties on the sort key are broken by ascending id. Returns an empty
    /// list when nothing matches.
    pub async fn list_expenses(
        &self,
        filter: &ExpenseListFilter,
        sort: ExpenseSort,
    ) -> ResultEngine<Vec<Expense>> {
        let query = expenses::Entity::find().apply_expense_filters(filter);
        let query = match sort.direction {
            SortDirection::Asc => query.order_by_asc(sort.by.column()),
            SortDirection::Desc => query.order_by_desc(sort.by.column()),
        };

        let rows = query
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await?;

        let needle = filter.keyword_needle();
        let mut out = Vec::with_capacity(rows.len());
        for model in rows {
            if let Some(needle) = &needle
                && !keyword_matches(&model.description, needle)
            {
                continue;
            }
            out.push(Expense::try_from(model)?);
        }

        tracing::debug!(
            count = out.len(),
            sort_by = sort.by.as_str(),
            sort_dir = sort.direction.as_str(),
            "listed expenses"
        );
        Ok(out)
    }
}
