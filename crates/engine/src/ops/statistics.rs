use chrono::{Local, NaiveDate};
use sea_orm::{QueryOrder, prelude::*};

use crate::{Expense, ResultEngine, Statistics, expenses};

use super::Engine;

impl Engine {
    /// Statistics over every stored expense, relative to the server's local
    /// date.
    pub async fn statistics(&self) -> ResultEngine<Statistics> {
        self.statistics_at(Local::now().date_naive()).await
    }

    /// Statistics over every stored expense, relative to `today`.
    ///
    /// All values come from a single read, so they always agree with each
    /// other.
    pub async fn statistics_at(&self, today: NaiveDate) -> ResultEngine<Statistics> {
        let expenses = expenses::Entity::find()
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Expense::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;

        Ok(Statistics::compute(&expenses, today))
    }
}
