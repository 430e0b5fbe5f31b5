//! Command structs for engine write operations.
//!
//! These types group the fields of create/update/patch calls, keeping call
//! sites readable and avoiding long argument lists.

use chrono::NaiveDate;

use crate::Category;

/// Full set of mutable expense fields, used by create and update.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseCmd {
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
}

impl ExpenseCmd {
    #[must_use]
    pub fn new(amount: f64, category: Category, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            date,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update. `None` fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ExpensePatch {
    #[must_use]
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
