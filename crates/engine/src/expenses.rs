//! Expense primitives.
//!
//! An `Expense` is a single spending record. Storage assigns its integer id
//! on creation and never reuses it after deletion.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;

use crate::{Category, EngineError, util::parse_category};

#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Expense> for api_types::expense::Expense {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            amount: expense.amount,
            category: expense.category,
            date: expense.date,
            description: expense.description.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub category: String,
    pub date: Date,
    pub description: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Expense {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            amount: model.amount,
            category: parse_category(&model.category)?,
            date: model.date,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
