//! Storage and query engine for the expense tracker.
//!
//! The engine owns the `expenses` table: it validates and persists records,
//! answers filtered/sorted list queries and computes dashboard statistics.

pub use api_types::Category;
pub use commands::{ExpenseCmd, ExpensePatch};
pub use error::EngineError;
pub use expenses::Expense;
pub use money::round_cents;
pub use ops::{Engine, EngineBuilder};
pub use query::{ExpenseListFilter, ExpenseSort, SortBy, SortDirection};
pub use sea_orm::DbErr;
pub use statistics::{MonthlyTotal, Statistics, TREND_MONTHS};
pub use util::parse_category;

mod commands;
mod error;
mod expenses;
mod money;
mod ops;
mod query;
mod statistics;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
