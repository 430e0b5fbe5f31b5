use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Closed set of expense categories.
///
/// This is the single source of truth for category names: the engine
/// validates against it, the wire format serializes it, and presentation
/// code should index its labels/colors by it instead of repeating literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Health,
    Entertainment,
    Shopping,
    Utilities,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Food,
        Self::Transport,
        Self::Health,
        Self::Entertainment,
        Self::Shopping,
        Self::Utilities,
        Self::Other,
    ];

    /// Returns the canonical name used on the wire and in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

pub mod expense {
    use chrono::NaiveDate;

    use super::*;

    /// An expense as returned by the API.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        pub id: i32,
        pub amount: f64,
        pub category: Category,
        pub date: NaiveDate,
        pub description: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub amount: f64,
        pub category: Category,
        pub date: NaiveDate,
        #[serde(default)]
        pub description: String,
    }

    /// Full replacement of an expense's mutable fields.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        pub amount: f64,
        pub category: Category,
        pub date: NaiveDate,
        #[serde(default)]
        pub description: String,
    }

    /// Partial update: absent fields keep their stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpensePatch {
        pub amount: Option<f64>,
        pub category: Option<Category>,
        pub date: Option<NaiveDate>,
        pub description: Option<String>,
    }

    /// Query string of `GET /api/expenses`.
    ///
    /// Values are kept as raw strings so the server can report a precise
    /// validation error; empty values are treated as absent.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseList {
        pub category: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
        pub keyword: Option<String>,
        pub sort_by: Option<String>,
        pub sort_dir: Option<String>,
    }
}

pub mod stats {
    use std::collections::BTreeMap;

    use super::*;
    use crate::expense::Expense;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct MonthlyTrend {
        /// Display label, e.g. `"Jan 2024"`.
        pub month: String,
        /// Sortable key, e.g. `"2024-01"`.
        pub key: String,
        pub total: f64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Statistic {
        pub total_all_time: f64,
        pub total_this_month: f64,
        pub highest_expense: Option<Expense>,
        pub transaction_count: u64,
        pub by_category: BTreeMap<String, f64>,
        pub monthly_trend: Vec<MonthlyTrend>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn category_parse_is_case_sensitive() {
        assert_eq!(
            "food".parse::<Category>(),
            Err(ParseCategoryError("food".to_string()))
        );
        assert!("InvalidCategory".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_as_canonical_name() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");
        assert!(serde_json::from_str::<Category>("\"Groceries\"").is_err());
    }

    #[test]
    fn expense_new_description_defaults_to_empty() {
        let body: expense::ExpenseNew =
            serde_json::from_str(r#"{"amount": 12.5, "category": "Food", "date": "2024-01-15"}"#)
                .unwrap();
        assert_eq!(body.description, "");
        assert_eq!(body.category, Category::Food);
    }
}
