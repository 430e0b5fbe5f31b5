//! Filter and sort parameters for listing expenses.

use std::str::FromStr;

use chrono::NaiveDate;
use sea_orm::{QueryFilter, prelude::*};

use crate::{Category, EngineError, ResultEngine, expenses};

/// Filters for listing expenses. All filters are optional and combined with
/// AND semantics.
///
/// `start_date` and `end_date` are both inclusive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseListFilter {
    pub category: Option<Category>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive substring of the description. Empty means no filter.
    pub keyword: Option<String>,
}

impl ExpenseListFilter {
    /// Returns the lowercased keyword, if one should be applied.
    pub(crate) fn keyword_needle(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
    }
}

/// Case-insensitive substring match. `needle` must already be lowercased.
pub(crate) fn keyword_matches(description: &str, needle: &str) -> bool {
    description.to_lowercase().contains(needle)
}

pub(crate) trait ApplyExpenseFilters: QueryFilter + Sized {
    fn apply_expense_filters(self, filter: &ExpenseListFilter) -> Self;
}

impl<T> ApplyExpenseFilters for T
where
    T: QueryFilter + Sized,
{
    fn apply_expense_filters(mut self, filter: &ExpenseListFilter) -> Self {
        if let Some(category) = filter.category {
            self = self.filter(expenses::Column::Category.eq(category.as_str()));
        }
        if let Some(start) = filter.start_date {
            self = self.filter(expenses::Column::Date.gte(start));
        }
        if let Some(end) = filter.end_date {
            self = self.filter(expenses::Column::Date.lte(end));
        }
        self
    }
}

/// Column an expense list is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Date,
    Amount,
    Category,
    Description,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Description => "description",
        }
    }

    pub(crate) fn column(self) -> expenses::Column {
        match self {
            Self::Date => expenses::Column::Date,
            Self::Amount => expenses::Column::Amount,
            Self::Category => expenses::Column::Category,
            Self::Description => expenses::Column::Description,
        }
    }
}

impl FromStr for SortBy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            "description" => Ok(Self::Description),
            other => Err(EngineError::InvalidSort(format!(
                "unknown sort_by '{other}', expected one of date, amount, category, description"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(EngineError::InvalidSort(format!(
                "unknown sort_dir '{other}', expected asc or desc"
            ))),
        }
    }
}

/// Ordering of an expense list.
///
/// Records with equal sort keys are always ordered by ascending id, in both
/// directions, so repeated queries return the same sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpenseSort {
    pub by: SortBy,
    pub direction: SortDirection,
}

impl ExpenseSort {
    #[must_use]
    pub fn new(by: SortBy, direction: SortDirection) -> Self {
        Self { by, direction }
    }

    /// Parse optional raw parameters; absent values fall back to
    /// `date`/`desc`, unknown values are rejected.
    pub fn parse(by: Option<&str>, direction: Option<&str>) -> ResultEngine<Self> {
        Ok(Self {
            by: by.map(str::parse).transpose()?.unwrap_or_default(),
            direction: direction.map(str::parse).transpose()?.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_date_desc() {
        let sort = ExpenseSort::parse(None, None).unwrap();
        assert_eq!(sort, ExpenseSort::new(SortBy::Date, SortDirection::Desc));
    }

    #[test]
    fn sort_parses_every_column() {
        for by in [
            SortBy::Date,
            SortBy::Amount,
            SortBy::Category,
            SortBy::Description,
        ] {
            let sort = ExpenseSort::parse(Some(by.as_str()), Some("asc")).unwrap();
            assert_eq!(sort.by, by);
            assert_eq!(sort.direction, SortDirection::Asc);
        }
    }

    #[test]
    fn unknown_sort_values_are_rejected() {
        assert!(matches!(
            ExpenseSort::parse(Some("id"), None),
            Err(EngineError::InvalidSort(_))
        ));
        assert!(matches!(
            ExpenseSort::parse(None, Some("DESC")),
            Err(EngineError::InvalidSort(_))
        ));
    }

    #[test]
    fn keyword_match_ignores_case() {
        let filter = ExpenseListFilter {
            keyword: Some("CoFFee".to_string()),
            ..Default::default()
        };
        let needle = filter.keyword_needle().unwrap();
        assert!(keyword_matches("Morning coffee at the bar", &needle));
        assert!(!keyword_matches("Tea", &needle));
    }

    #[test]
    fn empty_keyword_is_ignored() {
        let filter = ExpenseListFilter {
            keyword: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.keyword_needle(), None);
    }
}
