//! Dashboard statistics over the whole expense set.
//!
//! Statistics never look at the list filter: they always describe every
//! stored expense.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::{Category, Expense};

/// Number of months in the trend window, current month included.
pub const TREND_MONTHS: usize = 6;

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Total spent in one calendar month.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyTotal {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub total: f64,
}

impl MonthlyTotal {
    /// Display label, e.g. `"Jan 2024"`. Falls back to the numeric month
    /// when `month` is outside `1..=12`.
    pub fn label(&self) -> String {
        let index = self.month.checked_sub(1).map(|m| m as usize);
        match index.and_then(|i| MONTH_ABBR.get(i)) {
            Some(abbr) => format!("{abbr} {}", self.year),
            None => format!("{:02} {}", self.month, self.year),
        }
    }

    /// Sortable key, e.g. `"2024-01"`.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    /// Sum of the `by_category` values.
    pub total_all_time: f64,
    pub total_this_month: f64,
    pub transaction_count: u64,
    /// Largest expense; ties go to the lowest id.
    pub highest_expense: Option<Expense>,
    /// Only categories with at least one expense are present.
    pub by_category: BTreeMap<Category, f64>,
    /// Exactly [`TREND_MONTHS`] entries, oldest first, ending at the
    /// reference month.
    pub monthly_trend: Vec<MonthlyTotal>,
}

impl Statistics {
    /// Aggregate `expenses` relative to `today`.
    ///
    /// `expenses` must be in ascending id order for the `highest_expense`
    /// tie-break to hold.
    pub fn compute(expenses: &[Expense], today: NaiveDate) -> Self {
        let mut monthly_trend = trend_window(today);
        let mut by_category: BTreeMap<Category, f64> = BTreeMap::new();
        let mut highest: Option<&Expense> = None;

        for expense in expenses {
            *by_category.entry(expense.category).or_insert(0.0) += expense.amount;

            if highest.is_none_or(|best| expense.amount > best.amount) {
                highest = Some(expense);
            }

            if let Some(bucket) = monthly_trend.iter_mut().find(|m| m.contains(expense.date)) {
                bucket.total += expense.amount;
            }
        }

        let total_this_month = monthly_trend.last().map_or(0.0, |m| m.total);

        Self {
            total_all_time: by_category.values().sum(),
            total_this_month,
            transaction_count: expenses.len() as u64,
            highest_expense: highest.cloned(),
            by_category,
            monthly_trend,
        }
    }
}

/// The `TREND_MONTHS` calendar months ending at `today`'s month, zeroed.
fn trend_window(today: NaiveDate) -> Vec<MonthlyTotal> {
    let current = today.year() * 12 + today.month0() as i32;
    (0..TREND_MONTHS as i32)
        .rev()
        .map(|offset| {
            let index = current - offset;
            MonthlyTotal {
                year: index.div_euclid(12),
                month: index.rem_euclid(12) as u32 + 1,
                total: 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: i32, amount: f64, category: Category, on: NaiveDate) -> Expense {
        let now = Utc::now();
        Expense {
            id,
            amount,
            category,
            date: on,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_set_has_zero_totals_and_full_trend() {
        let stats = Statistics::compute(&[], date(2024, 3, 10));
        assert_eq!(stats.total_all_time, 0.0);
        assert_eq!(stats.total_this_month, 0.0);
        assert_eq!(stats.transaction_count, 0);
        assert!(stats.highest_expense.is_none());
        assert!(stats.by_category.is_empty());
        assert_eq!(stats.monthly_trend.len(), TREND_MONTHS);
        assert!(stats.monthly_trend.iter().all(|m| m.total == 0.0));
    }

    #[test]
    fn trend_wraps_across_year_boundary() {
        let labels: Vec<String> = trend_window(date(2024, 2, 29))
            .iter()
            .map(MonthlyTotal::label)
            .collect();
        assert_eq!(
            labels,
            ["Sep 2023", "Oct 2023", "Nov 2023", "Dec 2023", "Jan 2024", "Feb 2024"]
        );
        let keys: Vec<String> = trend_window(date(2024, 2, 29))
            .iter()
            .map(MonthlyTotal::key)
            .collect();
        assert_eq!(keys[0], "2023-09");
        assert_eq!(keys[5], "2024-02");
    }

    #[test]
    fn label_tolerates_out_of_range_month() {
        for month in [0, 13] {
            let total = MonthlyTotal {
                year: 2024,
                month,
                total: 0.0,
            };
            assert_eq!(total.label(), format!("{month:02} 2024"));
        }
    }

    #[test]
    fn aggregates_by_category_and_month() {
        let today = date(2024, 3, 20);
        let expenses = [
            expense(1, 10.0, Category::Food, date(2024, 3, 1)),
            expense(2, 20.0, Category::Food, date(2024, 1, 15)),
            expense(3, 5.0, Category::Transport, date(2024, 3, 2)),
            expense(4, 7.5, Category::Health, date(2023, 6, 30)),
        ];
        let stats = Statistics::compute(&expenses, today);

        assert_eq!(stats.transaction_count, 4);
        assert_eq!(stats.total_all_time, 42.5);
        assert_eq!(stats.total_this_month, 15.0);
        assert_eq!(stats.by_category.get(&Category::Food), Some(&30.0));
        assert_eq!(stats.by_category.get(&Category::Transport), Some(&5.0));
        assert_eq!(stats.by_category.get(&Category::Health), Some(&7.5));
        assert!(!stats.by_category.contains_key(&Category::Other));

        let totals: Vec<f64> = stats.monthly_trend.iter().map(|m| m.total).collect();
        // Oct, Nov, Dec, Jan, Feb, Mar; the June 2023 expense is outside the window.
        assert_eq!(totals, [0.0, 0.0, 0.0, 20.0, 0.0, 15.0]);
    }

    #[test]
    fn highest_expense_tie_goes_to_lowest_id() {
        let on = date(2024, 3, 1);
        let expenses = [
            expense(1, 5.0, Category::Food, on),
            expense(2, 50.0, Category::Shopping, on),
            expense(3, 50.0, Category::Utilities, on),
        ];
        let stats = Statistics::compute(&expenses, on);
        assert_eq!(stats.highest_expense.map(|e| e.id), Some(2));
    }

    #[test]
    fn category_sums_add_up_to_total() {
        let on = date(2024, 3, 1);
        let expenses: Vec<Expense> = (1..=50)
            .map(|i| {
                let category = Category::ALL[i as usize % Category::ALL.len()];
                expense(i, f64::from(i) * 0.37, category, on)
            })
            .collect();
        let stats = Statistics::compute(&expenses, on);
        let sum: f64 = stats.by_category.values().sum();
        assert_eq!(sum, stats.total_all_time);
    }
}
