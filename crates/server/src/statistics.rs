//! Statistics API endpoints

use std::collections::BTreeMap;

use api_types::{
    expense::Expense,
    stats::{MonthlyTrend, Statistic},
};
use axum::{Json, extract::State};
use engine::round_cents;

use crate::{ServerError, server::ServerState};

/// Dashboard statistics over every expense, independent of any list filter.
pub async fn get_stats(State(state): State<ServerState>) -> Result<Json<Statistic>, ServerError> {
    let stats = state.engine.statistics().await?;

    let by_category: BTreeMap<String, f64> = stats
        .by_category
        .iter()
        .map(|(category, total)| (category.as_str().to_string(), round_cents(*total)))
        .collect();
    // Summed after rounding so the wire totals still add up.
    let total_all_time = round_cents(by_category.values().sum());

    Ok(Json(Statistic {
        total_all_time,
        total_this_month: round_cents(stats.total_this_month),
        highest_expense: stats.highest_expense.as_ref().map(Expense::from),
        transaction_count: stats.transaction_count,
        by_category,
        monthly_trend: stats
            .monthly_trend
            .iter()
            .map(|month| MonthlyTrend {
                month: month.label(),
                key: month.key(),
                total: round_cents(month.total),
            })
            .collect(),
    }))
}
