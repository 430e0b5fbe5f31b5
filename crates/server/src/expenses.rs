//! Expense API endpoints

use api_types::expense::{Expense, ExpenseList, ExpenseNew, ExpensePatch, ExpenseUpdate};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::NaiveDate;

use crate::{ServerError, server::ServerState};

/// Treat empty query values as absent; the web client sends blank fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_date(value: Option<String>, field: &str) -> Result<Option<NaiveDate>, ServerError> {
    non_empty(value)
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                ServerError::Validation(format!("{field}: '{raw}' is not a YYYY-MM-DD date"))
            })
        })
        .transpose()
}

fn list_filter(
    query: ExpenseList,
) -> Result<(engine::ExpenseListFilter, engine::ExpenseSort), ServerError> {
    let category = non_empty(query.category)
        .map(|raw| engine::parse_category(&raw))
        .transpose()?;
    let sort = engine::ExpenseSort::parse(
        non_empty(query.sort_by).as_deref(),
        non_empty(query.sort_dir).as_deref(),
    )?;

    let filter = engine::ExpenseListFilter {
        category,
        start_date: parse_date(query.start_date, "start_date")?,
        end_date: parse_date(query.end_date, "end_date")?,
        keyword: non_empty(query.keyword),
    };
    Ok((filter, sort))
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ExpenseList>, QueryRejection>,
) -> Result<Json<Vec<Expense>>, ServerError> {
    let Query(query) = query?;
    let (filter, sort) = list_filter(query)?;

    let expenses = state.engine.list_expenses(&filter, sort).await?;
    Ok(Json(expenses.iter().map(Expense::from).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), ServerError> {
    let Json(payload) = payload?;

    let expense = state
        .engine
        .create_expense(
            engine::ExpenseCmd::new(payload.amount, payload.category, payload.date)
                .description(payload.description),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(Expense::from(&expense))))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Expense>, ServerError> {
    let Path(id) = id?;

    let expense = state.engine.expense(id).await?;
    Ok(Json(Expense::from(&expense)))
}

pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> Result<Json<Expense>, ServerError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let expense = state
        .engine
        .update_expense(
            id,
            engine::ExpenseCmd::new(payload.amount, payload.category, payload.date)
                .description(payload.description),
        )
        .await?;

    Ok(Json(Expense::from(&expense)))
}

pub async fn patch(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ExpensePatch>, JsonRejection>,
) -> Result<Json<Expense>, ServerError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let expense = state
        .engine
        .patch_expense(
            id,
            engine::ExpensePatch {
                amount: payload.amount,
                category: payload.category,
                date: payload.date,
                description: payload.description,
            },
        )
        .await?;

    Ok(Json(Expense::from(&expense)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;

    state.engine.delete_expense(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_values_are_ignored() {
        let query = ExpenseList {
            category: Some(String::new()),
            start_date: Some(String::new()),
            keyword: Some(String::new()),
            sort_by: Some(String::new()),
            ..Default::default()
        };
        let (filter, sort) = list_filter(query).ok().unwrap();
        assert_eq!(filter, engine::ExpenseListFilter::default());
        assert_eq!(sort, engine::ExpenseSort::default());
    }

    #[test]
    fn bad_query_values_are_validation_errors() {
        let bad_date = ExpenseList {
            end_date: Some("2024-13-01".to_string()),
            ..Default::default()
        };
        assert!(matches!(list_filter(bad_date), Err(ServerError::Validation(_))));

        let bad_category = ExpenseList {
            category: Some("Groceries".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            list_filter(bad_category),
            Err(ServerError::Engine(engine::EngineError::InvalidCategory(_)))
        ));

        let bad_dir = ExpenseList {
            sort_dir: Some("sideways".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            list_filter(bad_dir),
            Err(ServerError::Engine(engine::EngineError::InvalidSort(_)))
        ));
    }
}
