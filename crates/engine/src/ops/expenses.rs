use chrono::Utc;
use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{
    EngineError, Expense, ExpenseCmd, ExpensePatch, ResultEngine, expenses,
    util::{normalize_description, parse_category, validate_amount},
};

use super::{Engine, with_tx};

/// Validated copy of the mutable expense fields.
fn validated(cmd: ExpenseCmd) -> ResultEngine<ExpenseCmd> {
    Ok(ExpenseCmd {
        amount: validate_amount(cmd.amount)?,
        description: normalize_description(&cmd.description)?,
        ..cmd
    })
}

fn apply(active: &mut expenses::ActiveModel, cmd: ExpenseCmd) {
    active.amount = ActiveValue::Set(cmd.amount);
    active.category = ActiveValue::Set(cmd.category.as_str().to_string());
    active.date = ActiveValue::Set(cmd.date);
    active.description = ActiveValue::Set(cmd.description);
    active.updated_at = ActiveValue::Set(Utc::now());
}

impl Engine {
    /// Create a new expense and return it with its assigned id.
    pub async fn create_expense(&self, cmd: ExpenseCmd) -> ResultEngine<Expense> {
        let cmd = validated(cmd)?;
        let now = Utc::now();

        let expense = with_tx!(self, |db_tx| {
            let mut active = expenses::ActiveModel {
                id: ActiveValue::NotSet,
                created_at: ActiveValue::Set(now),
                ..Default::default()
            };
            apply(&mut active, cmd);
            active.updated_at = ActiveValue::Set(now);
            let model = active.insert(&db_tx).await?;
            Expense::try_from(model)
        })?;

        tracing::info!(expense_id = expense.id, "expense created");
        Ok(expense)
    }

    /// Return the expense with the given id.
    pub async fn expense(&self, id: i32) -> ResultEngine<Expense> {
        let model = expenses::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::expense_not_found(id))?;
        Expense::try_from(model)
    }

    /// Replace every mutable field of an expense. The id never changes.
    pub async fn update_expense(&self, id: i32, cmd: ExpenseCmd) -> ResultEngine<Expense> {
        let cmd = validated(cmd)?;

        let expense = with_tx!(self, |db_tx| {
            let model = expenses::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::expense_not_found(id))?;
            let mut active: expenses::ActiveModel = model.into();
            apply(&mut active, cmd);
            let model = active.update(&db_tx).await?;
            Expense::try_from(model)
        })?;

        tracing::info!(expense_id = expense.id, "expense updated");
        Ok(expense)
    }

    /// Update only the fields present in `patch`; the merged record is
    /// validated like a full update.
    pub async fn patch_expense(&self, id: i32, patch: ExpensePatch) -> ResultEngine<Expense> {
        let expense = with_tx!(self, |db_tx| {
            let model = expenses::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::expense_not_found(id))?;

            let category = match patch.category {
                Some(category) => category,
                None => parse_category(&model.category)?,
            };
            let cmd = validated(ExpenseCmd {
                amount: patch.amount.unwrap_or(model.amount),
                category,
                date: patch.date.unwrap_or(model.date),
                description: patch
                    .description
                    .unwrap_or_else(|| model.description.clone()),
            })?;

            let mut active: expenses::ActiveModel = model.into();
            apply(&mut active, cmd);
            let model = active.update(&db_tx).await?;
            Expense::try_from(model)
        })?;

        tracing::info!(expense_id = expense.id, "expense patched");
        Ok(expense)
    }

    /// Permanently delete an expense.
    pub async fn delete_expense(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let result = expenses::Entity::delete_by_id(id).exec(&db_tx).await?;
            if result.rows_affected == 0 {
                Err(EngineError::expense_not_found(id))
            } else {
                Ok(())
            }
        })?;

        tracing::info!(expense_id = id, "expense deleted");
        Ok(())
    }
}
