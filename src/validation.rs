use crate::error::LedgerError;
use crate::schemas::Expense;

/// Checks that an expense is structurally sound before it is trusted by the
/// resolvers, reporting the first rule it breaks.
pub fn check_expense(expense: &Expense) -> Result<(), LedgerError> {
    let reason = if expense.id.is_empty() {
        "missing id"
    } else if expense.title.is_empty() {
        "missing title"
    } else if !(expense.amount > 0.0) {
        // Also rejects NaN
        "amount must be greater than zero"
    } else if !expense.amount.is_finite() {
        "amount must be a finite number"
    } else if expense.currency.is_empty() {
        "missing currency"
    } else if expense.paid_by.is_empty() {
        "missing payer"
    } else if expense.split_between.is_empty() {
        "nobody to split the expense between"
    } else if expense.date.is_none() {
        "missing date"
    } else {
        return Ok(());
    };

    Err(LedgerError::InvalidExpense(reason.to_string()))
}

pub fn validate_expense_data(expense: &Expense) -> bool {
    check_expense(expense).is_ok()
}
