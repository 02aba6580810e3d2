use std::collections::BTreeSet;

use crate::schemas::{Expense, User, UserId};

pub const UNKNOWN_USER: &str = "Unknown User";

pub fn get_user_name<'a>(user_id: &str, users: &'a [User]) -> &'a str {
    users
        .iter()
        .find(|user| user.id == user_id)
        .map_or(UNKNOWN_USER, |user| user.name.as_str())
}

/// Every user appearing in the expenses, either as payer or as participant.
pub fn get_all_users_in_expenses(expenses: &[Expense]) -> BTreeSet<UserId> {
    expenses
        .iter()
        .flat_map(|expense| std::iter::once(&expense.paid_by).chain(&expense.split_between))
        .cloned()
        .collect()
}
