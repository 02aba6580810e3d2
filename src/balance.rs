use std::collections::BTreeMap;

use serde::Serialize;

use crate::lookup::get_user_name;
use crate::schemas::{Expense, Group, GroupId, User, UserId};

/// Net position of the current user, positive amounts meaning money owed to
/// them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub total_owed: f64,
    pub total_owing: f64,
    pub net_balance: f64,
    pub detailed_balances: BTreeMap<UserId, f64>,
}

impl Balance {
    fn new(total_owed: f64, total_owing: f64, detailed_balances: BTreeMap<UserId, f64>) -> Self {
        Self {
            total_owed,
            total_owing,
            net_balance: total_owed - total_owing,
            detailed_balances,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBalance {
    pub user_id: UserId,
    pub name: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBalance {
    pub group_id: GroupId,
    pub group_name: String,
    #[serde(flatten)]
    pub balance: Balance,
    pub members: Vec<MemberBalance>,
}

/// What a single expense means for the current user with respect to one
/// counterparty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Share<'a> {
    /// The counterparty owes the current user.
    Owed { by: &'a str, amount: f64 },
    /// The current user owes the counterparty.
    Owing { to: &'a str, amount: f64 },
}

impl Share<'_> {
    pub(crate) fn counterparty(&self) -> &str {
        match self {
            Share::Owed { by, .. } => by,
            Share::Owing { to, .. } => to,
        }
    }

    pub(crate) fn signed(&self) -> f64 {
        match self {
            Share::Owed { amount, .. } => *amount,
            Share::Owing { amount, .. } => -amount,
        }
    }
}

/// Splits an expense from the point of view of `current_user_id`.
///
/// If they paid, everybody else in the split owes them a share. If somebody
/// else paid and they are part of the split, they owe the payer a share.
/// Otherwise the expense does not concern them.
pub(crate) fn counterparty_shares<'a>(expense: &'a Expense, current_user_id: &str) -> Vec<Share<'a>> {
    let share = expense.share();
    if expense.paid_by == current_user_id {
        expense
            .split_between
            .iter()
            .filter(|id| *id != current_user_id)
            .map(|id| Share::Owed { by: id, amount: share })
            .collect()
    } else if expense.involves(current_user_id) {
        vec![Share::Owing {
            to: &expense.paid_by,
            amount: share,
        }]
    } else {
        Vec::new()
    }
}

pub fn resolve_group_balance(
    group: &Group,
    expenses: &[Expense],
    users: &[User],
    current_user_id: &str,
) -> GroupBalance {
    let qualifying: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| expense.belongs_to(&group.id) && !expense.is_draft)
        .collect();
    tracing::debug!(
        "group {}: {} qualifying expenses out of {}",
        group.id,
        qualifying.len(),
        expenses.len()
    );

    let (detailed, total_owed, total_owing) = qualifying
        .iter()
        .flat_map(|expense| counterparty_shares(expense, current_user_id))
        .fold(
            (BTreeMap::new(), 0.0, 0.0),
            |(mut detailed, owed, owing), share| {
                *detailed
                    .entry(share.counterparty().to_string())
                    .or_insert(0.0) += share.signed();
                match share {
                    Share::Owed { amount, .. } => (detailed, owed + amount, owing),
                    Share::Owing { amount, .. } => (detailed, owed, owing + amount),
                }
            },
        );

    let members = detailed
        .iter()
        .map(|(user_id, amount)| MemberBalance {
            user_id: user_id.clone(),
            name: get_user_name(user_id, users).to_string(),
            amount: *amount,
        })
        .collect();

    GroupBalance {
        group_id: group.id.clone(),
        group_name: group.name.clone(),
        balance: Balance::new(total_owed, total_owing, detailed),
        members,
    }
}
