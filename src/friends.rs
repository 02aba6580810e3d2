use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::balance::counterparty_shares;
use crate::schemas::{Expense, User, UserId};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendBalance {
    pub friend_id: UserId,
    pub name: String,
    pub balance: f64,
    pub last_transaction: DateTime<Utc>,
}

/// Balances with every friend across direct (ungrouped) expenses.
///
/// Friends are listed in the order they first show up in `expenses`; a
/// friend without any qualifying expense is left out.
pub fn resolve_friend_balances(
    expenses: &[Expense],
    friends: &[User],
    current_user_id: &str,
) -> Vec<FriendBalance> {
    let names: HashMap<&str, &str> = friends
        .iter()
        .map(|friend| (friend.id.as_str(), friend.name.as_str()))
        .collect();

    let (balances, _) = expenses
        .iter()
        .filter(|expense| expense.is_direct() && !expense.is_draft)
        .flat_map(|expense| {
            counterparty_shares(expense, current_user_id)
                .into_iter()
                .map(move |share| (share, expense.effective_date()))
        })
        .filter(|(share, _)| names.contains_key(share.counterparty()))
        .fold(
            (Vec::<FriendBalance>::new(), HashMap::<String, usize>::new()),
            |(mut balances, mut seen), (share, date)| {
                let friend_id = share.counterparty();
                match seen.get(friend_id) {
                    Some(&idx) => {
                        let entry = &mut balances[idx];
                        entry.balance += share.signed();
                        entry.last_transaction = entry.last_transaction.max(date);
                    }
                    None => {
                        seen.insert(friend_id.to_string(), balances.len());
                        balances.push(FriendBalance {
                            friend_id: friend_id.to_string(),
                            name: names[friend_id].to_string(),
                            balance: share.signed(),
                            last_transaction: date,
                        });
                    }
                }
                (balances, seen)
            },
        );

    balances
}

/// Friends of `current_user_id`: every other known user.
pub fn friends_of<'a>(users: &'a [User], current_user_id: &str) -> Vec<&'a User> {
    let mut seen = HashSet::new();
    users
        .iter()
        .filter(|user| user.id != current_user_id && seen.insert(user.id.as_str()))
        .collect()
}
