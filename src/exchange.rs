use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::schemas::{Expense, Group, UserId};

/// Anything smaller than half a cent is considered settled.
const SETTLED: f64 = 0.005;

#[derive(Clone, Debug, PartialEq)]
struct PersonalBalance {
    id: UserId,
    balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Exchange {
    pub payer: UserId,
    pub receiver: UserId,
    pub amount: f64,
}

fn group_expenses<'a>(group: &'a Group, expenses: &'a [Expense]) -> impl Iterator<Item = &'a Expense> {
    expenses
        .iter()
        .filter(move |expense| expense.belongs_to(&group.id) && !expense.is_draft)
}

/// Everybody's overall position inside a group: what they paid minus their
/// share of what was spent. Positions add up to zero.
pub fn compute_member_positions(group: &Group, expenses: &[Expense]) -> HashMap<UserId, f64> {
    group_expenses(group, expenses).fold(HashMap::new(), |mut positions, expense| {
        *positions.entry(expense.paid_by.clone()).or_insert(0.0) += expense.amount;
        let share = expense.share();
        for receiver in &expense.split_between {
            *positions.entry(receiver.clone()).or_insert(0.0) -= share;
        }
        positions
    })
}

// The exchanges that will be made if no simplification happens
fn get_naive_exchanges<'a>(expenses: impl Iterator<Item = &'a Expense>) -> Vec<Exchange> {
    // Keyed by the alphabetically ordered pair so both directions between
    // the same two people end up in the same entry. A positive balance means
    // the second user owes the first.
    let balances_between_people = expenses.fold(
        BTreeMap::<(&str, &str), f64>::new(),
        |mut balances, expense| {
            let share = expense.share();
            for receiver in expense.split_between.iter().filter(|r| **r != expense.paid_by) {
                let payer = expense.paid_by.as_str();
                let (pair, amount) = if payer < receiver.as_str() {
                    ((payer, receiver.as_str()), share)
                } else {
                    ((receiver.as_str(), payer), -share)
                };
                *balances.entry(pair).or_insert(0.0) += amount;
            }
            balances
        },
    );

    balances_between_people
        .into_iter()
        .filter(|(_, balance)| balance.is_finite() && balance.abs() >= SETTLED)
        .map(|((first, second), balance)| {
            let (payer, receiver) = if balance < 0.0 {
                (first, second)
            } else {
                (second, first)
            };
            Exchange {
                payer: payer.to_string(),
                receiver: receiver.to_string(),
                amount: round_to_2_decimals(balance.abs()),
            }
        })
        .collect()
}

// Matches the biggest debtor with the biggest creditor until nobody is left
fn get_simplified_exchanges(
    mut payers: Vec<PersonalBalance>,
    mut receivers: Vec<PersonalBalance>,
) -> Vec<Exchange> {
    payers.sort_by(|a, b| a.balance.total_cmp(&b.balance).then_with(|| b.id.cmp(&a.id)));
    receivers.sort_by(|a, b| a.balance.total_cmp(&b.balance).then_with(|| b.id.cmp(&a.id)));

    let mut exchanges = Vec::new();

    while let (Some(payer), Some(receiver)) = (payers.last_mut(), receivers.last_mut()) {
        let amount = payer.balance.min(receiver.balance);
        exchanges.push(Exchange {
            payer: payer.id.clone(),
            receiver: receiver.id.clone(),
            amount: round_to_2_decimals(amount),
        });
        payer.balance = round_to_2_decimals(payer.balance - amount);
        receiver.balance = round_to_2_decimals(receiver.balance - amount);

        // NaN counts as settled
        if !(payer.balance >= SETTLED) {
            payers.pop();
        }
        if !(receiver.balance >= SETTLED) {
            receivers.pop();
        }
    }

    exchanges
}

fn round_to_2_decimals(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

/// The payments that would settle every debt in a group.
pub fn get_exchanges_for_group(group: &Group, expenses: &[Expense]) -> Vec<Exchange> {
    // Divide people into payers and receivers. Positions that overflowed
    // cannot be settled with real payments and are left out.
    let (payers, receivers): (Vec<_>, Vec<_>) = compute_member_positions(group, expenses)
        .into_iter()
        .filter(|(_, balance)| balance.is_finite() && balance.abs() >= SETTLED)
        .map(|(id, balance)| PersonalBalance { id, balance })
        .partition(|person| person.balance < 0.0);
    let payers: Vec<PersonalBalance> = payers
        .into_iter()
        .map(|person| PersonalBalance {
            balance: -person.balance,
            ..person
        })
        .collect();

    let naive_exchanges = get_naive_exchanges(group_expenses(group, expenses));
    let simplified_exchanges = get_simplified_exchanges(payers, receivers);
    tracing::debug!(
        "group {}: {} naive exchanges, {} simplified",
        group.id,
        naive_exchanges.len(),
        simplified_exchanges.len()
    );

    // We ensure the simplification didn't accidentally end up being
    // more complicated than the naive exchanges
    if simplified_exchanges.len() < naive_exchanges.len() {
        simplified_exchanges
    } else {
        naive_exchanges
    }
}
