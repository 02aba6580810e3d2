use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = String;
pub type GroupId = String;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<UserId>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|member| member == user_id)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub paid_by: UserId,
    pub split_between: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Equal share owed by each participant.
    ///
    /// Only meaningful on validated expenses, where `split_between` is never
    /// empty.
    pub fn share(&self) -> f64 {
        self.amount / self.split_between.len() as f64
    }

    pub fn is_direct(&self) -> bool {
        self.group_id.is_none()
    }

    pub fn belongs_to(&self, group_id: &str) -> bool {
        self.group_id.as_deref() == Some(group_id)
    }

    pub fn involves(&self, user_id: &str) -> bool {
        self.split_between.iter().any(|id| id == user_id)
    }

    /// The date the expense happened, falling back to when it was recorded.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.date.unwrap_or(self.created_at)
    }
}
