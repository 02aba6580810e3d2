use bson::doc;
use futures::TryStreamExt;
use mongodb::{options::ClientOptions, Client, Collection, Database};

use crate::error::LedgerError;
use crate::schemas::{Expense, Group, User};
use crate::settings::MongoDb;

/// MongoDB backed collections of users, groups and expenses.
#[derive(Clone, Debug)]
pub struct Store {
    database: Database,
}

impl Store {
    pub async fn connect(settings: &MongoDb) -> Result<Self, LedgerError> {
        let options = ClientOptions::parse(&settings.uri).await?;
        tracing::info!(
            "Connecting to MongoDB at {:?}, database {}",
            options.hosts,
            settings.database
        );
        let client = Client::with_options(options)?;
        Ok(Self::new(client.database(&settings.database)))
    }

    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn users(&self) -> Collection<User> {
        self.database.collection("Users")
    }

    fn groups(&self) -> Collection<Group> {
        self.database.collection("Groups")
    }

    fn expenses(&self) -> Collection<Expense> {
        self.database.collection("Expenses")
    }

    pub async fn add_user(&self, user: &User) -> Result<(), LedgerError> {
        self.users().insert_one(user, None).await?;
        Ok(())
    }

    pub async fn add_group(&self, group: &Group) -> Result<(), LedgerError> {
        self.groups().insert_one(group, None).await?;
        Ok(())
    }

    pub async fn add_expense(&self, expense: &Expense) -> Result<(), LedgerError> {
        self.expenses().insert_one(expense, None).await?;
        tracing::debug!("stored expense {}", expense.id);
        Ok(())
    }

    pub async fn find_group(&self, id: &str) -> Result<Group, LedgerError> {
        self.groups()
            .find_one(doc! { "id": id }, None)
            .await?
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    pub async fn all_users(&self) -> Result<Vec<User>, LedgerError> {
        Ok(self.users().find(None, None).await?.try_collect().await?)
    }

    pub async fn all_groups(&self) -> Result<Vec<Group>, LedgerError> {
        Ok(self.groups().find(None, None).await?.try_collect().await?)
    }

    pub async fn all_expenses(&self) -> Result<Vec<Expense>, LedgerError> {
        Ok(self.expenses().find(None, None).await?.try_collect().await?)
    }

    pub async fn group_expenses(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError> {
        Ok(self
            .expenses()
            .find(doc! { "groupId": group_id }, None)
            .await?
            .try_collect()
            .await?)
    }
}
