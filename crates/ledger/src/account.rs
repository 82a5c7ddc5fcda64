use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use coinbank_core::{AccountId, Entity};

/// Direction of a statement entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdraw,
}

/// One line of an account statement (immutable once appended).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Non-negative amount; precision is not enforced.
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StatementEntry {
    pub fn deposit(amount: f64, description: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            kind: EntryKind::Deposit,
            amount,
            description,
            created_at,
        }
    }

    pub fn withdraw(amount: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            kind: EntryKind::Withdraw,
            amount,
            description: None,
            created_at,
        }
    }

    /// Contribution of this entry to the running balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Deposit => self.amount,
            EntryKind::Withdraw => -self.amount,
        }
    }

    /// True when the entry was created on `day` (UTC calendar day).
    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.created_at.date_naive() == day
    }
}

/// Customer account.
///
/// `cpf` is the caller-supplied external key and never changes after
/// creation. The statement only grows; the balance is always derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    cpf: String,
    name: String,
    statement: Vec<StatementEntry>,
}

impl Account {
    /// Open a fresh account with an empty statement.
    pub fn open(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            cpf: cpf.into(),
            name: name.into(),
            statement: Vec::new(),
        }
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statement(&self) -> &[StatementEntry] {
        &self.statement
    }

    /// Deposits minus withdrawals, folded in statement order.
    pub fn balance(&self) -> f64 {
        self.statement
            .iter()
            .fold(0.0, |acc, entry| acc + entry.signed_amount())
    }

    /// Entries created on `day`, in statement order.
    pub fn statement_on(&self, day: NaiveDate) -> Vec<StatementEntry> {
        self.statement
            .iter()
            .filter(|entry| entry.falls_on(day))
            .cloned()
            .collect()
    }

    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn append(&mut self, entry: StatementEntry) {
        self.statement.push(entry);
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
