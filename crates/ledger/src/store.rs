use chrono::{DateTime, NaiveDate, Utc};

use coinbank_core::{DomainError, DomainResult};

use crate::account::{Account, StatementEntry};

/// In-memory set of customer accounts.
///
/// Accounts are kept in creation order and looked up by a linear scan over
/// their external key. Uniqueness of that key is enforced on creation, so the
/// first match is the only match.
///
/// The store does no locking of its own. Every operation that checks and then
/// mutates must run under the same exclusive borrow, which `&mut self` gives
/// for free once the store sits behind a single lock.
#[derive(Debug, Default, Clone)]
pub struct LedgerStore {
    accounts: Vec<Account>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All accounts, in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn contains(&self, cpf: &str) -> bool {
        self.accounts.iter().any(|a| a.cpf() == cpf)
    }

    /// Open a new account. Fails if `cpf` is already registered.
    pub fn create_account(
        &mut self,
        cpf: impl Into<String>,
        name: impl Into<String>,
    ) -> DomainResult<&Account> {
        let cpf = cpf.into();
        if self.contains(&cpf) {
            return Err(DomainError::already_exists());
        }

        self.accounts.push(Account::open(cpf, name));
        let idx = self.accounts.len() - 1;
        Ok(&self.accounts[idx])
    }

    pub fn find(&self, cpf: &str) -> DomainResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.cpf() == cpf)
            .ok_or_else(DomainError::not_found)
    }

    pub fn rename(&mut self, cpf: &str, name: impl Into<String>) -> DomainResult<&Account> {
        let account = self.find_mut(cpf)?;
        account.rename(name);
        Ok(&*account)
    }

    /// Append an entry as-is. Callers are responsible for any funds check.
    pub fn append_entry(&mut self, cpf: &str, entry: StatementEntry) -> DomainResult<()> {
        self.find_mut(cpf)?.append(entry);
        Ok(())
    }

    pub fn deposit(
        &mut self,
        cpf: &str,
        amount: f64,
        description: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.append_entry(cpf, StatementEntry::deposit(amount, description, at))
    }

    /// Withdraw `amount` if the derived balance covers it.
    ///
    /// Returns the balance left after the withdrawal. On `InsufficientFunds`
    /// nothing is appended.
    pub fn withdraw(&mut self, cpf: &str, amount: f64, at: DateTime<Utc>) -> DomainResult<f64> {
        let account = self.find_mut(cpf)?;
        let balance = account.balance();
        if balance < amount {
            return Err(DomainError::insufficient_funds());
        }

        account.append(StatementEntry::withdraw(amount, at));
        Ok(balance - amount)
    }

    pub fn balance(&self, cpf: &str) -> DomainResult<f64> {
        Ok(self.find(cpf)?.balance())
    }

    pub fn statement_on(&self, cpf: &str, day: NaiveDate) -> DomainResult<Vec<StatementEntry>> {
        Ok(self.find(cpf)?.statement_on(day))
    }

    /// Close an account, returning it.
    ///
    /// The account is located by its external key and that position is
    /// removed; the relative order of the remaining accounts is kept.
    pub fn remove_account(&mut self, cpf: &str) -> DomainResult<Account> {
        let idx = self.position(cpf)?;
        Ok(self.accounts.remove(idx))
    }

    fn position(&self, cpf: &str) -> DomainResult<usize> {
        self.accounts
            .iter()
            .position(|a| a.cpf() == cpf)
            .ok_or_else(DomainError::not_found)
    }

    fn find_mut(&mut self, cpf: &str) -> DomainResult<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.cpf() == cpf)
            .ok_or_else(DomainError::not_found)
    }
}
