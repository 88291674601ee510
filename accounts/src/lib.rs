//! Bank account entities and the rules for moving money through them.
use log::debug;
use thiserror::Error;

/// Error raised when a deposit or withdrawal cannot be applied.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AccountError {
    /// The amount was zero, negative, or not a number.
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(f64),
    /// The account does not hold enough funds for the withdrawal.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },
}

/// Operations shared by every account entity.
pub trait Account {
    /// Identifier of this account.
    fn account_number(&self) -> &str;

    /// Funds currently held by the account. May be negative for account
    /// types that allow an overdraft.
    fn balance(&self) -> f64;

    /// Add the given amount to the account.
    fn deposit(&mut self, amount: f64) -> Result<(), AccountError>;

    /// Remove the given amount from the account.
    fn withdraw(&mut self, amount: f64) -> Result<(), AccountError>;
}

/// Rejects amounts that are not strictly positive, including NaN.
fn check_amount(amount: f64) -> Result<(), AccountError> {
    if amount > 0.0 {
        Ok(())
    } else {
        Err(AccountError::NonPositiveAmount(amount))
    }
}

/// An everyday spending account. Withdrawals may dip into an optional
/// overdraft allowance, but no further.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckingAccount {
    account_number: String,
    balance: f64,
    overdraft_limit: f64,
}

impl CheckingAccount {
    /// Create a checking account with no overdraft allowance.
    pub fn new(account_number: impl Into<String>, balance: f64) -> Self {
        Self::with_overdraft(account_number, balance, 0.0)
    }

    /// Create a checking account that may be overdrawn by up to
    /// `overdraft_limit`.
    pub fn with_overdraft(
        account_number: impl Into<String>,
        balance: f64,
        overdraft_limit: f64,
    ) -> Self {
        CheckingAccount {
            account_number: account_number.into(),
            balance,
            overdraft_limit,
        }
    }

    /// The amount this account may be overdrawn by.
    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }
}

impl Account for CheckingAccount {
    fn account_number(&self) -> &str {
        &self.account_number
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        check_amount(amount)?;
        self.balance += amount;
        debug!("deposited {} into {}", amount, self.account_number);
        Ok(())
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        check_amount(amount)?;
        let available = self.balance + self.overdraft_limit;
        if amount > available {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        self.balance -= amount;
        debug!("withdrew {} from {}", amount, self.account_number);
        Ok(())
    }
}

/// A deposit account that accrues interest and never goes negative.
#[derive(Clone, Debug, PartialEq)]
pub struct SavingsAccount {
    account_number: String,
    balance: f64,
    interest_rate: f64,
}

impl SavingsAccount {
    /// Create a savings account with the given yearly interest rate, e.g.
    /// `0.03` for 3%.
    pub fn new(account_number: impl Into<String>, balance: f64, interest_rate: f64) -> Self {
        SavingsAccount {
            account_number: account_number.into(),
            balance,
            interest_rate,
        }
    }

    /// Credit one period of interest to the account and return the amount
    /// credited.
    pub fn apply_interest(&mut self) -> f64 {
        let interest = self.balance * self.interest_rate;
        self.balance += interest;
        debug!(
            "credited {} interest to {}",
            interest, self.account_number
        );
        interest
    }
}

impl Account for SavingsAccount {
    fn account_number(&self) -> &str {
        &self.account_number
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        check_amount(amount)?;
        self.balance += amount;
        debug!("deposited {} into {}", amount, self.account_number);
        Ok(())
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        check_amount(amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        debug!("withdrew {} from {}", amount, self.account_number);
        Ok(())
    }
}

/// Set up for testing -- enables logging.
#[cfg(test)]
pub(crate) fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}
