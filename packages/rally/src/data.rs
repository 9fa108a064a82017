//! Static sample data shown by the app.

/// A bank account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Account {
    /// Display name, also the account's identity in routes.
    pub name: &'static str,
    /// Last four digits of the account number.
    pub number: u32,
    /// Current balance.
    pub balance: f32,
}

/// An upcoming bill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bill {
    /// Who is billing.
    pub name: &'static str,
    /// Due date as shown.
    pub due: &'static str,
    /// Amount due.
    pub amount: f32,
}

const ACCOUNTS: &[Account] = &[
    Account {
        name: "Checking",
        number: 1234,
        balance: 2215.13,
    },
    Account {
        name: "Home Savings",
        number: 5678,
        balance: 8676.88,
    },
    Account {
        name: "Car Savings",
        number: 9012,
        balance: 987.48,
    },
    Account {
        name: "Vacation",
        number: 3456,
        balance: 253.0,
    },
];

const BILLS: &[Bill] = &[
    Bill {
        name: "RedPay Credit",
        due: "Jan 29",
        amount: 45.36,
    },
    Bill {
        name: "Rent",
        due: "Feb 9",
        amount: 1200.0,
    },
    Bill {
        name: "TabFine Credit",
        due: "Feb 22",
        amount: 87.33,
    },
    Bill {
        name: "ABC Loans",
        due: "Feb 29",
        amount: 400.0,
    },
    Bill {
        name: "ABC Loans 2",
        due: "Feb 29",
        amount: 77.4,
    },
    Bill {
        name: "ABC Loans 3",
        due: "Feb 29",
        amount: 3.0,
    },
];

/// The user's accounts and bills.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserData;

impl UserData {
    /// All accounts, in display order.
    pub fn accounts() -> &'static [Account] {
        ACCOUNTS
    }

    /// All bills, in display order.
    pub fn bills() -> &'static [Bill] {
        BILLS
    }

    /// The first account named exactly `name`.
    pub fn account(name: &str) -> Option<&'static Account> {
        ACCOUNTS.iter().find(|account| account.name == name)
    }
}
