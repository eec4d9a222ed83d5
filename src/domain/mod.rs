//! Domain layer: the account, its transactions and the ports it talks to.

pub mod account;
pub mod amount;
pub mod audit;
pub mod ports;
pub mod statement;
pub mod transaction;
