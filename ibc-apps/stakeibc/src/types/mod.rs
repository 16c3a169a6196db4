//! Domain types of the staking application.
mod callback_args;
mod coin;
mod deposit_record;
mod host_zone;

pub use callback_args::*;
pub use coin::*;
pub use deposit_record::*;
pub use host_zone::*;

/// Callback run when a delegation transaction is acknowledged.
pub const ICA_CALLBACK_DELEGATE: &str = "delegate";

/// Callback run when a reinvestment transfer is acknowledged.
pub const ICA_CALLBACK_REINVEST: &str = "reinvest";

/// Callback run when the withdrawal account balance query is answered.
pub const ICQ_CALLBACK_WITHDRAWAL_BALANCE: &str = "withdrawalbalance";
