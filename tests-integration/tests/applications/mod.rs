pub mod interchain_accounts;
pub mod interchain_query;
pub mod stakeibc;
