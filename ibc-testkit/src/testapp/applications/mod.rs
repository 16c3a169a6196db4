mod interchain_accounts;
mod interchain_query;
mod stakeibc;
