pub mod interchain_query;
pub mod stakeibc;
