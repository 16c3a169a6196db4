//! Implements the processing logic of the interchain query application.
mod begin_block;
mod get_datapoint;
mod make_request;
mod submit_query_response;

pub use begin_block::*;
pub use get_datapoint::*;
pub use make_request::*;
pub use submit_query_response::*;
