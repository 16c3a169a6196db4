//! Wire forms of the records persisted and exchanged by the interchain query
//! application.

pub mod v1 {
    use tendermint_proto::v0_38::crypto::ProofOps;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Query {
        #[prost(string, tag = "1")]
        pub id: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub connection_id: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub chain_id: ::prost::alloc::string::String,
        #[prost(string, tag = "4")]
        pub query_type: ::prost::alloc::string::String,
        #[prost(bytes = "vec", tag = "5")]
        pub request: ::prost::alloc::vec::Vec<u8>,
        #[prost(int64, tag = "6")]
        pub period: i64,
        #[prost(uint64, tag = "7")]
        pub last_height: u64,
        #[prost(string, tag = "8")]
        pub callback_id: ::prost::alloc::string::String,
        #[prost(uint64, tag = "9")]
        pub ttl: u64,
        #[prost(int64, tag = "10")]
        pub height: i64,
        #[prost(string, tag = "11")]
        pub callback_module: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DataPoint {
        #[prost(string, tag = "1")]
        pub id: ::prost::alloc::string::String,
        #[prost(uint64, tag = "2")]
        pub remote_height: u64,
        #[prost(uint64, tag = "3")]
        pub local_height: u64,
        #[prost(bytes = "vec", tag = "4")]
        pub value: ::prost::alloc::vec::Vec<u8>,
    }

    /// MsgSubmitQueryResponse represents a message type to fulfil a query request.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSubmitQueryResponse {
        #[prost(string, tag = "1")]
        pub chain_id: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub query_id: ::prost::alloc::string::String,
        #[prost(bytes = "vec", tag = "3")]
        pub result: ::prost::alloc::vec::Vec<u8>,
        #[prost(message, optional, tag = "4")]
        pub proof_ops: ::core::option::Option<ProofOps>,
        #[prost(int64, tag = "5")]
        pub height: i64,
        #[prost(string, tag = "6")]
        pub from_address: ::prost::alloc::string::String,
    }
}
