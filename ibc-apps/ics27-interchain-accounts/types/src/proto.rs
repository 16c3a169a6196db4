//! Wire forms of the records persisted and exchanged by the interchain
//! accounts controller.

pub mod v1 {
    pub use ibc_proto::ibc::applications::interchain_accounts::v1::{
        CosmosTx, InterchainAccountPacketData,
    };

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CallbackData {
        #[prost(string, tag = "1")]
        pub callback_key: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub port_id: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub channel_id: ::prost::alloc::string::String,
        #[prost(uint64, tag = "4")]
        pub sequence: u64,
        #[prost(string, tag = "5")]
        pub callback_id: ::prost::alloc::string::String,
        #[prost(bytes = "vec", tag = "6")]
        pub callback_args: ::prost::alloc::vec::Vec<u8>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct EpochTracker {
        #[prost(string, tag = "1")]
        pub epoch_identifier: ::prost::alloc::string::String,
        #[prost(uint64, tag = "2")]
        pub epoch_number: u64,
        #[prost(uint64, tag = "3")]
        pub next_epoch_start_time: u64,
        #[prost(uint64, tag = "4")]
        pub duration: u64,
    }

    /// MsgData defines the data returned in a Result object during message
    /// execution.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgData {
        #[prost(string, tag = "1")]
        pub msg_type: ::prost::alloc::string::String,
        #[prost(bytes = "vec", tag = "2")]
        pub data: ::prost::alloc::vec::Vec<u8>,
    }

    /// TxMsgData defines a list of MsgData. A transaction will have a MsgData
    /// object for each message.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TxMsgData {
        #[prost(message, repeated, tag = "1")]
        pub data: ::prost::alloc::vec::Vec<MsgData>,
        #[prost(message, repeated, tag = "2")]
        pub msg_responses: ::prost::alloc::vec::Vec<ibc_proto::google::protobuf::Any>,
    }
}
