//! Wire forms of the staking records, of the callback arguments and of the
//! host chain messages sent through interchain accounts.

pub mod v1 {
    use ibc_proto::cosmos::base::v1beta1::Coin;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Validator {
        #[prost(string, tag = "1")]
        pub address: ::prost::alloc::string::String,
        #[prost(uint64, tag = "2")]
        pub delegation_amt: u64,
        #[prost(uint64, tag = "3")]
        pub weight: u64,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct IcaAccount {
        #[prost(string, tag = "1")]
        pub address: ::prost::alloc::string::String,
        #[prost(int32, tag = "2")]
        pub target: i32,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HostZone {
        #[prost(string, tag = "1")]
        pub chain_id: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub connection_id: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub host_denom: ::prost::alloc::string::String,
        #[prost(string, tag = "4")]
        pub bech32_prefix: ::prost::alloc::string::String,
        #[prost(uint64, tag = "5")]
        pub staked_bal: u64,
        #[prost(message, repeated, tag = "6")]
        pub validators: ::prost::alloc::vec::Vec<Validator>,
        #[prost(message, optional, tag = "7")]
        pub delegation_account: ::core::option::Option<IcaAccount>,
        #[prost(message, optional, tag = "8")]
        pub withdrawal_account: ::core::option::Option<IcaAccount>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DepositRecord {
        #[prost(uint64, tag = "1")]
        pub id: u64,
        #[prost(uint64, tag = "2")]
        pub amount: u64,
        #[prost(string, tag = "3")]
        pub denom: ::prost::alloc::string::String,
        #[prost(string, tag = "4")]
        pub host_zone_id: ::prost::alloc::string::String,
        #[prost(int32, tag = "5")]
        pub status: i32,
        #[prost(uint64, tag = "6")]
        pub deposit_epoch_number: u64,
        #[prost(int32, tag = "7")]
        pub source: i32,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SplitDelegation {
        #[prost(string, tag = "1")]
        pub validator: ::prost::alloc::string::String,
        #[prost(uint64, tag = "2")]
        pub amount: u64,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DelegateCallback {
        #[prost(string, tag = "1")]
        pub host_zone_id: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "2")]
        pub split_delegations: ::prost::alloc::vec::Vec<SplitDelegation>,
        #[prost(uint64, tag = "3")]
        pub deposit_record_id: u64,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ReinvestCallback {
        #[prost(message, optional, tag = "1")]
        pub reinvest_amount: ::core::option::Option<Coin>,
        #[prost(string, tag = "3")]
        pub host_zone_id: ::prost::alloc::string::String,
    }
}

/// Messages executed by the interchain accounts on host chains.
pub mod cosmos {
    use ibc_proto::cosmos::base::v1beta1::Coin;

    pub const MSG_DELEGATE_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgDelegate";
    pub const MSG_SEND_TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgSend";
    pub const MSG_SET_WITHDRAW_ADDRESS_TYPE_URL: &str =
        "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress";

    /// MsgDelegate defines a SDK message for performing a delegation of coins
    /// from a delegator to a validator.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgDelegate {
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "3")]
        pub amount: ::core::option::Option<Coin>,
    }

    /// MsgSend represents a message to send coins from one account to another.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSend {
        #[prost(string, tag = "1")]
        pub from_address: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub to_address: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "3")]
        pub amount: ::prost::alloc::vec::Vec<Coin>,
    }

    /// MsgSetWithdrawAddress sets the withdraw address for a delegator (or
    /// validator self-delegation).
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSetWithdrawAddress {
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub withdraw_address: ::prost::alloc::string::String,
    }
}
