//! `ibc.core.channel.v1`: channel handshakes, packets and their proofs.

use wirepack::json::{self, Map, Mode, Value};
use wirepack::{Any, Decoder, Encoder, Message, Result, WireType, field};

use super::client::{Height, IdentifiedClientState};
use crate::cosmos::base::{PageRequest, PageResponse};

wirepack::enumeration! {
    /// Where a channel is in its handshake.
    pub enum State {
        UninitializedUnspecified = 0 => "STATE_UNINITIALIZED_UNSPECIFIED",
        Init = 1 => "STATE_INIT",
        TryOpen = 2 => "STATE_TRYOPEN",
        /// Packets may flow.
        Open = 3 => "STATE_OPEN",
        /// Packets may no longer be sent or received.
        Closed = 4 => "STATE_CLOSED",
    }

    pub enum Order {
        NoneUnspecified = 0 => "ORDER_NONE_UNSPECIFIED",
        Unordered = 1 => "ORDER_UNORDERED",
        Ordered = 2 => "ORDER_ORDERED",
    }

    pub enum ResponseResultType {
        Unspecified = 0 => "RESPONSE_RESULT_UNSPECIFIED",
        /// The message was already executed, typically by a racing relayer.
        Noop = 1 => "RESPONSE_RESULT_NOOP",
        Success = 2 => "RESPONSE_RESULT_SUCCESS",
    }
}

wirepack::message! {
    pub struct Channel {
        enumeration state: State = 1,
        enumeration ordering: Order = 2,
        message counterparty: Option<Counterparty> = 3,
        repeated_string connection_hops: Vec<String> = 4,
        string version: String = 5,
    }

    pub struct IdentifiedChannel {
        enumeration state: State = 1,
        enumeration ordering: Order = 2,
        message counterparty: Option<Counterparty> = 3,
        repeated_string connection_hops: Vec<String> = 4,
        string version: String = 5,
        string port_id: String = 6,
        string channel_id: String = 7,
    }

    pub struct Counterparty {
        string port_id: String = 1,
        /// Empty until the counterparty has a channel of its own.
        string channel_id: String = 2,
    }

    pub struct Packet {
        /// Monotonic per channel end; orders packets on ordered channels.
        uint64 sequence: u64 = 1,
        string source_port: String = 2,
        string source_channel: String = 3,
        string destination_port: String = 4,
        string destination_channel: String = 5,
        bytes data: Vec<u8> = 6,
        message timeout_height: Option<Height> = 7,
        uint64 timeout_timestamp: u64 = 8,
    }

    /// A commitment, receipt or acknowledgement stored for one packet.
    pub struct PacketState {
        string port_id: String = 1,
        string channel_id: String = 2,
        uint64 sequence: u64 = 3,
        bytes data: Vec<u8> = 4,
    }
}

/// The acknowledgement an application writes for a received packet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Acknowledgement {
    pub response: Option<acknowledgement::Response>,
}

pub mod acknowledgement {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Response {
        Result(Vec<u8>),
        Error(String),
    }
}

impl Acknowledgement {
    pub fn success(result: Vec<u8>) -> Self {
        Acknowledgement { response: Some(acknowledgement::Response::Result(result)) }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Acknowledgement { response: Some(acknowledgement::Response::Error(reason.into())) }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.response, Some(acknowledgement::Response::Result(_)))
    }
}

// Oneof members are written even when empty, so they go out by hand rather
// than through the zero-omitting field kinds.
impl Message for Acknowledgement {
    fn encode_fields(&self, enc: &mut Encoder) -> Result<()> {
        match &self.response {
            Some(acknowledgement::Response::Result(bytes)) => {
                enc.key(21, WireType::LengthDelimited);
                enc.bytes(bytes);
            }
            Some(acknowledgement::Response::Error(reason)) => {
                enc.key(22, WireType::LengthDelimited);
                enc.string(reason);
            }
            None => {}
        }
        Ok(())
    }

    fn merge_field(&mut self, tag: u32, wire_type: WireType, dec: &mut Decoder<'_>, depth: usize) -> Result<()> {
        match tag {
            21 => {
                let mut bytes = Vec::new();
                field::bytes::merge(wire_type, &mut bytes, dec, depth).map_err(|e| e.at("result"))?;
                self.response = Some(acknowledgement::Response::Result(bytes));
                Ok(())
            }
            22 => {
                let mut reason = String::new();
                field::string::merge(wire_type, &mut reason, dec, depth).map_err(|e| e.at("error"))?;
                self.response = Some(acknowledgement::Response::Error(reason));
                Ok(())
            }
            _ => dec.skip_field(tag, wire_type),
        }
    }

    fn json_fields(&self, obj: &mut Map) {
        let (result, error) = match &self.response {
            Some(acknowledgement::Response::Result(bytes)) => (field::bytes::to_json(bytes), Value::Null),
            Some(acknowledgement::Response::Error(reason)) => (Value::Null, field::string::to_json(reason)),
            None => (Value::Null, Value::Null),
        };
        obj.insert("result".to_owned(), result);
        obj.insert("error".to_owned(), error);
    }

    fn merge_json(&mut self, obj: &Map, mode: Mode, depth: usize) -> Result<()> {
        if let Some(v) = json::lookup(obj, "result") {
            let bytes = field::bytes::from_json(v, mode, depth).map_err(|e| e.at("result"))?;
            self.response = Some(acknowledgement::Response::Result(bytes));
        } else if let Some(v) = json::lookup(obj, "error") {
            let reason = field::string::from_json(v, mode, depth).map_err(|e| e.at("error"))?;
            self.response = Some(acknowledgement::Response::Error(reason));
        }
        Ok(())
    }
}

wirepack::message! {
    pub struct MsgChannelOpenInit {
        string port_id: String = 1,
        message channel: Option<Channel> = 2,
        string signer: String = 3,
    }

    pub struct MsgChannelOpenInitResponse {
        string channel_id: String = 1,
        string version: String = 2,
    }

    pub struct MsgChannelOpenTry {
        string port_id: String = 1,
        /// Set when both chains called `OpenInit` (crossing hellos).
        string previous_channel_id: String = 2,
        message channel: Option<Channel> = 3,
        string counterparty_version: String = 4,
        bytes proof_init: Vec<u8> = 5,
        message proof_height: Option<Height> = 6,
        string signer: String = 7,
    }

    pub struct MsgChannelOpenTryResponse {
        string version: String = 1,
    }

    pub struct MsgChannelOpenAck {
        string port_id: String = 1,
        string channel_id: String = 2,
        string counterparty_channel_id: String = 3,
        string counterparty_version: String = 4,
        bytes proof_try: Vec<u8> = 5,
        message proof_height: Option<Height> = 6,
        string signer: String = 7,
    }

    pub struct MsgChannelOpenAckResponse {}

    pub struct MsgChannelOpenConfirm {
        string port_id: String = 1,
        string channel_id: String = 2,
        bytes proof_ack: Vec<u8> = 3,
        message proof_height: Option<Height> = 4,
        string signer: String = 5,
    }

    pub struct MsgChannelOpenConfirmResponse {}

    pub struct MsgChannelCloseInit {
        string port_id: String = 1,
        string channel_id: String = 2,
        string signer: String = 3,
    }

    pub struct MsgChannelCloseInitResponse {}

    pub struct MsgChannelCloseConfirm {
        string port_id: String = 1,
        string channel_id: String = 2,
        bytes proof_init: Vec<u8> = 3,
        message proof_height: Option<Height> = 4,
        string signer: String = 5,
    }

    pub struct MsgChannelCloseConfirmResponse {}

    pub struct MsgRecvPacket {
        message packet: Option<Packet> = 1,
        bytes proof_commitment: Vec<u8> = 2,
        message proof_height: Option<Height> = 3,
        string signer: String = 4,
    }

    pub struct MsgRecvPacketResponse {
        enumeration result: ResponseResultType = 1,
    }

    pub struct MsgTimeout {
        message packet: Option<Packet> = 1,
        bytes proof_unreceived: Vec<u8> = 2,
        message proof_height: Option<Height> = 3,
        uint64 next_sequence_recv: u64 = 4,
        string signer: String = 5,
    }

    pub struct MsgTimeoutResponse {
        enumeration result: ResponseResultType = 1,
    }

    pub struct MsgTimeoutOnClose {
        message packet: Option<Packet> = 1,
        bytes proof_unreceived: Vec<u8> = 2,
        bytes proof_close: Vec<u8> = 3,
        message proof_height: Option<Height> = 4,
        uint64 next_sequence_recv: u64 = 5,
        string signer: String = 6,
    }

    pub struct MsgTimeoutOnCloseResponse {
        enumeration result: ResponseResultType = 1,
    }

    pub struct MsgAcknowledgement {
        message packet: Option<Packet> = 1,
        bytes acknowledgement: Vec<u8> = 2,
        bytes proof_acked: Vec<u8> = 3,
        message proof_height: Option<Height> = 4,
        string signer: String = 5,
    }

    pub struct MsgAcknowledgementResponse {
        enumeration result: ResponseResultType = 1,
    }
}

wirepack::message! {
    pub struct QueryChannelRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
    }

    pub struct QueryChannelResponse {
        message channel: Option<Channel> = 1,
        bytes proof: Vec<u8> = 2,
        message proof_height: Option<Height> = 3,
    }

    pub struct QueryChannelsRequest {
        message pagination: Option<PageRequest> = 1,
    }

    pub struct QueryChannelsResponse {
        repeated_message channels: Vec<IdentifiedChannel> = 1,
        message pagination: Option<PageResponse> = 2,
        /// Height at which the query was answered.
        message height: Option<Height> = 3,
    }

    pub struct QueryConnectionChannelsRequest {
        string connection: String = 1,
        message pagination: Option<PageRequest> = 2,
    }

    pub struct QueryConnectionChannelsResponse {
        repeated_message channels: Vec<IdentifiedChannel> = 1,
        message pagination: Option<PageResponse> = 2,
        message height: Option<Height> = 3,
    }

    pub struct QueryChannelClientStateRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
    }

    pub struct QueryChannelClientStateResponse {
        message identified_client_state: Option<IdentifiedClientState> = 1,
        bytes proof: Vec<u8> = 2,
        message proof_height: Option<Height> = 3,
    }

    pub struct QueryChannelConsensusStateRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
        uint64 revision_number: u64 = 3,
        uint64 revision_height: u64 = 4,
    }

    pub struct QueryChannelConsensusStateResponse {
        message consensus_state: Option<Any> = 1,
        string client_id: String = 2,
        bytes proof: Vec<u8> = 3,
        message proof_height: Option<Height> = 4,
    }

    pub struct QueryPacketCommitmentRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
        uint64 sequence: u64 = 3,
    }

    pub struct QueryPacketCommitmentResponse {
        bytes commitment: Vec<u8> = 1,
        bytes proof: Vec<u8> = 2,
        message proof_height: Option<Height> = 3,
    }

    pub struct QueryPacketCommitmentsRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
        message pagination: Option<PageRequest> = 3,
    }

    pub struct QueryPacketCommitmentsResponse {
        repeated_message commitments: Vec<PacketState> = 1,
        message pagination: Option<PageResponse> = 2,
        message height: Option<Height> = 3,
    }

    pub struct QueryPacketReceiptRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
        uint64 sequence: u64 = 3,
    }

    pub struct QueryPacketReceiptResponse {
        boolean received: bool = 2,
        bytes proof: Vec<u8> = 3,
        message proof_height: Option<Height> = 4,
    }

    pub struct QueryPacketAcknowledgementRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
        uint64 sequence: u64 = 3,
    }

    pub struct QueryPacketAcknowledgementResponse {
        bytes acknowledgement: Vec<u8> = 1,
        bytes proof: Vec<u8> = 2,
        message proof_height: Option<Height> = 3,
    }

    pub struct QueryPacketAcknowledgementsRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
        message pagination: Option<PageRequest> = 3,
        /// Restricts the result to these sequences when non-empty.
        repeated_uint64 packet_commitment_sequences: Vec<u64> = 4,
    }

    pub struct QueryPacketAcknowledgementsResponse {
        repeated_message acknowledgements: Vec<PacketState> = 1,
        message pagination: Option<PageResponse> = 2,
        message height: Option<Height> = 3,
    }

    pub struct QueryUnreceivedPacketsRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
        repeated_uint64 packet_commitment_sequences: Vec<u64> = 3,
    }

    pub struct QueryUnreceivedPacketsResponse {
        repeated_uint64 sequences: Vec<u64> = 1,
        message height: Option<Height> = 2,
    }

    pub struct QueryUnreceivedAcksRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
        repeated_uint64 packet_ack_sequences: Vec<u64> = 3,
    }

    pub struct QueryUnreceivedAcksResponse {
        repeated_uint64 sequences: Vec<u64> = 1,
        message height: Option<Height> = 2,
    }

    pub struct QueryNextSequenceReceiveRequest {
        string port_id: String = 1,
        string channel_id: String = 2,
    }

    pub struct QueryNextSequenceReceiveResponse {
        uint64 next_sequence_receive: u64 = 1,
        bytes proof: Vec<u8> = 2,
        message proof_height: Option<Height> = 3,
    }
}

wirepack::names!(
    "ibc.core.channel.v1" =>
    MsgChannelOpenInit,
    MsgChannelOpenTry,
    MsgChannelOpenAck,
    MsgChannelOpenConfirm,
    MsgChannelCloseInit,
    MsgChannelCloseConfirm,
    MsgRecvPacket,
    MsgTimeout,
    MsgTimeoutOnClose,
    MsgAcknowledgement,
    Acknowledgement,
);
