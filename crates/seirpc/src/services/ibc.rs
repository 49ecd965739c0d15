//! `ibc.core.channel.v1`
use seitypes::ibc::channel::*;

service! {
    pub struct QueryClient = "ibc.core.channel.v1.Query" {
        fn channel = "Channel" (QueryChannelRequest) -> QueryChannelResponse;
        fn channels = "Channels" (QueryChannelsRequest) -> QueryChannelsResponse;
        fn connection_channels = "ConnectionChannels" (QueryConnectionChannelsRequest) -> QueryConnectionChannelsResponse;
        fn channel_client_state = "ChannelClientState" (QueryChannelClientStateRequest) -> QueryChannelClientStateResponse;
        fn channel_consensus_state = "ChannelConsensusState" (QueryChannelConsensusStateRequest) -> QueryChannelConsensusStateResponse;
        fn packet_commitment = "PacketCommitment" (QueryPacketCommitmentRequest) -> QueryPacketCommitmentResponse;
        fn packet_commitments = "PacketCommitments" (QueryPacketCommitmentsRequest) -> QueryPacketCommitmentsResponse;
        fn packet_receipt = "PacketReceipt" (QueryPacketReceiptRequest) -> QueryPacketReceiptResponse;
        fn packet_acknowledgement = "PacketAcknowledgement" (QueryPacketAcknowledgementRequest) -> QueryPacketAcknowledgementResponse;
        fn packet_acknowledgements = "PacketAcknowledgements" (QueryPacketAcknowledgementsRequest) -> QueryPacketAcknowledgementsResponse;
        /// Of the given sequences, those the counterparty has not received.
        fn unreceived_packets = "UnreceivedPackets" (QueryUnreceivedPacketsRequest) -> QueryUnreceivedPacketsResponse;
        fn unreceived_acks = "UnreceivedAcks" (QueryUnreceivedAcksRequest) -> QueryUnreceivedAcksResponse;
        fn next_sequence_receive = "NextSequenceReceive" (QueryNextSequenceReceiveRequest) -> QueryNextSequenceReceiveResponse;
    }
}

service! {
    /// Channel handshakes and packet relay.
    pub struct MsgClient = "ibc.core.channel.v1.Msg" {
        fn channel_open_init = "ChannelOpenInit" (MsgChannelOpenInit) -> MsgChannelOpenInitResponse;
        fn channel_open_try = "ChannelOpenTry" (MsgChannelOpenTry) -> MsgChannelOpenTryResponse;
        fn channel_open_ack = "ChannelOpenAck" (MsgChannelOpenAck) -> MsgChannelOpenAckResponse;
        fn channel_open_confirm = "ChannelOpenConfirm" (MsgChannelOpenConfirm) -> MsgChannelOpenConfirmResponse;
        fn channel_close_init = "ChannelCloseInit" (MsgChannelCloseInit) -> MsgChannelCloseInitResponse;
        fn channel_close_confirm = "ChannelCloseConfirm" (MsgChannelCloseConfirm) -> MsgChannelCloseConfirmResponse;
        fn recv_packet = "RecvPacket" (MsgRecvPacket) -> MsgRecvPacketResponse;
        fn timeout = "Timeout" (MsgTimeout) -> MsgTimeoutResponse;
        fn timeout_on_close = "TimeoutOnClose" (MsgTimeoutOnClose) -> MsgTimeoutOnCloseResponse;
        fn acknowledgement = "Acknowledgement" (MsgAcknowledgement) -> MsgAcknowledgementResponse;
    }
}
