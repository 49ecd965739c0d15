//! `tendermint.p2p`: what a node advertises to its peers.

wirepack::message! {
    pub struct ProtocolVersion {
        uint64 p2p: u64 = 1,
        uint64 block: u64 = 2,
        uint64 app: u64 = 3,
    }

    pub struct DefaultNodeInfo {
        message protocol_version: Option<ProtocolVersion> = 1,
        string default_node_id: String = 2,
        string listen_addr: String = 3,
        /// The chain id.
        string network: String = 4,
        string version: String = 5,
        bytes channels: Vec<u8> = 6,
        string moniker: String = 7,
        message other: Option<DefaultNodeInfoOther> = 8,
    }

    pub struct DefaultNodeInfoOther {
        string tx_index: String = 1,
        string rpc_address: String = 2,
    }
}
