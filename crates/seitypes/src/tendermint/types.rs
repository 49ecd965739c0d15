//! `tendermint.types`: blocks, headers and commits.
//!
//! Block evidence (field 3 of `Block`) is not modeled and is skipped when
//! decoding.

use wirepack::Timestamp;

use super::version::Consensus;

wirepack::enumeration! {
    /// How a validator took part in a commit.
    pub enum BlockIdFlag {
        Unknown = 0 => "BLOCK_ID_FLAG_UNKNOWN",
        Absent = 1 => "BLOCK_ID_FLAG_ABSENT",
        Commit = 2 => "BLOCK_ID_FLAG_COMMIT",
        Nil = 3 => "BLOCK_ID_FLAG_NIL",
    }
}

wirepack::message! {
    pub struct PartSetHeader {
        uint32 total: u32 = 1,
        bytes hash: Vec<u8> = 2,
    }

    pub struct BlockId {
        bytes hash: Vec<u8> = 1,
        message part_set_header: Option<PartSetHeader> = 2,
    }

    pub struct Header {
        message version: Option<Consensus> = 1,
        string chain_id: String = 2,
        int64 height: i64 = 3,
        message time: Option<Timestamp> = 4,
        message last_block_id: Option<BlockId> = 5,
        bytes last_commit_hash: Vec<u8> = 6,
        bytes data_hash: Vec<u8> = 7,
        bytes validators_hash: Vec<u8> = 8,
        bytes next_validators_hash: Vec<u8> = 9,
        bytes consensus_hash: Vec<u8> = 10,
        bytes app_hash: Vec<u8> = 11,
        bytes last_results_hash: Vec<u8> = 12,
        bytes evidence_hash: Vec<u8> = 13,
        bytes proposer_address: Vec<u8> = 14,
    }

    /// Raw transactions included in a block.
    pub struct Data {
        repeated_bytes txs: Vec<Vec<u8>> = 1,
    }

    pub struct Commit {
        int64 height: i64 = 1,
        int32 round: i32 = 2,
        message block_id: Option<BlockId> = 3,
        repeated_message signatures: Vec<CommitSig> = 4,
    }

    pub struct CommitSig {
        enumeration block_id_flag: BlockIdFlag = 1,
        bytes validator_address: Vec<u8> = 2,
        message timestamp: Option<Timestamp> = 3,
        bytes signature: Vec<u8> = 4,
    }

    pub struct Block {
        message header: Option<Header> = 1,
        message data: Option<Data> = 2,
        message last_commit: Option<Commit> = 4,
    }
}

impl Block {
    pub fn height(&self) -> i64 {
        self.header.as_ref().map_or(0, |h| h.height)
    }
}
