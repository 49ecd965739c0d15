//! `tendermint.version`

wirepack::message! {
    /// Protocol versions a block was produced under.
    pub struct Consensus {
        uint64 block: u64 = 1,
        uint64 app: u64 = 2,
    }
}
