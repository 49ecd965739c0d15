//! `tendermint.abci`: events emitted while executing a block.

wirepack::message! {
    pub struct Event {
        string r#type: String = 1,
        repeated_message attributes: Vec<EventAttribute> = 2,
    }

    pub struct EventAttribute {
        bytes key: Vec<u8> = 1,
        bytes value: Vec<u8> = 2,
        /// Whether the node indexes this attribute.
        boolean index: bool = 3,
    }
}

impl Event {
    /// The value of the first attribute with the given key.
    pub fn attribute(&self, key: &str) -> Option<&[u8]> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key.as_bytes())
            .map(|attr| attr.value.as_slice())
    }
}
