//! `ibc.core.client.v1`

use wirepack::Any;

wirepack::message! {
    /// A height on a counterparty chain. Heights compare by revision number
    /// first, so a chain upgrade that resets block heights still moves
    /// forward.
    pub struct Height {
        uint64 revision_number: u64 = 1,
        uint64 revision_height: u64 = 2,
    }

    pub struct IdentifiedClientState {
        string client_id: String = 1,
        message client_state: Option<Any> = 2,
    }
}

impl Height {
    pub fn new(revision_number: u64, revision_height: u64) -> Self {
        Height { revision_number, revision_height }
    }

    /// The zero height disables height based timeouts.
    pub fn is_zero(&self) -> bool {
        self.revision_number == 0 && self.revision_height == 0
    }
}

impl PartialOrd for Height {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(
            (self.revision_number, self.revision_height)
                .cmp(&(other.revision_number, other.revision_height)),
        )
    }
}
