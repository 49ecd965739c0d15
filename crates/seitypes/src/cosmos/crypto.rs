//! Public key records that travel inside `Any` in signer infos and
//! validator sets.

pub mod secp256k1 {
    wirepack::message! {
        /// A compressed 33 byte secp256k1 public key.
        pub struct PubKey {
            bytes key: Vec<u8> = 1,
        }
    }

    wirepack::names!("cosmos.crypto.secp256k1" => PubKey);
}

pub mod ed25519 {
    wirepack::message! {
        pub struct PubKey {
            bytes key: Vec<u8> = 1,
        }
    }

    wirepack::names!("cosmos.crypto.ed25519" => PubKey);
}
