//! Constructors that pack transaction messages into [`Any`] for
//! [`TxClient::sign_and_broadcast`](crate::TxClient::sign_and_broadcast).

use seitypes::cosmos::bank::{MsgMultiSend, MsgSend};
use seitypes::cosmos::slashing::MsgUnjail;
use seitypes::cosmwasm::wasm::{
    MsgClearAdmin, MsgExecuteContract, MsgInstantiateContract, MsgMigrateContract, MsgStoreCode,
    MsgUpdateAdmin,
};
use seitypes::ibc::channel::{
    MsgAcknowledgement, MsgChannelCloseConfirm, MsgChannelCloseInit, MsgChannelOpenAck,
    MsgChannelOpenConfirm, MsgChannelOpenInit, MsgChannelOpenTry, MsgRecvPacket, MsgTimeout,
    MsgTimeoutOnClose,
};
use serde::Serialize;
use wirepack::{Any, Result};

macro_rules! packers {
    ($($(#[$meta:meta])* $fn_name:ident($ty:ty);)*) => {$(
        $(#[$meta])*
        pub fn $fn_name(value: $ty) -> Result<Any> {
            Any::pack(&value)
        }
    )*};
}

packers! {
    msg_send(MsgSend);
    msg_multi_send(MsgMultiSend);
    msg_unjail(MsgUnjail);

    msg_store_code(MsgStoreCode);
    msg_instantiate_contract(MsgInstantiateContract);
    msg_execute_contract(MsgExecuteContract);
    msg_migrate_contract(MsgMigrateContract);
    msg_update_admin(MsgUpdateAdmin);
    msg_clear_admin(MsgClearAdmin);

    msg_channel_open_init(MsgChannelOpenInit);
    msg_channel_open_try(MsgChannelOpenTry);
    msg_channel_open_ack(MsgChannelOpenAck);
    msg_channel_open_confirm(MsgChannelOpenConfirm);
    msg_channel_close_init(MsgChannelCloseInit);
    msg_channel_close_confirm(MsgChannelCloseConfirm);
    msg_recv_packet(MsgRecvPacket);
    msg_timeout(MsgTimeout);
    msg_timeout_on_close(MsgTimeoutOnClose);
    msg_acknowledgement(MsgAcknowledgement);
}

/// Serializes a contract message into the JSON bytes carried by the
/// instantiate, execute and migrate messages.
pub fn contract_msg<T: Serialize>(msg: &T) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(msg)
}
