pub mod codec;
pub mod dto;

pub use codec::{CallbackCodec, DelimitedCodec};
pub use dto::{CalendarAction, CallbackKeys, CallbackKind, CallbackPayload};
