//! Wire format domain module

mod codec;
mod dump;
mod integer;

pub use codec::{decode, encode, encoded_len, DecodedBuffer, WireRecord, RECORD_HEADER_LEN};
pub use dump::dump;
pub use integer::{read_u32, write_u32, WireReader, U32_LEN};
