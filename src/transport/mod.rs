//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod expand;
mod link;
mod number;
mod outcome;
mod shorten;
mod stats;
mod url_stats;

pub use expand::{decode_expand_json_response, encode_expand_form};
pub use outcome::{Outcome, TransportError};
pub use shorten::{decode_shorten_json_response, encode_shorten_form};
pub use stats::{
    decode_db_stats_json_response, decode_stats_json_response, encode_db_stats_form,
    encode_stats_form,
};
pub use url_stats::{decode_url_stats_json_response, encode_url_stats_form};
