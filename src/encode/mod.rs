//! Encoding of sample buffers into WAV bytes and data URIs

mod uri;
mod wav;

pub use uri::{
    buffer_to_data_uri, decode_data_uri, inspect_data_uri, inspect_file, inspect_wav, to_data_uri,
    UriError, WavInfo, DATA_URI_PREFIX,
};
pub use wav::{encode_samples, encode_wav, quantize, HEADER_LEN};
