//! Packs a fixed-order tuple of `u32`s into a bit stream where every value
//! takes only as many bits as it needs.
//!
//! Each field has a fixed-width header, agreed out of band, holding the bit
//! length of its value. All headers come first, followed by the value bits of
//! every non-zero field with the always-set leading bit left out. The stream
//! is zero-padded to a byte boundary once, at the end.
//!
//! ```
//! let data = varpack::encode(&[4, 14], &[1, 12345]).unwrap();
//! assert_eq!(data, [0x10, 0x03, 0xA0, 0x72]);
//! assert_eq!(varpack::decode(&[4, 14], &data).unwrap(), [1, 12345]);
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod layout;

pub use bitstream::bit_width;
pub use decode::*;
pub use encode::*;
pub use error::*;
pub use layout::*;
