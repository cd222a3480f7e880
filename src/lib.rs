//! A BER (Basic Encoding Rules) decoder paired with a schema projector for
//! the GSMA TAP3 roaming data interchange format.
//!
//! Two stages, each independently usable:
//!
//! - [`decoder::parse_ber`] turns a byte buffer into a [`raw::RawTree`]: an
//!   anonymous tag/length/value tree, allocated in an [`arena::Arena`].
//! - [`projector::project_tap`] walks that tree against the
//!   [`dictionary`] for a (version, release) pair and produces a
//!   [`projector::NamedNode`] tree with named fields and typed values.

pub mod arena;
pub mod decoder;
pub mod dictionary;
pub mod errors;
pub mod identifier;
pub mod projector;
pub mod raw;

pub use arena::NodeId;
pub use decoder::{parse_ber, parse_ber_with_options, DecoderOptions};
pub use errors::{BerError, ErrorCode};
pub use identifier::{NodeKind, TagClass};
pub use projector::{project_tap, NamedData, NamedNode};
pub use raw::{RawNode, RawTree};
