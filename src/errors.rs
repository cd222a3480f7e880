use std::fmt;

/// A single decoder or projector failure: a reason, where it came from in
/// the input (when applicable), and where it was raised in the crate.
#[derive(Debug, Clone)]
pub struct BerError {
    backing: Backing,
}

#[derive(Debug, Clone)]
struct Backing {
    code: ErrorCode,
    reason: String,
    offset: Option<usize>,
    file: String,
    line: u32,
}

impl BerError {
    pub fn new(code: ErrorCode, reason: String, offset: Option<usize>, file: String, line: u32) -> Self {
        BerError {
            backing: Backing {
                code,
                reason,
                offset,
                file,
                line,
            },
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.backing.code
    }

    /// Byte offset into the input buffer where the failure was detected,
    /// when the failure originated in the decoder.
    pub fn offset(&self) -> Option<usize> {
        self.backing.offset
    }

    pub fn reason(&self) -> &str {
        &self.backing.reason
    }
}

impl PartialEq for BerError {
    fn eq(&self, other: &Self) -> bool {
        self.backing.code == other.backing.code
            && self.backing.reason == other.backing.reason
            && self.backing.offset == other.backing.offset
            && self.backing.file == other.backing.file
            && self.backing.line == other.backing.line
    }
}

impl Eq for BerError {}

impl std::hash::Hash for BerError {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.backing.code.hash(state);
        self.backing.reason.hash(state);
        self.backing.offset.hash(state);
        self.backing.file.hash(state);
        self.backing.line.hash(state);
    }
}

impl fmt::Display for BerError {
    #[mutants::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.backing.offset {
            Some(offset) => write!(
                f,
                "BerError.{:?} at offset {}: {} ({}:{})",
                self.backing.code, offset, self.backing.reason, self.backing.file, self.backing.line
            ),
            None => write!(
                f,
                "BerError.{:?}: {} ({}:{})",
                self.backing.code, self.backing.reason, self.backing.file, self.backing.line
            ),
        }
    }
}

impl std::error::Error for BerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnexpectedEnd,
    TagTooLong,
    LengthTooLong,
    LengthOverflow,
    IndefiniteOnPrimitive,
    MissingEOC,
    NestingTooDeep,
    IntLenInvalid,
    UnknownSchema,
}

#[macro_export]
macro_rules! ber_err {
    ($code:expr, $offset:expr, $msg:expr) => {
        $crate::errors::BerError::new($code, $msg.to_string(), $offset, file!().to_string(), line!())
    };
    ($code:expr, $offset:expr, $fmt:expr, $($arg:tt)+) => {
        $crate::errors::BerError::new(
            $code,
            format!($fmt, $($arg)+),
            $offset,
            file!().to_string(),
            line!(),
        )
    };
}
