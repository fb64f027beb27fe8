//! When parsing text or dividing big integers goes wrong.

use crate::lib::fmt::{self, Debug, Display};
use crate::lib::{result, Box, ToString};
use crate::parse::Base;

/// This type represents all possible errors that can occur when parsing a
/// big integer from text or dividing one big integer by another.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// A larger `Error` would make every `Result<BigInteger>` larger too.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `biginteger::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based column of the character at which the error was detected.
    ///
    /// The first character of the input, including any leading sign, is in
    /// column 1. Errors that are not tied to a position in the input, such
    /// as empty input or division by zero, report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - text that is not a valid integer in its base
    /// - `Category::Arithmetic` - an operation without a defined result
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::EmptyInput | ErrorCode::MissingDigits | ErrorCode::InvalidDigit(_, _) => {
                Category::Syntax
            }
            ErrorCode::DivisionByZero => Category::Arithmetic,
        }
    }

    /// Returns true if this error was caused by text that is not a valid
    /// integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by dividing by zero.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }
}

/// Categorizes the cause of a `biginteger::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by text that is not a valid integer in the
    /// requested base.
    Syntax,

    /// The error was caused by a division or remainder with a zero divisor.
    Arithmetic,
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describes all possible errors that can occur when parsing or
/// dividing big integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// The input text was empty.
    EmptyInput,

    /// A leading `+` or `-` was not followed by any digits.
    MissingDigits,

    /// A character is not a digit in the requested base.
    InvalidDigit(char, Base),

    /// The divisor of a division or remainder was zero.
    DivisionByZero,
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column }),
        }
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::DivisionByZero,
                column: 0,
            }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyInput => f.write_str("cannot parse integer from empty string"),
            ErrorCode::MissingDigits => f.write_str("expected digits after sign"),
            ErrorCode::InvalidDigit(ch, base) => {
                write!(f, "invalid {} digit `{}`", base.name(), ch.escape_debug())
            }
            ErrorCode::DivisionByZero => f.write_str("attempt to divide by zero"),
        }
    }
}

impl serde::de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, column: {})",
            self.err.code.to_string(),
            self.err.column
        )
    }
}
