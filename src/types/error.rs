//! Error types for the lab exercises.

use thiserror::Error;

/// All errors that can occur in the dsa-labs library.
#[derive(Error, Debug)]
pub enum LabError {
    /// Vertex label is not part of the graph.
    #[error("Vertex '{0}' not found")]
    UnknownVertex(char),

    /// Self-edge not allowed.
    #[error("Self-edge not allowed on vertex '{0}'")]
    SelfEdge(char),

    /// Zero is reserved for "no edge" in the adjacency matrix.
    #[error("Edge {0}-{1} has zero weight")]
    ZeroWeight(char, char),

    /// Divisor evaluated to zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Logarithm argument outside its domain.
    #[error("Logarithm argument must be positive, got {0}")]
    LogDomain(f64),

    /// A closing parenthesis without an opening one.
    #[error("Unbalanced parentheses: missing '('")]
    MissingLeftParen,

    /// An opening parenthesis that is never closed.
    #[error("Unbalanced parentheses: missing ')'")]
    MissingRightParen,

    /// An operator or function without enough operands.
    #[error("Missing operand for '{0}'")]
    MissingOperand(String),

    /// A function name not followed by '('.
    #[error("Function '{0}' must be followed by '('")]
    MissingFunctionArgument(String),

    /// A character the tokenizer does not understand.
    #[error("Invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    /// Leftover operands after evaluation, or no input at all.
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    /// Huffman input had no letters.
    #[error("No symbols to encode")]
    EmptyAlphabet,

    /// Bit string does not decode to whole symbols.
    #[error("Invalid Huffman code: {0}")]
    InvalidCode(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A command-line value could not be parsed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for LabError {
    fn from(err: toml::de::Error) -> Self {
        LabError::Config(err.to_string())
    }
}

/// Convenience result type for lab operations.
pub type LabResult<T> = Result<T, LabError>;
