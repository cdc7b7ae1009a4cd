//! Tokenizer for infix arithmetic expressions.

use crate::types::{LabError, LabResult};

/// Arithmetic operators. `Neg` is the prefix minus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
}

impl Operator {
    /// Binding strength; higher binds tighter. A prefix minus binds tighter
    /// than `^`, so `-2^2 = (-2)^2`.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
            Self::Neg => 4,
        }
    }

    /// True for operators that group to the right. Only the prefix minus
    /// does; `^` groups left like the other binary operators
    /// (`2^3^2 = 8^2`).
    pub fn is_right_assoc(&self) -> bool {
        matches!(self, Self::Neg)
    }

    /// Number of operands consumed.
    pub fn arity(&self) -> usize {
        match self {
            Self::Neg => 1,
            _ => 2,
        }
    }

    /// Source symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub | Self::Neg => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// Built-in one-argument functions. Angles are radians; `log` is natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log,
}

impl Function {
    /// Parse a function name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    /// Source name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
        }
    }
}

/// A lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(Operator),
    Func(Function),
    LParen,
    RParen,
}

impl Token {
    /// True if a `+`/`-` after this token is a sign rather than a binary
    /// operator.
    fn expects_operand(prev: Option<&Token>) -> bool {
        matches!(
            prev,
            None | Some(Token::Op(_)) | Some(Token::LParen) | Some(Token::Func(_))
        )
    }
}

/// Split `input` into tokens.
///
/// Numbers accept a decimal point and an exponent (`1.5e-3`). A lone `e`
/// is Euler's number. A function name must be followed by `(`.
pub fn tokenize(input: &str) -> LabResult<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (value, next) = scan_number(&chars, i)?;
            tokens.push(Token::Number(value));
            i = next;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect::<String>().to_lowercase();
            if word == "e" {
                tokens.push(Token::Number(std::f64::consts::E));
                continue;
            }
            let func = Function::from_name(&word).ok_or(LabError::InvalidCharacter {
                ch: c,
                pos: start,
            })?;
            let mut j = i;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if chars.get(j) != Some(&'(') {
                return Err(LabError::MissingFunctionArgument(word));
            }
            tokens.push(Token::Func(func));
            continue;
        }

        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '*' => Token::Op(Operator::Mul),
            '/' => Token::Op(Operator::Div),
            '^' => Token::Op(Operator::Pow),
            '+' if Token::expects_operand(tokens.last()) => {
                // Unary plus is a no-op.
                i += 1;
                continue;
            }
            '+' => Token::Op(Operator::Add),
            '-' if Token::expects_operand(tokens.last()) => Token::Op(Operator::Neg),
            '-' => Token::Op(Operator::Sub),
            _ => return Err(LabError::InvalidCharacter { ch: c, pos: i }),
        };
        tokens.push(token);
        i += 1;
    }

    Ok(tokens)
}

/// Scan a numeric literal starting at `start`. Returns the value and the
/// index just past it.
fn scan_number(chars: &[char], start: usize) -> LabResult<(f64, usize)> {
    let mut i = start;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }

    // Exponent only if digits follow, so `2e` stays "2" then "e".
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    let text: String = chars[start..i].iter().collect();
    text.parse::<f64>()
        .map(|value| (value, i))
        .map_err(|_| LabError::MalformedExpression(format!("bad number '{}'", text)))
}
