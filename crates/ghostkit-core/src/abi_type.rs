//! ARC-4 ABI type grammar.
//!
//! Type strings in an ARC-56 spec are parsed into [`AbiType`] and printed back
//! in canonical form, so a signature never carries whitespace or a malformed
//! type into generated code.
//!
//! ```text
//! uint<N>           8 <= N <= 512, N % 8 == 0
//! ufixed<N>x<M>     N as for uint, 1 <= M <= 160
//! byte | bool | address | string
//! <T>[<len>]        static array
//! <T>[]             dynamic array
//! (<T1>,...,<Tn>)   tuple, possibly empty
//! ```
//!
//! Method arguments may also be transaction types (`pay`, `axfer`, ...) or
//! reference types (`account`, `asset`, `application`); returns may be `void`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Deepest array/tuple nesting accepted.
const MAX_NESTING: usize = 64;

/// Largest static array length.
const MAX_ARRAY_LEN: u32 = 65_535;

/// Why a type string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct AbiTypeError(String);

impl AbiTypeError {
    fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// An ARC-4 value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiType {
    Uint(u16),
    Ufixed { bits: u16, precision: u8 },
    Byte,
    Bool,
    Address,
    String,
    StaticArray(Box<AbiType>, usize),
    DynamicArray(Box<AbiType>),
    Tuple(Vec<AbiType>),
}

/// Transaction argument types; the caller places the transaction in the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Any,
    Pay,
    Keyreg,
    Acfg,
    Axfer,
    Afrz,
    Appl,
}

/// Reference argument types, passed through the foreign arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceType {
    Account,
    Asset,
    Application,
}

/// Anything allowed in an argument position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgType {
    Value(AbiType),
    Transaction(TransactionType),
    Reference(ReferenceType),
}

/// Anything allowed in a return position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    Value(AbiType),
    Void,
}

impl AbiType {
    fn parse_uint_bits(s: &str) -> Result<u16, AbiTypeError> {
        let bits = parse_decimal(s)
            .and_then(|n| u16::try_from(n).ok())
            .ok_or_else(|| AbiTypeError::new(format!("invalid bit size '{s}'")))?;
        if !(8..=512).contains(&bits) || bits % 8 != 0 {
            return Err(AbiTypeError::new(format!(
                "bit size must be a multiple of 8 between 8 and 512, got {bits}"
            )));
        }
        Ok(bits)
    }

    fn parse_primitive(s: &str) -> Result<Self, AbiTypeError> {
        match s {
            "byte" => return Ok(AbiType::Byte),
            "bool" => return Ok(AbiType::Bool),
            "address" => return Ok(AbiType::Address),
            "string" => return Ok(AbiType::String),
            _ => {}
        }

        if let Some(bits) = s.strip_prefix("uint") {
            return Ok(AbiType::Uint(Self::parse_uint_bits(bits)?));
        }

        if let Some(rest) = s.strip_prefix("ufixed") {
            let (bits, precision) = rest
                .split_once('x')
                .ok_or_else(|| AbiTypeError::new(format!("malformed ufixed type '{s}'")))?;
            let bits = Self::parse_uint_bits(bits)?;
            let precision = parse_decimal(precision)
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| AbiTypeError::new(format!("invalid ufixed precision '{precision}'")))?;
            if !(1..=160).contains(&precision) {
                return Err(AbiTypeError::new(format!(
                    "ufixed precision must be between 1 and 160, got {precision}"
                )));
            }
            return Ok(AbiType::Ufixed { bits, precision });
        }

        Err(AbiTypeError::new(format!("unknown type '{s}'")))
    }
}

/// Parse `0|[1-9][0-9]*`. Signs, whitespace and leading zeros are rejected.
fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) || (s.len() > 1 && s.starts_with('0')) {
        return None;
    }
    s.parse().ok()
}

/// Split a tuple body on top-level commas.
fn split_tuple(body: &str) -> Result<Vec<&str>, AbiTypeError> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| AbiTypeError::new("unbalanced parentheses"))?;
            }
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(AbiTypeError::new("unbalanced parentheses"));
    }
    parts.push(&body[start..]);
    Ok(parts)
}

impl AbiType {
    fn parse_nested(s: &str, depth: usize) -> Result<Self, AbiTypeError> {
        if depth > MAX_NESTING {
            return Err(AbiTypeError::new(format!(
                "type nesting exceeds {MAX_NESTING} levels"
            )));
        }
        if s.is_empty() {
            return Err(AbiTypeError::new("empty type"));
        }

        if let Some(head) = s.strip_suffix(']') {
            let open = head
                .rfind('[')
                .ok_or_else(|| AbiTypeError::new(format!("unmatched ']' in '{s}'")))?;
            let elem = Self::parse_nested(&head[..open], depth + 1)?;
            let len = &head[open + 1..];
            if len.is_empty() {
                return Ok(AbiType::DynamicArray(Box::new(elem)));
            }
            let len = parse_decimal(len)
                .filter(|n| *n <= MAX_ARRAY_LEN)
                .ok_or_else(|| AbiTypeError::new(format!("invalid array length '{len}'")))?;
            return Ok(AbiType::StaticArray(Box::new(elem), len as usize));
        }

        if let Some(body) = s.strip_prefix('(') {
            let body = body
                .strip_suffix(')')
                .ok_or_else(|| AbiTypeError::new(format!("unterminated tuple '{s}'")))?;
            if body.is_empty() {
                return Ok(AbiType::Tuple(Vec::new()));
            }
            let types = split_tuple(body)?
                .into_iter()
                .map(|t| Self::parse_nested(t, depth + 1))
                .collect::<Result<Vec<AbiType>, _>>()?;
            return Ok(AbiType::Tuple(types));
        }

        Self::parse_primitive(s)
    }
}

impl FromStr for AbiType {
    type Err = AbiTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_nested(s, 0)
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::Uint(bits) => write!(f, "uint{bits}"),
            AbiType::Ufixed { bits, precision } => write!(f, "ufixed{bits}x{precision}"),
            AbiType::Byte => f.write_str("byte"),
            AbiType::Bool => f.write_str("bool"),
            AbiType::Address => f.write_str("address"),
            AbiType::String => f.write_str("string"),
            AbiType::StaticArray(elem, len) => write!(f, "{elem}[{len}]"),
            AbiType::DynamicArray(elem) => write!(f, "{elem}[]"),
            AbiType::Tuple(types) => {
                f.write_str("(")?;
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{t}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "txn",
            Self::Pay => "pay",
            Self::Keyreg => "keyreg",
            Self::Acfg => "acfg",
            Self::Axfer => "axfer",
            Self::Afrz => "afrz",
            Self::Appl => "appl",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "txn" => Some(Self::Any),
            "pay" => Some(Self::Pay),
            "keyreg" => Some(Self::Keyreg),
            "acfg" => Some(Self::Acfg),
            "axfer" => Some(Self::Axfer),
            "afrz" => Some(Self::Afrz),
            "appl" => Some(Self::Appl),
            _ => None,
        }
    }
}

impl ReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Asset => "asset",
            Self::Application => "application",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "account" => Some(Self::Account),
            "asset" => Some(Self::Asset),
            "application" => Some(Self::Application),
            _ => None,
        }
    }
}

impl FromStr for ArgType {
    type Err = AbiTypeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Some(txn) = TransactionType::from_name(name) {
            return Ok(ArgType::Transaction(txn));
        }
        if let Some(reference) = ReferenceType::from_name(name) {
            return Ok(ArgType::Reference(reference));
        }
        if name == "void" {
            return Err(AbiTypeError::new("void is only valid as a return type"));
        }
        name.parse().map(ArgType::Value)
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgType::Value(t) => write!(f, "{t}"),
            ArgType::Transaction(t) => f.write_str(t.as_str()),
            ArgType::Reference(r) => f.write_str(r.as_str()),
        }
    }
}

impl FromStr for ReturnType {
    type Err = AbiTypeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == "void" {
            return Ok(ReturnType::Void);
        }
        if TransactionType::from_name(name).is_some() || ReferenceType::from_name(name).is_some() {
            return Err(AbiTypeError::new(format!("'{name}' is not a valid return type")));
        }
        name.parse().map(ReturnType::Value)
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Value(t) => write!(f, "{t}"),
            ReturnType::Void => f.write_str("void"),
        }
    }
}
