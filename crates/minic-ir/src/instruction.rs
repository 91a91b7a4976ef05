//! Quadruple and opcode definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operation tag of a quadruple.
///
/// The discriminant is the integer written in the wire format, so existing
/// values must never be renumbered. `Jump`, `JumpIfFalse`, `Label`, `Neg`
/// and `Not` are reserved for control-flow and unary lowering; the
/// translator does not emit them yet but the formats round-trip them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum OpCode {
    Assign = 0,
    Print = 1,
    Jump = 2,
    JumpIfFalse = 3,
    Label = 4,
    Add = 5,
    Sub = 6,
    Mul = 7,
    Div = 8,
    Mod = 9,
    Neg = 10,
    Not = 11,
    And = 12,
    Or = 13,
    Eq = 14,
    Ne = 15,
    Lt = 16,
    Gt = 17,
}

impl OpCode {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0 => Self::Assign,
            1 => Self::Print,
            2 => Self::Jump,
            3 => Self::JumpIfFalse,
            4 => Self::Label,
            5 => Self::Add,
            6 => Self::Sub,
            7 => Self::Mul,
            8 => Self::Div,
            9 => Self::Mod,
            10 => Self::Neg,
            11 => Self::Not,
            12 => Self::And,
            13 => Self::Or,
            14 => Self::Eq,
            15 => Self::Ne,
            16 => Self::Lt,
            17 => Self::Gt,
            _ => return None,
        })
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Assign => "ASSIGN",
            Self::Print => "PRINT",
            Self::Jump => "JMP",
            Self::JumpIfFalse => "JZ",
            Self::Label => "LABEL",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Neg => "NEG",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Eq => "EQ",
            Self::Ne => "NE",
            Self::Lt => "LT",
            Self::Gt => "GT",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A single three-address instruction.
///
/// Arguments and result are places: a literal constant, a variable `v<k>`,
/// or a temporary `t<k>`. Unused fields are empty strings.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Quadruple {
    pub op: OpCode,
    pub arg1: String,
    pub arg2: String,
    pub result: String,
}

impl Quadruple {
    pub fn new(
        op: OpCode,
        arg1: impl Into<String>,
        arg2: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            op,
            arg1: arg1.into(),
            arg2: arg2.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for Quadruple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(s: &str) -> &str {
            if s.is_empty() { "_" } else { s }
        }
        write!(
            f,
            "{} {}, {}, {}",
            self.op,
            field(&self.arg1),
            field(&self.arg2),
            field(&self.result)
        )
    }
}
