#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    /// `&^`
    BitClear,
    Shl,
    Shr,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        use BinOp::*;
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            BitClear => "&^",
            Shl => "<<",
            Shr => ">>",
        }
    }

    pub fn from_token(op: &str) -> Option<Self> {
        use BinOp::*;
        let op = match op {
            "+" => Add,
            "-" => Sub,
            "*" => Mul,
            "/" => Div,
            "%" => Rem,
            "&" => BitAnd,
            "|" => BitOr,
            "^" => BitXor,
            "&^" => BitClear,
            "<<" => Shl,
            ">>" => Shr,
            _ => return None,
        };
        Some(op)
    }

    pub fn is_shift(self) -> bool {
        matches!(self, BinOp::Shl | BinOp::Shr)
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    /// `!`
    Not,
    /// `^`, bitwise complement.
    BitNot,
    /// `*`
    Deref,
    /// `&`
    AddrOf,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        use UnaryOp::*;
        match self {
            Plus => "+",
            Minus => "-",
            Not => "!",
            BitNot => "^",
            Deref => "*",
            AddrOf => "&",
        }
    }

    pub fn from_token(op: &str) -> Option<Self> {
        use UnaryOp::*;
        let op = match op {
            "+" => Plus,
            "-" => Minus,
            "!" => Not,
            "^" => BitNot,
            "*" => Deref,
            "&" => AddrOf,
            _ => return None,
        };
        Some(op)
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
