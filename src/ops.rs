use std::fmt;

/// Binary connectives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
    Biconditional,
}

/// Any connective, as found by the tokenizer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Not,
    Binary(BinaryOp),
}

// Constructors
impl Operator {
    pub const AND: Operator = Operator::Binary(BinaryOp::And);
    pub const OR: Operator = Operator::Binary(BinaryOp::Or);
    pub const IMPLIES: Operator = Operator::Binary(BinaryOp::Implies);
    pub const BICONDITIONAL: Operator = Operator::Binary(BinaryOp::Biconditional);
}

impl Operator {
    /// Binding rank: the higher the rank, the looser the connective binds.
    ///
    /// The parser splits an expression at its loosest top-level connective.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Not => 0,
            Operator::Binary(BinaryOp::And) => 1,
            Operator::Binary(BinaryOp::Or) => 2,
            Operator::Binary(BinaryOp::Implies) => 3,
            Operator::Binary(BinaryOp::Biconditional) => 4,
        }
    }

    /// Unicode glyph used when rendering.
    pub const fn glyph(self) -> char {
        match self {
            Operator::Not => '¬',
            Operator::Binary(op) => op.glyph(),
        }
    }

    /// Recognizes a single-character connective, ASCII or Unicode.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '~' | '¬' => Some(Operator::Not),
            '*' | '∧' => Some(Operator::AND),
            '+' | '∨' => Some(Operator::OR),
            '→' => Some(Operator::IMPLIES),
            '≡' | '↔' => Some(Operator::BICONDITIONAL),
            _ => None,
        }
    }
}

impl BinaryOp {
    pub const fn glyph(self) -> char {
        match self {
            BinaryOp::And => '∧',
            BinaryOp::Or => '∨',
            BinaryOp::Implies => '→',
            BinaryOp::Biconditional => '≡',
        }
    }

    /// Combines two truth values.
    pub const fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOp::And => lhs && rhs,
            BinaryOp::Or => lhs || rhs,
            BinaryOp::Implies => !lhs || rhs,
            BinaryOp::Biconditional => lhs == rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
