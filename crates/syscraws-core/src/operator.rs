//! Operator tags.
//!
//! The parser turns every operator occurrence into an [`OperatorTag`] held by an
//! operator-reference expression. Translation looks the tag up in the operator
//! table; assignment-family tags are handled structurally instead.

use std::fmt;

/// Every operator symbol the surface language can spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorTag {
    // === Unary ===
    /// prefix `+`
    Plus,
    /// prefix `-`
    Minus,
    /// prefix `/` (reciprocal)
    Recip,
    /// `!`
    LogicalNot,
    /// `~`
    BitNot,
    /// `++x`
    PreInc,
    /// `--x`
    PreDec,
    /// `x++`
    PostInc,
    /// `x--`
    PostDec,

    // === Arithmetic ===
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,

    // === Shifts ===
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,
    /// `>>>`
    ForwardShift,
    /// `<<<`
    BackwardShift,

    // === Comparison ===
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // === Logical and bitwise ===
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,

    // === Assignment ===
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    RemAssign,
    /// `&=`
    BitAndAssign,
    /// `|=`
    BitOrAssign,
    /// `^=`
    BitXorAssign,
    /// `<<=`
    LeftShiftAssign,
    /// `>>=`
    RightShiftAssign,
    /// `>>>=`
    ForwardShiftAssign,
    /// `<<<=`
    BackwardShiftAssign,
}

impl OperatorTag {
    /// All tags, in declaration order.
    pub const ALL: [OperatorTag; 42] = [
        OperatorTag::Plus,
        OperatorTag::Minus,
        OperatorTag::Recip,
        OperatorTag::LogicalNot,
        OperatorTag::BitNot,
        OperatorTag::PreInc,
        OperatorTag::PreDec,
        OperatorTag::PostInc,
        OperatorTag::PostDec,
        OperatorTag::Add,
        OperatorTag::Sub,
        OperatorTag::Mul,
        OperatorTag::Div,
        OperatorTag::Rem,
        OperatorTag::LeftShift,
        OperatorTag::RightShift,
        OperatorTag::ForwardShift,
        OperatorTag::BackwardShift,
        OperatorTag::Equal,
        OperatorTag::NotEqual,
        OperatorTag::Less,
        OperatorTag::LessEqual,
        OperatorTag::Greater,
        OperatorTag::GreaterEqual,
        OperatorTag::LogicalAnd,
        OperatorTag::LogicalOr,
        OperatorTag::BitAnd,
        OperatorTag::BitOr,
        OperatorTag::BitXor,
        OperatorTag::Assign,
        OperatorTag::AddAssign,
        OperatorTag::SubAssign,
        OperatorTag::MulAssign,
        OperatorTag::DivAssign,
        OperatorTag::RemAssign,
        OperatorTag::BitAndAssign,
        OperatorTag::BitOrAssign,
        OperatorTag::BitXorAssign,
        OperatorTag::LeftShiftAssign,
        OperatorTag::RightShiftAssign,
        OperatorTag::ForwardShiftAssign,
        OperatorTag::BackwardShiftAssign,
    ];

    /// Human-readable name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            OperatorTag::Plus => "plus",
            OperatorTag::Minus => "minus",
            OperatorTag::Recip => "reciprocal",
            OperatorTag::LogicalNot => "logical not",
            OperatorTag::BitNot => "bitwise not",
            OperatorTag::PreInc => "prefix increment",
            OperatorTag::PreDec => "prefix decrement",
            OperatorTag::PostInc => "postfix increment",
            OperatorTag::PostDec => "postfix decrement",
            OperatorTag::Add => "add",
            OperatorTag::Sub => "sub",
            OperatorTag::Mul => "mul",
            OperatorTag::Div => "div",
            OperatorTag::Rem => "rem",
            OperatorTag::LeftShift => "left shift",
            OperatorTag::RightShift => "right shift",
            OperatorTag::ForwardShift => "forward shift",
            OperatorTag::BackwardShift => "backward shift",
            OperatorTag::Equal => "equal to",
            OperatorTag::NotEqual => "not equal to",
            OperatorTag::Less => "less than",
            OperatorTag::LessEqual => "less than or equal to",
            OperatorTag::Greater => "greater than",
            OperatorTag::GreaterEqual => "greater than or equal to",
            OperatorTag::LogicalAnd => "logical and",
            OperatorTag::LogicalOr => "logical or",
            OperatorTag::BitAnd => "bitwise and",
            OperatorTag::BitOr => "bitwise or",
            OperatorTag::BitXor => "bitwise xor",
            OperatorTag::Assign => "assign",
            OperatorTag::AddAssign => "add assign",
            OperatorTag::SubAssign => "sub assign",
            OperatorTag::MulAssign => "mul assign",
            OperatorTag::DivAssign => "div assign",
            OperatorTag::RemAssign => "rem assign",
            OperatorTag::BitAndAssign => "bitwise and assign",
            OperatorTag::BitOrAssign => "bitwise or assign",
            OperatorTag::BitXorAssign => "bitwise xor assign",
            OperatorTag::LeftShiftAssign => "left shift assign",
            OperatorTag::RightShiftAssign => "right shift assign",
            OperatorTag::ForwardShiftAssign => "forward shift assign",
            OperatorTag::BackwardShiftAssign => "backward shift assign",
        }
    }

    /// Surface spelling of the operator.
    pub const fn symbol(&self) -> &'static str {
        match self {
            OperatorTag::Plus | OperatorTag::Add => "+",
            OperatorTag::Minus | OperatorTag::Sub => "-",
            OperatorTag::Recip | OperatorTag::Div => "/",
            OperatorTag::LogicalNot => "!",
            OperatorTag::BitNot => "~",
            OperatorTag::PreInc | OperatorTag::PostInc => "++",
            OperatorTag::PreDec | OperatorTag::PostDec => "--",
            OperatorTag::Mul => "*",
            OperatorTag::Rem => "%",
            OperatorTag::LeftShift => "<<",
            OperatorTag::RightShift => ">>",
            OperatorTag::ForwardShift => ">>>",
            OperatorTag::BackwardShift => "<<<",
            OperatorTag::Equal => "==",
            OperatorTag::NotEqual => "!=",
            OperatorTag::Less => "<",
            OperatorTag::LessEqual => "<=",
            OperatorTag::Greater => ">",
            OperatorTag::GreaterEqual => ">=",
            OperatorTag::LogicalAnd => "&&",
            OperatorTag::LogicalOr => "||",
            OperatorTag::BitAnd => "&",
            OperatorTag::BitOr => "|",
            OperatorTag::BitXor => "^",
            OperatorTag::Assign => "=",
            OperatorTag::AddAssign => "+=",
            OperatorTag::SubAssign => "-=",
            OperatorTag::MulAssign => "*=",
            OperatorTag::DivAssign => "/=",
            OperatorTag::RemAssign => "%=",
            OperatorTag::BitAndAssign => "&=",
            OperatorTag::BitOrAssign => "|=",
            OperatorTag::BitXorAssign => "^=",
            OperatorTag::LeftShiftAssign => "<<=",
            OperatorTag::RightShiftAssign => ">>=",
            OperatorTag::ForwardShiftAssign => ">>>=",
            OperatorTag::BackwardShiftAssign => "<<<=",
        }
    }

    /// Check if this operator writes to its first operand.
    ///
    /// Covers plain and compound assignment as well as increment/decrement.
    pub const fn is_assignment(&self) -> bool {
        self.is_step() || matches!(self, OperatorTag::Assign) || self.compound_base().is_some()
    }

    /// Check if this is one of the increment/decrement forms.
    pub const fn is_step(&self) -> bool {
        matches!(
            self,
            OperatorTag::PreInc | OperatorTag::PreDec | OperatorTag::PostInc | OperatorTag::PostDec
        )
    }

    /// Check if an increment/decrement form yields the value from before the update.
    pub const fn yields_old_value(&self) -> bool {
        matches!(self, OperatorTag::PostInc | OperatorTag::PostDec)
    }

    /// The arithmetic operator a compound assignment applies, e.g. `Add` for `AddAssign`.
    pub const fn compound_base(&self) -> Option<OperatorTag> {
        match self {
            OperatorTag::AddAssign => Some(OperatorTag::Add),
            OperatorTag::SubAssign => Some(OperatorTag::Sub),
            OperatorTag::MulAssign => Some(OperatorTag::Mul),
            OperatorTag::DivAssign => Some(OperatorTag::Div),
            OperatorTag::RemAssign => Some(OperatorTag::Rem),
            OperatorTag::BitAndAssign => Some(OperatorTag::BitAnd),
            OperatorTag::BitOrAssign => Some(OperatorTag::BitOr),
            OperatorTag::BitXorAssign => Some(OperatorTag::BitXor),
            OperatorTag::LeftShiftAssign => Some(OperatorTag::LeftShift),
            OperatorTag::RightShiftAssign => Some(OperatorTag::RightShift),
            OperatorTag::ForwardShiftAssign => Some(OperatorTag::ForwardShift),
            OperatorTag::BackwardShiftAssign => Some(OperatorTag::BackwardShift),
            _ => None,
        }
    }

    /// The arithmetic operator an increment/decrement applies with a step of one.
    pub const fn step_base(&self) -> Option<OperatorTag> {
        match self {
            OperatorTag::PreInc | OperatorTag::PostInc => Some(OperatorTag::Add),
            OperatorTag::PreDec | OperatorTag::PostDec => Some(OperatorTag::Sub),
            _ => None,
        }
    }
}

impl fmt::Display for OperatorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}
