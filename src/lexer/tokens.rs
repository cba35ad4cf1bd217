use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("class", TokenKind::Class);
        map.insert("interface", TokenKind::Interface);
        map.insert("enum", TokenKind::Enum);
        map.insert("import", TokenKind::Import);
        map.insert("package", TokenKind::Package);
        map.insert("extends", TokenKind::Extends);
        map.insert("implements", TokenKind::Implements);

        map.insert("public", TokenKind::Public);
        map.insert("private", TokenKind::Private);
        map.insert("protected", TokenKind::Protected);
        map.insert("static", TokenKind::Static);
        map.insert("final", TokenKind::Final);
        map.insert("abstract", TokenKind::Abstract);
        map.insert("synchronized", TokenKind::Synchronized);
        map.insert("native", TokenKind::Native);
        map.insert("transient", TokenKind::Transient);
        map.insert("volatile", TokenKind::Volatile);
        map.insert("strictfp", TokenKind::Strictfp);

        map.insert("int", TokenKind::Int);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("void", TokenKind::Void);
        map.insert("double", TokenKind::Double);
        map.insert("float", TokenKind::Float);
        map.insert("long", TokenKind::Long);
        map.insert("short", TokenKind::Short);
        map.insert("byte", TokenKind::Byte);
        map.insert("char", TokenKind::Char);

        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);

        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("do", TokenKind::Do);
        map.insert("new", TokenKind::New);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Semicolon,
    Colon,
    Question,
    Comma,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Declarations
    Class,
    Interface,
    Enum,
    Import,
    Package,
    Extends,
    Implements,

    // Modifiers
    Public,
    Private,
    Protected,
    Static,
    Final,
    Abstract,
    Synchronized,
    Native,
    Transient,
    Volatile,
    Strictfp,

    // Primitive types
    Int,
    Boolean,
    Void,
    Double,
    Float,
    Long,
    Short,
    Byte,
    Char,

    // Literals
    True,
    False,
    Null,

    // Statements outside the subset
    Return,
    If,
    Else,
    While,
    For,
    Do,
    New,
}

impl TokenKind {
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            TokenKind::Public
                | TokenKind::Private
                | TokenKind::Protected
                | TokenKind::Static
                | TokenKind::Final
                | TokenKind::Abstract
                | TokenKind::Synchronized
                | TokenKind::Native
                | TokenKind::Transient
                | TokenKind::Volatile
                | TokenKind::Strictfp
        )
    }

    pub fn is_primitive_type(&self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Boolean
                | TokenKind::Void
                | TokenKind::Double
                | TokenKind::Float
                | TokenKind::Long
                | TokenKind::Short
                | TokenKind::Byte
                | TokenKind::Char
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.value, self.span.start.0)
    }
}
