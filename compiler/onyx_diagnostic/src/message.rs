//! Message kinds and their text templates.

use std::fmt;

use onyx_ir::Span;

/// The closed set of reportable problems.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MessageKind {
    /// `expected token '{}', got '{}'`
    ExpectedToken,
    /// `unexpected token '{}'`
    UnexpectedToken,
    /// `unknown type '{}'`
    UnknownType,
    /// `'{}' is not an lvalue`
    NotLval,
    /// `attempt to assign to constant '{}'`
    AssignConst,
    /// `unknown symbol '{}'`
    UnknownSymbol,
    /// `redefinition of function '{}'`
    FunctionRedefinition,
    /// `mismatched types for binary operator, '{}', '{}'`
    BinopMismatchType,
    /// `mismatched types on assignment, expected '{}', got '{}'`
    AssignmentTypeMismatch,
}

impl MessageKind {
    /// Every kind, in declaration order.
    pub const ALL: [MessageKind; 9] = [
        MessageKind::ExpectedToken,
        MessageKind::UnexpectedToken,
        MessageKind::UnknownType,
        MessageKind::NotLval,
        MessageKind::AssignConst,
        MessageKind::UnknownSymbol,
        MessageKind::FunctionRedefinition,
        MessageKind::BinopMismatchType,
        MessageKind::AssignmentTypeMismatch,
    ];

    /// Text template. Each `{}` is filled by one argument, in order.
    pub const fn template(self) -> &'static str {
        match self {
            MessageKind::ExpectedToken => "expected token '{}', got '{}'",
            MessageKind::UnexpectedToken => "unexpected token '{}'",
            MessageKind::UnknownType => "unknown type '{}'",
            MessageKind::NotLval => "'{}' is not an lvalue",
            MessageKind::AssignConst => "attempt to assign to constant '{}'",
            MessageKind::UnknownSymbol => "unknown symbol '{}'",
            MessageKind::FunctionRedefinition => "redefinition of function '{}'",
            MessageKind::BinopMismatchType => "mismatched types for binary operator, '{}', '{}'",
            MessageKind::AssignmentTypeMismatch => {
                "mismatched types on assignment, expected '{}', got '{}'"
            }
        }
    }

    /// Number of arguments the template takes.
    pub fn arity(self) -> usize {
        self.template().matches("{}").count()
    }

    /// Fill the template. Missing arguments render empty, extras are dropped.
    pub fn format(self, args: &[&str]) -> String {
        let mut out = String::with_capacity(self.template().len());
        let mut args = args.iter();
        let mut pieces = self.template().split("{}").peekable();
        while let Some(piece) = pieces.next() {
            out.push_str(piece);
            if pieces.peek().is_some() {
                out.push_str(args.next().copied().unwrap_or_default());
            }
        }
        out
    }
}

/// A formatted message at a source position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Message {
    pub kind: MessageKind,
    pub span: Span,
    pub text: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.span, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_fills_holes_in_order() {
        let text = MessageKind::AssignmentTypeMismatch.format(&["i32", "^u8"]);
        assert_eq!(text, "mismatched types on assignment, expected 'i32', got '^u8'");
    }

    #[test]
    fn format_tolerates_missing_args() {
        assert_eq!(
            MessageKind::ExpectedToken.format(&[")"]),
            "expected token ')', got ''"
        );
    }

    #[test]
    fn format_drops_extra_args() {
        assert_eq!(
            MessageKind::UnknownSymbol.format(&["foo", "bar"]),
            "unknown symbol 'foo'"
        );
    }

    #[test]
    fn arity_matches_template() {
        assert_eq!(MessageKind::ExpectedToken.arity(), 2);
        assert_eq!(MessageKind::NotLval.arity(), 1);
        for kind in MessageKind::ALL {
            assert!(kind.arity() >= 1, "{kind:?} takes no arguments");
        }
    }

    #[test]
    fn display_prefixes_position() {
        let msg = Message {
            kind: MessageKind::UnknownType,
            span: Span::new(4, 9),
            text: MessageKind::UnknownType.format(&["Vec3"]),
        };
        assert_eq!(msg.to_string(), "(4..9) unknown type 'Vec3'");
    }
}
