use std::fmt;

/// Literal logic value
///
/// Atoms are ground values drawn from the host language: they unify only with
/// structurally equal atoms.
#[derive(PartialEq, Eq, Hash, Clone)]
pub enum LValue {
    Bool(bool),
    Number(isize),
    Char(char),
    String(String),
}

impl From<bool> for LValue {
    fn from(u: bool) -> LValue {
        LValue::Bool(u)
    }
}

impl From<isize> for LValue {
    fn from(u: isize) -> LValue {
        LValue::Number(u)
    }
}

impl From<char> for LValue {
    fn from(u: char) -> LValue {
        LValue::Char(u)
    }
}

impl From<&str> for LValue {
    fn from(u: &str) -> LValue {
        LValue::String(String::from(u))
    }
}

impl From<String> for LValue {
    fn from(u: String) -> LValue {
        LValue::String(u)
    }
}

impl PartialEq<bool> for LValue {
    fn eq(&self, other: &bool) -> bool {
        match self {
            LValue::Bool(b) => b == other,
            _ => false,
        }
    }
}

impl PartialEq<LValue> for bool {
    fn eq(&self, other: &LValue) -> bool {
        other == self
    }
}

impl PartialEq<isize> for LValue {
    fn eq(&self, other: &isize) -> bool {
        match self {
            LValue::Number(x) => x == other,
            _ => false,
        }
    }
}

impl PartialEq<LValue> for isize {
    fn eq(&self, other: &LValue) -> bool {
        other == self
    }
}

impl PartialEq<&str> for LValue {
    fn eq(&self, other: &&str) -> bool {
        match self {
            LValue::String(x) => x == other,
            _ => false,
        }
    }
}

impl PartialEq<LValue> for &str {
    fn eq(&self, other: &LValue) -> bool {
        other == self
    }
}

// The custom formatter prints values without the enum member specifiers,
// i.e. instead of String("foo") we get just "foo".
impl fmt::Debug for LValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LValue::Bool(val) => write!(f, "{:?}", val),
            LValue::Number(val) => write!(f, "{:?}", val),
            LValue::Char(val) => write!(f, "{:?}", val),
            LValue::String(val) => write!(f, "{:?}", val),
        }
    }
}

impl fmt::Display for LValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LValue::Bool(val) => write!(f, "{}", val),
            LValue::Number(val) => write!(f, "{}", val),
            LValue::Char(val) => write!(f, "'{}'", val),
            LValue::String(val) => write!(f, "\"{}\"", val),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lvalue_from() {
        assert_eq!(LValue::from(true), true);
        assert_eq!(LValue::from(1234), 1234);
        assert_eq!(LValue::from("foo"), "foo");
    }

    #[test]
    fn test_lvalue_mismatched_kinds() {
        // Comparisons across atom kinds are false, not errors.
        assert!(LValue::from(1) != LValue::from(true));
        assert!(LValue::from("1") != LValue::from(1));
    }

    #[test]
    fn test_lvalue_display() {
        assert_eq!(format!("{}", LValue::from(5)), "5");
        assert_eq!(format!("{}", LValue::from("foo")), "\"foo\"");
        assert_eq!(format!("{}", LValue::from('c')), "'c'");
    }
}
