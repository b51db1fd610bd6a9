use crate::extension::ExtensionTerm;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

pub use crate::lvalue::LValue;

/// Logic variable identifier.
///
/// Two variables are the same variable iff their ids match. Ids are allocated
/// from `State::next_id` by the fresh-variable operator; the term layer never
/// invents ids on its own.
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug)]
pub struct LVar(usize);

impl LVar {
    pub fn new(id: usize) -> LVar {
        LVar(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

impl fmt::Display for LVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<lvar {}>", self.0)
    }
}

/// Logic term.
#[derive(Clone)]
pub enum LTermInner {
    /// Literal value
    Val(LValue),

    /// Logic variable
    Var(LVar),

    /// Empty list
    Empty,

    /// Non-empty list. The tail position may hold a non-list term, most
    /// usefully a variable standing for an unknown remainder; such a list is
    /// *improper* and displays its tail after a `.`.
    Cons(LTerm, LTerm),

    /// Canonical stand-in for the k:th unbound variable of a reified answer
    Reified(usize),

    /// User-defined term kind carrying its own unification and reification
    Ext(Rc<dyn ExtensionTerm>),
}

/// Shared handle to a logic term.
///
/// Terms are immutable and reference counted; cloning is cheap and all
/// structural sharing is free.
#[derive(Clone)]
pub struct LTerm {
    inner: Rc<LTermInner>,
}

impl LTerm {
    pub fn ptr_eq(this: &LTerm, other: &LTerm) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }

    pub fn var(id: usize) -> LTerm {
        LTerm::from(LTermInner::Var(LVar::new(id)))
    }

    pub fn reified(k: usize) -> LTerm {
        LTerm::from(LTermInner::Reified(k))
    }

    pub fn ext<T: ExtensionTerm + 'static>(t: T) -> LTerm {
        LTerm::from(LTermInner::Ext(Rc::new(t)))
    }

    /// Constructs an empty list
    pub fn empty_list() -> LTerm {
        LTerm::from(LTermInner::Empty)
    }

    /// Construct a list cell
    pub fn cons(head: LTerm, tail: LTerm) -> LTerm {
        LTerm::from(LTermInner::Cons(head, tail))
    }

    /// Constructs a list with a single element
    pub fn singleton(u: LTerm) -> LTerm {
        LTerm::cons(u, LTerm::empty_list())
    }

    pub fn from_vec(l: Vec<LTerm>) -> LTerm {
        let mut c = LTerm::empty_list();
        for t in l.into_iter().rev() {
            c = LTerm::cons(t, c);
        }
        c
    }

    /// Constructs an improper list: the last element becomes the tail
    /// position of the cell before it, so `improper_from_vec(vec![a, b, v])`
    /// is the list whose first elements are `a`, `b` and whose remaining
    /// tail is the term `v`.
    pub fn improper_from_vec(mut h: Vec<LTerm>) -> LTerm {
        match h.pop() {
            Some(mut c) => {
                for t in h.into_iter().rev() {
                    c = LTerm::cons(t, c);
                }
                c
            }
            None => panic!("Improper list must have at least one element"),
        }
    }

    pub fn is_val(&self) -> bool {
        match self.as_ref() {
            LTermInner::Val(_) => true,
            _ => false,
        }
    }

    pub fn is_var(&self) -> bool {
        match self.as_ref() {
            LTermInner::Var(_) => true,
            _ => false,
        }
    }

    pub fn get_var(&self) -> Option<LVar> {
        match self.as_ref() {
            LTermInner::Var(var) => Some(*var),
            _ => None,
        }
    }

    pub fn get_number(&self) -> Option<isize> {
        match self.as_ref() {
            LTermInner::Val(LValue::Number(u)) => Some(*u),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        match self.as_ref() {
            LTermInner::Empty | LTermInner::Cons(_, _) => true,
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self.as_ref() {
            LTermInner::Empty => true,
            _ => false,
        }
    }

    pub fn is_non_empty_list(&self) -> bool {
        match self.as_ref() {
            LTermInner::Cons(_, _) => true,
            _ => false,
        }
    }

    /// A list is improper when its final tail position holds a non-list term.
    pub fn is_improper(&self) -> bool {
        match self.as_ref() {
            LTermInner::Cons(_, tail) => match tail.as_ref() {
                LTermInner::Empty => false,
                LTermInner::Cons(_, _) => tail.is_improper(),
                _ => true,
            },
            _ => false,
        }
    }

    pub fn head(&self) -> Option<&LTerm> {
        match self.as_ref() {
            LTermInner::Cons(head, _) => Some(head),
            _ => None,
        }
    }

    pub fn tail(&self) -> Option<&LTerm> {
        match self.as_ref() {
            LTermInner::Cons(_, tail) => Some(tail),
            _ => None,
        }
    }

    /// Iterates the elements of a list term. For an improper list the final
    /// item yielded is the tail term itself.
    pub fn iter(&self) -> LTermIter<'_> {
        LTermIter { maybe_next: Some(self) }
    }
}

impl From<LTermInner> for LTerm {
    fn from(inner: LTermInner) -> LTerm {
        LTerm {
            inner: Rc::new(inner),
        }
    }
}

impl From<&LTerm> for LTerm {
    fn from(reference: &LTerm) -> LTerm {
        reference.clone()
    }
}

impl From<LVar> for LTerm {
    fn from(var: LVar) -> LTerm {
        LTerm::from(LTermInner::Var(var))
    }
}

impl From<isize> for LTerm {
    fn from(u: isize) -> LTerm {
        LTerm::from(LTermInner::Val(LValue::Number(u)))
    }
}

impl From<bool> for LTerm {
    fn from(u: bool) -> LTerm {
        LTerm::from(LTermInner::Val(LValue::Bool(u)))
    }
}

impl From<char> for LTerm {
    fn from(u: char) -> LTerm {
        LTerm::from(LTermInner::Val(LValue::Char(u)))
    }
}

impl From<&str> for LTerm {
    fn from(u: &str) -> LTerm {
        LTerm::from(LTermInner::Val(LValue::String(String::from(u))))
    }
}

impl From<String> for LTerm {
    fn from(u: String) -> LTerm {
        LTerm::from(LTermInner::Val(LValue::String(u)))
    }
}

impl AsRef<LTermInner> for LTerm {
    fn as_ref(&self) -> &LTermInner {
        &self.inner
    }
}

impl Default for LTerm {
    fn default() -> Self {
        LTerm::empty_list()
    }
}

impl FromIterator<LTerm> for LTerm {
    fn from_iter<T: IntoIterator<Item = LTerm>>(iter: T) -> Self {
        LTerm::from_vec(iter.into_iter().collect())
    }
}

impl fmt::Debug for LTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ref() {
            LTermInner::Val(val) => write!(f, "{:?}", val),
            LTermInner::Var(var) => write!(f, "Var({})", var.id()),
            LTermInner::Empty => write!(f, "Empty"),
            LTermInner::Cons(head, tail) => write!(f, "({:?}, {:?})", head, tail),
            LTermInner::Reified(k) => write!(f, "_.{}", k),
            LTermInner::Ext(ext) => write!(f, "{:?}", ext),
        }
    }
}

impl fmt::Display for LTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ref() {
            LTermInner::Val(val) => write!(f, "{}", val),
            LTermInner::Var(var) => write!(f, "{}", var),
            LTermInner::Empty => write!(f, "[]"),
            LTermInner::Cons(_, _) => {
                let len = self.iter().count();
                let improper = self.is_improper();
                write!(f, "[")?;
                for (count, v) in self.iter().enumerate() {
                    if count > 0 {
                        if improper && count == len - 1 {
                            // Improper tail: the marker renders as `.`
                            write!(f, " . ")?;
                        } else {
                            write!(f, ", ")?;
                        }
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            LTermInner::Reified(k) => write!(f, "_.{}", k),
            LTermInner::Ext(ext) => write!(f, "{:?}", ext),
        }
    }
}

impl PartialEq<LTerm> for LTerm {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_ref(), other.as_ref()) {
            (LTermInner::Var(self_var), LTermInner::Var(other_var)) => self_var == other_var,
            (LTermInner::Val(self_val), LTermInner::Val(other_val)) => self_val == other_val,
            (LTermInner::Empty, LTermInner::Empty) => true,
            (LTermInner::Cons(self_head, self_tail), LTermInner::Cons(other_head, other_tail)) => {
                (self_head == other_head) && (self_tail == other_tail)
            }
            (LTermInner::Reified(self_k), LTermInner::Reified(other_k)) => self_k == other_k,
            (LTermInner::Ext(self_ext), LTermInner::Ext(other_ext)) => {
                self_ext.ext_eq(other_ext.as_ref())
            }
            _ => false,
        }
    }
}

impl Eq for LTerm {}

impl PartialEq<isize> for LTerm {
    fn eq(&self, other: &isize) -> bool {
        match self.as_ref() {
            LTermInner::Val(LValue::Number(x)) => x == other,
            _ => false,
        }
    }
}

impl PartialEq<LTerm> for isize {
    fn eq(&self, other: &LTerm) -> bool {
        other == self
    }
}

impl PartialEq<bool> for LTerm {
    fn eq(&self, other: &bool) -> bool {
        match self.as_ref() {
            LTermInner::Val(LValue::Bool(x)) => x == other,
            _ => false,
        }
    }
}

impl PartialEq<LTerm> for bool {
    fn eq(&self, other: &LTerm) -> bool {
        other == self
    }
}

impl PartialEq<&str> for LTerm {
    fn eq(&self, other: &&str) -> bool {
        match self.as_ref() {
            LTermInner::Val(LValue::String(x)) => x == other,
            _ => false,
        }
    }
}

impl PartialEq<LTerm> for &str {
    fn eq(&self, other: &LTerm) -> bool {
        other == self
    }
}

#[derive(Clone, Debug)]
pub struct LTermIter<'a> {
    maybe_next: Option<&'a LTerm>,
}

impl<'a> Iterator for LTermIter<'a> {
    type Item = &'a LTerm;

    fn next(&mut self) -> Option<Self::Item> {
        match self.maybe_next.map(|x| x.as_ref()) {
            Some(LTermInner::Cons(head, tail)) => {
                if tail.is_empty() {
                    self.maybe_next = None;
                } else {
                    self.maybe_next = Some(tail);
                }
                Some(head)
            }
            Some(LTermInner::Empty) | None => {
                self.maybe_next = None;
                None
            }
            // Improper tail: yield the tail term itself and stop.
            Some(_) => self.maybe_next.take(),
        }
    }
}

impl<'a> IntoIterator for &'a LTerm {
    type Item = &'a LTerm;
    type IntoIter = LTermIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a term from a literal.
///
/// Lists are written in brackets, `lterm!([1, 2, 3])`, and may be nested.
/// An improper tail is written after `|`: `lterm!([1, 2 | x])`. Element
/// positions accept anything `LTerm::from` accepts; a parenthesized
/// expression counts as a single element, e.g. `lterm!([1 | (q.clone())])`.
#[macro_export]
macro_rules! lterm {
    () => {
        $crate::lterm::LTerm::empty_list()
    };
    ([]) => {
        $crate::lterm::LTerm::empty_list()
    };
    ([ $($head:tt),+ | $tail:tt ]) => {
        $crate::lterm::LTerm::improper_from_vec(vec![
            $($crate::lterm!($head)),+ , $crate::lterm!($tail)
        ])
    };
    ([ $($elem:tt),* ]) => {
        $crate::lterm::LTerm::from_vec(vec![ $($crate::lterm!($elem)),* ])
    };
    ($val:expr) => {
        $crate::lterm::LTerm::from($val)
    };
}
