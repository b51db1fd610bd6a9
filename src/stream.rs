//! Lazy interleaving streams of states
//!
//! A stream is the search frontier of a running goal. It is either `Empty`,
//! mature with a realized head (`Unit`/`Cons`), or an immature suspension
//! (`Lazy`) that must be forced to make progress. Suspensions are
//! defunctionalized: instead of boxed closures for every combinator, a
//! [`Lazy`] node records which operation was suspended together with its
//! operands, and [`LazyStream::force`] performs exactly one step of it.
//!
//! The interleaving happens in `mplus`: when forcing reveals that the left
//! operand is itself still immature, the operands are swapped so that the
//! next forcing step works on the right side before returning to the left
//! side's continuation. That swap is the entire fairness mechanism; a
//! divergent branch can therefore delay, but never starve, a productive
//! one.

use crate::goal::Goal;
use crate::state::State;
use std::fmt;

pub enum Lazy {
    /// A goal suspended just before application to a state
    Pause(Box<State>, Goal),
    /// Suspended interleaving union of two streams
    MPlus(LazyStream, LazyStream),
    /// Suspended goal application to every state of a stream
    Bind(LazyStream, Goal),
    /// An already-built stream, wrapped to be picked up one step later
    Delay(Box<Stream>),
    /// An arbitrary suspended stream computation
    Thunk(Box<dyn FnOnce() -> Stream>),
}

impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lazy::Pause(state, goal) => f.debug_tuple("Pause").field(state).field(goal).finish(),
            Lazy::MPlus(a, b) => f.debug_tuple("MPlus").field(a).field(b).finish(),
            Lazy::Bind(a, goal) => f.debug_tuple("Bind").field(a).field(goal).finish(),
            Lazy::Delay(stream) => f.debug_tuple("Delay").field(stream).finish(),
            Lazy::Thunk(_) => write!(f, "Thunk(...)"),
        }
    }
}

#[derive(Debug)]
pub struct LazyStream(pub Box<Lazy>);

impl LazyStream {
    pub fn pause(state: Box<State>, goal: Goal) -> LazyStream {
        LazyStream(Box::new(Lazy::Pause(state, goal)))
    }

    pub fn mplus(a: LazyStream, b: LazyStream) -> LazyStream {
        LazyStream(Box::new(Lazy::MPlus(a, b)))
    }

    pub fn bind(a: LazyStream, goal: Goal) -> LazyStream {
        LazyStream(Box::new(Lazy::Bind(a, goal)))
    }

    pub fn delay(stream: Stream) -> LazyStream {
        LazyStream(Box::new(Lazy::Delay(Box::new(stream))))
    }

    pub fn thunk(f: Box<dyn FnOnce() -> Stream>) -> LazyStream {
        LazyStream(Box::new(Lazy::Thunk(f)))
    }

    /// Perform one forcing step of the suspension.
    pub fn force(self) -> Stream {
        match *self.0 {
            Lazy::Pause(state, goal) => goal.solve(*state),
            Lazy::MPlus(a, b) => Stream::mplus(a.force(), b),
            Lazy::Bind(a, goal) => Stream::bind(a.force(), goal),
            Lazy::Delay(stream) => *stream,
            Lazy::Thunk(f) => f(),
        }
    }
}

#[derive(Debug)]
pub enum Stream {
    Empty,
    Unit(Box<State>),
    Cons(Box<State>, LazyStream),
    Lazy(LazyStream),
}

impl Stream {
    pub fn empty() -> Stream {
        Stream::Empty
    }

    pub fn unit(state: Box<State>) -> Stream {
        Stream::Unit(state)
    }

    pub fn cons(state: Box<State>, lazy: LazyStream) -> Stream {
        Stream::Cons(state, lazy)
    }

    pub fn lazy(lazy: LazyStream) -> Stream {
        Stream::Lazy(lazy)
    }

    /// Suspended application of `goal` to `state`.
    pub fn pause(state: Box<State>, goal: Goal) -> Stream {
        Stream::Lazy(LazyStream::pause(state, goal))
    }

    /// Suspend an arbitrary stream computation.
    pub fn suspend<F>(f: F) -> Stream
    where
        F: FnOnce() -> Stream + 'static,
    {
        Stream::Lazy(LazyStream::thunk(Box::new(f)))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Stream::Empty => true,
            _ => false,
        }
    }

    pub fn is_mature(&self) -> bool {
        match self {
            Stream::Lazy(_) => false,
            _ => true,
        }
    }

    pub fn head(&self) -> Option<&State> {
        match self {
            Stream::Unit(a) | Stream::Cons(a, _) => Some(a),
            _ => None,
        }
    }

    /// Interleaving union of two streams; the disjunction of their answers.
    pub fn merge(a: Stream, b: Stream) -> Stream {
        match a {
            Stream::Empty => b,
            a => Stream::mplus(a, LazyStream::delay(b)),
        }
    }

    /// Union of a stream with a suspended stream.
    ///
    /// A mature head is emitted at once and the remainder keeps its
    /// left-to-right order. When the left side is itself a suspension, the
    /// operands swap, so the next forcing step works on `lazy` before the
    /// left side's continuation is resumed.
    pub fn mplus(stream: Stream, lazy: LazyStream) -> Stream {
        match stream {
            Stream::Empty => Stream::lazy(lazy),
            Stream::Unit(a) => Stream::cons(a, lazy),
            Stream::Cons(head, rest) => Stream::cons(head, LazyStream::mplus(rest, lazy)),
            Stream::Lazy(rest) => Stream::lazy_mplus(lazy, rest),
        }
    }

    /// Apply `goal` to every state of `stream`, merging the resulting
    /// streams; the conjunction of the stream's answers with a follow-on
    /// goal. Suspensions are preserved, never forced eagerly, so bind
    /// inherits the fairness of mplus.
    pub fn bind(stream: Stream, goal: Goal) -> Stream {
        if goal.is_succeed() {
            stream
        } else if goal.is_fail() {
            Stream::empty()
        } else {
            match stream {
                Stream::Empty => Stream::Empty,
                Stream::Unit(a) => Stream::pause(a, goal),
                Stream::Cons(head, rest) => Stream::lazy_mplus(
                    LazyStream::pause(head, goal.clone()),
                    LazyStream::bind(rest, goal),
                ),
                Stream::Lazy(rest) => Stream::Lazy(LazyStream::bind(rest, goal)),
            }
        }
    }

    pub fn lazy_mplus(a: LazyStream, b: LazyStream) -> Stream {
        Stream::Lazy(LazyStream::mplus(a, b))
    }

    pub fn lazy_bind(lazy: LazyStream, goal: Goal) -> Stream {
        if goal.is_succeed() {
            Stream::lazy(lazy)
        } else if goal.is_fail() {
            Stream::empty()
        } else {
            Stream::Lazy(LazyStream::bind(lazy, goal))
        }
    }

    /// Force pending suspensions until the head of the stream is realized,
    /// then return a reference to it, or `None` if the stream ran out.
    ///
    /// The forcing is driven by an explicit loop, not recursion, so an
    /// arbitrarily long chain of suspensions cannot grow the call stack.
    /// On a stream whose head takes infinite work this does not return.
    pub fn realize_head(&mut self) -> Option<&State> {
        loop {
            match std::mem::replace(self, Stream::Empty) {
                Stream::Lazy(lazy) => *self = lazy.force(),
                mature => {
                    *self = mature;
                    return self.head();
                }
            }
        }
    }
}

/// Streams iterate their realized states; the iterator is the `to_seq` view
/// of the stream and may be infinite. Each step trampolines through
/// suspensions exactly like [`Stream::realize_head`].
impl Iterator for Stream {
    type Item = Box<State>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(self, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Unit(state) => return Some(state),
                Stream::Cons(state, lazy) => {
                    *self = Stream::Lazy(lazy);
                    return Some(state);
                }
                Stream::Lazy(lazy) => *self = lazy.force(),
            }
        }
    }
}

impl std::iter::FusedIterator for Stream {}
