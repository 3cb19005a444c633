//! Matcher trees.
//!
//! A [`Matcher`] is a chain of [`Node`]s ending in [`Matcher::Empty`]. Each
//! node owns its continuation (`next`), so the chain is acyclic and finite by
//! construction. Alternatives of an [`NodeKind::Alternation`] are complete
//! chains of their own, which lets every branch carry its own tail.
//!
//! Evaluation is a recursive backtracking search with early return on the
//! first success. Nothing is memoised: nested unbounded wildcards can take
//! exponential time and recurse deeply, so callers that need bounded search
//! time must enforce it around the call.

mod equality;
mod evaluate;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::continuation::Continuation;
use crate::error::BuildError;
use crate::outcome::MatchOutcome;

/// Search order for variable-length wildcards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Repetition {
    /// Shortest candidate first.
    #[default]
    Lazy,
    /// Longest candidate first.
    Greedy,
}

/// The behaviour of a single node in a matcher chain.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[non_exhaustive]
pub enum NodeKind {
    /// Matches the exact text.
    Literal(String),
    /// Matches any run of characters, including the empty run.
    Wildcard(Repetition),
    /// Matches the first alternative, in declaration order, that lets the
    /// rest of the pattern succeed.
    Alternation(Vec<Matcher>),
    /// Matches a run of at least one character.
    OneOrMore,
    /// Matches one character from the set.
    CharSet(BTreeSet<char>),
    /// Matches one character whose code point lies in `low..=high`.
    CharRange {
        /// Inclusive lower bound.
        low: char,
        /// Inclusive upper bound.
        high: char,
    },
    /// Matches one character that is not in the set.
    NegatedCharSet(BTreeSet<char>),
    /// Succeeds without consuming input when the inner matcher cannot match
    /// at the current position.
    NegativeAssertion(Matcher),
}

/// One node of a matcher chain and the chain that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    kind: NodeKind,
    next: Matcher,
}

impl Node {
    /// Returns the node's behaviour.
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the chain that must match after this node.
    #[must_use]
    pub const fn next(&self) -> &Matcher {
        &self.next
    }
}

/// A chain of matching behaviours.
///
/// Matchers are immutable once built and may be shared across threads and
/// reused for any number of match attempts.
///
/// # Example
///
/// ```
/// use motif_core::Matcher;
///
/// let matcher = Matcher::alternation([Matcher::literal("a"), Matcher::literal("b")])?
///     .then(Matcher::literal("c"));
/// assert!(matcher.is_full_match("ac"));
/// assert!(matcher.is_full_match("bc"));
/// assert!(!matcher.is_full_match("abc"));
/// # Ok::<(), motif_core::BuildError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Matcher {
    /// The terminal matcher: succeeds at any position without capturing.
    #[default]
    Empty,
    /// A node followed by the rest of the chain.
    Node(Box<Node>),
}

impl Matcher {
    fn single(kind: NodeKind) -> Self {
        Self::Node(Box::new(Node {
            kind,
            next: Self::Empty,
        }))
    }

    /// Creates a matcher for the exact text `pattern`.
    #[must_use]
    pub fn literal(pattern: impl Into<String>) -> Self {
        Self::single(NodeKind::Literal(pattern.into()))
    }

    /// Creates a wildcard with the given search order.
    #[must_use]
    pub fn wildcard(repetition: Repetition) -> Self {
        Self::single(NodeKind::Wildcard(repetition))
    }

    /// Creates a lazy wildcard.
    #[must_use]
    pub fn lazy() -> Self {
        Self::wildcard(Repetition::Lazy)
    }

    /// Creates a greedy wildcard.
    #[must_use]
    pub fn greedy() -> Self {
        Self::wildcard(Repetition::Greedy)
    }

    /// Creates a matcher for one or more arbitrary characters.
    #[must_use]
    pub fn one_or_more() -> Self {
        Self::single(NodeKind::OneOrMore)
    }

    /// Creates an alternation over complete sub-chains.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyAlternation`] when `alternatives` is empty.
    pub fn alternation(alternatives: impl IntoIterator<Item = Self>) -> Result<Self, BuildError> {
        let branches: Vec<Self> = alternatives.into_iter().collect();
        if branches.is_empty() {
            return Err(BuildError::EmptyAlternation);
        }
        Ok(Self::single(NodeKind::Alternation(branches)))
    }

    /// Creates a matcher for one character from `members`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyCharSet`] when `members` is empty.
    pub fn char_set(members: impl IntoIterator<Item = char>) -> Result<Self, BuildError> {
        let set: BTreeSet<char> = members.into_iter().collect();
        if set.is_empty() {
            return Err(BuildError::EmptyCharSet);
        }
        Ok(Self::single(NodeKind::CharSet(set)))
    }

    /// Creates a matcher for one character in the inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvertedRange`] when `low > high`.
    pub fn char_range(low: char, high: char) -> Result<Self, BuildError> {
        if low > high {
            return Err(BuildError::InvertedRange { low, high });
        }
        Ok(Self::single(NodeKind::CharRange { low, high }))
    }

    /// Creates a matcher for one character outside `excluded`.
    ///
    /// An empty `excluded` set matches any single character.
    #[must_use]
    pub fn negated_char_set(excluded: impl IntoIterator<Item = char>) -> Self {
        Self::single(NodeKind::NegatedCharSet(excluded.into_iter().collect()))
    }

    /// Creates a zero-width assertion that `inner` does not match here.
    #[must_use]
    pub fn not(inner: Self) -> Self {
        Self::single(NodeKind::NegativeAssertion(inner))
    }

    /// Appends `rest` after the last node of this chain.
    ///
    /// ```
    /// use motif_core::Matcher;
    ///
    /// let chain = Matcher::literal("a").then(Matcher::literal("b"));
    /// assert_eq!(chain.len(), 2);
    /// assert!(chain.is_full_match("ab"));
    /// ```
    #[must_use]
    pub fn then(mut self, rest: Self) -> Self {
        let mut tail = &mut self;
        while let Self::Node(node) = tail {
            tail = &mut node.next;
        }
        *tail = rest;
        self
    }

    /// Chains `parts` in order.
    #[must_use]
    pub fn sequence(parts: impl IntoIterator<Item = Self>) -> Self {
        let items: Vec<Self> = parts.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Self::Empty, |rest, part| part.then(rest))
    }

    /// Returns `true` for the terminal matcher.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the number of nodes in this chain, not counting nested
    /// alternatives or assertions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Iterates over the nodes of this chain in order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::successors(self.head(), |node| node.next.head())
    }

    /// Returns the first node, or `None` for the terminal matcher.
    #[must_use]
    pub fn head(&self) -> Option<&Node> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(node),
        }
    }

    /// Matches from `start`, handing the position reached by this chain to
    /// `continuation`.
    ///
    /// Returns `None` when no split of the input satisfies both this chain
    /// and the continuation. A `start` past the end of `text` or off a
    /// `char` boundary never matches a consuming node.
    #[must_use]
    pub fn try_match(
        &self,
        text: &str,
        start: usize,
        continuation: &Continuation<'_>,
    ) -> Option<MatchOutcome> {
        evaluate::match_chain(self, text, start, continuation)
    }

    /// Returns `true` when the chain consumes the whole of `text`.
    #[must_use]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.first_match(text)
            .is_some_and(|outcome| outcome.reaches_end(text))
    }

    /// Matches a prefix of `text`, returning the outcome whether or not it
    /// reaches the end of the input.
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<MatchOutcome> {
        self.try_match(text, 0, &Continuation::Accept)
    }

    /// Returns the first match starting at any `char` boundary of `text`,
    /// scanning start offsets left to right.
    ///
    /// ```
    /// use motif_core::Matcher;
    ///
    /// let found = Matcher::literal("cd").find("abcde").expect("should find");
    /// assert_eq!(found.start(), 2);
    /// assert_eq!(found.outcome().end(), 4);
    /// ```
    #[must_use]
    pub fn find(&self, text: &str) -> Option<Found> {
        text.char_indices()
            .map(|(index, _)| index)
            .chain(std::iter::once(text.len()))
            .find_map(|start| {
                self.try_match(text, start, &Continuation::Accept)
                    .map(|outcome| Found { start, outcome })
            })
    }
}

// Chains and nested alternatives can be arbitrarily long, so they are
// unlinked onto a work list instead of being dropped recursively.
impl Drop for Matcher {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach(self, &mut pending);
        while let Some(mut matcher) = pending.pop() {
            detach(&mut matcher, &mut pending);
        }
    }
}

/// Moves every matcher owned by `matcher`'s head node onto `pending`.
fn detach(matcher: &mut Matcher, pending: &mut Vec<Matcher>) {
    let Matcher::Node(node) = matcher else {
        return;
    };
    if !node.next.is_empty() {
        pending.push(std::mem::take(&mut node.next));
    }
    match &mut node.kind {
        NodeKind::Alternation(alternatives) => pending.append(alternatives),
        NodeKind::NegativeAssertion(inner) if !inner.is_empty() => {
            pending.push(std::mem::take(inner));
        }
        _ => {}
    }
}

/// A match located by [`Matcher::find`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Found {
    start: usize,
    outcome: MatchOutcome,
}

impl Found {
    /// Returns the byte offset where the match starts.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the outcome of the match.
    #[must_use]
    pub const fn outcome(&self) -> &MatchOutcome {
        &self.outcome
    }

    /// Returns the matched slice of `text`.
    ///
    /// `text` must be the input the match was found in.
    #[must_use]
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.outcome.end()).unwrap_or_default()
    }

    /// Consumes the result, returning the start offset and outcome.
    #[must_use]
    pub fn into_parts(self) -> (usize, MatchOutcome) {
        (self.start, self.outcome)
    }
}
