//! Level-wise tree construction from a stream of input tokens.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, info, instrument, trace, warn};

use crate::domain::arena::{BinaryTree, Side};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::token::{Token, TokenError, TokenGrammar};
use crate::domain::value::NodeValue;

/// What the builder is currently asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Root,
    Child { parent: NodeValue, side: Side },
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Root => write!(f, "root value"),
            Request::Child { parent, side } => write!(f, "{side} child of {parent}"),
        }
    }
}

/// Progress notifications emitted while building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    RootAdded(NodeValue),
    RootMissing,
    /// About to ask for both children of `parent`.
    Expanding {
        parent: NodeValue,
    },
    Attached {
        parent: NodeValue,
        side: Side,
        value: NodeValue,
    },
    NullChild {
        parent: NodeValue,
        side: Side,
    },
    Rejected {
        request: Request,
        error: TokenError,
    },
    Stopped,
    Finished {
        nodes: usize,
    },
}

/// Supplies raw tokens to the builder.
///
/// `Ok(None)` means the source is exhausted, which the builder treats like the
/// quit sentinel.
pub trait TokenSource {
    fn next_token(&mut self, request: &Request) -> DomainResult<Option<String>>;

    fn feedback(&mut self, _event: &BuildEvent) {}
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self, request: &Request) -> DomainResult<Option<String>> {
        (**self).next_token(request)
    }

    fn feedback(&mut self, event: &BuildEvent) {
        (**self).feedback(event)
    }
}

/// Token source backed by a fixed sequence, e.g. command line arguments.
pub struct ScriptedTokens<I> {
    tokens: I,
    rejected: Vec<(Request, TokenError)>,
}

impl<I, S> ScriptedTokens<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            rejected: Vec::new(),
        }
    }

    /// Tokens that were refused, paired with the request they answered.
    pub fn rejected(&self) -> &[(Request, TokenError)] {
        &self.rejected
    }
}

impl<I, S> TokenSource for ScriptedTokens<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    fn next_token(&mut self, _request: &Request) -> DomainResult<Option<String>> {
        Ok(self.tokens.next().map(|s| s.as_ref().to_string()))
    }

    fn feedback(&mut self, event: &BuildEvent) {
        if let BuildEvent::Rejected { request, error } = event {
            self.rejected.push((*request, error.clone()));
        }
    }
}

/// Builds a tree breadth-first: the root, then both children of every node in
/// the order the nodes were created.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    grammar: TokenGrammar,
}

impl TreeBuilder {
    pub fn new(grammar: TokenGrammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &TokenGrammar {
        &self.grammar
    }

    /// Build a fresh tree. A null or quit answer for the root yields an empty tree.
    #[instrument(level = "debug", skip_all)]
    pub fn build<S: TokenSource + ?Sized>(&self, source: &mut S) -> DomainResult<BinaryTree> {
        let mut tree = BinaryTree::new();

        let root_value = match self.request(source, Request::Root)? {
            Token::Value(value) => value,
            Token::Null | Token::Quit => {
                debug!("root not given, tree stays empty");
                source.feedback(&BuildEvent::RootMissing);
                return Ok(tree);
            }
        };
        let root = tree.set_root(root_value);
        source.feedback(&BuildEvent::RootAdded(root_value));

        let mut queue = VecDeque::from([root]);
        'frontier: while let Some(parent) = queue.pop_front() {
            let parent_value = tree.value(parent).ok_or(DomainError::NodeNotFound)?;
            source.feedback(&BuildEvent::Expanding {
                parent: parent_value,
            });
            for side in [Side::Left, Side::Right] {
                let request = Request::Child {
                    parent: parent_value,
                    side,
                };
                match self.request(source, request)? {
                    Token::Quit => {
                        debug!("quit requested at {request}");
                        source.feedback(&BuildEvent::Stopped);
                        break 'frontier;
                    }
                    Token::Null => {
                        trace!("{request} is null");
                        source.feedback(&BuildEvent::NullChild {
                            parent: parent_value,
                            side,
                        });
                    }
                    Token::Value(value) => {
                        let child = tree.attach(parent, side, value)?;
                        queue.push_back(child);
                        trace!("{request} = {value}");
                        source.feedback(&BuildEvent::Attached {
                            parent: parent_value,
                            side,
                            value,
                        });
                    }
                }
            }
        }

        info!(nodes = tree.len(), "tree built");
        source.feedback(&BuildEvent::Finished { nodes: tree.len() });
        Ok(tree)
    }

    /// Ask until the answer parses. Exhaustion counts as quit.
    fn request<S: TokenSource + ?Sized>(&self, source: &mut S, request: Request) -> DomainResult<Token> {
        loop {
            let Some(raw) = source.next_token(&request)? else {
                debug!("token source exhausted at {request}");
                return Ok(Token::Quit);
            };
            match self.grammar.parse(&raw) {
                Ok(token) => return Ok(token),
                Err(error) => {
                    warn!("rejected token for {request}: {error}");
                    source.feedback(&BuildEvent::Rejected { request, error });
                }
            }
        }
    }
}
