//! Message queue for collecting and ordering reported problems.

use onyx_ir::Span;

use crate::{Message, MessageKind};

/// Collects messages for one compilation unit.
///
/// # Example
///
/// ```text
/// let mut queue = MessageQueue::new();
/// queue.add(MessageKind::UnknownSymbol, span, &["foo"]);
/// if queue.has_errors() {
///     eprint!("{}", queue.render());
/// }
/// ```
#[derive(Clone, Default, Debug)]
pub struct MessageQueue {
    messages: Vec<Message>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a problem of `kind` at `span`.
    pub fn add(&mut self, kind: MessageKind, span: Span, args: &[&str]) {
        debug_assert!(
            args.len() == kind.arity(),
            "{kind:?} takes {} arguments, got {}",
            kind.arity(),
            args.len()
        );

        let text = kind.format(args);
        tracing::debug!(?kind, %span, %text, "message reported");

        // Keep the queue sorted by position. New messages go after any
        // existing ones at the same position.
        let at = self
            .messages
            .partition_point(|existing| existing.span.start <= span.start);
        self.messages.insert(at, Message { kind, span, text });
    }

    /// Every message reported so far is an error.
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Render all messages, one per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            out.push_str(&message.to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests;
