//! Message reporting for the front end.
//!
//! Every stage reports user-facing problems through a [`MessageQueue`]:
//! a message kind, a source position, and the kind's arguments. The queue
//! formats the text once and keeps messages in source order.
//!
//! Internal compiler errors never go through the queue. They abort.

mod message;
pub mod queue;

pub use message::{Message, MessageKind};
pub use queue::MessageQueue;
