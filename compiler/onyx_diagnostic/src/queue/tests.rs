use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_queue_has_no_errors() {
    let queue = MessageQueue::new();
    assert!(!queue.has_errors());
    assert!(queue.is_empty());
    assert_eq!(queue.render(), "");
}

#[test]
fn add_formats_text() {
    let mut queue = MessageQueue::new();
    queue.add(MessageKind::UnknownSymbol, Span::new(3, 6), &["foo"]);

    assert!(queue.has_errors());
    let messages: Vec<_> = queue.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].kind, MessageKind::UnknownSymbol);
    assert_eq!(messages[0].text, "unknown symbol 'foo'");
}

#[test]
fn messages_are_ordered_by_position() {
    let mut queue = MessageQueue::new();
    queue.add(MessageKind::UnknownType, Span::new(40, 44), &["Vec3"]);
    queue.add(MessageKind::UnknownSymbol, Span::new(2, 5), &["x"]);
    queue.add(MessageKind::NotLval, Span::new(20, 21), &["1"]);

    let starts: Vec<u32> = queue.iter().map(|m| m.span.start).collect();
    assert_eq!(starts, vec![2, 20, 40]);
}

#[test]
fn equal_positions_keep_report_order() {
    let mut queue = MessageQueue::new();
    queue.add(MessageKind::UnknownSymbol, Span::new(8, 9), &["a"]);
    queue.add(MessageKind::UnknownSymbol, Span::new(8, 9), &["b"]);

    let texts: Vec<&str> = queue.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["unknown symbol 'a'", "unknown symbol 'b'"]);
}

#[test]
fn render_one_line_per_message() {
    let mut queue = MessageQueue::new();
    queue.add(
        MessageKind::BinopMismatchType,
        Span::new(10, 15),
        &["i32", "f32"],
    );
    queue.add(
        MessageKind::FunctionRedefinition,
        Span::new(0, 4),
        &["main"],
    );

    assert_eq!(
        queue.render(),
        "(0..4) redefinition of function 'main'\n\
         (10..15) mismatched types for binary operator, 'i32', 'f32'\n"
    );
    assert_eq!(queue.len(), 2);
}
