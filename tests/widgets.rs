//! Rendering behaviour of the public widgets through the library API.

use cardkit::ui::style::{ClassList, StyleSheet, CARD};
use cardkit::{Card, Input, InputState, Progress, ProgressProps};
use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, StatefulWidget, Widget};
use rstest::rstest;
use serde_json::json;

fn rows(buf: &Buffer) -> Vec<String> {
    (buf.area.top()..buf.area.bottom())
        .map(|y| {
            (buf.area.left()..buf.area.right())
                .map(|x| buf.get(x, y).symbol())
                .collect()
        })
        .collect()
}

fn filled_cells(buf: &Buffer, y: u16) -> usize {
    (buf.area.left()..buf.area.right())
        .filter(|&x| buf.get(x, y).symbol() == "█")
        .count()
}

#[rstest]
#[case(
    json!({"value": 45, "leftLabel": "Progress", "rightLabel": "Step 1 of 2"}),
    45,
    "Progress",
    "Step 1 of 2"
)]
#[case(json!({"value": -10}), 0, "", "")]
#[case(json!({"value": 150}), 100, "", "")]
#[case(json!({}), 0, "", "")]
#[case(json!({"value": "lots"}), 0, "", "")]
fn progress_examples(
    #[case] props: serde_json::Value,
    #[case] fill: usize,
    #[case] left: &str,
    #[case] right: &str,
) {
    let props: ProgressProps = serde_json::from_value(props).unwrap();
    let progress = props.to_widget();
    assert_eq!(progress.left_text(), left);
    assert_eq!(progress.right_text(), right);

    let mut buf = Buffer::empty(Rect::new(0, 0, 100, 2));
    progress.render(buf.area, &mut buf);
    assert_eq!(filled_cells(&buf, 1), fill);

    let header = &rows(&buf)[0];
    assert!(header.starts_with(left));
    assert!(header.trim_end().ends_with(right));
    assert!(!header.contains("None") && !header.contains("null"));
}

#[test]
fn progress_fill_is_proportional_on_narrow_tracks() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
    Progress::new(45.0).render(buf.area, &mut buf);
    // 4.5 cells round half away from zero
    assert_eq!(filled_cells(&buf, 1), 5);
}

#[test]
fn card_wraps_progress() {
    let card = Card::new(Progress::new(50.0).left_label("Load")).class("compact");
    assert_eq!(card.classes().to_string(), "card compact");

    let mut buf = Buffer::empty(Rect::new(0, 0, 8, 4));
    Widget::render(card, buf.area, &mut buf);
    assert_eq!(rows(&buf), vec!["┌──────┐", "│Load  │", "│███░░░│", "└──────┘"]);
}

#[test]
fn card_uses_shared_stylesheet() {
    let sheet = StyleSheet::empty().rule(CARD, Style::default().bg(Color::Blue));
    let mut buf = Buffer::empty(Rect::new(0, 0, 4, 3));
    Widget::render(
        Card::new(Paragraph::new("")).stylesheet(&sheet),
        buf.area,
        &mut buf,
    );
    assert!(buf.content.iter().all(|cell| cell.bg == Color::Blue));
}

#[test]
fn input_inside_card_reports_handle() {
    let mut state = InputState::new("hi");
    let mut buf = Buffer::empty(Rect::new(0, 0, 12, 3));
    let card = Card::new(Input::new().left_icon(">"));
    StatefulWidget::render(card, buf.area, &mut buf, &mut state);

    assert_eq!(rows(&buf)[1], "│> hi      │");
    let handle = state.handle().expect("handle after render");
    assert_eq!(handle.area, Rect::new(3, 1, 8, 1));
    assert_eq!(handle.cursor, Some((5, 1)));
}

#[test]
fn input_without_icon_starts_at_container_edge() {
    let mut state = InputState::default();
    let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
    Input::new().placeholder("type").render(buf.area, &mut buf, &mut state);
    assert_eq!(rows(&buf), vec!["type  "]);
    assert_eq!(state.handle().map(|h| h.area.x), Some(0));
}

#[test]
fn class_list_order_is_stable() {
    let list = ClassList::new("input").with("a b").with("c");
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["input", "a", "b", "c"]);
}
