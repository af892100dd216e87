//! Gesture handling: palette drops, reorder drops, highlights and clicks

use sitebuilder_editor::{
    ClickTarget, ComponentKind, DragPayload, DropTarget, EditSession, EditorConfig, NoOpReason,
    Outcome,
};

fn seeded_session() -> (EditSession, Vec<String>) {
    let session = EditSession::new(EditorConfig::default());
    let ids = session
        .document()
        .ids()
        .iter()
        .map(|s| s.to_string())
        .collect();
    (session, ids)
}

#[test]
fn test_palette_drop_appends_default_instance() {
    let (mut session, ids) = seeded_session();

    let outcome = session.drop(
        &DragPayload::PaletteKind(ComponentKind::Image),
        &DropTarget::CanvasBackground,
    );

    assert!(outcome.is_applied());
    let doc = session.document();
    assert_eq!(doc.len(), 4);

    let added = &doc.sequence()[3];
    assert_eq!(added.kind(), ComponentKind::Image);
    assert_eq!(added.prop("src"), Some(""));
    assert!(!ids.iter().any(|id| id == added.id()));
}

#[test]
fn test_each_palette_kind_gets_its_defaults() {
    let mut session = EditSession::new(EditorConfig {
        seed_document: false,
        ..EditorConfig::default()
    });

    for kind in ComponentKind::ALL {
        session.drop(&DragPayload::PaletteKind(kind), &DropTarget::CanvasBackground);
    }

    let doc = session.document();
    let texts: Vec<_> = doc.sequence().iter().map(|c| c.prop("text")).collect();
    assert_eq!(
        texts,
        vec![
            Some("New Heading"),
            Some("New paragraph of text."),
            Some("Click Me"),
            None,
        ]
    );
}

#[test]
fn test_palette_drop_on_instance_does_nothing() {
    let (mut session, ids) = seeded_session();
    let before = session.document().clone();

    let outcome = session.drop(
        &DragPayload::PaletteKind(ComponentKind::Heading),
        &DropTarget::Instance(ids[0].clone()),
    );

    assert_eq!(outcome, Outcome::Unchanged(NoOpReason::InvalidDrop));
    assert_eq!(session.document(), &before);
}

#[test]
fn test_reorder_drop_moves_instance() {
    let (mut session, ids) = seeded_session();

    let outcome = session.drop(
        &DragPayload::Instance(ids[2].clone()),
        &DropTarget::Instance(ids[0].clone()),
    );

    assert!(outcome.is_applied());
    assert_eq!(
        session.document().ids(),
        vec![ids[2].as_str(), ids[0].as_str(), ids[1].as_str()]
    );
}

#[test]
fn test_drop_onto_self_or_outside_is_noop() {
    let (mut session, ids) = seeded_session();
    let before = session.document().clone();
    let payload = DragPayload::Instance(ids[1].clone());

    session.drop(&payload, &DropTarget::Instance(ids[1].clone()));
    session.drop(&payload, &DropTarget::Outside);
    session.drop(&payload, &DropTarget::CanvasBackground);

    assert_eq!(session.document(), &before);
}

#[test]
fn test_drop_highlight_lifecycle() {
    let (mut session, ids) = seeded_session();

    session.drag_enter(&ids[1]);
    assert!(session.drop_indicator().is_highlighted(&ids[1]));

    session.drag_leave(&ids[1]);
    assert_eq!(session.drop_indicator().hovered(), None);

    // Highlight clears on drop even when the drop does nothing
    session.drag_enter(&ids[1]);
    session.drop(
        &DragPayload::Instance(ids[1].clone()),
        &DropTarget::Instance(ids[1].clone()),
    );
    assert_eq!(session.drop_indicator().hovered(), None);
}

#[test]
fn test_highlight_shows_up_in_render() {
    let (mut session, ids) = seeded_session();
    session.drag_enter(&ids[2]);

    let canvas = session.render();
    let flags: Vec<_> = canvas
        .children()
        .iter()
        .map(|frame| frame.attr("data-drop-target"))
        .collect();

    assert_eq!(flags, vec![Some("false"), Some("false"), Some("true")]);
}

#[test]
fn test_instance_click_selects_and_is_not_undone_by_canvas() {
    let (mut session, ids) = seeded_session();

    let outcome = session.click(&ClickTarget::Instance(ids[1].clone()));

    assert!(outcome.is_applied());
    assert_eq!(session.document().selected_id(), Some(ids[1].as_str()));
}

#[test]
fn test_background_click_deselects() {
    let (mut session, ids) = seeded_session();
    session.click(&ClickTarget::Instance(ids[0].clone()));

    session.click(&ClickTarget::CanvasBackground);

    assert!(session.document().selected_id().is_none());
}

#[test]
fn test_split_click_handlers_follow_bubbling_order() {
    let (mut session, ids) = seeded_session();

    session.click_instance(&ids[0]);
    assert_eq!(
        session.click_canvas(),
        Outcome::Unchanged(NoOpReason::ClickHandled)
    );
    session.end_gesture();
    assert_eq!(session.document().selected_id(), Some(ids[0].as_str()));

    assert!(session.click_canvas().is_applied());
    assert!(session.document().selected_id().is_none());
}

#[test]
fn test_swallowed_click_does_not_outlive_its_gesture() {
    let (mut session, ids) = seeded_session();

    session.click_instance(&ids[1]);
    assert_eq!(
        session.click_canvas(),
        Outcome::Unchanged(NoOpReason::ClickHandled)
    );

    // Separate background click, no end_gesture in between
    assert!(session.click_canvas().is_applied());
    assert!(session.document().selected_id().is_none());
}

#[test]
fn test_unbubbled_instance_click_then_background_click_deselects() {
    let (mut session, ids) = seeded_session();

    session.click_instance(&ids[0]);
    session.end_gesture();
    assert_eq!(session.document().selected_id(), Some(ids[0].as_str()));

    assert!(session.click(&ClickTarget::CanvasBackground).is_applied());
    assert!(session.document().selected_id().is_none());
}
