//! Long mutation sequences
//!
//! This tests:
//! - Id uniqueness across add/move/update/delete chains
//! - Selection never dangling once deletes go through
//! - Order bookkeeping against a plain reference model

use sitebuilder_editor::{
    ComponentKind, Document, EditSession, EditorConfig, Mutation, Outcome,
};
use std::collections::HashSet;

/// Small deterministic generator so runs are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

fn assert_invariants(doc: &Document) {
    let ids = doc.ids();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate ids in {:?}", ids);

    for component in doc.sequence() {
        let names: Vec<_> = component.props().entries().into_iter().map(|(n, _)| n).collect();
        let expected: Vec<_> = component.kind().property_names().collect();
        assert_eq!(names, expected);
    }
}

/// Reference implementation of move over plain strings
fn reference_move(order: &mut Vec<String>, drag: &str, drop: &str) {
    let drag_index = order.iter().position(|id| id == drag);
    let drop_index = order.iter().position(|id| id == drop);
    if let (Some(drag_index), Some(mut drop_index)) = (drag_index, drop_index) {
        if drag_index == drop_index {
            return;
        }
        let item = order.remove(drag_index);
        if drag_index < drop_index {
            drop_index -= 1;
        }
        order.insert(drop_index, item);
    }
}

#[test]
fn test_random_sequences_keep_invariants() {
    for seed in 1..=20u64 {
        let mut rng = Lcg(seed);
        let mut session = EditSession::new(EditorConfig::default());
        let mut reference: Vec<String> =
            session.document().ids().iter().map(|s| s.to_string()).collect();

        for _ in 0..200 {
            let ids: Vec<String> =
                session.document().ids().iter().map(|s| s.to_string()).collect();

            match rng.below(5) {
                0 => {
                    let kind = ComponentKind::ALL[rng.below(ComponentKind::ALL.len())];
                    let (id, outcome) = session.add_kind(kind);
                    assert_eq!(outcome, Outcome::Applied);
                    reference.push(id);
                }
                1 if !ids.is_empty() => {
                    let drag = &ids[rng.below(ids.len())];
                    let drop = &ids[rng.below(ids.len())];
                    session.dispatch(Mutation::Move {
                        drag_id: drag.clone(),
                        drop_id: drop.clone(),
                    });
                    reference_move(&mut reference, drag, drop);
                }
                2 if !ids.is_empty() => {
                    let id = &ids[rng.below(ids.len())];
                    session.update_props(id, [("text", format!("edit {}", rng.next()))]);
                }
                3 if !ids.is_empty() => {
                    let id = ids[rng.below(ids.len())].clone();
                    session.select(Some(&id));
                }
                4 if !ids.is_empty() => {
                    let id = ids[rng.below(ids.len())].clone();
                    session.delete(&id);
                    reference.retain(|r| r != &id);
                }
                _ => {}
            }

            let doc = session.document();
            assert_invariants(doc);
            assert_eq!(doc.ids(), reference);
            if let Some(selected) = doc.selected_id() {
                assert!(doc.contains(selected), "selection {} dangles", selected);
            }
        }
    }
}

#[test]
fn test_delete_everything_then_rebuild() {
    let mut session = EditSession::new(EditorConfig::default());
    let ids: Vec<String> = session.document().ids().iter().map(|s| s.to_string()).collect();

    session.select(Some(&ids[1]));
    for id in &ids {
        session.delete(id);
    }
    assert!(session.document().is_empty());
    assert!(session.document().selected_id().is_none());

    let (first, _) = session.add_kind(ComponentKind::Image);
    let (second, _) = session.add_kind(ComponentKind::Heading);

    assert_eq!(session.document().ids(), vec![first.as_str(), second.as_str()]);
    assert!(!ids.contains(&first));
    assert!(!ids.contains(&second));
}

#[test]
fn test_move_chain_restores_order() {
    let mut session = EditSession::new(EditorConfig::default());
    let ids: Vec<String> = session.document().ids().iter().map(|s| s.to_string()).collect();
    let (a, b, c) = (&ids[0], &ids[1], &ids[2]);

    // [a, b, c] -> [c, a, b]
    session.dispatch(Mutation::Move {
        drag_id: c.clone(),
        drop_id: a.clone(),
    });
    assert_eq!(session.document().ids(), vec![c.as_str(), a.as_str(), b.as_str()]);

    // [c, a, b] -> [a, b, c]: moving c forward onto b puts it before b's
    // original slot, so a second hop is needed
    session.dispatch(Mutation::Move {
        drag_id: c.clone(),
        drop_id: b.clone(),
    });
    assert_eq!(session.document().ids(), vec![a.as_str(), c.as_str(), b.as_str()]);

    session.dispatch(Mutation::Move {
        drag_id: b.clone(),
        drop_id: c.clone(),
    });
    assert_eq!(session.document().ids(), vec![a.as_str(), b.as_str(), c.as_str()]);
}
