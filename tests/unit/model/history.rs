use super::*;
use crate::foundation::color::Color;
use crate::model::frame::ShapeType;

fn cfg(width: f64) -> FrameConfig {
    FrameConfig::new("p", ShapeType::Solid, "P", Color::BLACK, None, width)
}

#[test]
fn n_pushes_then_n_undos_restore_initial() {
    let mut h = FrameHistory::new(cfg(5.0));
    for w in 6..=12 {
        h.push(cfg(f64::from(w)));
    }
    for _ in 0..7 {
        assert!(h.undo());
    }
    assert_eq!(h.current(), &cfg(5.0));
    assert!(!h.undo());
    assert!(!h.can_undo());
}

#[test]
fn undo_then_redo_returns_to_pre_undo_entry() {
    let mut h = FrameHistory::new(cfg(5.0));
    for w in [10.0, 20.0, 30.0, 40.0] {
        h.push(cfg(w));
    }
    let before = h.current().clone();
    for _ in 0..3 {
        h.undo();
    }
    for _ in 0..3 {
        assert!(h.redo());
    }
    assert_eq!(h.current(), &before);
    assert!(!h.can_redo());
}

#[test]
fn push_after_undo_discards_redo_tail() {
    let mut h = FrameHistory::new(cfg(5.0));
    h.push(cfg(10.0));
    h.push(cfg(20.0));
    h.undo();
    h.undo();
    h.push(cfg(33.0));
    assert!(!h.can_redo());
    assert_eq!(h.len(), 2);
    assert_eq!(h.current().width, 33.0);
    assert!(!h.is_empty());
}
