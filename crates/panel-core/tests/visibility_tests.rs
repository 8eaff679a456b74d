// Host-side tests for glyph keys, the visibility set and overlay rendering.

mod common;

use common::{Call, FakeOverlay};
use panel_core::*;

#[test]
fn glyph_keys_match_template_ids() {
    assert_eq!(Glyph::Dot(7).key(), "volume7");
    assert_eq!(Glyph::Input(3).key(), "input3");
    assert_eq!("volume11".parse::<Glyph>(), Ok(Glyph::Dot(11)));
    assert_eq!("input6".parse::<Glyph>(), Ok(Glyph::Input(6)));
}

#[test]
fn glyph_constructors_reject_out_of_range_indices() {
    assert_eq!(Glyph::dot(0), None);
    assert_eq!(Glyph::dot(12), None);
    assert_eq!(Glyph::input(0), None);
    assert_eq!(Glyph::input(7), None);
    assert!("volume12".parse::<Glyph>().is_err());
    assert!("input0".parse::<Glyph>().is_err());
    assert_eq!(
        "knob".parse::<Glyph>(),
        Err(PanelError::UnknownGlyph("knob".to_string()))
    );
}

#[test]
fn set_holds_each_glyph_once() {
    let mut set = VisibilitySet::new();
    assert!(set.insert(Glyph::Input(1)));
    assert!(!set.insert(Glyph::Input(1)));
    assert_eq!(set.len(), 1);
    assert!(set.remove(Glyph::Input(1)));
    assert!(!set.remove(Glyph::Input(1)));
    assert!(set.is_empty());
}

#[test]
fn set_reports_highest_dot() {
    let set: VisibilitySet = [Glyph::Dot(2), Glyph::Input(4), Glyph::Dot(5), Glyph::Dot(1)]
        .into_iter()
        .collect();
    assert_eq!(set.highest_dot(), Some(5));
    assert_eq!(VisibilitySet::new().highest_dot(), None);
}

#[test]
fn overlay_show_twice_leaves_one_node() {
    let mut overlay = FakeOverlay::default();
    overlay.show(Glyph::Dot(3)).unwrap();
    overlay.show(Glyph::Dot(3)).unwrap();
    assert_eq!(overlay.count(Glyph::Dot(3)), 1);
}

#[test]
fn render_only_touches_changed_glyphs() {
    let mut renderer = OverlayRenderer::new(FakeOverlay::default());
    let first: VisibilitySet = [Glyph::Input(1), Glyph::Dot(1), Glyph::Dot(2)]
        .into_iter()
        .collect();
    renderer.render(&first);
    assert_eq!(renderer.rendered(), &first);

    let second: VisibilitySet = [Glyph::Input(2), Glyph::Dot(1), Glyph::Dot(2)]
        .into_iter()
        .collect();
    renderer.render(&second);

    let calls = &renderer.overlay().calls;
    assert_eq!(
        &calls[3..],
        &[Call::Hide(Glyph::Input(1)), Call::Show(Glyph::Input(2))]
    );
    assert_eq!(renderer.overlay().keys(), vec!["input2", "volume1", "volume2"]);
}

#[test]
fn render_same_set_twice_is_a_no_op() {
    let mut renderer = OverlayRenderer::new(FakeOverlay::default());
    let set: VisibilitySet = [Glyph::Input(1)].into_iter().collect();
    renderer.render(&set);
    renderer.render(&set);
    assert_eq!(renderer.overlay().calls, vec![Call::Show(Glyph::Input(1))]);
    assert_eq!(renderer.overlay().count(Glyph::Input(1)), 1);
}

#[test]
fn render_empty_set_clears_overlay() {
    let mut renderer = OverlayRenderer::new(FakeOverlay::default());
    let set: VisibilitySet = [Glyph::Input(1), Glyph::Dot(4)].into_iter().collect();
    renderer.render(&set);
    renderer.render(&VisibilitySet::new());
    assert!(renderer.rendered().is_empty());
    assert!(renderer.overlay().nodes.is_empty());
    assert_eq!(renderer.overlay().calls.last(), Some(&Call::Clear));
}

#[test]
fn missing_template_is_skipped_and_retried() {
    let mut renderer =
        OverlayRenderer::new(FakeOverlay::without_templates(&[Glyph::Input(3)]));
    let set: VisibilitySet = [Glyph::Input(3), Glyph::Dot(1)].into_iter().collect();

    renderer.render(&set);
    assert!(!renderer.rendered().contains(Glyph::Input(3)));
    assert!(renderer.rendered().contains(Glyph::Dot(1)));
    assert_eq!(renderer.overlay().keys(), vec!["volume1"]);

    // Still wanted, so the next render asks again.
    renderer.render(&set);
    let shows = renderer
        .overlay()
        .calls
        .iter()
        .filter(|c| **c == Call::Show(Glyph::Input(3)))
        .count();
    assert_eq!(shows, 2);
}
