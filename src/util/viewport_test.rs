use super::*;

fn rect(top: f64, left: f64, bottom: f64, right: f64) -> Rect {
    Rect { top, left, bottom, right }
}

#[test]
fn fully_visible_element_is_inside() {
    assert!(is_in_viewport(rect(10.0, 0.0, 400.0, 1024.0), 1024.0, 768.0, 0.0));
}

#[test]
fn element_below_fold_is_outside() {
    assert!(!is_in_viewport(rect(700.0, 0.0, 900.0, 300.0), 1024.0, 768.0, 0.0));
}

#[test]
fn offset_grows_viewport_on_every_side() {
    let r = rect(-80.0, -20.0, 850.0, 1100.0);
    assert!(!is_in_viewport(r, 1024.0, 768.0, 0.0));
    assert!(is_in_viewport(r, 1024.0, 768.0, 100.0));
}

#[test]
fn taller_than_viewport_never_fits() {
    assert!(!is_in_viewport(rect(0.0, 0.0, 2000.0, 800.0), 1024.0, 768.0, 100.0));
}

#[test]
fn edges_are_inclusive() {
    assert!(is_in_viewport(rect(0.0, 0.0, 768.0, 1024.0), 1024.0, 768.0, 0.0));
}
