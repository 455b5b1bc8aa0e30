use super::caret_visible;

#[test]
fn caret_shows_during_first_phase() {
    assert!(caret_visible(0.0, 500));
    assert!(caret_visible(0.49, 500));
}

#[test]
fn caret_hides_during_second_phase() {
    assert!(!caret_visible(0.5, 500));
    assert!(!caret_visible(0.99, 500));
    assert!(caret_visible(1.0, 500));
}

#[test]
fn zero_interval_does_not_divide_by_zero() {
    assert!(caret_visible(0.0, 0));
    assert!(!caret_visible(0.0015, 0));
}
