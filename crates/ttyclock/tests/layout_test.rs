use pretty_assertions::assert_eq;
use ttyclock::layout::{
    frame_width, Layout, CAPTION_HEIGHT, FRAME_HEIGHT, NORM_FRAME_WIDTH, SEC_FRAME_WIDTH,
};

#[test]
fn centers_on_standard_terminal() {
    let l = Layout::centered(SEC_FRAME_WIDTH, 8, 24, 80);
    assert_eq!((l.frame.row, l.frame.col), (8, 13));
    assert_eq!((l.frame.height, l.frame.width), (FRAME_HEIGHT, 54));
}

#[test]
fn caption_hangs_under_frame() {
    let l = Layout::centered(SEC_FRAME_WIDTH, 10, 24, 80);
    assert_eq!(l.caption.width, 12);
    assert_eq!(l.caption.height, CAPTION_HEIGHT);
    assert_eq!(l.caption.row, l.frame.row + i32::from(FRAME_HEIGHT) - 1);
    assert_eq!(l.caption.col, 13 + 27 - 6);
}

#[test]
fn odd_caption_width_uses_floor_division() {
    let l = Layout::centered(NORM_FRAME_WIDTH, 9, 24, 80);
    assert_eq!(l.frame.col, 40 - 17);
    assert_eq!(l.caption.col, 23 + 17 - 5);
}

#[test]
fn scale_factors_default_to_one() {
    let l = Layout::centered(SEC_FRAME_WIDTH, 8, 24, 80);
    assert_eq!((l.frame.a, l.frame.b), (1, 1));
    assert_eq!((l.caption.a, l.caption.b), (1, 1));
}

#[test]
fn tiny_terminal_gives_negative_origin() {
    let l = Layout::centered(SEC_FRAME_WIDTH, 8, 4, 20);
    assert!(l.frame.row < 0);
    assert!(l.frame.col < 0);
}

#[test]
fn frame_width_follows_seconds() {
    assert_eq!(frame_width(true), 54);
    assert_eq!(frame_width(false), 35);
}

#[test]
fn shift_pulls_frame_inside_terminal() {
    let narrow = Layout::at(5, 40, NORM_FRAME_WIDTH, 8);
    let wide = narrow.shift_for_width(SEC_FRAME_WIDTH, 8, 80);
    assert_eq!(wide.frame.col, 80 - 54 - 1);
    assert_eq!(wide.frame.row, 5);
    assert_eq!(wide.frame.width, SEC_FRAME_WIDTH);
}

#[test]
fn shift_leaves_fitting_frame_alone() {
    let narrow = Layout::at(5, 10, NORM_FRAME_WIDTH, 8);
    let wide = narrow.shift_for_width(SEC_FRAME_WIDTH, 8, 80);
    assert_eq!(wide.frame.col, 10);
}
