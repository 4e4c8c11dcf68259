use cutout_spec::geom::rect;
use cutout_spec::{CutoutSpecification, DisplayConfig, Insets, Parser};

fn portrait(spec: &str) -> CutoutSpecification {
    Parser::new(DisplayConfig::new(1.0, 1000, 2000))
        .unwrap()
        .parse(spec)
}

fn landscape(spec: &str) -> CutoutSpecification {
    Parser::new(DisplayConfig::new(1.0, 2000, 1000))
        .unwrap()
        .parse(spec)
}

#[test]
fn bind_left_after_flush_fills_left_slot() {
    let spec = portrait("@cutout@bind_left_cutout@leftM0,900H10V1100H0Z");
    assert_eq!(spec.left_bound(), Some(rect(0, 900, 10, 1100)));
    assert_eq!(spec.top_bound(), None);
    assert_eq!(spec.safe_insets(), Insets::new(10, 0, 0, 0));
}

#[test]
fn bind_before_flush_is_reset_by_it() {
    let spec = portrait("@bind_left_cutout@cutoutM0,0H10V10Z");
    assert_eq!(spec.left_bound(), None);
    assert_eq!(spec.top_bound(), Some(rect(500, 0, 510, 10)));
}

#[test]
fn bind_right_fills_right_slot() {
    let spec = portrait("@bind_right_cutout@rightM0,900H-10V1100H0Z");
    assert_eq!(spec.right_bound(), Some(rect(990, 900, 1000, 1100)));
    assert_eq!(spec.safe_insets(), Insets::new(0, 0, 10, 0));
}

#[test]
fn left_bound_fragment_touching_top_insets_top() {
    let spec = portrait("@bind_left_cutout@leftM0,0H10V40H0Z");
    assert_eq!(spec.left_bound(), Some(rect(0, 0, 10, 40)));
    assert_eq!(spec.safe_insets(), Insets::new(0, 40, 0, 0));
}

#[test]
fn right_bound_fragment_touching_bottom_insets_bottom() {
    let spec = portrait("@bottom@right@bind_right_cutoutM0,0H-10V-40H0Z");
    assert_eq!(spec.right_bound(), Some(rect(990, 1960, 1000, 2000)));
    assert_eq!(spec.bottom_bound(), None);
    assert_eq!(spec.safe_insets(), Insets::new(0, 0, 0, 40));
}

#[test]
fn first_horizontal_anchor_wins() {
    let spec = portrait("@right@leftM0,0H-10V10H0Z");
    assert_eq!(spec.top_bound(), Some(rect(990, 0, 1000, 10)));
    assert_eq!(spec.safe_insets(), Insets::new(0, 10, 0, 0));
}

#[test]
fn landscape_fragment_touching_left_short_edge_insets_left() {
    let spec = landscape("@leftM0,0H10V10H0Z");
    assert_eq!(spec.top_bound(), Some(rect(0, 0, 10, 10)));
    assert_eq!(spec.safe_insets(), Insets::new(10, 0, 0, 0));
}

#[test]
fn landscape_fragment_spanning_both_short_edges_insets_top() {
    let spec = landscape("@leftM0,0H2000V10H0Z");
    assert_eq!(spec.top_bound(), Some(rect(0, 0, 2000, 10)));
    assert_eq!(spec.safe_insets(), Insets::new(0, 10, 0, 0));
}

#[test]
fn landscape_fragment_away_from_short_edges_follows_binding() {
    let spec = landscape("M-5,0H5V10H-5Z");
    assert_eq!(spec.top_bound(), Some(rect(995, 0, 1005, 10)));
    assert_eq!(spec.safe_insets(), Insets::new(0, 10, 0, 0));

    let spec = landscape("@bottomM-5,0H5V-10H-5Z");
    assert_eq!(spec.bottom_bound(), Some(rect(995, 990, 1005, 1000)));
    assert_eq!(spec.safe_insets(), Insets::new(0, 0, 0, 10));
}

#[test]
fn landscape_right_binding_is_a_short_edge() {
    let spec = landscape("@right@bind_right_cutoutM0,400H-30V600H0Z");
    assert_eq!(spec.right_bound(), Some(rect(1970, 400, 2000, 600)));
    assert_eq!(spec.safe_insets(), Insets::new(0, 0, 30, 0));
}

#[test]
fn filled_bind_slot_does_not_fall_back_to_top() {
    let spec = portrait(
        "@bind_left_cutout@leftM0,900H10V1100H0Z@cutout@bind_left_cutout@leftM0,500H20V600H0Z",
    );
    assert_eq!(spec.left_bound(), Some(rect(0, 900, 10, 1100)));
    assert_eq!(spec.top_bound(), None);
    assert_eq!(spec.safe_insets(), Insets::new(20, 0, 0, 0));
    assert_eq!(spec.path().map(|p| p.verbs().len()), Some(5));
}
