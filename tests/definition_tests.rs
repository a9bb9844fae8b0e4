use flo_gradient::*;

#[test]
fn directions_derive_the_documented_points() {
    let size = GradientSize(100.0, 50.0);

    let left_right = GradientDefinition::with_direction(GradientDirection::LeftToRight, size);
    assert!(left_right.start() == GradientPoint(0.0, 25.0), "{:?}", left_right.start());
    assert!(left_right.end() == GradientPoint(100.0, 25.0), "{:?}", left_right.end());

    let top_bottom = GradientDefinition::with_direction(GradientDirection::TopToBottom, size);
    assert!(top_bottom.start() == GradientPoint(50.0, 0.0), "{:?}", top_bottom.start());
    assert!(top_bottom.end() == GradientPoint(50.0, 50.0), "{:?}", top_bottom.end());

    let down_right = GradientDefinition::with_direction(GradientDirection::DiagonalDownRight, size);
    assert!(down_right.start() == GradientPoint(0.0, 0.0) && down_right.end() == GradientPoint(100.0, 50.0));

    let up_right = GradientDefinition::with_direction(GradientDirection::DiagonalUpRight, size);
    assert!(up_right.start() == GradientPoint(0.0, 50.0) && up_right.end() == GradientPoint(100.0, 0.0));
}

#[test]
fn between_builds_a_two_color_gradient() {
    let definition = GradientDefinition::between(
        Color::Rgba(1.0, 0.0, 0.0, 1.0),
        Color::Rgba(0.0, 0.0, 1.0, 1.0),
        GradientSize(100.0, 50.0),
        GradientDirection::LeftToRight);

    assert!(definition.colors().len() == 2);
    assert!(definition.direction() == Some(GradientDirection::LeftToRight));
    assert!(definition.mode() == GradientMode::Linear);
}

#[test]
fn definitions_round_trip_through_serde() {
    let mut definition = GradientDefinition::between(
        Color::Rgba(1.0, 0.0, 0.0, 1.0),
        Color::Hsb(0.6, 1.0, 1.0, 1.0),
        GradientSize(100.0, 50.0),
        GradientDirection::DiagonalUpRight);
    definition.set_locations(Some(vec![0.1, 0.9])).unwrap();
    definition.set_draw_options(GradientDrawOptions { extend_before_start: true, extend_after_end: false });

    let encoded: String             = serde_json::to_string(&definition).unwrap();
    let decoded: GradientDefinition = serde_json::from_str(&encoded).unwrap();

    assert!(decoded == definition);
    assert!(decoded.locations() == Some(&[0.1, 0.9][..]));
    assert!(decoded.direction() == Some(GradientDirection::DiagonalUpRight));

    // The revision counter is bookkeeping and resets on deserialization
    assert!(decoded.revision() == 0);
}

#[test]
fn separately_built_equal_definitions_are_interchangeable() {
    let mut definition_1 = GradientDefinition::new();
    definition_1.set_colors(vec![Color::Rgba(1.0, 0.0, 0.0, 1.0), Color::Rgba(0.0, 0.0, 1.0, 1.0)]).unwrap();
    definition_1.set_size(GradientSize(64.0, 32.0));
    definition_1.set_direction(Some(GradientDirection::TopToBottom));

    let definition_2 = GradientDefinition::between(
        Color::Rgba(1.0, 0.0, 0.0, 1.0),
        Color::Rgba(0.0, 0.0, 1.0, 1.0),
        GradientSize(64.0, 32.0),
        GradientDirection::TopToBottom);

    assert!(definition_1 == definition_2);

    let effective_1 = definition_1.effective_colors(false);
    let effective_2 = definition_2.effective_colors(false);
    assert!(definition_1.fingerprint(&effective_1, None) == definition_2.fingerprint(&effective_2, None));
}

#[test]
fn dimming_red_yields_white() {
    let white = Color::Rgba(1.0, 0.0, 0.0, 1.0).dimmed();

    let (r, g, b, a) = white.to_rgba_components();
    assert!((r-1.0).abs() < 0.001 && (g-1.0).abs() < 0.001 && (b-1.0).abs() < 0.001 && (a-1.0).abs() < 0.001, "{:?}", white);

    // Dimming is idempotent
    assert!(white.dimmed() == white);
}
