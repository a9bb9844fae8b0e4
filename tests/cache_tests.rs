use flo_gradient::*;

fn red_to_blue(size: GradientSize) -> GradientDefinition {
    GradientDefinition::between(
        Color::Rgba(1.0, 0.0, 0.0, 1.0),
        Color::Rgba(0.0, 0.0, 1.0, 1.0),
        size,
        GradientDirection::LeftToRight)
}

#[test]
fn equal_definitions_share_one_entry() {
    let cache           = GradientCache::new(8);

    let definition_1    = red_to_blue(GradientSize(32.0, 16.0));
    let definition_2    = red_to_blue(GradientSize(32.0, 16.0));

    let first   = cache.get_or_render(&definition_1, &definition_1.effective_colors(false)).unwrap();
    let second  = cache.get_or_render(&definition_2, &definition_2.effective_colors(false)).unwrap();

    assert!(cache.len() == 1, "{} entries", cache.len());
    assert!(first == second);
}

#[test]
fn not_ready_definitions_store_nothing() {
    let cache       = GradientCache::new(8);
    let definition  = red_to_blue(GradientSize(0.0, 0.0));

    assert!(cache.get_or_render(&definition, &definition.effective_colors(false)) == None);
    assert!(cache.is_empty());
}

#[test]
fn capacity_evicts_the_least_recently_used_entry() {
    let cache   = GradientCache::new(2);

    let small   = red_to_blue(GradientSize(10.0, 10.0));
    let medium  = red_to_blue(GradientSize(20.0, 10.0));
    let large   = red_to_blue(GradientSize(30.0, 10.0));

    cache.get_or_render(&small, &small.effective_colors(false)).unwrap();
    cache.get_or_render(&medium, &medium.effective_colors(false)).unwrap();
    cache.get_or_render(&large, &large.effective_colors(false)).unwrap();

    assert!(cache.len() == 2, "{} entries", cache.len());

    let small_fingerprint = small.fingerprint(&small.effective_colors(false), None);
    let large_fingerprint = large.fingerprint(&large.effective_colors(false), None);
    assert!(!cache.contains(&small_fingerprint));
    assert!(cache.contains(&large_fingerprint));

    // The evicted gradient recomputes correctly on the next request
    let recomputed = cache.get_or_render(&small, &small.effective_colors(false)).unwrap();
    assert!(recomputed.frame().width() == 10 && recomputed.frame().height() == 10);
    assert!(cache.len() == 2);
    assert!(cache.contains(&small_fingerprint));
}

#[test]
fn resizing_back_to_a_cached_size_is_a_hit() {
    let cache           = GradientCache::new(8);
    let mut definition  = red_to_blue(GradientSize(32.0, 16.0));

    cache.get_or_render(&definition, &definition.effective_colors(false)).unwrap();
    definition.set_size(GradientSize(64.0, 16.0));
    cache.get_or_render(&definition, &definition.effective_colors(false)).unwrap();
    assert!(cache.len() == 2);

    definition.set_size(GradientSize(32.0, 16.0));
    cache.get_or_render(&definition, &definition.effective_colors(false)).unwrap();
    assert!(cache.len() == 2, "{} entries", cache.len());
}

#[test]
fn dimmed_and_undimmed_are_separate_entries() {
    let cache       = GradientCache::new(8);
    let definition  = red_to_blue(GradientSize(32.0, 16.0));

    let base    = cache.get_or_render(&definition, &definition.effective_colors(false)).unwrap();
    let dimmed  = cache.get_or_render(&definition, &definition.effective_colors(true)).unwrap();

    assert!(cache.len() == 2, "{} entries", cache.len());
    assert!(base.fingerprint() != dimmed.fingerprint());
    assert!(base.frame() != dimmed.frame());
}

#[test]
fn border_and_fill_are_separate_entries() {
    let cache       = GradientCache::new(8);
    let definition  = red_to_blue(GradientSize(32.0, 16.0));
    let border      = BorderPaint { edge_colors: None, stroke_width: 2.0 };
    let effective   = definition.effective_colors(false);

    cache.get_or_render(&definition, &effective).unwrap();
    cache.get_or_render_border(&definition, &border, &effective).unwrap();

    assert!(cache.len() == 2, "{} entries", cache.len());
}
