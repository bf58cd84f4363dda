use super::*;

#[test]
fn same_seed_same_field() {
    assert_eq!(generate(20, 7), generate(20, 7));
}

#[test]
fn different_seed_different_field() {
    assert_ne!(generate(20, 7), generate(20, 8));
}

#[test]
fn values_stay_in_range() {
    for star in generate(DEFAULT_STAR_COUNT, DEFAULT_SEED) {
        assert!((0.0..100.0).contains(&star.x));
        assert!((0.0..100.0).contains(&star.y));
        assert!((0.5..2.5).contains(&star.size));
        assert!((0.3..1.0).contains(&star.opacity));
        assert!((0.0..5.0).contains(&star.twinkle_delay));
    }
}

#[test]
fn style_places_star_by_percent() {
    let star = Star { x: 12.5, y: 50.0, size: 1.0, opacity: 0.5, twinkle_delay: 2.0 };
    assert_eq!(
        star.style(),
        "left:12.50%;top:50.00%;width:1.00px;height:1.00px;opacity:0.50;animation-delay:2.00s"
    );
}
