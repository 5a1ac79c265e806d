//! Snapshot tests for carousel layouts and serialized records.

use crate::helpers::carousel;
use insta::{assert_json_snapshot, assert_snapshot};
use showcase::carousel::{CarouselGeometry, CircularCarousel, FarOffsetMode, RenderParams};
use showcase::types::Item;

/// One line per card: index, tier, transform, opacity, filter, z-index.
fn describe(params: &[RenderParams]) -> String {
    params
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{i} {:?} {} {} {} z{}",
                p.tier,
                p.transform_css(),
                p.opacity,
                p.filter_css(),
                p.z_index
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_five_card_layout() {
    let carousel = carousel(5);
    assert_snapshot!(describe(&carousel.render_params()), @r"
    0 Center translateX(0) scale(1) 1 none z10
    1 Adjacent translateX(150px) scale(0.7) 0.5 blur(2px) z5
    2 Far translateX(150px) scale(0.5) 0 none z1
    3 Far translateX(-150px) scale(0.5) 0 none z1
    4 Adjacent translateX(-150px) scale(0.7) 0.5 blur(2px) z5
    ");
}

#[test]
fn test_raw_far_offsets_after_wrap() {
    let geometry = CarouselGeometry {
        far_offset_mode: FarOffsetMode::Raw,
        ..Default::default()
    };
    let mut carousel = CircularCarousel::with_geometry(crate::helpers::items(5), geometry).unwrap();
    carousel.retreat();

    assert_snapshot!(describe(&carousel.render_params()), @r"
    0 Adjacent translateX(150px) scale(0.7) 0.5 blur(2px) z5
    1 Far translateX(-225px) scale(0.5) 0 none z1
    2 Far translateX(-150px) scale(0.5) 0 none z1
    3 Adjacent translateX(-150px) scale(0.7) 0.5 blur(2px) z5
    4 Center translateX(0) scale(1) 1 none z10
    ");
}

#[test]
fn test_transition_css() {
    let mut carousel = carousel(3);
    assert_snapshot!(carousel.initial_layout().transition.css(), @"none");
    assert_snapshot!(
        carousel.advance().transition.css(),
        @"transform 0.5s ease, opacity 0.5s ease, filter 0.5s ease"
    );
}

#[test]
fn test_item_serialization() {
    let item = Item::new("Moss Valley", "Trail maps for hikers", "images/moss.png").with_category("Mobile App");
    assert_json_snapshot!(item, @r#"
    {
      "title": "Moss Valley",
      "category": "Mobile App",
      "summary": "Trail maps for hikers",
      "image_ref": "images/moss.png"
    }
    "#);
}
