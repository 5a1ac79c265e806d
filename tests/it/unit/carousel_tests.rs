//! Unit tests for the circular carousel.

use crate::helpers::{carousel, items, tiers};
use showcase::carousel::{circular_distance, compute_slot, CircularCarousel, Side, Tier};
use showcase::error::CarouselError;
use showcase::types::Item;

#[test]
fn test_create_starts_at_first_item() {
    let carousel = carousel(3);
    assert_eq!(carousel.cursor(), 0);
    assert_eq!(carousel.len(), 3);
}

#[test]
fn test_create_empty_fails() {
    let err = CircularCarousel::new(Vec::new()).unwrap_err();
    assert_eq!(err, CarouselError::EmptyCatalog);
}

#[test]
fn test_tiers_for_eleven_items() {
    let carousel = carousel(11);
    let tiers = tiers(&carousel);

    assert_eq!(tiers[0], Tier::Center);
    assert_eq!(tiers[1], Tier::Adjacent);
    assert_eq!(tiers[10], Tier::Adjacent);
    for (i, tier) in tiers.iter().enumerate().take(10).skip(2) {
        assert_eq!(*tier, Tier::Far, "item {i} should be far");
    }
}

#[test]
fn test_exactly_one_center_after_any_navigation() {
    let mut carousel = carousel(7);
    for _ in 0..20 {
        let update = carousel.advance();
        let centers = update.params.iter().filter(|p| p.tier == Tier::Center).count();
        assert_eq!(centers, 1);
        assert_eq!(update.params[update.cursor].tier, Tier::Center);
    }
}

#[test]
fn test_advance_then_retreat_round_trips() {
    for start in 0..6 {
        let mut carousel = carousel(6);
        carousel.jump_to(start).unwrap();
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.cursor(), start);
    }
}

#[test]
fn test_wrap_around_five_items() {
    let mut carousel = carousel(5);
    carousel.jump_to(4).unwrap();
    assert_eq!(carousel.advance().cursor, 0);

    let mut carousel = crate::helpers::carousel(5);
    assert_eq!(carousel.retreat().cursor, 4);
}

#[test]
fn test_select_current_follows_cursor() {
    let a = Item::new("A", "a", "a.png");
    let b = Item::new("B", "b", "b.png");
    let c = Item::new("C", "c", "c.png");
    let mut carousel = CircularCarousel::new(vec![a.clone(), b.clone(), c]).unwrap();

    assert_eq!(carousel.select_current(), &a);
    carousel.advance();
    assert_eq!(carousel.select_current(), &b);
}

#[test]
fn test_jump_to_out_of_range_is_rejected() {
    let mut carousel = carousel(5);
    carousel.jump_to(2).unwrap();
    let before = carousel.render_params();

    let err = carousel.jump_to(99).unwrap_err();
    assert_eq!(err, CarouselError::InvalidIndex { index: 99, len: 5 });
    assert_eq!(carousel.cursor(), 2);
    assert_eq!(carousel.render_params(), before);
}

#[test]
fn test_jump_to_current_is_idempotent() {
    let mut carousel = carousel(5);
    carousel.jump_to(3).unwrap();
    let before = carousel.render_params();

    assert!(carousel.jump_to(3).unwrap().is_none());
    assert_eq!(carousel.cursor(), 3);
    assert_eq!(carousel.render_params(), before);
}

#[test]
fn test_jump_returns_layout() {
    let mut carousel = carousel(5);
    let update = carousel.jump_to(2).unwrap().expect("cursor moved");
    assert_eq!(update.cursor, 2);
    assert_eq!(update.params.len(), 5);
    assert_eq!(update.params[2].tier, Tier::Center);
    assert_eq!(update.params[1].side, Some(Side::Left));
    assert_eq!(update.params[3].side, Some(Side::Right));
}

#[test]
fn test_circular_distance_examples() {
    assert_eq!(circular_distance(0, 10, 11), 1);
    assert_eq!(circular_distance(2, 9, 11), 4);
    assert_eq!(circular_distance(0, 5, 10), 5);
}

#[test]
fn test_adjacent_params() {
    let params = compute_slot(1, 0, 11);
    assert_eq!(params.tier, Tier::Adjacent);
    assert_eq!(params.scale, 0.7);
    assert_eq!(params.opacity, 0.5);
    assert_eq!(params.blur_px, 2.0);
    assert_eq!(params.z_index, 5);
}

#[test]
fn test_far_params_hidden_and_behind() {
    let params = compute_slot(5, 0, 11);
    assert_eq!(params.tier, Tier::Far);
    assert_eq!(params.opacity, 0.0);
    assert_eq!(params.scale, 0.5);
    assert_eq!(params.z_index, 1);
    assert_eq!(params.translate_x, 375.0);
}

#[test]
fn test_items_are_not_mutated_by_navigation() {
    let catalog = items(4);
    let mut carousel = CircularCarousel::new(catalog.clone()).unwrap();
    carousel.advance();
    carousel.jump_to(3).unwrap();
    carousel.retreat();
    assert_eq!(carousel.items(), catalog.as_slice());
}
