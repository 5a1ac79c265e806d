//! Integration tests for card presses, navigation and the detail view.

use crate::helpers::items;
use showcase::carousel::{
    parse_card_index, Coverflow, CarouselGeometry, InteractionResolver, NonCenterClick, Tier, Transition,
};
use showcase::error::CarouselError;
use showcase::settings::Settings;

fn mouse_coverflow(n: usize, policy: NonCenterClick) -> Coverflow {
    Coverflow::new(items(n), CarouselGeometry::default(), InteractionResolver::new(false, policy)).unwrap()
}

fn touch_coverflow(n: usize) -> Coverflow {
    Coverflow::new(
        items(n),
        CarouselGeometry::default(),
        InteractionResolver::new(true, NonCenterClick::Ignore),
    )
    .unwrap()
}

#[test]
fn test_click_center_opens_detail() {
    let mut coverflow = mouse_coverflow(5, NonCenterClick::Ignore);
    let outcome = coverflow.click(Some(0)).unwrap();

    assert!(outcome.consumed);
    assert!(outcome.navigation.is_none());
    let detail = outcome.detail.unwrap();
    assert_eq!(detail.title, "Item 0");
    assert_eq!(detail.cta_href, "contact.html");
    assert!(coverflow.detail().is_open());
}

#[test]
fn test_click_side_card_ignored_by_default() {
    let mut coverflow = mouse_coverflow(5, NonCenterClick::Ignore);
    let outcome = coverflow.click(Some(1)).unwrap();

    assert!(!outcome.consumed);
    assert!(outcome.detail.is_none());
    assert!(!coverflow.detail().is_open());
    assert_eq!(coverflow.carousel().cursor(), 0);
}

#[test]
fn test_click_side_card_navigates_then_selects() {
    let mut coverflow = mouse_coverflow(5, NonCenterClick::NavigateThenSelect);
    let outcome = coverflow.click(Some(3)).unwrap();

    let navigation = outcome.navigation.unwrap();
    assert_eq!(navigation.cursor, 3);
    assert_eq!(navigation.params[3].tier, Tier::Center);
    assert!(matches!(navigation.transition, Transition::Ease { duration_ms: 500 }));
    assert_eq!(outcome.detail.unwrap().title, "Item 3");
}

#[test]
fn test_click_off_card_does_nothing() {
    let mut coverflow = mouse_coverflow(5, NonCenterClick::NavigateThenSelect);
    let outcome = coverflow.click(None).unwrap();
    assert!(!outcome.consumed);
    assert!(!coverflow.detail().is_open());
}

#[test]
fn test_click_out_of_range_card_fails() {
    let mut coverflow = mouse_coverflow(3, NonCenterClick::NavigateThenSelect);
    let err = coverflow.click(Some(7)).unwrap_err();
    assert_eq!(err, CarouselError::InvalidIndex { index: 7, len: 3 });
    assert_eq!(coverflow.carousel().cursor(), 0);
}

#[test]
fn test_touch_host_ignores_clicks() {
    let mut coverflow = touch_coverflow(5);
    let outcome = coverflow.click(Some(0)).unwrap();
    assert!(!outcome.consumed);
    assert!(!coverflow.detail().is_open());
}

#[test]
fn test_quick_tap_opens_detail() {
    let mut coverflow = touch_coverflow(5);
    coverflow.touch_start(1000.0);
    let outcome = coverflow.touch_end(1120.0, Some(0)).unwrap();
    assert!(outcome.consumed);
    assert!(coverflow.detail().is_open());
}

#[test]
fn test_long_press_is_not_a_tap() {
    let mut coverflow = touch_coverflow(5);
    coverflow.touch_start(1000.0);
    let outcome = coverflow.touch_end(1200.0, Some(0)).unwrap();
    assert!(!outcome.consumed);
    assert!(!coverflow.detail().is_open());
}

#[test]
fn test_arrows_then_tap_selects_new_center() {
    let mut coverflow = touch_coverflow(4);
    coverflow.prev();
    coverflow.prev();
    assert_eq!(coverflow.carousel().cursor(), 2);

    coverflow.touch_start(0.0);
    let outcome = coverflow.touch_end(50.0, Some(2)).unwrap();
    assert_eq!(outcome.detail.unwrap().title, "Item 2");
}

#[test]
fn test_backdrop_press_closes_detail() {
    let mut coverflow = mouse_coverflow(3, NonCenterClick::Ignore);
    coverflow.click(Some(0)).unwrap();

    let detail = coverflow.detail_mut();
    detail.backdrop_mouse_down();
    assert!(detail.backdrop_mouse_up());
    assert!(!detail.is_open());
}

#[test]
fn test_drag_from_content_keeps_detail_open() {
    let mut coverflow = mouse_coverflow(3, NonCenterClick::Ignore);
    coverflow.click(Some(0)).unwrap();

    let detail = coverflow.detail_mut();
    detail.content_mouse_down();
    assert!(!detail.backdrop_mouse_up());
    assert!(detail.is_open());

    assert!(detail.dismiss());
    assert!(!detail.is_open());
}

#[test]
fn test_card_index_attribute_feeds_click() {
    let mut coverflow = mouse_coverflow(4, NonCenterClick::NavigateThenSelect);
    let index = parse_card_index("2", coverflow.carousel().len()).unwrap();
    let outcome = coverflow.click(Some(index)).unwrap();
    assert_eq!(outcome.detail.unwrap().title, "Item 2");

    assert!(matches!(
        parse_card_index("two", 4),
        Err(CarouselError::UnparsableIndex(_))
    ));
    assert!(matches!(
        parse_card_index("-1", 4),
        Err(CarouselError::InvalidIndex { index: -1, len: 4 })
    ));
}

#[test]
fn test_from_settings_uses_interaction_section() {
    let mut settings = Settings::default();
    settings.interaction.non_center_click = NonCenterClick::NavigateThenSelect;
    settings.carousel.adjacent_offset_px = 120.0;

    let mut coverflow = Coverflow::from_settings(items(5), &settings, false).unwrap();
    assert_eq!(coverflow.carousel().render_params()[1].translate_x, 120.0);

    let outcome = coverflow.click(Some(4)).unwrap();
    assert_eq!(outcome.navigation.unwrap().cursor, 4);
}

#[test]
fn test_from_settings_rejects_empty_catalog() {
    let err = Coverflow::from_settings(Vec::new(), &Settings::default(), true).unwrap_err();
    assert_eq!(err, CarouselError::EmptyCatalog);
}
