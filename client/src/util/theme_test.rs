use super::*;

#[test]
fn site_renders_dark() {
    assert_eq!(SITE_COLOR_MODE, ColorMode::Dark);
    assert_eq!(SITE_COLOR_MODE.attribute(), "dark");
}

#[test]
fn light_attribute() {
    assert_eq!(ColorMode::Light.attribute(), "light");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(ColorMode::Dark);
    apply(ColorMode::Light);
}
