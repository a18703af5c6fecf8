#![no_main]

use libfuzzer_sys::fuzz_target;
use shadeset_core::Color;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(color) = Color::parse(input) else {
        return;
    };

    assert!((0.0..=1.0).contains(&color.lightness()), "lightness out of range");
    assert!(color.chroma() >= 0.0 && color.chroma().is_finite(), "bad chroma");
    assert!((0.0..360.0).contains(&color.hue()), "hue not normalized");

    let (hue, saturation, lightness) = color.to_hsl();
    assert!(hue.is_finite() && saturation.is_finite() && lightness.is_finite());
    assert!((-0.5..=100.5).contains(&saturation), "saturation {saturation}");
    assert!((-0.5..=100.5).contains(&lightness), "lightness {lightness}");
});
