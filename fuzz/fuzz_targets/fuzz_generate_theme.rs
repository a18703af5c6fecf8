#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shadeset_core::{Role, ThemeOptions, generate_theme};

#[derive(Debug, Arbitrary)]
struct Input {
    primary: String,
    radius: f64,
    variant: Option<String>,
    appearance: Option<String>,
}

fuzz_target!(|input: Input| {
    let options = ThemeOptions {
        primary: input.primary,
        radius: input.radius,
        variant: input.variant,
        appearance: input.appearance,
    };
    let Ok(css) = generate_theme(&options) else {
        return;
    };

    for selector in [":root", ".dark"] {
        for role in Role::ALL {
            assert!(
                css.value_of(selector, role.name()).is_some(),
                "{selector} missing --{}",
                role.name()
            );
        }
        assert!(css.value_of(selector, "radius").is_some(), "{selector} missing --radius");
    }
});
