use ab_glyph::PxScale;
use ocr_cipher::font::{FontFitter, MAX_FONT_SIZE};

// ============================================================
// Guards and helpers
// ============================================================

/// Resolve a fitter from the system font database, or skip the test on
/// machines with no installed fonts.
fn system_fitter() -> Option<FontFitter> {
    match FontFitter::from_system() {
        Ok(fitter) => Some(fitter),
        Err(e) => {
            eprintln!("skipping: {e}");
            None
        }
    }
}

fn scale_of(fitter: &FontFitter, target_width: u32, text: &str) -> f32 {
    let PxScale { y, .. } = fitter.fit(target_width, text);
    y
}

// ============================================================
// 1. Fit search
// ============================================================

#[test]
fn test_fitted_width_stays_strictly_below_target() {
    let Some(fitter) = system_fitter() else { return };

    for target in [8u32, 16, 24, 60] {
        let size = scale_of(&fitter, target, "H") as u32;
        let width = fitter.text_width(size, "H");
        assert!(
            width < target as f32,
            "size {size} measures {width}, target {target}"
        );
    }
}

#[test]
fn test_fit_is_monotonic_in_target_width() {
    let Some(fitter) = system_fitter() else { return };

    let narrow = scale_of(&fitter, 10, "H") as u32;
    let wide = scale_of(&fitter, 40, "H") as u32;

    assert!(
        fitter.text_width(narrow, "H") <= fitter.text_width(wide, "H"),
        "wider targets must never fit narrower glyphs"
    );
}

#[test]
fn test_fit_never_exceeds_the_maximum_size() {
    let Some(fitter) = system_fitter() else { return };

    let size = scale_of(&fitter, 100_000, "H") as u32;
    assert!(size <= MAX_FONT_SIZE);
}

#[test]
fn test_unfittable_target_returns_the_minimum_size() {
    let Some(fitter) = system_fitter() else { return };

    // No size renders a glyph narrower than 0 px; the search keeps size 1.
    assert_eq!(scale_of(&fitter, 0, "H"), 1.0);
}

// ============================================================
// 2. Memoization
// ============================================================

#[test]
fn test_repeated_fit_is_identical_and_measures_nothing_new() {
    let Some(fitter) = system_fitter() else { return };

    let first = fitter.fit(24, "g");
    let measured = fitter.measurement_count();

    let second = fitter.fit(24, "g");

    assert_eq!(first, second, "memoized fit must be bit-identical");
    assert_eq!(
        fitter.measurement_count(),
        measured,
        "second fit must be a pure cache hit"
    );
}
