//! Property-style tests for word-bounded label fitting.

use tradehud_core::fit::{fit, ELLIPSIS};

fn chars(text: &str) -> f64 {
    text.chars().count() as f64
}

/// A measure that charges wide glyphs double, like a cell-based surface
/// would for CJK text.
fn wide_aware(text: &str) -> f64 {
    text.chars()
        .map(|c| if (c as u32) > 0x2E7F { 2.0 } else { 1.0 })
        .sum()
}

const HEADLINE: &str = "Apple shares rally after record quarterly results beat analyst expectations";

#[test]
fn fitted_text_always_measures_within_the_budget() {
    for width in 2..90 {
        let fitted = fit(HEADLINE, &chars, f64::from(width));
        assert!(
            chars(&fitted) <= f64::from(width),
            "budget {width} exceeded by {fitted:?}"
        );
    }
}

#[test]
fn fitted_text_is_a_word_bounded_prefix() {
    for width in 8..70 {
        let fitted = fit(HEADLINE, &chars, f64::from(width));
        if fitted == HEADLINE || fitted == ELLIPSIS {
            continue;
        }
        let stem = fitted.trim_end_matches(ELLIPSIS);
        assert!(HEADLINE.starts_with(stem), "width {width}: {fitted:?}");
        assert!(
            HEADLINE[stem.len()..].starts_with(char::is_whitespace),
            "width {width}: cut mid-word in {fitted:?}"
        );
    }
}

#[test]
fn fitted_prefix_is_maximal() {
    // Growing the budget by one char can only grow (or keep) the result.
    let mut previous = 0usize;
    for width in 2..90 {
        let fitted = fit(HEADLINE, &chars, f64::from(width));
        let len = fitted.chars().count();
        assert!(
            len >= previous,
            "budget {width} shrank the fit: {len} < {previous}"
        );
        previous = len;
    }

    // And the next-longer word-bounded candidate must not fit.
    let fitted = fit(HEADLINE, &chars, 30.0);
    let stem = fitted.trim_end_matches(ELLIPSIS);
    let rest = HEADLINE[stem.len()..].trim_start();
    let skipped = HEADLINE.len() - stem.len() - rest.len();
    let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let next_word_end = stem.len() + skipped + word_len;
    let longer = format!("{}{ELLIPSIS}", &HEADLINE[..next_word_end]);
    assert!(chars(&longer) > 30.0, "a longer candidate fits: {longer:?}");
}

#[test]
fn fitting_is_idempotent_across_budgets() {
    for width in [3.0, 9.0, 21.0, 34.0, 55.0, 200.0] {
        let once = fit(HEADLINE, &chars, width);
        assert_eq!(fit(&once, &chars, width), once, "budget {width}");
    }
}

#[test]
fn text_that_fits_is_untouched() {
    assert_eq!(fit("Range day.", &chars, 80.0), "Range day.");
}

#[test]
fn non_positive_budget_is_a_no_op() {
    assert_eq!(fit(HEADLINE, &chars, 0.0), HEADLINE);
    assert_eq!(fit(HEADLINE, &chars, -1.0), HEADLINE);
}

#[test]
fn impossible_budget_degrades_to_the_ellipsis() {
    assert_eq!(fit("a b", &chars, 0.5), ELLIPSIS);
}

#[test]
fn measurement_units_are_the_surfaces_business() {
    // 10 wide chars measure 20 under the wide-aware measure.
    let text = "日経平均 が 大幅高 で 引け た ところ";
    let fitted = fit(text, &wide_aware, 12.0);
    assert!(wide_aware(&fitted) <= 12.0);
    assert!(fitted.ends_with(ELLIPSIS));
}
