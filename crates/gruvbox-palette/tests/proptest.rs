//! Property-based tests for polarity inversion.

use gruvbox_palette::{Inversion, ModeTable, Polarity, GRUVBOX};
use proptest::prelude::*;

fn family_strategy() -> impl Strategy<Value = Polarity> {
    prop::sample::select(Polarity::ALL.to_vec())
}

// Names shaped like palette tokens: family keyword, then digits and/or a suffix.
fn token_strategy() -> impl Strategy<Value = String> {
    (family_strategy(), "[0-9]{0,2}", "(_[a-z0-9]{1,8})?")
        .prop_map(|(family, digits, suffix)| format!("{}{}{}", family.keyword(), digits, suffix))
}

proptest! {
    /// Inverting twice under the symmetric rule returns the original token.
    #[test]
    fn symmetric_inversion_round_trips(token in token_strategy()) {
        let inv = Inversion::Symmetric;
        let once = inv.invert_token(&token).unwrap();
        let twice = inv.invert_token(&once).unwrap();
        prop_assert_eq!(twice, token);
    }

    /// Inversion only ever rewrites the family keyword.
    #[test]
    fn inversion_keeps_remainder(token in token_strategy()) {
        let (_, rest) = Polarity::split(&token).unwrap();
        for inv in [Inversion::Symmetric, Inversion::Classic] {
            let inverted = inv.invert_token(&token).unwrap();
            let (_, inverted_rest) = Polarity::split(&inverted).unwrap();
            prop_assert_eq!(inverted_rest, rest);
        }
    }

    /// Invariant families never change.
    #[test]
    fn invariant_families_are_fixed_points(
        family in prop::sample::select(vec![Polarity::Neutral, Polarity::Gray]),
        suffix in "_[a-z]{1,6}",
    ) {
        let token = format!("{}{}", family.keyword(), suffix);
        prop_assert_eq!(Inversion::Symmetric.invert_token(&token).unwrap(), token.clone());
        prop_assert_eq!(Inversion::Classic.invert_token(&token).unwrap(), token);
    }

    /// Names without a family keyword are rejected, never passed through.
    #[test]
    fn unknown_families_are_rejected(name in "[xyz][a-z0-9_]{0,10}") {
        prop_assert!(Inversion::Symmetric.invert_token(&name).is_err());
    }
}

#[test]
fn gruvbox_dark_round_trips_to_light() {
    let light = ModeTable::gruvbox_light();
    let dark = light.invert(&GRUVBOX, Inversion::Symmetric).unwrap();
    let back = dark.invert(&GRUVBOX, Inversion::Symmetric).unwrap();
    assert_eq!(back, light);
}
