//! Property-based checks of the resolution rules over random contexts.

use proptest::prelude::*;

use super::*;
use crate::locale::KeyboardLocale;

fn arb_case() -> impl Strategy<Value = KeyboardCase> {
    prop_oneof![
        Just(KeyboardCase::Lowercased),
        Just(KeyboardCase::Uppercased),
        Just(KeyboardCase::CapsLocked),
    ]
}

fn arb_keyboard_type() -> impl Strategy<Value = KeyboardType> {
    prop_oneof![
        4 => arb_case().prop_map(KeyboardType::Alphabetic),
        2 => Just(KeyboardType::Numeric),
        2 => Just(KeyboardType::Symbolic),
        1 => Just(KeyboardType::Emoji),
        1 => "[a-z]{1,6}".prop_map(KeyboardType::Custom),
    ]
}

fn arb_mode() -> impl Strategy<Value = Option<AutocapitalizationMode>> {
    prop::option::of(prop_oneof![
        Just(AutocapitalizationMode::None),
        Just(AutocapitalizationMode::AllCharacters),
        Just(AutocapitalizationMode::Sentences),
        Just(AutocapitalizationMode::Words),
    ])
}

fn arb_locale() -> impl Strategy<Value = KeyboardLocale> {
    prop::sample::select(vec!["en_US", "de_DE", "ar_SA", "he_IL", "fa", "ja_JP", "pa_Arab_PK", "ks_Deva"])
        .prop_map(KeyboardLocale::new)
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z0-9.,!? ]{0,12}")
}

prop_compose! {
    fn arb_context()(
        keyboard_type in arb_keyboard_type(),
        autocapitalization in arb_mode(),
        text_before_cursor in arb_text(),
        is_cursor_at_new_sentence in any::<bool>(),
        is_cursor_at_new_word in any::<bool>(),
        locale in arb_locale(),
    ) -> InputContext {
        InputContext {
            keyboard_type,
            autocapitalization,
            text_before_cursor,
            is_cursor_at_new_sentence,
            is_cursor_at_new_word,
            locale,
        }
    }
}

proptest! {
    #[test]
    fn caps_lock_is_always_kept(mut ctx in arb_context()) {
        ctx.keyboard_type = KeyboardType::CAPS_LOCKED;
        prop_assert_eq!(resolve(&ctx).keyboard_type, KeyboardType::CAPS_LOCKED);
    }

    #[test]
    fn rtl_alphabetic_with_hint_is_lowercase(
        mut ctx in arb_context(),
        case in prop_oneof![Just(KeyboardCase::Lowercased), Just(KeyboardCase::Uppercased)],
    ) {
        prop_assume!(ctx.autocapitalization.is_some());
        ctx.keyboard_type = KeyboardType::Alphabetic(case);
        ctx.locale = KeyboardLocale::new("ar");
        prop_assert_eq!(resolve(&ctx).keyboard_type, KeyboardType::LOWERCASED);
    }

    #[test]
    fn resolution_without_persist_is_idempotent(ctx in arb_context()) {
        let first = resolve(&ctx);
        prop_assume!(!first.should_persist);
        prop_assert_eq!(resolve(&ctx), first);
    }

    #[test]
    fn persisted_resolution_is_stable(mut ctx in arb_context()) {
        let first = resolve_in_place(&mut ctx);
        prop_assert_eq!(resolve_in_place(&mut ctx), first);
    }

    #[test]
    fn only_numeric_or_symbolic_persist(ctx in arb_context()) {
        let r = resolve(&ctx);
        if r.should_persist {
            prop_assert!(ctx.keyboard_type.is_numeric_or_symbolic());
            prop_assert!(r.keyboard_type.is_alphabetic());
        }
    }
}
