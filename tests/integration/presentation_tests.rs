use std::borrow::Cow;

use mockall::mock;
use mockall::predicate::eq;

use super::build_integration_test;
use progress_mvu::{GoalType, Locale, MessageKey, Translator, ValueFormatter};

mock! {
    pub Formatter {}

    impl ValueFormatter for Formatter {
        fn format(&self, value: f64, goal_type: GoalType, locale: Locale) -> String;
    }
}

mock! {
    pub Texts {}

    impl Translator for Texts {
        fn translate(&self, key: MessageKey, locale: Locale) -> Cow<'static, str>;
    }
}

#[test]
fn given_a_custom_formatter_should_build_the_label_from_raw_values() {
    let mut formatter = MockFormatter::new();
    formatter
        .expect_format()
        .with(eq(0.0), eq(GoalType::Currency), eq(Locale::En))
        .returning(|_, _, _| "zero".to_string());
    formatter
        .expect_format()
        .with(eq(100.0), eq(GoalType::Currency), eq(Locale::En))
        .returning(|_, _, _| "hundred".to_string());

    let test = build_integration_test().given_formatter(formatter).build();

    assert_eq!(test.snapshot().label, "$zero / $hundred");
}

#[test]
fn given_a_custom_translator_should_take_every_label_from_it() {
    let mut texts = MockTexts::new();
    texts
        .expect_translate()
        .returning(|key, locale| Cow::Owned(format!("{key:?}@{locale}")));

    let mut test = build_integration_test().given_translator(texts).build();

    let snapshot = test.snapshot();
    assert_eq!(snapshot.texts.title, "Title@en");
    assert_eq!(snapshot.texts.goal_type, "TypeCurrency@en");
    assert_eq!(snapshot.texts.confirm_reset, None);

    test.controller.request_reset();
    assert_eq!(
        test.snapshot().texts.confirm_reset.as_deref(),
        Some("ConfirmReset@en")
    );
}

#[test]
fn given_a_locale_switch_should_reformat_without_touching_values() {
    let mut test = build_integration_test()
        .given_progress(12_000.0, 1_500.5, GoalType::Currency)
        .build();
    assert_eq!(test.snapshot().label, "$1,500.50 / $12,000.00");

    test.controller.set_locale(Locale::Es);

    let snapshot = test.snapshot();
    assert_eq!(snapshot.locale, Locale::Es);
    assert_eq!(snapshot.label, "$1500,50 / $12.000,00");
    assert_eq!(snapshot.texts.title, "Seguimiento de Meta");
    assert_eq!(snapshot.current, 1_500.5);
}

#[test]
fn given_a_spanish_session_should_start_in_spanish() {
    let test = build_integration_test().given_locale(Locale::Es).build();

    let snapshot = test.snapshot();
    assert_eq!(snapshot.texts.add_progress, "Agregar Progreso");
    assert_eq!(snapshot.texts.yes, "Sí");
}

#[test]
fn given_an_elements_goal_should_label_without_currency_symbol() {
    let mut test = build_integration_test()
        .given_goal_type(GoalType::Elements)
        .given_goal(20.0)
        .build();

    test.controller.set_pending_amount(4.0);
    test.controller.commit_increment();

    let snapshot = test.snapshot();
    assert_eq!(snapshot.label, "4 / 20");
    assert_eq!(snapshot.texts.goal_type, "Elements");
}

#[test]
fn given_partial_progress_should_bound_the_input_by_remaining_capacity() {
    let mut test = build_integration_test()
        .given_progress(100.0, 62.5, GoalType::Currency)
        .build();

    let bounds = test.snapshot().input_bounds;
    assert_eq!(bounds.min, 0.01);
    assert_eq!(bounds.step, 0.01);
    assert_eq!(bounds.max, 37.5);

    test.controller.set_type(GoalType::Elements);
    let bounds = test.snapshot().input_bounds;
    assert_eq!(bounds.min, 1.0);
    assert_eq!(bounds.step, 1.0);
    assert_eq!(bounds.max, 38.0);
}
