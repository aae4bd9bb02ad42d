use recbind_core::NameTransform;

fn assert_transformed(transform: NameTransform, cases: &[(&str, &str)]) {
    for (from, to) in cases {
        assert_eq!(
            transform.transform(from),
            *to,
            "transforming {from:?} with {transform:?}"
        );
    }
}

#[test]
fn absent_names_pass_through() {
    assert_eq!(NameTransform::None.transform_opt(None), None);
    assert_eq!(NameTransform::Snake.transform_opt(None), None);
    assert_eq!(NameTransform::Kebab.transform_opt(None), None);
}

#[test]
fn present_names_pass_through_opt() {
    assert_eq!(
        NameTransform::Snake.transform_opt(Some("aA")),
        Some("a_a".to_string())
    );
}

#[test]
fn none_is_identity() {
    assert_transformed(
        NameTransform::None,
        &[
            ("", ""),
            ("a", "a"),
            ("aA", "aA"),
            ("wordWithAnotherWord", "wordWithAnotherWord"),
            ("snake_case_words", "snake_case_words"),
            ("kebab-case-words", "kebab-case-words"),
        ],
    );
}

#[test]
fn camel_to_snake() {
    assert_transformed(
        NameTransform::Snake,
        &[
            ("a", "a"),
            ("A", "a"),
            ("aA", "a_a"),
            ("wordWithAnotherWord", "word_with_another_word"),
            ("word2Numbers", "word2_numbers"),
            ("word2numbers", "word2numbers"),
        ],
    );
}

#[test]
fn camel_to_kebab() {
    assert_transformed(
        NameTransform::Kebab,
        &[
            ("a", "a"),
            ("A", "a"),
            ("aA", "a-a"),
            ("wordWithAnotherWord", "word-with-another-word"),
            ("word2Numbers", "word2-numbers"),
            ("word2numbers", "word2numbers"),
        ],
    );
}

#[test]
fn leading_uppercase_gets_no_separator() {
    assert_eq!(NameTransform::Snake.transform("Word"), "word");
    assert_eq!(NameTransform::Kebab.transform("WordMore"), "word-more");
}

#[test]
fn consecutive_uppercase_splits_once() {
    // Only a lowercase/digit → uppercase boundary splits; runs of capitals
    // stay together.
    assert_eq!(NameTransform::Snake.transform("aAB"), "a_ab");
    assert_eq!(NameTransform::Snake.transform("parseJSON"), "parse_json");
}

#[test]
fn idempotent_on_lowercase_output() {
    for transform in [NameTransform::Snake, NameTransform::Kebab] {
        for input in ["word_with_words", "word-with-words", "word2numbers", ""] {
            let once = transform.transform(input);
            assert_eq!(transform.transform(&once), once);
        }
    }
}
