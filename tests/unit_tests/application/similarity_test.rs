use interavoice::application::services::similarity;

#[test]
fn given_identical_strings_when_scoring_then_returns_one() {
    assert_eq!(similarity("How much does it cost?", "How much does it cost?"), 1.0);
}

#[test]
fn given_strings_differing_only_in_case_when_scoring_then_returns_one() {
    assert_eq!(similarity("What is InteraVoice?", "WHAT IS interavoice?"), 1.0);
}

#[test]
fn given_strings_without_shared_characters_when_scoring_then_returns_zero() {
    assert_eq!(similarity("abc", "xyz"), 0.0);
    assert_eq!(similarity("banana", "How much does it cost?"), 0.0);
}

#[test]
fn given_overlapping_strings_when_scoring_then_counts_longest_block() {
    // "bcd" matches: 2 * 3 / 8
    assert_eq!(similarity("abcd", "bcde"), 0.75);
}

#[test]
fn given_block_with_remainders_when_scoring_then_recurses_on_both_sides() {
    // "ab", "d" and "f" match around the differing characters: 2 * 4 / 12
    let score = similarity("abXdYf", "abZdWf");
    assert!((score - 8.0 / 12.0).abs() < 1e-12);
}

#[test]
fn given_order_dependent_pair_when_scoring_both_ways_then_scores_are_equal() {
    assert_eq!(similarity("tide", "diet"), 0.5);
    assert_eq!(similarity("diet", "tide"), 0.5);
}

#[test]
fn given_various_pairs_when_swapping_arguments_then_score_is_symmetric() {
    let pairs = [
        ("what is interavoice", "What is InteraVoice?"),
        ("how much is it", "How much does it cost?"),
        ("abcabc", "cbacba"),
        ("pricing please", "What is the price?"),
        ("", "anything"),
    ];

    for (a, b) in pairs {
        assert_eq!(similarity(a, b), similarity(b, a), "pair ({a:?}, {b:?})");
    }
}

#[test]
fn given_uppercased_input_when_scoring_then_score_is_unchanged() {
    let a = "how much does interavoice cost";
    let b = "How much does it cost?";

    assert_eq!(similarity(a, b), similarity(&a.to_uppercase(), b));
}

#[test]
fn given_empty_side_when_scoring_then_returns_zero() {
    assert_eq!(similarity("", ""), 0.0);
    assert_eq!(similarity("", "What is InteraVoice?"), 0.0);
    assert_eq!(similarity("   ", "abc"), 0.0);
}

#[test]
fn given_any_pair_when_scoring_then_score_is_within_unit_interval() {
    let samples = ["", "a", "hello", "HELLO world", "wörld", "日本語テキスト", "a a a a"];

    for a in samples {
        for b in samples {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a:?} vs {b:?} = {score}");
        }
    }
}

#[test]
fn given_non_ascii_text_when_scoring_then_compares_characters_not_bytes() {
    // 'ö' is two bytes but one character: 2 * 4 / 9
    assert_eq!(similarity("wörld", "wörlD"), 1.0);
    assert_eq!(similarity("wörld", "wörl"), 8.0 / 9.0);
}

#[test]
fn given_sharp_s_when_compared_with_uppercased_form_then_returns_one() {
    assert_eq!(similarity("STRASSE", "straße"), 1.0);
    assert_eq!(similarity("straße", "Strasse"), 1.0);
}

#[test]
fn given_text_with_expanding_uppercase_when_uppercasing_one_side_then_score_is_unchanged() {
    let pairs = [
        ("straße", "strasse"),
        ("Große Straße", "grosse strasse"),
        ("ﬁle", "file"),
        ("wie viel kostet das", "Wie viel kostet das Maß?"),
    ];

    for (a, b) in pairs {
        assert_eq!(
            similarity(a, b),
            similarity(&a.to_uppercase(), b),
            "{a:?} vs {b:?}"
        );
    }
}
