//! Tests for question assembly and accuracy math.

use rand::rngs::StdRng;
use rand::SeedableRng;

use wordtrainer_bot::quiz::{accuracy, build_options};

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn options_always_contain_the_correct_translation() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let wrongs = vec![
            "собака".to_string(),
            "птица".to_string(),
            "рыба".to_string(),
            "мышь".to_string(),
        ];
        let options = build_options("кот", wrongs, &mut rng);
        assert!(options.iter().any(|o| o == "кот"));
    }
}

#[test]
fn options_are_capped_at_four() {
    let wrongs = (0..50).map(|i| format!("вариант{i}")).collect();
    let options = build_options("кот", wrongs, &mut rng());
    assert_eq!(options.len(), 4);
}

#[test]
fn duplicate_and_correct_wrongs_are_filtered() {
    let wrongs = vec![
        "собака".to_string(),
        "собака".to_string(),
        "кот".to_string(),
    ];
    let options = build_options("кот", wrongs, &mut rng());
    // One deduplicated wrong option plus the correct one.
    assert_eq!(options.len(), 2);
    assert_eq!(options.iter().filter(|o| *o == "кот").count(), 1);
}

#[test]
fn tiny_vocabulary_yields_a_single_button_quiz() {
    let options = build_options("кот", Vec::new(), &mut rng());
    assert_eq!(options, vec!["кот".to_string()]);
}

#[test]
fn accuracy_is_zero_without_attempts() {
    assert_eq!(accuracy(0, 0), 0.0);
}

#[test]
fn accuracy_stays_within_bounds() {
    assert_eq!(accuracy(3, 4), 75.0);
    assert_eq!(accuracy(4, 4), 100.0);
    assert_eq!(accuracy(0, 7), 0.0);
    let third = accuracy(1, 3);
    assert!(third > 33.0 && third < 34.0);
    assert_eq!(format!("{third:.1}"), "33.3");
}
