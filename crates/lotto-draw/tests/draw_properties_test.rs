//! Property checks for the drawer across many real random draws.

use std::collections::HashSet;

use lotto_core::error::DomainError;
use lotto_core::rng::SystemRandom;
use lotto_draw::domain::config::DrawConfig;
use lotto_draw::domain::draw::{Draw, draw};
use lotto_test_support::SeededRandom;

const TRIALS: usize = 2_000;

fn assert_well_formed(result: &Draw, config: &DrawConfig) {
    let numbers = result.numbers();

    assert_eq!(numbers.len(), config.count() as usize, "wrong length: {numbers:?}");
    assert!(
        numbers.windows(2).all(|pair| pair[0] < pair[1]),
        "not strictly ascending: {numbers:?}"
    );
    assert!(
        numbers
            .iter()
            .all(|n| (config.min()..=config.max()).contains(n)),
        "out of range {config}: {numbers:?}"
    );
}

#[test]
fn test_main_numbers_are_well_formed() {
    let config = DrawConfig::new(5, 1, 50).unwrap();
    let mut rng = SystemRandom::new();

    for _ in 0..TRIALS {
        assert_well_formed(&draw(&config, &mut rng), &config);
    }
}

#[test]
fn test_bonus_numbers_are_well_formed() {
    let config = DrawConfig::new(2, 1, 13).unwrap();
    let mut rng = SystemRandom::new();

    for _ in 0..TRIALS {
        assert_well_formed(&draw(&config, &mut rng), &config);
    }
}

#[test]
fn test_unusual_ranges_are_well_formed() {
    let configs = [
        DrawConfig::new(1, 0, 0).unwrap(),
        DrawConfig::new(4, -2, 1).unwrap(),
        DrawConfig::new(3, -100, -90).unwrap(),
        DrawConfig::new(6, i32::MAX - 10, i32::MAX).unwrap(),
        DrawConfig::new(8, i32::MIN, i32::MAX).unwrap(),
    ];
    let mut rng = SystemRandom::new();

    for config in &configs {
        for _ in 0..100 {
            assert_well_formed(&draw(config, &mut rng), config);
        }
    }
}

#[test]
fn test_repeated_draws_vary() {
    let config = DrawConfig::new(5, 1, 50).unwrap();
    let mut rng = SystemRandom::new();

    let distinct: HashSet<Vec<i32>> = (0..100)
        .map(|_| draw(&config, &mut rng).numbers().to_vec())
        .collect();

    // 2_118_760 possible tickets; 100 draws all landing on a handful is
    // effectively impossible for a working source.
    assert!(distinct.len() > 90, "only {} distinct draws", distinct.len());
}

#[test]
fn test_fresh_sources_do_not_share_a_seed() {
    let config = DrawConfig::new(5, 1, 50).unwrap();

    let first: Vec<Vec<i32>> = {
        let mut rng = SystemRandom::new();
        (0..5).map(|_| draw(&config, &mut rng).numbers().to_vec()).collect()
    };
    let second: Vec<Vec<i32>> = {
        let mut rng = SystemRandom::new();
        (0..5).map(|_| draw(&config, &mut rng).numbers().to_vec()).collect()
    };

    assert_ne!(first, second);
}

#[test]
fn test_values_appear_with_uniform_frequency() {
    let config = DrawConfig::new(3, 1, 10).unwrap();
    let mut rng = SeededRandom::new(0x5eed);
    let trials = 30_000;
    let mut counts = [0_u32; 10];

    for _ in 0..trials {
        for n in &draw(&config, &mut rng) {
            counts[(n - 1) as usize] += 1;
        }
    }

    // Each value should show up in 3/10 of the draws: 9_000 times. The
    // standard deviation is about 80, so 450 is a very loose band.
    for (value, &count) in counts.iter().enumerate() {
        assert!(
            count.abs_diff(9_000) < 450,
            "value {} seen {count} times",
            value + 1
        );
    }
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let result = DrawConfig::new(10, 1, 5);

    assert!(matches!(result, Err(DomainError::InvalidConfiguration(_))));
}
