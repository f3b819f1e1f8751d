use anyhow::Result;
use pingen::{generate_unique_pins, LocalStorage, OsEntropy, PinEngine, PinError, RunConfig};
use std::collections::HashSet;
use tempfile::TempDir;

/// Split an output file into `(header, pins)` sections, skipping the timestamp line.
fn parse_sections(content: &str) -> Vec<(String, Vec<String>)> {
    let mut sections = Vec::new();
    for block in content.split("\n\n").skip(1) {
        let mut lines = block.lines();
        if let Some(header) = lines.next() {
            sections.push((header.to_string(), lines.map(str::to_string).collect()));
        }
    }
    sections
}

fn run_config(dir: &TempDir, counts: [i64; 3]) -> RunConfig {
    RunConfig {
        count4: counts[0],
        count6: counts[1],
        count8: counts[2],
        output_path: dir.path().join("pins.txt").to_string_lossy().into_owned(),
        monitor: false,
    }
}

#[test]
fn test_end_to_end_default_counts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = run_config(&temp_dir, [10, 10, 10]);
    let mut engine = PinEngine::new(LocalStorage::default(), config);

    let output_path = engine.run()?;
    let content = std::fs::read_to_string(&output_path)?;

    assert!(content.starts_with("PIN generation time: "));
    let sections = parse_sections(&content);
    let headers: Vec<&str> = sections.iter().map(|(h, _)| h.as_str()).collect();
    assert_eq!(
        headers,
        vec!["4-digit PINs (10):", "6-digit PINs (10):", "8-digit PINs (10):"]
    );

    for ((_, pins), length) in sections.iter().zip([4usize, 6, 8]) {
        assert_eq!(pins.len(), 10);
        assert_eq!(pins.iter().collect::<HashSet<_>>().len(), 10);
        for pin in pins {
            assert_eq!(pin.len(), length);
            assert!(pin.chars().all(|c| c.is_ascii_digit()));
        }
    }
    Ok(())
}

#[test]
fn test_only_four_digit_section_when_others_are_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut engine = PinEngine::new(LocalStorage::default(), run_config(&temp_dir, [5, 0, 0]));

    let content = std::fs::read_to_string(engine.run()?)?;
    let sections = parse_sections(&content);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].0, "4-digit PINs (5):");
    assert_eq!(sections[0].1.iter().collect::<HashSet<_>>().len(), 5);
    assert!(!content.contains("6-digit"));
    assert!(!content.contains("8-digit"));
    Ok(())
}

#[test]
fn test_every_four_digit_value_can_be_requested() -> Result<()> {
    let set = generate_unique_pins(&mut OsEntropy, 4, 10_000)?;
    assert_eq!(set.len(), 10_000);

    let expected: Vec<String> = (0..10_000).map(|n| format!("{:04}", n)).collect();
    let actual: Vec<&str> = set.iter().map(|p| p.as_str()).collect();
    assert_eq!(actual, expected);

    let err = generate_unique_pins(&mut OsEntropy, 4, 10_001).unwrap_err();
    assert!(matches!(err, PinError::InvalidCount { .. }));
    Ok(())
}

#[test]
fn test_invalid_count_leaves_existing_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = run_config(&temp_dir, [10_001, 1, 1]);
    std::fs::write(&config.output_path, "previous run\n")?;

    let mut engine = PinEngine::new(LocalStorage::default(), config.clone());
    assert!(matches!(engine.run(), Err(PinError::InvalidCount { .. })));
    assert_eq!(std::fs::read_to_string(&config.output_path)?, "previous run\n");
    Ok(())
}

#[test]
fn test_unwritable_output_path_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = run_config(&temp_dir, [1, 1, 1]);
    config.output_path = temp_dir
        .path()
        .join("no-such-dir")
        .join("pins.txt")
        .to_string_lossy()
        .into_owned();

    let mut engine = PinEngine::new(LocalStorage::default(), config);
    let err = engine.run().unwrap_err();
    assert!(matches!(err, PinError::OutputWriteError { .. }));
    assert_ne!(err.exit_code(), 0);
    Ok(())
}

#[test]
fn test_runs_are_not_repeatable() -> Result<()> {
    let first = generate_unique_pins(&mut OsEntropy, 8, 20)?;
    let second = generate_unique_pins(&mut OsEntropy, 8, 20)?;
    // identical 20-PIN sets from 10^8 values would mean a fixed seed
    assert_ne!(first, second);
    Ok(())
}

#[test]
fn test_output_shape_is_stable_across_runs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let shape = |content: &str| -> Vec<(String, usize)> {
        parse_sections(content)
            .into_iter()
            .map(|(header, pins)| (header, pins.len()))
            .collect()
    };

    let config = run_config(&temp_dir, [3, 4, 5]);
    let first = std::fs::read_to_string(
        PinEngine::new(LocalStorage::default(), config.clone()).run()?,
    )?;
    let second =
        std::fs::read_to_string(PinEngine::new(LocalStorage::default(), config).run()?)?;

    assert_eq!(shape(&first), shape(&second));
    assert_ne!(parse_sections(&first), parse_sections(&second));
    Ok(())
}
