use anyhow::Result;

use linsys::classifier::LinearSystemClassifier;
use linsys::io::systems_csv::{read_systems_2x2, write_classified_2x2};
use linsys::presets;

fn main() -> Result<()> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "classified_2x2.csv".to_string());

    let classifier = LinearSystemClassifier::default();

    println!("2x2 presets:");
    let mut classified = Vec::new();
    for (expected, system) in presets::labeled_2x2() {
        let kind = classifier.classify_2x2(&system)?;
        println!("  [{}]  ->  {}", system, kind);
        assert_eq!(kind, expected);
        classified.push((system, kind));
    }

    println!("\n3x3 presets:");
    for (expected, system) in presets::labeled_3x3() {
        let kind = classifier.classify_3x3(&system)?;
        println!("  [{}]  ->  {}", system, kind);
        assert_eq!(kind, expected);
    }

    write_classified_2x2(&output, &classified)?;
    println!("\nWrote {} classified systems to {}", classified.len(), output);

    let reloaded = read_systems_2x2(&output)?;
    println!("Read back {} systems from {}", reloaded.len(), output);

    Ok(())
}
