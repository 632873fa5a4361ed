//! Generate commands

use anyhow::{Context, Result};
use javagen::{CodesReport, GeneratorConfig, MediaTypeReport};

/// Generate constants classes and print the report.
pub fn codes(config: &GeneratorConfig, json: bool) -> Result<()> {
    let report =
        javagen::generate_message_codes(config).context("Failed to generate message codes")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_codes_report(&report);
    }

    Ok(())
}

/// Generate the media-type enum and print the report.
pub fn media_types(config: &GeneratorConfig, json: bool) -> Result<()> {
    let report = javagen::generate_media_types(config).context("Failed to generate media types")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_media_type_report(&report);
    }

    Ok(())
}

fn print_codes_report(report: &CodesReport) {
    for class in &report.generated {
        println!(
            "✓ {} ({} constants) -> {}",
            class.class_name,
            class.constants,
            class.source_file.display()
        );
        if let Some(properties) = &class.properties_file {
            println!("  ✓ {}", properties.display());
        }
    }

    for path in &report.skipped {
        println!("- skipped {} (no message-class-name)", path.display());
    }

    for path in &report.missing {
        println!("- missing {}", path.display());
    }

    for failed in &report.failed {
        println!("✗ {}: {}", failed.catalog.display(), failed.message);
    }

    if report.is_empty() {
        println!("No message files found");
    }
}

fn print_media_type_report(report: &MediaTypeReport) {
    println!(
        "✓ {} ({} media types) -> {}",
        report.class_name,
        report.media_types,
        report.source_file.display()
    );

    for path in &report.merged_files {
        println!("  merged {}", path.display());
    }
}
