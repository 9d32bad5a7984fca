use approval_form::prelude::*;
use clap::Parser;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::{Rng, rng};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// A CLI tool to generate random, valid form descriptors for testing form consumers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The directory to write the generated form JSON files to
    #[arg(short, long, default_value = "generated_forms")]
    output_dir: String,

    /// How many forms to generate
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// The minimum number of fields per form
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of fields per form
    #[arg(long, default_value_t = 8)]
    max: usize,
}

const FIELD_NAMES: &[&str] = &[
    "approved",
    "comment",
    "reviewer",
    "ticket",
    "replicas",
    "budget",
    "attachment",
    "window",
    "deadline",
    "tags",
    "environment",
    "rollback",
];

const FIELD_TYPES: &[FieldType] = &[
    FieldType::String,
    FieldType::Int,
    FieldType::Decimal,
    FieldType::Boolean,
    FieldType::File,
    FieldType::Date,
    FieldType::DateTime,
];

const CARDINALITIES: &[Cardinality] = &[
    Cardinality::OneAndOnlyOne,
    Cardinality::OneOrNone,
    Cardinality::AtLeastOne,
    Cardinality::Any,
];

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    if cli.min > cli.max || cli.max > FIELD_NAMES.len() {
        eprintln!(
            "Error: field count range {}..={} must be ordered and at most {}",
            cli.min,
            cli.max,
            FIELD_NAMES.len()
        );
        std::process::exit(1);
    }

    fs::create_dir_all(&cli.output_dir)?;
    println!(
        "Generating {} form(s) with {} to {} fields each...",
        cli.count, cli.min, cli.max
    );

    let validator = Validator::default();
    for index in 0..cli.count {
        let form = generate_form(&mut rng, cli.min, cli.max);
        // Every generated form must pass the validator it is meant to exercise.
        form.validate(&validator)?;

        let path = Path::new(&cli.output_dir).join(format!("form-{:03}.json", index));
        fs::write(&path, form.to_json_pretty()?)?;
        println!(
            "-> Wrote '{}' ({} fields).",
            path.display(),
            form.definitions.len()
        );
    }

    println!("Successfully generated {} form(s) in '{}'", cli.count, cli.output_dir);
    Ok(())
}

fn generate_form(
    rng: &mut ThreadRng,
    min_fields: usize,
    max_fields: usize,
) -> FormInstanceDescriptor {
    let process_id = Uuid::from_u128(rng.random());
    let form_id = Uuid::from_u128(rng.random());

    let field_count = rng.random_range(min_fields..=max_fields);
    let names: Vec<&str> = FIELD_NAMES
        .choose_multiple(rng, field_count)
        .copied()
        .collect();

    let mut definitions = FieldDefinitions::new();
    let mut values = FieldValues::new();
    values.insert(PROCESS_ID_KEY.to_string(), json!(process_id.to_string()));

    for name in names {
        let field_type = FIELD_TYPES.choose(rng).cloned().unwrap_or(FieldType::String);
        let cardinality = *CARDINALITIES.choose(rng).unwrap_or(&Cardinality::OneOrNone);

        if let Some(value) = generate_value(rng, &field_type, cardinality) {
            values.insert(name.to_string(), value);
        }
        definitions.insert(
            name.to_string(),
            FieldDefinition::new(field_type, cardinality),
        );
    }

    FormInstanceDescriptor::new(
        format!("/api/service/custom_form/{}/{}/continue", process_id, form_id),
        definitions,
        values,
    )
}

/// Produces a value that satisfies both the type and the cardinality, or `None` to leave
/// an optional field unset.
fn generate_value(
    rng: &mut ThreadRng,
    field_type: &FieldType,
    cardinality: Cardinality,
) -> Option<Value> {
    match cardinality {
        Cardinality::OneAndOnlyOne => Some(generate_single(rng, field_type)),
        Cardinality::OneOrNone => rng
            .random_bool(0.7)
            .then(|| generate_single(rng, field_type)),
        Cardinality::AtLeastOne => {
            let count = rng.random_range(1..=3);
            Some(Value::Array(
                (0..count).map(|_| generate_single(rng, field_type)).collect(),
            ))
        }
        Cardinality::Any => {
            let count = rng.random_range(0..=3);
            rng.random_bool(0.8).then(|| {
                Value::Array((0..count).map(|_| generate_single(rng, field_type)).collect())
            })
        }
    }
}

// --- Value Generators for Each Built-in Type ---

fn generate_single(rng: &mut ThreadRng, field_type: &FieldType) -> Value {
    match field_type {
        FieldType::Int => json!(rng.random_range(0..500)),
        FieldType::Decimal => {
            json!((rng.random_range(0.0..10_000.0_f64) * 100.0).round() / 100.0)
        }
        FieldType::Boolean => json!(rng.random_bool(0.5)),
        FieldType::File => json!(format!(
            "_attachments/upload-{}.bin",
            rng.random_range(1..100)
        )),
        FieldType::Date => json!(format!(
            "2026-{:02}-{:02}",
            rng.random_range(1..=12),
            rng.random_range(1..=28)
        )),
        FieldType::DateTime => json!(format!(
            "2026-{:02}-{:02}T{:02}:{:02}:00Z",
            rng.random_range(1..=12),
            rng.random_range(1..=28),
            rng.random_range(0..24),
            rng.random_range(0..60)
        )),
        FieldType::String | FieldType::Custom(_) => {
            let words = ["deploy", "rollback", "hotfix", "review", "staging", "prod"];
            let word = words.choose(rng).copied().unwrap_or("value");
            json!(format!("{}-{}", word, rng.random_range(1..1000)))
        }
    }
}
