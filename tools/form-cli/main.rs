use approval_form::form::{FormInstanceDescriptor, preview};
use approval_form::plan::{PLAN_FIELD, PlanTranscript};
use approval_form::prelude::*;
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use std::fs;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Validate, inspect, submit and scaffold workflow approval forms
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a form's values against its definitions and list every violation
    Validate {
        /// Path to the form JSON file
        form_path: String,
        #[command(flatten)]
        options: OptionFlags,
    },
    /// Print a form's fields, cardinalities and current values
    Inspect {
        /// Path to the form JSON file
        form_path: String,
    },
    /// Apply a submission to a form and write the submitted form
    Submit {
        /// Path to the form JSON file
        form_path: String,
        /// Submitted value as name=value (JSON values like true or 42 are parsed)
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE", required = true)]
        values: Vec<String>,
        /// Where to write the submitted form (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        options: OptionFlags,
    },
    /// Build a terraform plan approval form from a captured plan transcript
    Scaffold {
        /// Id of the process waiting for approval
        #[arg(long)]
        process_id: Uuid,
        /// Id of the form within the process (random when omitted)
        #[arg(long)]
        form_id: Option<Uuid>,
        /// Path to the captured `terraform plan` output
        #[arg(long)]
        plan: String,
        /// Where to write the form (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Args, Debug)]
struct OptionFlags {
    /// Reject values that have no field definition
    #[arg(long)]
    strict: bool,
    /// Accept fields of unregistered types without checking them
    #[arg(long)]
    allow_unknown_types: bool,
    /// Do not require a processId value
    #[arg(long)]
    no_process_id: bool,
}

impl OptionFlags {
    fn to_options(&self) -> ValidationOptions {
        ValidationOptions {
            require_process_id: !self.no_process_id,
            reject_unknown_values: self.strict,
            allow_unknown_types: self.allow_unknown_types,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { form_path, options } => run_validate(&form_path, &options),
        Command::Inspect { form_path } => run_inspect(&form_path),
        Command::Submit {
            form_path,
            values,
            output,
            options,
        } => run_submit(&form_path, &values, output.as_deref(), &options),
        Command::Scaffold {
            process_id,
            form_id,
            plan,
            output,
        } => run_scaffold(process_id, form_id, &plan, output.as_deref()),
    }
}

fn run_validate(form_path: &str, flags: &OptionFlags) {
    let form = load_form(form_path);
    let validator = Validator::builder().with_options(flags.to_options()).build();

    let violations = validator.check_all(&form);
    if violations.is_empty() {
        println!(
            "Form '{}' is valid ({} fields defined).",
            form_path,
            form.definitions.len()
        );
        return;
    }

    println!("Form '{}' has {} violation(s):", form_path, violations.len());
    for violation in &violations {
        println!("  - {}", violation);
    }
    std::process::exit(1);
}

fn run_inspect(form_path: &str) {
    let form = load_form(form_path);

    println!("\n--- Form Summary ---");
    println!("Submit URL:   {}", form.submit_url);
    println!("Process ID:   {}", form.process_id().unwrap_or("<none>"));
    println!("Submitted:    {}", form.success);
    println!("Required:     {}", form.required_fields().format(", "));

    println!("\n--- Fields ---");
    for (name, definition) in &form.definitions {
        let current = form
            .value(name)
            .map(preview)
            .unwrap_or_else(|| "<unset>".to_string());
        println!(
            "{:<16} {:<10} {:<18} {}",
            name, definition.field_type, definition.cardinality, current
        );
    }

    let undeclared = form
        .values
        .keys()
        .filter(|key| *key != PROCESS_ID_KEY && !form.definitions.contains_key(*key))
        .sorted()
        .join(", ");
    if !undeclared.is_empty() {
        println!("\nUndeclared values: {}", undeclared);
    }

    if let Some(plan) = form.value(PLAN_FIELD).and_then(|v| v.as_str()) {
        let transcript = PlanTranscript::new(plan);
        println!("\n--- Plan ---");
        match transcript.summary() {
            Some(summary) => println!("Summary:      {}", summary),
            None => println!("Summary:      <not found in transcript>"),
        }
        if let Some(path) = transcript.saved_plan_path() {
            println!("Saved to:     {}", path);
        }
    }
    println!();
}

fn run_submit(form_path: &str, pairs: &[String], output: Option<&str>, flags: &OptionFlags) {
    let form = load_form(form_path);
    let validator = Validator::builder().with_options(flags.to_options()).build();

    let submission = FormSubmission::from_pairs_for(&form, pairs)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid submission: {}", e)));
    let submitted = form
        .submit(&validator, &submission)
        .unwrap_or_else(|e| exit_with_error(&format!("Submission rejected: {}", e)));

    if let Some(outcome) = ApprovalOutcome::of(&submitted) {
        tracing::info!(?outcome, "approval outcome");
    }
    write_form(&submitted, output);
}

fn run_scaffold(process_id: Uuid, form_id: Option<Uuid>, plan_path: &str, output: Option<&str>) {
    let plan_output = fs::read_to_string(plan_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read plan file '{}': {}", plan_path, e))
    });
    let form_id = form_id.unwrap_or_else(Uuid::new_v4);

    let approval = PlanApproval::new(process_id, form_id, plan_output);
    match approval.plan.summary() {
        Some(summary) => tracing::info!(%summary, "scaffolding approval form"),
        None => tracing::warn!("plan transcript has no summary line"),
    }

    let form = approval
        .into_form()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build form: {}", e)));
    write_form(&form, output);
}

fn load_form(form_path: &str) -> FormInstanceDescriptor {
    tracing::debug!(path = form_path, "loading form");
    FormInstanceDescriptor::from_file(form_path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn write_form(form: &FormInstanceDescriptor, output: Option<&str>) {
    match output {
        Some(path) => {
            form.save(path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
            tracing::info!(path, "form written");
        }
        None => {
            let json = form
                .to_json_pretty()
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("{}", json);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
