mod wizard;

use clap::{Parser, Subcommand, ValueEnum};
use engage_spec::{
    Category, FieldDescriptor, FieldKind, FieldValue, FormController, SubmitOutcome,
    build_confirmation, render_json_ui, render_text,
};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use wizard::{AnswerParseError, PromptContext, Verbosity, WizardPresenter};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Simulated send duration; the submit control stays disabled for its whole
/// length and exactly one record is produced per submission.
const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Formulaire de contact multi-actions",
    long_about = "Assistant en ligne de commande pour le formulaire multi-actions : contact, don, bénévolat et demande d'information"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive form session in a text shell.
    Wizard {
        /// Preselect the action category instead of prompting for it.
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
        /// Show verbose output (field sets, parse expectations).
        #[arg(long, alias = "debug")]
        verbose: bool,
        /// Also emit the submission record as JSON.
        #[arg(long)]
        record_json: bool,
        /// Render mode for the confirmation view.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Validate a JSON field map against a category's rules.
    Validate {
        /// Action category (contact, don, benevolat, info).
        #[arg(long, value_name = "CATEGORY")]
        category: String,
        /// Path to the JSON file containing the field values.
        #[arg(long, value_name = "FIELDS")]
        fields: PathBuf,
    },
    /// Print the JSON Schema (or example values) of a category's field set.
    Schema {
        /// Action category (contact, don, benevolat, info).
        #[arg(long, value_name = "CATEGORY")]
        category: String,
        /// Print example field values instead of the schema.
        #[arg(long)]
        examples: bool,
    },
}

fn main() -> CliResult<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Wizard {
            category,
            verbose,
            record_json,
            format,
        } => run_wizard(category, verbose, record_json, format),
        Command::Validate { category, fields } => run_validate(&category, fields),
        Command::Schema { category, examples } => run_schema(&category, examples),
    }
}

fn run_wizard(
    preselected: Option<String>,
    verbose: bool,
    record_json: bool,
    format: RenderMode,
) -> CliResult<()> {
    loop {
        let mut controller = FormController::new();
        let category = match &preselected {
            Some(raw) => raw.parse::<Category>()?,
            None => prompt_category()?,
        };
        controller.select_category(category)?;

        let mut presenter = WizardPresenter::new(Verbosity::from_verbose(verbose), record_json);
        presenter.show_header(category);

        let field_set = category.field_set();
        let total = field_set.len();
        for (position, field) in field_set.iter().enumerate() {
            if let Some(value) = prompt_field(field, position + 1, total, &presenter)? {
                controller.edit_field(field.name, value)?;
            }
        }

        let record = loop {
            match controller.submit()? {
                SubmitOutcome::Rejected => {
                    presenter.show_field_errors(controller.errors());
                    let names: Vec<String> = controller.errors().keys().cloned().collect();
                    for name in names {
                        let Some(position) =
                            field_set.iter().position(|field| field.name == name)
                        else {
                            continue;
                        };
                        let field = &field_set[position];
                        if let Some(value) = prompt_field(field, position + 1, total, &presenter)?
                        {
                            controller.edit_field(field.name, value)?;
                        }
                    }
                }
                SubmitOutcome::Accepted => {
                    println!("Envoi en cours...");
                    thread::sleep(SUBMIT_DELAY);
                    break controller.complete_submission()?;
                }
            }
        };

        presenter.show_completion(&record);
        let confirmation = build_confirmation(&record);
        match format {
            RenderMode::Text => println!("{}", render_text(&confirmation)),
            RenderMode::Json => {
                println!("{}", serde_json::to_string_pretty(&render_json_ui(&confirmation))?)
            }
        }

        controller.reset()?;
        if !prompt_bool("Effectuer une nouvelle action ?", false)? {
            break;
        }
    }
    Ok(())
}

fn run_validate(category: &str, fields_path: PathBuf) -> CliResult<()> {
    let fields_json = fs::read_to_string(fields_path)?;
    let response = parse_component_result(&component_engage::validate_fields(
        category,
        &fields_json,
    ))?;

    if response["valid"] == true {
        println!("Validation : valide");
        return Ok(());
    }

    println!("Validation : invalide");
    if let Some(errors) = response["errors"].as_object() {
        for (field, message) in errors {
            println!("  {} : {}", field, message.as_str().unwrap_or("erreur"));
        }
    }
    Err("validation échouée".into())
}

fn run_schema(category: &str, examples: bool) -> CliResult<()> {
    let response = if examples {
        component_engage::example_fields(category)
    } else {
        component_engage::field_schema(category)
    };
    let value = parse_component_result(&response)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn parse_component_result(response: &str) -> CliResult<Value> {
    let value: Value = serde_json::from_str(response)?;
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        Err(error.into())
    } else {
        Ok(value)
    }
}

fn prompt_category() -> CliResult<Category> {
    println!("Choisissez un type d'action :");
    for category in Category::ALL {
        println!(" - {} ({})", category.as_str(), category.label());
    }
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let trimmed = input.trim();
        if trimmed.is_empty() {
            println!("Veuillez sélectionner un type d'action.");
            continue;
        }
        match trimmed.parse::<Category>() {
            Ok(category) => return Ok(category),
            Err(_) => println!("Type d'action inconnu '{}'.", trimmed),
        }
    }
}

fn prompt_field(
    field: &FieldDescriptor,
    index: usize,
    total: usize,
    presenter: &WizardPresenter,
) -> CliResult<Option<FieldValue>> {
    loop {
        let prompt = PromptContext::new(field, index, total);
        presenter.show_prompt(&prompt);
        print!("> ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            return Err("session abandonnée".into());
        }

        match parse_field_input(field, trimmed) {
            Ok(value) => return Ok(value),
            Err(err) => presenter.show_parse_error(&err),
        }
    }
}

/// Type-level parsing of one raw answer. Business rules (email shape,
/// lengths, phone format) stay with the validator at submit time.
fn parse_field_input(
    field: &FieldDescriptor,
    raw: &str,
) -> Result<Option<FieldValue>, AnswerParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        if field.required {
            return Err(AnswerParseError::new("Cette réponse est obligatoire.", None));
        }
        return Ok(None);
    }

    match field.kind {
        FieldKind::Numeric => {
            let parsed = trimmed.parse::<f64>();
            if parsed.map(|value| value.is_finite()).unwrap_or(false) {
                Ok(Some(FieldValue::text(trimmed)))
            } else {
                Err(AnswerParseError::new(
                    "Veuillez entrer un nombre.",
                    Some("nombre attendu (ex. 50.00)".to_string()),
                ))
            }
        }
        FieldKind::Choice(choices) => {
            if let Some(choice) = choices
                .iter()
                .find(|choice| choice.eq_ignore_ascii_case(trimmed))
            {
                Ok(Some(FieldValue::text(*choice)))
            } else {
                Err(AnswerParseError::new(
                    format!("Choisissez parmi : {}.", choices.join(", ")),
                    Some(format!("valeurs possibles : {}", choices.join(", "))),
                ))
            }
        }
        _ => Ok(Some(FieldValue::text(trimmed))),
    }
}

fn prompt_bool(prompt: &str, default: bool) -> CliResult<bool> {
    let default_hint = if default { "O" } else { "N" };
    loop {
        print!("{} (o/n) [{}] : ", prompt.trim(), default_hint);
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        match input.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "o" | "oui" | "y" | "yes" => return Ok(true),
            "n" | "non" | "no" => return Ok(false),
            other => {
                println!("Réponse invalide '{}'. Attendu oui ou non.", other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use assert_fs::prelude::*;

    fn descriptor_named(category: Category, name: &str) -> &'static FieldDescriptor {
        category
            .field_set()
            .iter()
            .find(|field| field.name == name)
            .expect("field exists")
    }

    #[test]
    fn parse_field_input_requires_required_fields() {
        let nom = descriptor_named(Category::Contact, "nom");
        assert!(parse_field_input(nom, "").is_err());
        assert_eq!(
            parse_field_input(nom, "Marie").unwrap(),
            Some(FieldValue::text("Marie"))
        );
    }

    #[test]
    fn parse_field_input_skips_empty_optional_fields() {
        let telephone = descriptor_named(Category::Contact, "telephone");
        assert_eq!(parse_field_input(telephone, "").unwrap(), None);
    }

    #[test]
    fn parse_field_input_checks_numbers() {
        let montant = descriptor_named(Category::Don, "montant");
        assert!(parse_field_input(montant, "abc").is_err());
        assert_eq!(
            parse_field_input(montant, "25").unwrap(),
            Some(FieldValue::text("25"))
        );
    }

    #[test]
    fn parse_field_input_normalizes_choice_case() {
        let recurrence = descriptor_named(Category::Don, "recurrence");
        assert_eq!(
            parse_field_input(recurrence, "MENSUEL").unwrap(),
            Some(FieldValue::text("mensuel"))
        );
        assert!(parse_field_input(recurrence, "hebdomadaire").is_err());
    }

    #[test]
    fn validate_subcommand_accepts_a_valid_donation() -> CliResult<()> {
        let workspace = assert_fs::TempDir::new()?;
        let fields = workspace.child("don.json");
        fields.write_str(
            r#"{"nom": "Marie", "email": "marie@ex.com", "montant": "25", "recurrence": "mensuel"}"#,
        )?;

        let mut cmd = Command::cargo_bin("engage-form")?;
        let assert = cmd
            .arg("validate")
            .arg("--category")
            .arg("don")
            .arg("--fields")
            .arg(fields.path())
            .assert()
            .success();
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        assert!(stdout.contains("valide"));
        Ok(())
    }

    #[test]
    fn validate_subcommand_rejects_missing_fields() -> CliResult<()> {
        let workspace = tempfile::TempDir::new()?;
        let fields = workspace.path().join("don.json");
        fs::write(&fields, r#"{"nom": "Marie"}"#)?;

        let mut cmd = Command::cargo_bin("engage-form")?;
        let assert = cmd
            .arg("validate")
            .arg("--category")
            .arg("don")
            .arg("--fields")
            .arg(&fields)
            .assert()
            .failure();
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        assert!(stdout.contains("invalide"));
        Ok(())
    }

    #[test]
    fn schema_subcommand_prints_the_field_schema() -> CliResult<()> {
        let mut cmd = Command::cargo_bin("engage-form")?;
        let assert = cmd
            .arg("schema")
            .arg("--category")
            .arg("benevolat")
            .assert()
            .success();
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        assert!(stdout.contains("disponibilite"));
        Ok(())
    }
}
