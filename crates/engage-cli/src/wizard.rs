use std::fmt::Write;

use engage_spec::{Category, ErrorMap, FieldDescriptor, FieldKind, SubmissionRecord};

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: field prompts only.
    Clean,
    /// Verbose output: field sets, error details, parse expectations.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Responsible for printing prompts and results around the form session.
pub struct WizardPresenter {
    verbosity: Verbosity,
    header_printed: bool,
    show_record_json: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity, show_record_json: bool) -> Self {
        Self {
            verbosity,
            header_printed: false,
            show_record_json,
        }
    }

    pub fn show_header(&mut self, category: Category) {
        if self.header_printed {
            return;
        }
        println!("Type d'action : {}", category.label());
        if self.verbosity.is_verbose() {
            self.print_field_set(category);
        }
        self.header_printed = true;
    }

    fn print_field_set(&self, category: Category) {
        println!("Champs du formulaire :");
        for field in category.field_set() {
            let mut entry = format!(" - {} ({})", field.name, field.label);
            if field.required {
                entry.push_str(" [obligatoire]");
            }
            println!("{}", entry);
        }
    }

    pub fn show_prompt(&self, prompt: &PromptContext) {
        let mut line = format!("{}/{} {}", prompt.index, prompt.total, prompt.label);
        if prompt.required {
            line.push_str(" *");
        }
        if let Some(hint) = &prompt.hint {
            line.push(' ');
            line.push_str(hint);
        }
        println!("{}", line);
        if self.verbosity.is_verbose()
            && let Some(placeholder) = prompt.placeholder
        {
            println!("Exemple : {}", placeholder);
        }
    }

    pub fn show_parse_error(&self, error: &AnswerParseError) {
        eprintln!("Réponse invalide : {}", error.user_message);
        if self.verbosity.is_verbose()
            && let Some(debug) = &error.debug_message
        {
            eprintln!("  Attendu : {}", debug);
        }
    }

    pub fn show_field_errors(&self, errors: &ErrorMap) {
        eprintln!("Le formulaire contient des erreurs :");
        for (field, message) in errors {
            eprintln!("  {} : {}", field, message);
        }
    }

    pub fn show_completion(&self, record: &SubmissionRecord) {
        println!("Envoyé ✅");
        match record.to_cbor() {
            Ok(bytes) => {
                println!("Enregistrement (CBOR hex) : {}", encode_hex(&bytes));
            }
            Err(err) => {
                eprintln!("Échec de la sérialisation CBOR : {}", err);
            }
        }
        if self.show_record_json {
            match record.to_json_pretty() {
                Ok(pretty) => println!("{}", pretty),
                Err(err) => {
                    eprintln!("Échec de la sérialisation JSON : {}", err);
                }
            }
        }
    }
}

/// Context used to format a single field prompt.
pub struct PromptContext {
    pub index: usize,
    pub total: usize,
    pub label: &'static str,
    pub required: bool,
    pub hint: Option<String>,
    pub placeholder: Option<&'static str>,
}

impl PromptContext {
    pub fn new(field: &FieldDescriptor, index: usize, total: usize) -> Self {
        Self {
            index,
            total,
            label: field.label,
            required: field.required,
            hint: kind_hint(field.kind),
            placeholder: field.placeholder,
        }
    }
}

fn kind_hint(kind: FieldKind) -> Option<String> {
    match kind {
        FieldKind::Email => Some("(adresse@exemple.fr)".to_string()),
        FieldKind::Phone => Some("(+33 6 12 34 56 78 ou 06...)".to_string()),
        FieldKind::Numeric => Some("(nombre)".to_string()),
        FieldKind::Choice(choices) if !choices.is_empty() => {
            Some(format!("({})", choices.join("/")))
        }
        _ => None,
    }
}

/// Error produced when parsing a field answer from the user.
#[derive(Debug)]
pub struct AnswerParseError {
    pub user_message: String,
    pub debug_message: Option<String>,
}

impl AnswerParseError {
    pub fn new(user_message: impl Into<String>, debug_message: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            debug_message,
        }
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(&mut encoded, "{:02x}", byte).expect("writing to string cannot fail");
    }
    encoded
}
