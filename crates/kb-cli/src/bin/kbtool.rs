use clap::{Parser, Subcommand};

use kb_cli::commands::resolve_ops::ResolveOptions;
use kb_cli::commands::{config_ops, resolve_ops, simulate_ops};

#[derive(Parser)]
#[command(name = "kbtool", about = "Keyboard type resolution diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the keyboard type for one input context
    Resolve {
        /// Current keyboard type (alphabetic[:case], numeric, symbolic, emoji, custom:<name>)
        #[arg(long = "type", default_value = "alphabetic:lowercased")]
        keyboard_type: String,
        /// Autocapitalization mode (none, all_characters, sentences, words); omit if unavailable
        #[arg(long)]
        autocap: Option<String>,
        /// Text before the cursor (omit if unavailable)
        #[arg(long)]
        text: Option<String>,
        /// Locale identifier
        #[arg(long, default_value = "en_US")]
        locale: String,
        /// Override the derived new-sentence predicate
        #[arg(long)]
        new_sentence: Option<bool>,
        /// Override the derived new-word predicate
        #[arg(long)]
        new_word: Option<bool>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve JSON input contexts, one per line ("-" reads stdin)
    ResolveJson {
        /// Input JSONL file
        input: String,
    },
    /// Type text through a keyboard session and show the keyboard after each key
    Simulate {
        /// Text to type; '#' switches to numbers, '@' to symbols
        text: String,
        /// Autocapitalization mode
        #[arg(long, default_value = "sentences")]
        autocap: String,
        /// Simulate a host that does not report an autocapitalization mode
        #[arg(long, conflicts_with = "autocap")]
        no_autocap: bool,
        /// Locale identifier
        #[arg(long, default_value = "en_US")]
        locale: String,
        /// Keyboard type to start from
        #[arg(long = "type")]
        keyboard_type: Option<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            keyboard_type,
            autocap,
            text,
            locale,
            new_sentence,
            new_word,
            json,
        } => {
            let opts = ResolveOptions {
                keyboard_type: &keyboard_type,
                autocapitalization: autocap.as_deref(),
                text: text.as_deref(),
                locale: &locale,
                new_sentence,
                new_word,
            };
            resolve_ops::resolve_cmd(&opts, json);
        }
        Command::ResolveJson { input } => resolve_ops::resolve_json_cmd(&input),
        Command::Simulate {
            text,
            autocap,
            no_autocap,
            locale,
            keyboard_type,
        } => simulate_ops::simulate_cmd(
            &text,
            (!no_autocap).then_some(autocap.as_str()),
            &locale,
            keyboard_type.as_deref(),
        ),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
