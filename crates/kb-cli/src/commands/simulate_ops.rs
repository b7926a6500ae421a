use kb_core::{AutocapitalizationMode, KeyboardLocale, KeyboardType};
use kb_session::{KeyboardAction, KeyboardSession};

/// Keyboard state after one simulated key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimStep {
    pub key: String,
    pub keyboard_type: KeyboardType,
    pub changed: bool,
    pub text: String,
}

fn key_label(ch: char) -> String {
    match ch {
        ' ' => "␣".to_string(),
        '\n' => "⏎".to_string(),
        _ => ch.to_string(),
    }
}

/// Type `input` into a fresh session one key at a time. `#` switches to the
/// numeric keyboard and `@` to the symbolic one instead of inserting text.
pub fn simulate(
    input: &str,
    autocapitalization: Option<AutocapitalizationMode>,
    locale: &str,
    start: Option<KeyboardType>,
) -> Vec<SimStep> {
    let mut session = KeyboardSession::new(KeyboardLocale::new(locale), autocapitalization);
    if let Some(t) = start {
        session.handle_action(KeyboardAction::SwitchKeyboard(t));
    }
    input
        .chars()
        .map(|ch| {
            let action = match ch {
                ' ' => KeyboardAction::Space,
                '\n' => KeyboardAction::Newline,
                '#' => KeyboardAction::SwitchKeyboard(KeyboardType::Numeric),
                '@' => KeyboardAction::SwitchKeyboard(KeyboardType::Symbolic),
                _ => KeyboardAction::Character(ch.to_string()),
            };
            let resp = session.handle_action(action);
            SimStep {
                key: key_label(ch),
                keyboard_type: resp.keyboard_type,
                changed: resp.keyboard_type_changed,
                text: session.text_before_cursor().unwrap_or_default().to_string(),
            }
        })
        .collect()
}

pub fn simulate_cmd(
    input: &str,
    autocapitalization: Option<&str>,
    locale: &str,
    start: Option<&str>,
) {
    let mode = die!(
        autocapitalization
            .map(str::parse::<AutocapitalizationMode>)
            .transpose(),
        "Error: {}"
    );
    let start: Option<KeyboardType> = die!(
        start.map(str::parse::<KeyboardType>).transpose(),
        "Error: {}"
    );

    for step in simulate(input, mode, locale, start) {
        let marker = if step.changed { "*" } else { " " };
        println!(
            "{:>2} {marker} {:<24} {:?}",
            step.key,
            step.keyboard_type.to_string(),
            step.text
        );
    }
}
