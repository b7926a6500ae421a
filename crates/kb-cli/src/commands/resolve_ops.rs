use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use serde::Serialize;

use kb_core::settings::settings;
use kb_core::{
    resolve, AutocapitalizationMode, InputContext, KeyboardLocale, KeyboardType,
    ParseKeyboardError, Resolution,
};

/// Command-line description of one input context.
pub struct ResolveOptions<'a> {
    pub keyboard_type: &'a str,
    pub autocapitalization: Option<&'a str>,
    pub text: Option<&'a str>,
    pub locale: &'a str,
    /// Overrides the predicate derived from `text`.
    pub new_sentence: Option<bool>,
    /// Overrides the predicate derived from `text`.
    pub new_word: Option<bool>,
}

#[derive(Debug, Serialize)]
struct ResolutionOutput {
    keyboard_type: KeyboardType,
    should_persist: bool,
    step: &'static str,
}

impl From<Resolution> for ResolutionOutput {
    fn from(r: Resolution) -> Self {
        Self {
            keyboard_type: r.keyboard_type,
            should_persist: r.should_persist,
            step: r.step.as_str(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveLinesError {
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
}

pub fn build_context(opts: &ResolveOptions) -> Result<InputContext, ParseKeyboardError> {
    let keyboard_type: KeyboardType = opts.keyboard_type.parse()?;
    let autocapitalization = opts
        .autocapitalization
        .map(str::parse::<AutocapitalizationMode>)
        .transpose()?;
    let mut ctx = InputContext::from_document(
        keyboard_type,
        autocapitalization,
        opts.text.map(str::to_string),
        KeyboardLocale::new(opts.locale),
        &settings().document,
    );
    if let Some(v) = opts.new_sentence {
        ctx.is_cursor_at_new_sentence = v;
    }
    if let Some(v) = opts.new_word {
        ctx.is_cursor_at_new_word = v;
    }
    Ok(ctx)
}

pub fn resolve_cmd(opts: &ResolveOptions, json: bool) {
    let ctx = die!(build_context(opts), "Error: {}");
    let resolution = resolve(&ctx);
    if json {
        let out = ResolutionOutput::from(resolution);
        println!("{}", die!(serde_json::to_string_pretty(&out), "Error: {}"));
        return;
    }
    println!("context:");
    println!("  keyboard_type:       {}", ctx.keyboard_type);
    println!(
        "  autocapitalization:  {}",
        ctx.autocapitalization
            .map(|m| m.to_string())
            .unwrap_or_else(|| "(unavailable)".to_string())
    );
    println!("  text_before_cursor:  {:?}", ctx.text_before_cursor);
    println!("  new_sentence:        {}", ctx.is_cursor_at_new_sentence);
    println!("  new_word:            {}", ctx.is_cursor_at_new_word);
    println!(
        "  locale:              {} (rtl={})",
        ctx.locale,
        ctx.locale.is_right_to_left()
    );
    println!(
        "resolved: {} (step: {}, persist: {})",
        resolution.keyboard_type,
        resolution.step,
        if resolution.should_persist { "yes" } else { "no" }
    );
}

/// Resolve one JSON `InputContext` per line, writing one JSON resolution per
/// line. Blank lines are skipped. Returns the number of contexts resolved.
pub fn resolve_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
) -> Result<usize, ResolveLinesError> {
    let mut count = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let ctx: InputContext =
            serde_json::from_str(&line).map_err(|source| ResolveLinesError::Json {
                line: i + 1,
                source,
            })?;
        let out = ResolutionOutput::from(resolve(&ctx));
        let encoded = serde_json::to_string(&out)
            .map_err(|source| ResolveLinesError::Json { line: i + 1, source })?;
        writeln!(writer, "{encoded}")?;
        count += 1;
    }
    Ok(count)
}

pub fn resolve_json_cmd(input: &str) {
    let stdout = io::stdout();
    let result = if input == "-" {
        resolve_lines(io::stdin().lock(), stdout.lock())
    } else {
        let file = die!(File::open(input), "Error opening {input}: {}");
        resolve_lines(BufReader::new(file), stdout.lock())
    };
    let count = die!(result, "Error: {}");
    eprintln!("{count} contexts resolved");
}
