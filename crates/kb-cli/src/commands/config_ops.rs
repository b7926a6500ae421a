use std::fs;

pub fn settings_export() {
    print!("{}", kb_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kb_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: {} sentence delimiters, {} word delimiters, end_sentence_on_double_space={}, double_tap_shift_locks_caps={}",
        s.document.sentence_delimiters().len(),
        s.document.word_delimiters().len(),
        s.behavior.end_sentence_on_double_space,
        s.behavior.double_tap_shift_locks_caps
    );
}
