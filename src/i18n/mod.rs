//! Runtime-selectable output language.
//!
//! Messages are written in English and used directly as lookup keys, so a
//! message without a translation falls back to its English text. The active
//! language is process-global and set once, before the command line is
//! parsed, so that help texts are translated as well.

mod catalog;

use crate::config::AqcConfig;
use std::fmt;
use std::sync::RwLock;

static CURRENT: RwLock<Language> = RwLock::new(Language::English);

const LANG_FLAGS: [&str; 3] = ["-l", "--lang", "--language"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Unknown codes map to English, like a missing catalog.
    pub fn from_code(code: &str) -> Self {
        let base = code
            .trim()
            .split(['_', '-', '.'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match base.as_str() {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Look up `msgid` in this language's catalog.
    pub fn translate<'a>(&self, msgid: &'a str) -> &'a str {
        match self {
            Language::English => msgid,
            Language::Chinese => catalog::zh(msgid).unwrap_or(msgid),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Language value given on the raw command line, if any.
pub fn lang_from_args(args: &[String]) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if let Some((flag, value)) = arg.split_once('=') {
            if LANG_FLAGS[1..].contains(&flag) && !value.is_empty() {
                return Some(value.to_string());
            }
            continue;
        }
        if LANG_FLAGS.contains(&arg.as_str()) {
            match args.get(i + 1) {
                Some(value) if !value.starts_with('-') => return Some(value.clone()),
                _ => {}
            }
        }
    }
    None
}

/// Pick the language code: command-line flag, then `AQC_LANG`, then
/// `AQ_LANG`, then the config file, then `en`.
pub fn resolve_language<F>(args: &[String], env: F, config: Option<&AqcConfig>) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lang_from_args(args)
        .or_else(|| env("AQC_LANG").filter(|v| !v.trim().is_empty()))
        .or_else(|| env("AQ_LANG").filter(|v| !v.trim().is_empty()))
        .or_else(|| config.and_then(|c| c.lang.clone()))
        .unwrap_or_else(|| "en".to_string())
}

/// Set the process-wide output language.
pub fn init(code: &str) -> Language {
    let lang = Language::from_code(code);
    if let Ok(mut current) = CURRENT.write() {
        *current = lang;
    }
    tracing::debug!("output language set to {} (requested '{}')", lang, code);
    lang
}

pub fn current() -> Language {
    CURRENT.read().map(|l| *l).unwrap_or_default()
}

/// Translate a message into the current language.
pub fn t(msgid: &str) -> String {
    current().translate(msgid).to_string()
}

/// Translate a message and substitute its `{name}` placeholders.
pub fn tf(msgid: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
    format_message(current().translate(msgid), args)
}

pub fn format_message(template: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), &value.to_string());
    }
    out
}

/// Translate the about and help strings of a clap command tree.
pub fn localize_command(cmd: clap::Command) -> clap::Command {
    localize_for(cmd, current())
}

/// Translate a clap command tree into `lang`.
pub fn localize_for(cmd: clap::Command, lang: Language) -> clap::Command {
    if lang == Language::English {
        return cmd;
    }
    localize_tree(cmd, lang)
}

fn localize_tree(mut cmd: clap::Command, lang: Language) -> clap::Command {
    if let Some(about) = cmd.get_about().map(|a| a.to_string()) {
        cmd = cmd.about(help_in(lang, &about));
    }

    let ids: Vec<String> = cmd
        .get_arguments()
        .map(|a| a.get_id().as_str().to_string())
        .collect();
    for id in ids {
        cmd = cmd.mut_arg(id, |arg| match arg.get_help().map(|h| h.to_string()) {
            Some(help) => arg.help(help_in(lang, &help)),
            None => arg,
        });
    }

    let names: Vec<String> = cmd
        .get_subcommands()
        .map(|s| s.get_name().to_string())
        .collect();
    for name in names {
        cmd = cmd.mut_subcommand(name, |sub| localize_tree(sub, lang));
    }
    cmd
}

/// clap drops the final period of doc-comment help, so retry with it.
fn help_in(lang: Language, text: &str) -> String {
    let exact = lang.translate(text);
    if exact != text {
        return exact.to_string();
    }
    let dotted = format!("{text}.");
    match lang.translate(&dotted) {
        found if found != dotted => found.trim_end_matches(['.', '。']).to_string(),
        _ => text.to_string(),
    }
}

/// Placeholder names (`{name}`) used in a message.
pub fn placeholders(message: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = message;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code("zh_CN.UTF-8"), Language::Chinese);
        assert_eq!(Language::from_code("zh-TW"), Language::Chinese);
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("xx"), Language::English);
    }

    #[test]
    fn test_lang_from_args() {
        assert_eq!(lang_from_args(&args(&["aqc", "-l", "zh", "simbad"])).as_deref(), Some("zh"));
        assert_eq!(lang_from_args(&args(&["aqc", "simbad", "--language", "en"])).as_deref(), Some("en"));
        assert_eq!(lang_from_args(&args(&["aqc", "--lang=zh"])).as_deref(), Some("zh"));
        // A following flag is not a value.
        assert_eq!(lang_from_args(&args(&["aqc", "--lang", "--help"])), None);
        assert_eq!(lang_from_args(&args(&["aqc", "-l"])), None);
    }

    #[test]
    fn test_flag_selects_language() {
        let env = |k: &str| (k == "AQC_LANG").then(|| "en".to_string());
        let lang = resolve_language(&args(&["aqc", "-l", "zh"]), env, None);
        assert_eq!(lang, "zh");
    }

    #[test]
    fn test_env_selects_language() {
        let env = |k: &str| (k == "AQC_LANG").then(|| "zh".to_string());
        assert_eq!(resolve_language(&args(&["aqc"]), env, None), "zh");

        let legacy = |k: &str| (k == "AQ_LANG").then(|| "zh".to_string());
        assert_eq!(resolve_language(&args(&["aqc"]), legacy, None), "zh");
    }

    #[test]
    fn test_config_selects_language() {
        let config = AqcConfig {
            lang: Some("zh".to_string()),
            ..AqcConfig::default()
        };
        assert_eq!(resolve_language(&args(&["aqc"]), no_env, Some(&config)), "zh");
        assert_eq!(resolve_language(&args(&["aqc"]), no_env, None), "en");
    }

    #[test]
    fn test_translate_and_fallback() {
        let msg = "User interrupted the query. Exiting safely.";
        assert_ne!(Language::Chinese.translate(msg), msg);
        assert_eq!(Language::English.translate(msg), msg);
        assert_eq!(Language::Chinese.translate("not a catalog entry"), "not a catalog entry");
    }

    #[test]
    fn test_help_without_final_period() {
        assert_eq!(help_in(Language::Chinese, "Enable verbose logging"), "启用详细日志");
        assert_eq!(help_in(Language::Chinese, "Status"), "状态");
        assert_eq!(help_in(Language::English, "Enable verbose logging"), "Enable verbose logging");
    }

    #[test]
    fn test_localize_command_tree() {
        let cmd = clap::Command::new("aqc")
            .about("Query astronomical archives from the command line.")
            .arg(clap::Arg::new("verbose").long("verbose").help("Enable verbose logging"))
            .subcommand(clap::Command::new("gaia").about("Query the Gaia archive"));

        let zh = localize_for(cmd.clone(), Language::Chinese);
        assert_eq!(zh.get_about().map(|a| a.to_string()).as_deref(), Some("在命令行中查询天文数据档案。"));
        let verbose = zh.get_arguments().find(|a| a.get_id() == "verbose").unwrap();
        assert_eq!(verbose.get_help().map(|h| h.to_string()).as_deref(), Some("启用详细日志"));
        let gaia = zh.find_subcommand("gaia").unwrap();
        assert_eq!(gaia.get_about().map(|a| a.to_string()).as_deref(), Some("查询 Gaia 档案"));

        let en = localize_for(cmd, Language::English);
        assert_eq!(en.find_subcommand("gaia").unwrap().get_about().map(|a| a.to_string()).as_deref(), Some("Query the Gaia archive"));
    }

    #[test]
    fn test_format_message() {
        let out = format_message("Found {count} result(s) in {catalog}", &[("count", &3), ("catalog", &"fp_psc")]);
        assert_eq!(out, "Found 3 result(s) in fp_psc");
    }

    #[test]
    fn test_catalog_placeholders_match() {
        for (msgid, translated) in catalog::entries() {
            let mut expected = placeholders(msgid);
            let mut actual = placeholders(translated);
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(expected, actual, "placeholder mismatch for {msgid:?}");
        }
    }
}
