use clap::{Arg, ArgAction, Command};
use indic_translate::{
    AppConfig, ProviderKind, SourceLanguage, TranslationResult, TranslationService,
    TranslatorForm, init_tracing,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

#[tokio::main]
async fn main() -> ExitCode {
    let matches = Command::new("indic-translate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate Tamil, Hindi or Telugu text to English")
        .arg(
            Arg::new("text")
                .help("Text to translate (read from stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Source language: Tamil, Hindi, Telugu, a code (ta, hi, te) or 'auto'")
                .default_value("Tamil"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of Google Translate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .short('i')
                .help("Translate line by line (:lang <language>, :clear, :quit)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a YAML config file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show provider and language details")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let mut config = match AppConfig::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };
    if matches.get_flag("mock") {
        config.translator.provider = ProviderKind::Mock;
    }
    let verbose = matches.get_flag("verbose");
    init_tracing(if verbose { "debug" } else { "warn" });

    let service = match config.build_service() {
        Ok(service) => service,
        Err(e) => {
            eprintln!("❌ Failed to initialize translator: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let language = matches
        .get_one::<String>("language")
        .map(String::as_str)
        .unwrap_or("Tamil");

    if matches.get_flag("interactive") {
        return run_interactive(&service, language, verbose).await;
    }

    let text = match matches.get_one::<String>("text") {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            if let Err(e) = tokio::io::stdin().read_to_string(&mut buf).await {
                eprintln!("❌ Failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let label = if language.eq_ignore_ascii_case("auto") {
        match SourceLanguage::detect(&text) {
            Some(lang) => lang.label(),
            None => {
                eprintln!("⚠️ Could not detect Tamil, Hindi or Telugu text");
                return ExitCode::FAILURE;
            }
        }
    } else {
        language.to_string()
    };

    if verbose {
        println!("🌍 {} → English ({})", label, service.provider_name());
    }

    match service.translate(&text, &label).await {
        TranslationResult::Translated { translated_text } => {
            println!("{}", translated_text);
            ExitCode::SUCCESS
        }
        TranslationResult::Failed { message, .. } => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

async fn run_interactive(service: &TranslationService, language: &str, verbose: bool) -> ExitCode {
    let mut form = TranslatorForm::new();
    if let Err(e) = form.select_language(language) {
        eprintln!("⚠️ {}", e);
        return ExitCode::FAILURE;
    }

    println!(
        "🈯 Translating {} → English. Commands: :lang <language>, :clear, :quit",
        form.language()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("❌ Failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        };

        if let Some(label) = lang_command(line.trim()) {
            match form.select_language(label) {
                Ok(lang) => println!("🌍 Source language: {}", lang),
                Err(e) => println!("⚠️ {}", e),
            }
            continue;
        }

        match line.trim() {
            ":quit" | ":q" => break,
            ":clear" => {
                form.clear();
                println!("🧹 Cleared");
            }
            _ => {
                form.set_input(line.as_str());
                let result = form.submit(service).await;
                if verbose && result.is_success() {
                    println!("[{} via {}]", form.language().code(), service.provider_name());
                }
                println!("{}", form.output());
            }
        }
    }

    ExitCode::SUCCESS
}

/// Argument of a `:lang <language>` command, or `None` for any other line
fn lang_command(line: &str) -> Option<&str> {
    let mut parts = line.splitn(2, char::is_whitespace);
    match parts.next() {
        Some(":lang") => Some(parts.next().unwrap_or("").trim()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_command_argument() {
        assert_eq!(lang_command(":lang hi"), Some("hi"));
        assert_eq!(lang_command(":lang   Telugu (తెలుగు) "), Some("Telugu (తెలుగు)"));
        assert_eq!(lang_command(":lang"), Some(""));
    }

    #[test]
    fn test_lang_command_requires_exact_word() {
        assert_eq!(lang_command(":language hi"), None);
        assert_eq!(lang_command(":langhi"), None);
        assert_eq!(lang_command("வணக்கம் :lang"), None);
    }
}
