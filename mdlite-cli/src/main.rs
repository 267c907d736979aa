// Command-line interface for mdlite
//
// This binary renders a small Markdown dialect to HTML, either as a bare fragment or as a
// standalone page, and exposes the rule pipeline for inspection.
//
// Converting:
//
// The target format comes from --to, else from the extension of --output, else from the
// `convert.to` configuration key. Input "-" reads from stdin.
// Usage:
//  mdlite <input> [--to <format>] [--output <file>]           - Convert (default)
//  mdlite convert <input> [--to <format>] [--output <file>]   - Same as above (explicit)
//  mdlite inspect <input> [<transform>]                       - Execute a transform (defaults to "trace-simple")
//  mdlite generate-css                                        - Print the baseline CSS
//  mdlite --list-transforms                                   - List transforms, formats and rules
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Known keys update the configuration, the rest are
// handed to the output format.
// Example:
//  mdlite notes.md --to html-document --extra-theme serif --extra-title "Notes"

use mdlite_cli::transforms;
use mdlite_cli::CliError;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdlite_config::{Loader, MdliteConfig};
use mdlite_render::formats::{get_default_css, DocumentFormat, DocumentOptions, DocumentTheme};
use mdlite_render::{Format, FormatRegistry, RuleSet};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "generate-css", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following argument that is not a flag is this key's value
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Insert the implicit `convert` subcommand when the first argument is an input path.
fn inject_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    let is_input = first == "-" || !first.starts_with('-');
    if !is_input || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }

    let mut new_args = vec![args[0].clone(), "convert".to_string()];
    new_args.extend_from_slice(&args[1..]);
    Some(new_args)
}

fn build_cli() -> Command {
    Command::new("mdlite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A small Markdown to HTML converter")
        .long_about(
            "mdlite renders a lightweight Markdown dialect to HTML.\n\n\
            Commands:\n  \
            - convert: Render Markdown to an HTML fragment or a standalone page\n  \
            - inspect: Show how blocks are split and which rules rewrite them\n  \
            - generate-css: Print the baseline stylesheet\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdlite notes.md                            # HTML fragment to stdout\n  \
            mdlite notes.md -o notes.html              # Standalone page (detected from .html)\n  \
            mdlite notes.md --to html-document --extra-theme serif\n  \
            cat notes.md | mdlite -                    # Read from stdin\n  \
            mdlite inspect notes.md                    # Rule-by-rule trace",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms, formats and rules")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdlite.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert Markdown to HTML (default command)")
                .long_about(
                    "Render a Markdown file to HTML.\n\n\
                    Formats:\n  \
                    - html:          HTML fragment, one <p> per block\n  \
                    - html-document: Standalone HTML5 page with embedded CSS (.html, .htm)\n\n\
                    The target format is taken from --to, then from the extension of\n\
                    --output, then from the convert.to configuration key.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdlite convert notes.md                        # Fragment to stdout\n  \
                    mdlite convert notes.md -o notes.html          # Standalone page\n  \
                    mdlite notes.md --to html-document             # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (html, html-document)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how a document is rendered")
                .long_about(
                    "View the rendering pipeline at different stages.\n\n\
                    Transforms:\n  \
                    - blocks-simple: One line per block\n  \
                    - blocks-json:   Blocks with their HTML as JSON\n  \
                    - trace-simple:  Rules that rewrote each block (default)\n  \
                    - trace-json:    The same trace as JSON\n  \
                    - rules:         The rule table in application order\n\n\
                    Extra Parameters:\n  \
                    --extra-show-unmatched   Also list rules that did not match\n\n\
                    Examples:\n  \
                    mdlite inspect notes.md\n  \
                    mdlite inspect notes.md blocks-json\n  \
                    mdlite inspect notes.md --extra-show-unmatched",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'trace-simple'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the baseline CSS used for standalone pages")
                .long_about(
                    "Outputs the baseline CSS embedded in html-document output.\n\n\
                    Save it, edit it, and point convert.document.custom_css (or\n\
                    --extra-css-path) at the result to extend the default styles.\n\n\
                    Examples:\n  \
                    mdlite generate-css > custom.css",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match inject_default_subcommand(&cleaned_args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    if let Err(err) = run(&matches, extra_params) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches, mut extra_params: HashMap<String, String>) -> Result<(), CliError> {
    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    init_logging(matches.get_flag("verbose"), &config);

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return Ok(());
    }

    apply_config_overrides(&mut config, &mut extra_params)?;

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .map(|s| s.as_str())
                .unwrap_or("-");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &extra_params, &config)
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .map(|s| s.as_str())
                .unwrap_or("-");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config)
        }
        Some(("generate-css", _)) => {
            print!("{}", get_default_css());
            Ok(())
        }
        _ => Err(CliError::Usage(
            "Unknown subcommand. Use --help for usage information.".to_string(),
        )),
    }
}

/// `--verbose` wins, then `RUST_LOG`, then the configured level.
fn init_logging(verbose: bool, config: &MdliteConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&config.log.level)
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MdliteConfig,
) -> Result<(), CliError> {
    let target = resolve_target(&FormatRegistry::default(), to, output, config);
    let registry = registry_for_target(config, &target)?;
    // Fail on an unknown target before touching the input
    registry.get(&target)?;

    let source = read_source(input)?;
    debug!(input, target = %target, "converting");

    let rendered = if extra_params.is_empty() {
        registry.render(&source, &target)?
    } else {
        registry.render_with_options(&source, &target, extra_params)?
    };
    let rendered = with_trailing_newline(rendered);

    match output {
        Some(path) => fs::write(path, rendered).map_err(|source| CliError::Write {
            path: path.to_string(),
            source,
        }),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &MdliteConfig,
) -> Result<(), CliError> {
    let source = read_source(path)?;
    let params = build_inspect_params(config, extra_params);
    let output = transforms::execute_transform(&source, transform, &params)?;
    print!("{output}");
    Ok(())
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description())
            .unwrap_or_default();
        println!("  {format_name:<14} {description}");
    }

    println!("\nRules (in order):");
    for rule in RuleSet::standard().rules() {
        println!("  {}", rule.name());
    }
}

/// Target format: `--to`, then the extension of `--output`, then `convert.to`.
fn resolve_target(
    registry: &FormatRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &MdliteConfig,
) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.convert.to.clone())
}

/// The default registry, with the document format seeded from configuration.
///
/// `convert.document.custom_css` is only read when `target` is the document format.
fn registry_for_target(config: &MdliteConfig, target: &str) -> Result<FormatRegistry, CliError> {
    let document = &config.convert.document;
    let mut options = DocumentOptions::from(document);
    let css_path = document
        .custom_css
        .as_ref()
        .filter(|_| target == DocumentFormat::default().name());
    if let Some(css_path) = css_path {
        let css = fs::read_to_string(css_path).map_err(|source| CliError::Read {
            path: css_path.clone(),
            source,
        })?;
        options.extra_css = Some(css);
    }

    let mut registry = FormatRegistry::default();
    registry.register(DocumentFormat::new(options));
    Ok(registry)
}

fn read_source(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| CliError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok(source);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<MdliteConfig, CliError> {
    let loader = Loader::new().with_optional_file("mdlite.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    Ok(loader.build()?)
}

fn apply_config_overrides(
    config: &mut MdliteConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<(), CliError> {
    let document = &mut config.convert.document;

    if let Some(title) = extra_params.remove("title") {
        document.title = title;
    }
    if let Some(lang) = extra_params.remove("lang") {
        document.lang = lang;
    }
    if let Some(raw) = extra_params.remove("theme") {
        document.theme = parse_theme_arg(&raw)?;
    }
    // `css` is CSS text for the document format, so it stays in the extras
    if let Some(path) = take_override(extra_params, &["css-path"]) {
        document.custom_css = Some(path);
    }

    if let Some(raw) = extra_params.remove("show-unmatched") {
        config.inspect.trace.show_unmatched = parse_bool_arg("show-unmatched", &raw)?;
    }

    Ok(())
}

fn build_inspect_params(
    config: &MdliteConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "show-unmatched".to_string(),
        config.inspect.trace.show_unmatched.to_string(),
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_theme_arg(raw: &str) -> Result<DocumentTheme, CliError> {
    raw.to_lowercase()
        .parse()
        .map_err(|err| CliError::Usage(format!("{err} (from --extra-theme)")))
}

fn parse_bool_arg(flag: &str, raw: &str) -> Result<bool, CliError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(CliError::Usage(format!(
            "Invalid boolean value '{other}' for --extra-{flag}"
        ))),
    }
}
