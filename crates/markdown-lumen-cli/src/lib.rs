//! Argument handling and file plumbing for the `markdown-lumen` binary.

use anyhow::{Context, Result, bail};
use markdown_lumen_config::Config;
use markdown_lumen_engine::{RenderOptions, render_with};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

pub const USAGE: &str = "Usage: markdown-lumen [INPUT|-] [OUTPUT|-]";

/// Path argument meaning stdin or stdout.
const STDIO_ARG: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    File(PathBuf),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: Source,
    /// `None` when no OUTPUT argument was given.
    pub target: Option<Target>,
}

/// Parses the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.len() > 2 {
        bail!("Too many arguments\n{USAGE}");
    }

    let source = match args.first().map(String::as_str) {
        None | Some(STDIO_ARG) => Source::Stdin,
        Some(path) => Source::File(PathBuf::from(path)),
    };
    let target = args.get(1).map(|arg| match arg.as_str() {
        STDIO_ARG => Target::Stdout,
        path => Target::File(PathBuf::from(path)),
    });

    Ok(Invocation { source, target })
}

pub fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        escape_html: config.escape_html,
        diagram_language: config.diagram_language.clone(),
    }
}

/// Where the rendered markup goes.
///
/// An explicit OUTPUT wins. Otherwise a file input is written to
/// `<output_dir>/<stem>.html` when the config names an output directory.
/// Everything else goes to stdout.
pub fn resolve_target(invocation: &Invocation, config: &Config) -> Target {
    if let Some(target) = &invocation.target {
        return target.clone();
    }
    match (&invocation.source, &config.output_dir) {
        (Source::File(input), Some(dir)) => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "index".to_string());
            Target::File(dir.join(format!("{stem}.html")))
        }
        _ => Target::Stdout,
    }
}

fn read_source(source: &Source) -> Result<String> {
    match source {
        Source::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            Ok(text)
        }
        Source::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read document {}", path.display())),
    }
}

fn write_target(target: &Target, markup: &str) -> Result<()> {
    match target {
        Target::Stdout => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{markup}").context("Failed to write markup to stdout")?;
            Ok(())
        }
        Target::File(path) => write_file(path, markup),
    }
}

fn write_file(path: &Path, markup: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, format!("{markup}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads, renders and writes one document. Returns where it was written.
pub fn run(invocation: &Invocation, config: &Config) -> Result<Target> {
    let text = read_source(&invocation.source)?;
    let markup = render_with(&text, &render_options(config));
    let target = resolve_target(invocation, config);
    write_target(&target, &markup)?;

    if let Target::File(path) = &target {
        log::info!("Wrote {}", path.display());
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_means_stdin_to_stdout() {
        let inv = parse_args(args(&[])).unwrap();
        assert_eq!(inv.source, Source::Stdin);
        assert_eq!(inv.target, None);
        assert_eq!(resolve_target(&inv, &Config::default()), Target::Stdout);
    }

    #[test]
    fn dash_means_stdio() {
        let inv = parse_args(args(&["-", "-"])).unwrap();
        assert_eq!(inv.source, Source::Stdin);
        assert_eq!(inv.target, Some(Target::Stdout));
    }

    #[test]
    fn too_many_arguments_is_an_error() {
        let err = parse_args(args(&["a", "b", "c"])).unwrap_err();
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn output_dir_uses_input_stem() {
        let config = Config {
            output_dir: Some(PathBuf::from("/out")),
            ..Config::default()
        };
        let inv = parse_args(args(&["notes/today.md"])).unwrap();
        assert_eq!(
            resolve_target(&inv, &config),
            Target::File(PathBuf::from("/out/today.html"))
        );

        let inv = parse_args(args(&["notes/today.md", "x.html"])).unwrap();
        assert_eq!(
            resolve_target(&inv, &config),
            Target::File(PathBuf::from("x.html"))
        );

        let inv = parse_args(args(&["-"])).unwrap();
        assert_eq!(resolve_target(&inv, &config), Target::Stdout);
    }

    #[test]
    fn config_maps_to_render_options() {
        let config = Config {
            escape_html: true,
            diagram_language: "flow".to_string(),
            output_dir: None,
        };
        assert_eq!(
            render_options(&config),
            RenderOptions {
                escape_html: true,
                diagram_language: "flow".to_string(),
            }
        );
    }

    #[test]
    fn run_renders_file_into_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("doc.md");
        fs::write(&input, "# Hello\n\n<b>raw</b>\n").unwrap();

        let config = Config {
            escape_html: true,
            output_dir: Some(temp_dir.path().join("site")),
            ..Config::default()
        };
        let inv = Invocation {
            source: Source::File(input),
            target: None,
        };

        let target = run(&inv, &config).unwrap();
        let expected_path = temp_dir.path().join("site/doc.html");
        assert_eq!(target, Target::File(expected_path.clone()));

        let html = fs::read_to_string(expected_path).unwrap();
        assert_eq!(html, "<h1>Hello</h1>\n<p>&lt;b&gt;raw&lt;/b&gt;</p>\n");
    }

    #[test]
    fn missing_input_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let inv = Invocation {
            source: Source::File(temp_dir.path().join("absent.md")),
            target: Some(Target::Stdout),
        };
        let err = run(&inv, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("absent.md"));
    }
}
