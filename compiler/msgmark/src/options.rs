//! `msgmark lex` options.

/// Options for the `lex` command.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LexOptions {
    /// Message file; `None` (or `-` on the command line) reads stdin.
    pub path: Option<String>,
    /// Print the unmerged head-parser stream.
    pub raw: bool,
    /// One JSON object per token instead of the text listing.
    pub json: bool,
    /// Scheme used to render scheme-less links (empty means http).
    pub default_scheme: String,
}

/// Parse `lex` options from command line arguments.
///
/// Unknown flags are reported on stderr and ignored. The first non-flag
/// argument is the input path; later ones are ignored with a warning.
pub fn parse_lex_options(args: &[String]) -> LexOptions {
    let mut options = LexOptions::default();
    let mut saw_path = false;

    for arg in args {
        if arg == "--raw" {
            options.raw = true;
        } else if arg == "--json" {
            options.json = true;
        } else if let Some(scheme) = arg.strip_prefix("--default-scheme=") {
            options.default_scheme = scheme.to_string();
        } else if arg == "-" {
            saw_path = true;
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        } else if saw_path {
            eprintln!("warning: extra argument '{arg}' ignored");
        } else {
            options.path = Some(arg.clone());
            saw_path = true;
        }
    }

    options
}
