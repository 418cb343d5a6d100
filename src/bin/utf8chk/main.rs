//! `utf8chk` CLI: validate files or stdin against a named encoding variant.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use utf8chk::{validate, ErrorKind, Flags, LengthMode, ValidationError};

/// Validate text for UTF-8 (or a close cousin) compliance.
#[derive(Debug, Parser)]
#[command(name = "utf8chk")]
#[command(about = "Validate UTF-8, MUTF-8, CESU-8 and WTF-8 encoded text", long_about = None)]
#[command(version)]
struct Args {
    /// Input files to validate (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    files: Vec<PathBuf>,

    /// Which encoding variant to validate against
    #[arg(short, long, value_enum, default_value_t = Variant::Utf8)]
    variant: Variant,

    /// Treat the input as NUL-terminated instead of validating the whole buffer
    #[arg(long)]
    until_nul: bool,

    /// Reject overlong encodings, on top of the selected variant
    #[arg(long)]
    ban_overlong: bool,

    /// Reject overlong encodings except the canonical C0 80 encoding of NUL
    #[arg(long)]
    ban_overlong_except_null: bool,

    /// Reject any surrogate code point outright
    #[arg(long)]
    ban_surrogates: bool,

    /// Require surrogates to appear as well-formed high/low pairs
    #[arg(long)]
    check_surrogates: bool,

    /// Reject encoded Unicode noncharacters
    #[arg(long)]
    ban_noncharacters: bool,

    /// Reject embedded NUL bytes (only observable in explicit-length mode)
    #[arg(long)]
    ban_null_byte: bool,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    quiet: bool,

    /// Force color output even when not a TTY
    #[arg(short = 'C', long = "color")]
    color: bool,

    /// Disable color output
    #[arg(short = 'M', long = "no-color")]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    /// Standard UTF-8: no overlong encodings, no surrogates.
    Utf8,
    /// Modified UTF-8: C0 80 permitted for NUL, surrogates must pair.
    Mutf8,
    /// CESU-8: no overlong encodings, surrogates must pair.
    Cesu8,
    /// WTF-8: no overlong encodings, surrogates unpaired allowed.
    Wtf8,
    /// Every check this crate supports.
    Strict,
    /// Structural well-formedness only.
    Lax,
}

impl From<Variant> for Flags {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Utf8 => Flags::UTF8,
            Variant::Mutf8 => Flags::MUTF8,
            Variant::Cesu8 => Flags::CESU8,
            Variant::Wtf8 => Flags::WTF8,
            Variant::Strict => Flags::STRICT,
            Variant::Lax => Flags::LAX,
        }
    }
}

impl Args {
    /// The selected variant's preset, with any `--ban-*`/`--check-surrogates`
    /// override flags additionally applied on top of it.
    fn flags(&self) -> Flags {
        let mut flags: Flags = self.variant.into();
        if self.ban_overlong {
            flags |= Flags::empty().with_ban_overlong();
        }
        if self.ban_overlong_except_null {
            flags |= Flags::empty().with_ban_overlong_except_null();
        }
        if self.ban_surrogates {
            flags |= Flags::empty().with_ban_surrogates();
        }
        if self.check_surrogates {
            flags |= Flags::empty().with_check_surrogates();
        }
        if self.ban_noncharacters {
            flags |= Flags::empty().with_ban_noncharacters();
        }
        if self.ban_null_byte {
            flags |= Flags::empty().with_ban_null_byte();
        }
        flags
    }
}

/// Exit codes for the validate command.
mod exit_codes {
    /// Input is valid under the chosen variant.
    pub const SUCCESS: i32 = 0;
    /// Input is invalid (validation error).
    pub const INVALID: i32 = 1;
    /// I/O error (file not found, permission denied, etc.).
    pub const IO_ERROR: i32 = 2;
}

/// ANSI color codes for error output.
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const CARET: &str = "\x1b[1;32m"; // Bold green
    pub const MESSAGE: &str = "\x1b[0;33m"; // Yellow
}

/// Color scheme that can be disabled.
struct ColorScheme {
    error: &'static str,
    location: &'static str,
    caret: &'static str,
    message: &'static str,
    reset: &'static str,
}

impl ColorScheme {
    fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                error: colors::ERROR,
                location: colors::LOCATION,
                caret: colors::CARET,
                message: colors::MESSAGE,
                reset: colors::RESET,
            }
        } else {
            Self {
                error: "",
                location: "",
                caret: "",
                message: "",
                reset: "",
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let code = run(&args)?;
    std::process::exit(code);
}

fn run(args: &Args) -> Result<i32> {
    let use_color = if args.no_color {
        false
    } else if args.color {
        true
    } else {
        atty::is(atty::Stream::Stderr)
    };

    let scheme = ColorScheme::new(use_color);

    if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read from stdin")?;

        validate_input(&input, None, args, &scheme)
    } else {
        let mut any_invalid = false;
        let mut any_io_error = false;

        for path in &args.files {
            match fs::read(path) {
                Ok(input) => {
                    let filename = path.to_string_lossy();
                    let result = validate_input(&input, Some(&filename), args, &scheme)?;
                    if result == exit_codes::INVALID {
                        any_invalid = true;
                    }
                }
                Err(e) => {
                    any_io_error = true;
                    if !args.quiet {
                        eprintln!(
                            "{}error{}: {}: {}",
                            scheme.error,
                            scheme.reset,
                            path.display(),
                            e
                        );
                    }
                }
            }
        }

        if any_io_error {
            Ok(exit_codes::IO_ERROR)
        } else if any_invalid {
            Ok(exit_codes::INVALID)
        } else {
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn validate_input(
    input: &[u8],
    filename: Option<&str>,
    args: &Args,
    scheme: &ColorScheme,
) -> Result<i32> {
    let length_mode = if args.until_nul {
        LengthMode::UntilNul
    } else {
        LengthMode::Explicit(input.len())
    };

    match validate(input, length_mode, args.flags()) {
        Ok(_) => Ok(exit_codes::SUCCESS),
        Err(err) => {
            if !args.quiet {
                print_error(&err, input, filename, scheme);
            }
            Ok(exit_codes::INVALID)
        }
    }
}

/// Print a formatted error message with a context snippet around `err.offset`.
fn print_error(err: &ValidationError, input: &[u8], filename: Option<&str>, scheme: &ColorScheme) {
    eprintln!(
        "{}error{}: {}",
        scheme.error,
        scheme.reset,
        format_error_kind(err, input)
    );

    let location = match filename {
        Some(f) => format!("{}:{}", f, err.offset),
        None => format!("<stdin>:{}", err.offset),
    };
    eprintln!("  {}--> {}{}", scheme.location, location, scheme.reset);

    if let Some(snippet) = get_error_snippet(input, err.offset) {
        eprintln!("   {}|{}", scheme.location, scheme.reset);
        eprintln!(
            "   {}|{} {}",
            scheme.location, scheme.reset, snippet.line_content
        );
        let padding = " ".repeat(snippet.caret_offset);
        let carets = "^".repeat(snippet.caret_width.max(1));
        eprintln!(
            "   {}|{} {}{}{}{}{}",
            scheme.location,
            scheme.reset,
            padding,
            scheme.caret,
            carets,
            scheme.reset,
            format_error_hint(&err.kind, scheme)
        );
    }

    eprintln!();
}

fn format_error_kind(err: &ValidationError, input: &[u8]) -> String {
    let byte_info = if err.offset < input.len() {
        format!(" (byte 0x{:02X})", input[err.offset])
    } else {
        String::new()
    };
    format!("{}{}", err.kind, byte_info)
}

fn format_error_hint(kind: &ErrorKind, scheme: &ColorScheme) -> String {
    let hint = match kind {
        ErrorKind::UnexpectedContinuation => Some("bytes 0x80-0xBF are continuation bytes"),
        ErrorKind::InvalidStartByte => Some("bytes 0xF8-0xFF never start a sequence"),
        ErrorKind::Range => Some("maximum is U+10FFFF"),
        ErrorKind::Overlong => Some("use the shortest possible encoding"),
        ErrorKind::Noncharacter => Some("this code point is reserved as a noncharacter"),
        ErrorKind::NullByte => Some("embedded NUL rejected by --ban-null-byte semantics"),
        ErrorKind::Surrogate => Some("U+D800-U+DFFF are reserved for UTF-16"),
        ErrorKind::SurrogateLow => Some("no preceding high surrogate"),
        ErrorKind::SurrogateHigh => Some("no following low surrogate"),
        ErrorKind::ExpectedContinuation(_) => Some("expected byte 0x80-0xBF"),
        ErrorKind::Truncated(_) => None,
        ErrorKind::SurrogateTruncated(_) => None,
    };

    match hint {
        Some(h) => format!(" {}{}{}", scheme.message, h, scheme.reset),
        None => String::new(),
    }
}

/// A rendered snippet of input bytes around an error offset.
struct ErrorSnippet {
    line_content: String,
    caret_offset: usize,
    caret_width: usize,
}

/// Extract up to 80 bytes of lossily-decoded context around `offset`.
fn get_error_snippet(input: &[u8], offset: usize) -> Option<ErrorSnippet> {
    if input.is_empty() {
        return None;
    }

    let max_width = 80;
    let start = offset.saturating_sub(max_width / 2);
    let end = (offset + max_width / 2).min(input.len());
    let window = &input[start..end];
    let rendered = String::from_utf8_lossy(window);

    Some(ErrorSnippet {
        line_content: rendered.into_owned(),
        caret_offset: offset.saturating_sub(start),
        caret_width: 1,
    })
}
