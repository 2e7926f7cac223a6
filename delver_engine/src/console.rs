//! Console I/O helpers.
//!
//! Thin wrappers for writing (optionally colored) text, prompting, and reading
//! answers. Every function takes its sink and source as parameters so the same
//! code drives the real terminal and in-memory buffers in tests.

use std::io::{BufRead, Read, Write};

use colored::{Color, Colorize};

use crate::error::DelverError;
use crate::math;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Text shown by [`press_any_key_alert`].
pub const PRESS_ANY_KEY: &str = "Press Any Key To Continue...";

/// Write `message`, wrapped in a start/reset color sequence when `style` is set,
/// optionally followed by a line break.
///
/// # Errors
/// Returns an error if the sink rejects the write.
pub fn write<W: Write + ?Sized>(
    out: &mut W,
    message: &str,
    newline: bool,
    style: Option<Color>,
) -> Result<(), DelverError> {
    match style {
        Some(color) => write!(out, "{}", message.color(color))?,
        None => out.write_all(message.as_bytes())?,
    }
    if newline {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write `count` line breaks.
///
/// # Errors
/// `ZeroNewLines` if `count` is zero, or an I/O error from the sink.
pub fn write_new_lines<W: Write + ?Sized>(out: &mut W, count: usize) -> Result<(), DelverError> {
    if count == 0 {
        return Err(DelverError::ZeroNewLines);
    }
    out.write_all("\n".repeat(count).as_bytes())?;
    Ok(())
}

/// Clear the screen using ANSI escapes.
///
/// # Errors
/// Returns an error if the sink rejects the write.
pub fn clear_console<W: Write + ?Sized>(out: &mut W) -> Result<(), DelverError> {
    out.write_all(CLEAR_SEQUENCE.as_bytes())?;
    Ok(())
}

/// Write a heading framed by dashed rules.
///
/// The rule is `heading length + 2 * min_padding` wide, but never narrower than
/// `min_length`; the heading is centered between the rules.
///
/// # Errors
/// Returns an error if the sink rejects the write.
pub fn write_heading<W: Write + ?Sized>(
    out: &mut W,
    heading: &str,
    min_length: usize,
    min_padding: usize,
    clear: bool,
    style: Option<Color>,
) -> Result<(), DelverError> {
    if clear {
        clear_console(out)?;
    }
    let heading_width = heading.chars().count();
    let width = (heading_width + 2 * min_padding).max(min_length);
    let rule = "-".repeat(width);
    let padding = " ".repeat((width - heading_width) / 2);

    write(out, &rule, true, style)?;
    write(out, &format!("{padding}{heading}{padding}"), true, style)?;
    write(out, &rule, true, style)?;
    Ok(())
}

/// Read a single key (byte) from `input`. Returns `None` at end of input.
///
/// # Errors
/// Returns an error if reading from `input` fails.
pub fn get_key<R: Read + ?Sized>(input: &mut R) -> Result<Option<u8>, DelverError> {
    Ok((&mut *input).bytes().next().transpose()?)
}

/// Show an optional message and a "press any key" prompt, then wait for a key.
///
/// End of input counts as a key press.
///
/// # Errors
/// Returns an error if writing the prompt or reading the key fails.
pub fn press_any_key_alert<R, W>(
    input: &mut R,
    out: &mut W,
    message: Option<&str>,
    clear: bool,
    style: Option<Color>,
) -> Result<(), DelverError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    if clear {
        clear_console(out)?;
    }
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        write(out, message, true, style)?;
    }
    write(out, PRESS_ANY_KEY, true, style)?;
    out.flush()?;

    if let Some(key) = get_key(input)?
        && key != b'\n'
    {
        discard_rest_of_line(input)?;
    }
    Ok(())
}

/// Ask a yes/no question, repeating until the user presses `y` or `n`.
///
/// Keys are read one at a time; anything else prints a red `Invalid!` and asks
/// again. Line breaks between keys are ignored.
///
/// # Errors
/// `InputClosed` if input ends before a valid answer, or an I/O error.
pub fn ask_yes_no<R, W>(
    input: &mut R,
    out: &mut W,
    question: &str,
    clear: bool,
    style: Option<Color>,
) -> Result<bool, DelverError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        if clear {
            clear_console(out)?;
        }
        write(out, &format!("{question}\nInput (y/n): "), false, style)?;
        out.flush()?;

        let key = loop {
            match get_key(input)? {
                None => return Err(DelverError::InputClosed),
                Some(b'\n' | b'\r') => {},
                Some(key) => break key,
            }
        };

        let answer = match key.to_ascii_lowercase() {
            b'y' => Some(true),
            b'n' => Some(false),
            _ => None,
        };
        if let Some(answer) = answer {
            discard_rest_of_line(input)?;
            return Ok(answer);
        }

        write_new_lines(out, 1)?;
        write(out, "Invalid!", true, Some(Color::Red))?;
    }
}

/// Prompt for an integer in `min..=max`, repeating until one is entered.
///
/// `message` replaces the default prompt text.
///
/// # Errors
/// `InputClosed` if input ends first, or an I/O error.
pub fn get_int_from_user<R, W>(
    input: &mut R,
    out: &mut W,
    min: i64,
    max: i64,
    message: Option<&str>,
    clear: bool,
    style: Option<Color>,
) -> Result<i64, DelverError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let prompt = match message {
        Some(message) => message.to_string(),
        None => format!("Please enter a number between {min} and {max} inclusively: "),
    };
    loop {
        if clear {
            clear_console(out)?;
        }
        write(out, &prompt, false, style)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(DelverError::InputClosed);
        }
        let answer = line.trim();
        // too-large values pass is_numeric but fail to parse; ask again
        if is_numeric(answer)
            && let Ok(number) = answer.parse::<i64>()
            && math::is_between(number, min, max, true, true)?
        {
            return Ok(number);
        }
    }
}

/// List `options` as a numbered menu and return the zero-based index chosen.
///
/// Returns `None` when there is nothing to choose from.
///
/// # Errors
/// `InputClosed` if input ends first, or an I/O error.
pub fn get_index_of_user_choice<R, W, S>(
    input: &mut R,
    out: &mut W,
    options: &[S],
    style: Option<Color>,
) -> Result<Option<usize>, DelverError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    S: AsRef<str>,
{
    if options.is_empty() {
        return Ok(None);
    }
    for (number, option) in options.iter().enumerate() {
        write(out, &format!("{}) {}", number + 1, option.as_ref()), true, style)?;
    }
    let last = i64::try_from(options.len()).unwrap_or(i64::MAX);
    let choice = get_int_from_user(input, out, 1, last, Some("Enter Your Choice: "), false, style)?;
    Ok(usize::try_from(choice - 1).ok())
}

/// True if `text` is an optionally negative run of ASCII digits.
///
/// Length is not limited, so values too large for any integer type still count.
pub fn is_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').filter(|rest| !rest.is_empty()).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// True if `text` is non-empty and made only of ASCII letters and digits.
pub fn is_alphanumeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn discard_rest_of_line<R: BufRead + ?Sized>(input: &mut R) -> Result<(), DelverError> {
    let mut rest = Vec::new();
    input.read_until(b'\n', &mut rest)?;
    Ok(())
}
