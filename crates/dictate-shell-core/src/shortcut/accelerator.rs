//! Translation of user-facing shortcut descriptors into accelerators.
//!
//! A descriptor is a `+`-joined list of modifier tokens followed by one main
//! key, e.g. `Ctrl+Shift+S`. Only `Ctrl`, `Alt` and `Shift` are recognized
//! as modifiers; any other modifier token is dropped. The main key must be a
//! single uppercase letter, a single digit, or `F1` through `F19`.

use crate::{CoreResult, ShellError};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;

const DESCRIPTOR_SEPARATOR: char = '+';
const HIGHEST_FUNCTION_KEY: u8 = 19;

/// The non-modifier key of an accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainKey {
    /// `A` through `Z`.
    Letter(char),
    /// `0` through `9`.
    Digit(char),
    /// `F1` through `F19`.
    Function(u8),
}

impl MainKey {
    /// Parse a main-key token, matching the whole token.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => Some(MainKey::Letter(c)),
            (Some(c), None) if c.is_ascii_digit() => Some(MainKey::Digit(c)),
            _ => Self::parse_function(token),
        }
    }

    fn parse_function(token: &str) -> Option<Self> {
        let number = token.strip_prefix('F')?;
        if number.is_empty()
            || number.starts_with('0')
            || !number.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        number
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=HIGHEST_FUNCTION_KEY).contains(n))
            .map(MainKey::Function)
    }
}

impl fmt::Display for MainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MainKey::Letter(c) | MainKey::Digit(c) => write!(f, "{}", c),
            MainKey::Function(n) => write!(f, "F{}", n),
        }
    }
}

/// Modifier keys present in an accelerator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key.
    pub control: bool,
    /// Alt / Option key.
    pub alt: bool,
    /// Shift key.
    pub shift: bool,
}

impl Modifiers {
    /// Detect modifiers among descriptor tokens. Unknown tokens are ignored.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .fold(Self::default(), |mut modifiers, token| {
                match token {
                    "Ctrl" => modifiers.control = true,
                    "Alt" => modifiers.alt = true,
                    "Shift" => modifiers.shift = true,
                    _ => {}
                }
                modifiers
            })
    }

    /// True when no modifier is held.
    pub fn is_empty(&self) -> bool {
        !(self.control || self.alt || self.shift)
    }
}

/// Platform accelerator: modifiers in fixed `Control`, `Alt`, `Shift` order,
/// then the main key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accelerator {
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// The main key.
    pub key: MainKey,
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = [
            (self.modifiers.control, "Control"),
            (self.modifiers.alt, "Alt"),
            (self.modifiers.shift, "Shift"),
        ];

        for (_, name) in segments.iter().filter(|(held, _)| *held) {
            write!(f, "{}{}", name, DESCRIPTOR_SEPARATOR)?;
        }

        write!(f, "{}", self.key)
    }
}

/// Parse a non-empty shortcut descriptor into an [`Accelerator`].
///
/// # Errors
///
/// Returns [`ShellError::InvalidMainKey`] when the last token is not a valid
/// main key.
#[track_caller]
pub fn parse_descriptor(descriptor: &str) -> CoreResult<Accelerator> {
    let mut tokens: Vec<&str> = descriptor.split(DESCRIPTOR_SEPARATOR).collect();
    let main_token = tokens.pop().unwrap_or_default();

    let key = MainKey::parse(main_token).ok_or_else(|| ShellError::InvalidMainKey {
        key: main_token.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Accelerator {
        modifiers: Modifiers::from_tokens(tokens),
        key,
    })
}
