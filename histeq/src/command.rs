//! User commands
//!
//! Each command maps to one key (`1` to `5`) and one name, and runs exactly
//! one operation on an [`ImageSession`](crate::ImageSession). The two
//! conversions can also be named by formula, as `gray:<conversion>`.

use crate::error::SessionError;
use histeq_color::GrayConversion;
use std::fmt;
use std::str::FromStr;

/// One discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Gray conversion by arithmetic mean
    ConvertArithmetic,
    /// Gray conversion by weighted luma
    ConvertWeighted,
    /// Rebuild the displayed histogram
    ShowHistogram,
    /// Equalize the image and refresh the histogram
    Equalize,
    /// Reload the source image
    Reload,
}

impl Command {
    /// Every command, in key order.
    pub const ALL: [Command; 5] = [
        Command::ConvertArithmetic,
        Command::ConvertWeighted,
        Command::ShowHistogram,
        Command::Equalize,
        Command::Reload,
    ];

    /// Look up the command bound to a key.
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.key() == key)
    }

    /// The conversion command running `conversion`.
    pub fn convert(conversion: GrayConversion) -> Self {
        match conversion {
            GrayConversion::ArithmeticMean => Self::ConvertArithmetic,
            GrayConversion::WeightedLuma => Self::ConvertWeighted,
        }
    }

    pub fn key(self) -> char {
        match self {
            Self::ConvertArithmetic => '1',
            Self::ConvertWeighted => '2',
            Self::ShowHistogram => '3',
            Self::Equalize => '4',
            Self::Reload => '5',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ConvertArithmetic => "arithmetic",
            Self::ConvertWeighted => "weighted",
            Self::ShowHistogram => "histogram",
            Self::Equalize => "equalize",
            Self::Reload => "reload",
        }
    }

    /// One-line description for the key help.
    pub fn description(self) -> &'static str {
        match self {
            Self::ConvertArithmetic => "convert the current image to grayscale (arithmetic mean)",
            Self::ConvertWeighted => "convert the current image to grayscale (weighted luma)",
            Self::ShowHistogram => "show the histogram of the current image",
            Self::Equalize => "equalize the current image (updates the histogram)",
            Self::Reload => "reload the original image",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = SessionError;

    /// Accepts a single key character, a command name or
    /// `gray:<conversion>`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((prefix, name)) = s.split_once(':')
            && prefix.eq_ignore_ascii_case("gray")
        {
            return Ok(Self::convert(name.parse()?));
        }
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(cmd) = Self::from_key(c)
        {
            return Ok(cmd);
        }
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == lower)
            .ok_or_else(|| SessionError::UnknownCommand(s.to_string()))
    }
}

/// Key help printed when the program starts.
pub fn help_text() -> String {
    let mut text = String::from("Keys:\n");
    for cmd in Command::ALL {
        text.push_str(&format!("{} - {}\n", cmd.key(), cmd.description()));
    }
    text.push_str("gray:<mean|luma> - convert by formula name\n");
    text.push_str("q - quit\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(Command::from_key('1'), Some(Command::ConvertArithmetic));
        assert_eq!(Command::from_key('4'), Some(Command::Equalize));
        assert_eq!(Command::from_key('5'), Some(Command::Reload));
        assert_eq!(Command::from_key('6'), None);
        assert_eq!(Command::from_key('q'), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3".parse::<Command>().unwrap(), Command::ShowHistogram);
        assert_eq!(" Equalize ".parse::<Command>().unwrap(), Command::Equalize);
        assert_eq!("weighted".parse::<Command>().unwrap(), Command::ConvertWeighted);
        assert!(matches!(
            "9".parse::<Command>(),
            Err(SessionError::UnknownCommand(_))
        ));
        assert!(matches!(
            "".parse::<Command>(),
            Err(SessionError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_parse_gray_conversion() {
        assert_eq!("gray:luma".parse::<Command>().unwrap(), Command::ConvertWeighted);
        assert_eq!("GRAY:Mean".parse::<Command>().unwrap(), Command::ConvertArithmetic);
        assert!(matches!(
            "gray:sepia".parse::<Command>(),
            Err(SessionError::Color(histeq_color::ColorError::UnknownConversion(_)))
        ));
        assert!(matches!(
            "red:luma".parse::<Command>(),
            Err(SessionError::UnknownCommand(_))
        ));
        assert_eq!(
            Command::convert(GrayConversion::WeightedLuma).to_string().parse::<Command>().unwrap(),
            Command::ConvertWeighted
        );
    }

    #[test]
    fn test_name_roundtrip() {
        for cmd in Command::ALL {
            assert_eq!(cmd.to_string().parse::<Command>().unwrap(), cmd);
        }
    }

    #[test]
    fn test_help_lists_every_key() {
        let help = help_text();
        for cmd in Command::ALL {
            assert!(help.contains(&format!("{} - ", cmd.key())));
        }
    }
}
