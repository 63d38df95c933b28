//! Positional argument parsing for chat commands.

use std::str::FromStr;

use crate::error::{CommandError, CommandResult};
use crate::formula::{Condition, Population, Proximity, Region, Relevance, Reputation, Route};

use super::CommandName;

/// Enumerated argument that may be given by numeric code or by name
pub trait Coded: FromStr + Sized {
    /// Shown to the GM when the value is not recognised
    const EXPECTED: &'static str;

    fn from_code(code: i64) -> Option<Self>;
}

macro_rules! coded {
    ($ty:ty, $expected:literal) => {
        impl Coded for $ty {
            const EXPECTED: &'static str = $expected;

            fn from_code(code: i64) -> Option<Self> {
                <$ty>::from_code(code)
            }
        }
    };
}

coded!(Region, "a region code 0-7 or name");
coded!(Proximity, "a proximity code 0-2 or name");
coded!(Population, "a population code 0-3 or name");
coded!(Condition, "a condition code 0-3 or name");
coded!(Reputation, "a reputation code 1-6 or name");
coded!(Relevance, "a relevance code 1-4 or name");
coded!(Route, "a route code 1-4 or name");

/// Arguments of one command invocation
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    command: CommandName,
    values: &'a [String],
}

impl<'a> Args<'a> {
    pub fn new(command: CommandName, values: &'a [String]) -> Self {
        Self { command, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn raw(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).map(String::as_str)
    }

    fn missing(&self, name: &'static str) -> CommandError {
        CommandError::MissingArgument {
            command: self.command.to_string(),
            name,
        }
    }

    fn invalid(&self, name: &'static str, value: &str, expected: &'static str) -> CommandError {
        CommandError::InvalidArgument {
            command: self.command.to_string(),
            name,
            value: value.to_string(),
            expected,
        }
    }

    pub fn optional_int(&self, index: usize, name: &'static str) -> CommandResult<Option<i64>> {
        self.raw(index)
            .map(|v| v.parse::<i64>().map_err(|_| self.invalid(name, v, "an integer")))
            .transpose()
    }

    pub fn int(&self, index: usize, name: &'static str) -> CommandResult<i64> {
        self.optional_int(index, name)?
            .ok_or_else(|| self.missing(name))
    }

    /// Template identifier; ids are never negative
    pub fn optional_id(&self, index: usize, name: &'static str) -> CommandResult<Option<u32>> {
        self.raw(index)
            .map(|v| {
                v.parse::<u32>()
                    .map_err(|_| self.invalid(name, v, "a template id"))
            })
            .transpose()
    }

    pub fn id(&self, index: usize, name: &'static str) -> CommandResult<u32> {
        self.optional_id(index, name)?
            .ok_or_else(|| self.missing(name))
    }

    /// Finite decimal number, such as a price
    pub fn number(&self, index: usize, name: &'static str) -> CommandResult<f64> {
        let value = self.raw(index).ok_or_else(|| self.missing(name))?;
        value
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| self.invalid(name, value, "a number"))
    }

    /// Yes/no flag; absent flags take `default`
    pub fn flag(&self, index: usize, name: &'static str, default: bool) -> CommandResult<bool> {
        let Some(value) = self.raw(index) else {
            return Ok(default);
        };
        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "y" => Ok(true),
            "0" | "false" | "no" | "n" => Ok(false),
            _ => Err(self.invalid(name, value, "yes or no")),
        }
    }

    /// Enumerated value by numeric code or by name
    pub fn coded<T: Coded>(&self, index: usize, name: &'static str) -> CommandResult<T> {
        let value = self.raw(index).ok_or_else(|| self.missing(name))?;
        let parsed = match value.parse::<i64>() {
            Ok(code) => T::from_code(code),
            Err(_) => value.parse::<T>().ok(),
        };
        parsed.ok_or_else(|| self.invalid(name, value, T::EXPECTED))
    }

    /// First argument as free text
    pub fn word(&self, index: usize) -> Option<&'a str> {
        self.raw(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_int_and_missing() {
        let values = args(&["3", "x"]);
        let a = Args::new(CommandName::Trade, &values);
        assert_eq!(a.int(0, "rarity").unwrap(), 3);
        assert!(matches!(
            a.int(1, "region"),
            Err(CommandError::InvalidArgument { name: "region", .. })
        ));
        assert!(matches!(
            a.int(2, "population"),
            Err(CommandError::MissingArgument { name: "population", .. })
        ));
        assert_eq!(a.optional_int(5, "extra").unwrap(), None);
    }

    #[test]
    fn test_number_rejects_non_finite() {
        let values = args(&["1500.5", "NaN", "inf"]);
        let a = Args::new(CommandName::Trade, &values);
        assert_eq!(a.number(0, "price").unwrap(), 1500.5);
        assert!(a.number(1, "price").is_err());
        assert!(a.number(2, "price").is_err());
    }

    #[test]
    fn test_coded_by_code_or_name() {
        let values = args(&["4", "outer-rim", "Moderate", "9", "#TradeLocation"]);
        let a = Args::new(CommandName::Trade, &values);
        assert_eq!(a.coded::<Region>(0, "region").unwrap(), Region::OuterRim);
        assert_eq!(a.coded::<Region>(1, "region").unwrap(), Region::OuterRim);
        assert_eq!(
            a.coded::<Condition>(2, "condition").unwrap(),
            Condition::Moderate
        );
        assert!(a.coded::<Region>(3, "region").is_err());

        let err = a.coded::<Proximity>(4, "proximity").unwrap_err();
        assert_eq!(
            err.to_string(),
            "trade: invalid proximity '#TradeLocation' (expected a proximity code 0-2 or name)"
        );
    }

    #[test]
    fn test_flags() {
        let values = args(&["yes", "0", "maybe"]);
        let a = Args::new(CommandName::RecoverWound, &values);
        assert!(a.flag(0, "self", false).unwrap());
        assert!(!a.flag(1, "equipment", true).unwrap());
        assert!(a.flag(2, "other", true).is_err());
        assert!(a.flag(3, "absent", true).unwrap());
    }

    #[test]
    fn test_ids() {
        let values = args(&["19", "-1"]);
        let a = Args::new(CommandName::CraftTemplate, &values);
        assert_eq!(a.id(0, "template").unwrap(), 19);
        assert!(a.id(1, "template").is_err());
        assert_eq!(a.optional_id(2, "template").unwrap(), None);
    }
}
