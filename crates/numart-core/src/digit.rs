use core::fmt;

use crate::Error;

/// Base-10 digit, guaranteed to be in `[0, 9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const COUNT: usize = 10;

    pub fn new(value: u8) -> Result<Self, Error> {
        if value > 9 {
            return Err(Error::InvalidDigit {
                value: u32::from(value),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9u8).map(Digit)
    }
}

impl TryFrom<u32> for Digit {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|&v| v <= 9)
            .map(Digit)
            .ok_or(Error::InvalidDigit { value })
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Digit;
    use crate::Error;

    #[test]
    fn rejects_values_above_nine() {
        assert_eq!(Digit::new(10), Err(Error::InvalidDigit { value: 10 }));
        assert_eq!(
            Digit::try_from(300u32),
            Err(Error::InvalidDigit { value: 300 })
        );
        assert_eq!(Digit::new(9).map(Digit::value), Ok(9));
    }

    #[test]
    fn all_is_ascending() {
        let v: Vec<u8> = Digit::all().map(u8::from).collect();
        assert_eq!(v, (0..=9).collect::<Vec<u8>>());
    }
}
