/// Integer printed with `'` between groups of three digits: `1'234'567`.
pub struct NiceInt(u128);

impl NiceInt {
    pub fn from(value: impl Into<u128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let head = match digits.len() % 3 {
            0 => 3,
            n => n,
        };
        f.write_str(&digits[..head])?;
        for group in digits.as_bytes()[head..].chunks(3) {
            write!(f, "'{}", std::str::from_utf8(group).map_err(|_| std::fmt::Error)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn groups_of_three() {
        assert_eq!(NiceInt::from(0u8).to_string(), "0");
        assert_eq!(NiceInt::from(999u32).to_string(), "999");
        assert_eq!(NiceInt::from(1000u64).to_string(), "1'000");
        assert_eq!(NiceInt::from_usize(1_234_567).to_string(), "1'234'567");
        assert_eq!(NiceInt::from(u64::MAX).to_string(), "18'446'744'073'709'551'615");
    }
}
