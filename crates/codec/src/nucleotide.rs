use std::fmt;

/// A nitrogen base of the output alphabet.
///
/// Each base stands for one 2-bit group. The mapping is fixed and bijective:
/// `00` -> A, `01` -> T, `10` -> G, `11` -> C. The order of [`Nucleotide::ALL`]
/// follows the bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    T,
    G,
    C,
}

impl Nucleotide {
    /// All bases in bit-pattern order.
    pub const ALL: [Nucleotide; 4] = [Self::A, Self::T, Self::G, Self::C];

    /// Decode a 2-bit pattern (`"00"` through `"11"`).
    #[inline]
    pub fn from_bits(bits: &str) -> Option<Self> {
        match bits {
            "00" => Some(Self::A),
            "01" => Some(Self::T),
            "10" => Some(Self::G),
            "11" => Some(Self::C),
            _ => None,
        }
    }

    /// The 2-bit pattern for this base.
    #[inline]
    pub fn to_bits(self) -> &'static str {
        match self {
            Self::A => "00",
            Self::T => "01",
            Self::G => "10",
            Self::C => "11",
        }
    }

    /// Parse a base character. Case-insensitive.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'T' => Some(Self::T),
            'G' => Some(Self::G),
            'C' => Some(Self::C),
            _ => None,
        }
    }

    /// Character representation of this base.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::T => 'T',
            Self::G => 'G',
            Self::C => 'C',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_table() {
        assert_eq!(Nucleotide::from_bits("00"), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_bits("01"), Some(Nucleotide::T));
        assert_eq!(Nucleotide::from_bits("10"), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_bits("11"), Some(Nucleotide::C));
    }

    #[test]
    fn test_from_bits_invalid() {
        assert_eq!(Nucleotide::from_bits("0"), None);
        assert_eq!(Nucleotide::from_bits("000"), None);
        assert_eq!(Nucleotide::from_bits("0a"), None);
        assert_eq!(Nucleotide::from_bits("??"), None);
        assert_eq!(Nucleotide::from_bits(""), None);
    }

    #[test]
    fn test_bits_round_trip() {
        for base in Nucleotide::ALL {
            assert_eq!(Nucleotide::from_bits(base.to_bits()), Some(base));
        }
    }

    #[test]
    fn test_from_char_case_insensitive() {
        assert_eq!(Nucleotide::from_char('A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_char('a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_char('t'), Some(Nucleotide::T));
        assert_eq!(Nucleotide::from_char('g'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_char('c'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_char('N'), None);
        assert_eq!(Nucleotide::from_char('?'), None);
    }

    #[test]
    fn test_char_round_trip() {
        for base in Nucleotide::ALL {
            assert_eq!(Nucleotide::from_char(base.to_char()), Some(base));
        }
    }

    #[test]
    fn test_display() {
        let rendered: String = Nucleotide::ALL.iter().map(|b| b.to_string()).collect();
        assert_eq!(rendered, "ATGC");
    }
}
