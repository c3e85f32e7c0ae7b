use std::fmt;

pub const STROKE: Color = Color("#F7F7F7");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub fn hex(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    NoData,
    Low,
    Medium,
    High,
}

impl Tier {
    /// Upper bounds are inclusive: 5 is `Low`, 15 is `Medium`.
    pub fn for_count(count: u64) -> Tier {
        match count {
            0 => Tier::NoData,
            1..=5 => Tier::Low,
            6..=15 => Tier::Medium,
            _ => Tier::High,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Tier::NoData => Color("#E5E7EB"),
            Tier::Low => Color("#E0F2FE"),
            Tier::Medium => Color("#38BDF8"),
            Tier::High => Color("#0369A1"),
        }
    }

    pub fn darkness(self) -> u8 {
        self as u8
    }
}

pub fn color(count: u64) -> Color {
    Tier::for_count(count).color()
}

pub fn neutral() -> Color {
    Tier::NoData.color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(color(0), neutral());
        assert_eq!(color(0).hex(), "#E5E7EB");
        assert_eq!(color(1).hex(), "#E0F2FE");
        assert_eq!(color(5).hex(), "#E0F2FE");
        assert_eq!(color(6).hex(), "#38BDF8");
        assert_eq!(color(15).hex(), "#38BDF8");
        assert_eq!(color(16).hex(), "#0369A1");
        assert_eq!(color(u64::MAX).hex(), "#0369A1");
    }

    #[test]
    fn test_darkness_is_monotonic() {
        let counts = [0, 1, 5, 6, 15, 16];
        let darkness: Vec<u8> = counts.iter().map(|c| Tier::for_count(*c).darkness()).collect();
        assert!(darkness.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(darkness, vec![0, 1, 1, 2, 2, 3]);
    }
}
