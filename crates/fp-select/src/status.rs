use std::fmt;

use fp_registry::FinalityProvider;

/// Lifecycle state derived from a provider's raw flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Jailed,
    Inactive,
    Slashed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Jailed => "jailed",
            Status::Inactive => "inactive",
            Status::Slashed => "slashed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify a provider. Slashing outranks jailing, which outranks soft
/// deletion.
pub fn classify(provider: &FinalityProvider) -> Status {
    if provider.slashed_babylon_height > 0 || provider.slashed_btc_height > 0 {
        Status::Slashed
    } else if provider.jailed {
        Status::Jailed
    } else if provider.soft_deleted {
        Status::Inactive
    } else {
        Status::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(babylon: u64, btc: u64, jailed: bool, soft_deleted: bool) -> FinalityProvider {
        FinalityProvider {
            slashed_babylon_height: babylon,
            slashed_btc_height: btc,
            jailed,
            soft_deleted,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_active() {
        assert_eq!(classify(&FinalityProvider::default()), Status::Active);
    }

    #[test]
    fn test_single_flags() {
        assert_eq!(classify(&provider(5, 0, false, false)), Status::Slashed);
        assert_eq!(classify(&provider(0, 5, false, false)), Status::Slashed);
        assert_eq!(classify(&provider(0, 0, true, false)), Status::Jailed);
        assert_eq!(classify(&provider(0, 0, false, true)), Status::Inactive);
    }

    #[test]
    fn test_priority_over_every_flag_combination() {
        for babylon in [0, 1] {
            for btc in [0, 1] {
                for jailed in [false, true] {
                    for soft_deleted in [false, true] {
                        let expected = if babylon > 0 || btc > 0 {
                            Status::Slashed
                        } else if jailed {
                            Status::Jailed
                        } else if soft_deleted {
                            Status::Inactive
                        } else {
                            Status::Active
                        };
                        let fp = provider(babylon, btc, jailed, soft_deleted);
                        assert_eq!(classify(&fp), expected, "{fp:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_display_honors_padding() {
        assert_eq!(format!("{:<10}|", Status::Jailed), "jailed    |");
    }
}
