//! Validity windows for presigned URLs.

/// How long a presigned URL stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// Expire after 30 minutes.
    ThirtyMinutes,
    /// Expire after 1 hour.
    OneHour,
    /// Expire after 3 hours.
    ThreeHours,
    /// Expire after the given number of seconds.
    Custom(u64),
}

impl Expiration {
    /// The window length in seconds, as rendered into `X-Amz-Expires`.
    pub fn as_secs(&self) -> u64 {
        match self {
            Expiration::ThirtyMinutes => 30 * 60,
            Expiration::OneHour => 60 * 60,
            Expiration::ThreeHours => 3 * 60 * 60,
            Expiration::Custom(secs) => *secs,
        }
    }
}

impl Default for Expiration {
    fn default() -> Self {
        Expiration::OneHour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_secs() {
        assert_eq!(Expiration::ThirtyMinutes.as_secs(), 1800);
        assert_eq!(Expiration::OneHour.as_secs(), 3600);
        assert_eq!(Expiration::ThreeHours.as_secs(), 10800);
        assert_eq!(Expiration::Custom(86400).as_secs(), 86400);
    }
}
