use clocktime_core::Millis;
use log::trace;

/// Remaining time after consuming `delta` from `current`, floored at zero
pub(crate) fn consumed(current: Millis, delta: Millis) -> Millis {
    let remaining = current.saturating_sub(delta);
    if remaining <= 0 {
        if remaining < 0 {
            trace!("Consumed {}ms from {}ms, clamping to zero", delta, current);
        }
        return 0;
    }
    remaining
}

/// Time after extending `current` by `delta`
/// Saturates at the `Millis` bounds instead of wrapping
pub(crate) fn extended(current: Millis, delta: Millis) -> Millis {
    current.saturating_add(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumed_floors_at_zero() {
        assert_eq!(consumed(100, 5000), 0);
        assert_eq!(consumed(5000, 5000), 0);
        assert_eq!(consumed(5000, 100), 4900);
        assert_eq!(consumed(Millis::MIN, Millis::MAX), 0);
    }

    #[test]
    fn test_negative_delta_adds() {
        assert_eq!(consumed(100, -50), 150);
    }

    #[test]
    fn test_extended() {
        assert_eq!(extended(4_532_000, 1_200), 4_533_200);
        assert_eq!(extended(Millis::MAX, 1), Millis::MAX);
    }
}
