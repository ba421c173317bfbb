//! Unit tests for troon-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LinkId, StationId, TroonId};

    #[test]
    fn index_roundtrip() {
        let id = StationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(TroonId(0) < TroonId(1));
        assert!(LinkId(100) > LinkId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StationId::INVALID.0, u32::MAX);
        assert_eq!(LinkId::INVALID.0, u32::MAX);
        assert_eq!(TroonId::default(), TroonId::INVALID);
        assert!(!LinkId::default().is_valid());
        assert!(LinkId(0).is_valid());
    }

    #[test]
    fn oversized_index_is_rejected() {
        assert!(StationId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(TroonId(7).to_string(), "troon#7");
        assert_eq!(StationId(0).to_string(), "station#0");
        assert_eq!(LinkId(12).to_string(), "link#12");
    }
}

#[cfg(test)]
mod line {
    use crate::{Direction, Line};

    #[test]
    fn canonical_order_matches_index() {
        for (i, line) in Line::ALL.iter().enumerate() {
            assert_eq!(line.index(), i);
        }
    }

    #[test]
    fn print_order_is_alphabetical_by_letter() {
        let letters: Vec<char> = Line::PRINT_ORDER.iter().map(|l| l.letter()).collect();
        assert_eq!(letters, ['b', 'g', 'y']);
        let mut sorted = letters.clone();
        sorted.sort();
        assert_eq!(letters, sorted);
    }

    #[test]
    fn reversed_is_an_involution() {
        for dir in Direction::BOTH {
            assert_ne!(dir.reversed(), dir);
            assert_eq!(dir.reversed().reversed(), dir);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Line::Yellow.to_string(), "yellow");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick::ZERO + 0, Tick(0));
        assert!(Tick(3) < Tick(4));
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.to_string(), "T2");
    }

    #[test]
    fn report_window_covers_trailing_ticks() {
        let config = SimConfig::new(10, 3);
        assert!(!config.is_reported(Tick(6)));
        assert!(config.is_reported(Tick(7)));
        assert!(config.is_reported(Tick(9)));
    }

    #[test]
    fn report_window_larger_than_run() {
        let config = SimConfig::new(2, 5);
        assert!(config.is_reported(Tick(0)));
    }

    #[test]
    fn zero_threads_rejected() {
        let threads = |n| SimConfig { num_threads: n, ..SimConfig::new(1, 1) };
        assert!(threads(Some(0)).validate().is_err());
        assert!(threads(Some(4)).validate().is_ok());
        assert!(SimConfig::new(1, 1).validate().is_ok());
    }
}
