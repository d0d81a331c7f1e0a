//! Unit tests for dv-core primitives.

#[cfg(test)]
mod ids {
    use crate::StopId;

    #[test]
    fn index_roundtrip() {
        let id = StopId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StopId::try_from(42usize).unwrap(), id);
        assert_eq!(usize::from(id), 42);
    }

    #[test]
    fn try_from_rejects_indices_past_u32() {
        assert_eq!(StopId::try_from(u32::MAX as usize).unwrap(), StopId(u32::MAX));
        assert!(StopId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn ordering() {
        assert!(StopId(0) < StopId(1));
        assert!(StopId(100) > StopId(99));
    }

    #[test]
    fn display() {
        assert_eq!(StopId(7).to_string(), "StopId(7)");
    }
}

#[cfg(test)]
mod cost {
    use crate::Cost;

    #[test]
    fn sentinel_orders_above_every_finite_cost() {
        assert!(Cost::MAX_FINITE < Cost::UNREACHABLE);
        assert!(Cost::ZERO < Cost::UNREACHABLE);
        assert!(Cost::UNREACHABLE.is_unreachable());
        assert!(Cost(8).is_finite());
    }

    #[test]
    fn default_is_unreachable() {
        assert_eq!(Cost::default(), Cost::UNREACHABLE);
    }

    #[test]
    fn saturating_add_never_wraps() {
        assert_eq!(Cost(5).saturating_add(Cost(3)), Cost(8));
        assert_eq!(Cost::UNREACHABLE.saturating_add(Cost(1)), Cost::UNREACHABLE);
        assert_eq!(Cost::MAX_FINITE.saturating_add(Cost(1)), Cost::UNREACHABLE);
        assert_eq!(Cost::MAX_FINITE.saturating_add(Cost(10)), Cost::UNREACHABLE);
    }

    #[test]
    fn finite_clamps_below_sentinel() {
        assert_eq!(Cost::finite(12), Cost(12));
        assert_eq!(Cost::finite(u64::MAX), Cost::MAX_FINITE);
    }

    #[test]
    fn display() {
        assert_eq!(Cost(8).to_string(), "8");
        assert_eq!(Cost::UNREACHABLE.to_string(), "unreachable");
    }
}

#[cfg(test)]
mod position {
    use crate::{Cost, Manhattan, Metric, Position};

    #[test]
    fn zero_distance() {
        let p = Position::new(5, 3);
        assert_eq!(p.manhattan(p), Cost::ZERO);
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(5, 3);
        let b = Position::new(0, 2);
        assert_eq!(a.manhattan(b), Cost(6));
        assert_eq!(b.manhattan(a), Cost(6));
    }

    #[test]
    fn extreme_coordinates_stay_finite() {
        let a = Position::new(i32::MIN, i32::MIN);
        let b = Position::new(i32::MAX, i32::MAX);
        let d = a.manhattan(b);
        assert!(d.is_finite());
        assert_eq!(d, Cost::MAX_FINITE);
    }

    #[test]
    fn metric_trait_matches_inherent_method() {
        let a = Position::new(-4, 9);
        let b = Position::new(2, -1);
        assert_eq!(Manhattan.distance(a, b), a.manhattan(b));
    }
}

#[cfg(test)]
mod config {
    use crate::{DvError, SyncConfig};

    #[test]
    fn default_runs_to_fixed_point() {
        let cfg = SyncConfig::default();
        assert!(cfg.auto_synchronise);
        assert_eq!(cfg.max_passes, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_pass_limit_rejected() {
        let cfg = SyncConfig { max_passes: Some(0), ..SyncConfig::default() };
        assert!(matches!(cfg.validate(), Err(DvError::Config(_))));
    }

    #[test]
    fn manual_disables_auto_sync() {
        let cfg = SyncConfig::default().manual();
        assert!(!cfg.auto_synchronise);
    }
}
