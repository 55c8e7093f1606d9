//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert!(!NodeId::INVALID.is_valid());
        assert!(NodeId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).since(Tick(10)), 0);
    }

    #[test]
    fn multiple_of_interval() {
        assert!(Tick(0).is_multiple_of(5));
        assert!(Tick(10).is_multiple_of(5));
        assert!(!Tick(11).is_multiple_of(5));
        assert!(!Tick(10).is_multiple_of(0), "interval 0 never fires");
    }

    #[test]
    fn display() {
        assert_eq!(Tick(4).to_string(), "T4");
    }
}

#[cfg(test)]
mod health {
    use crate::{HealthState, VenueKind};

    #[test]
    fn only_susceptible_can_be_infected() {
        let infectable: Vec<_> = HealthState::ALL
            .into_iter()
            .filter(|s| s.is_susceptible())
            .collect();
        assert_eq!(infectable, [HealthState::Susceptible]);
    }

    #[test]
    fn terminal_states() {
        assert!(HealthState::Dead.is_terminal());
        assert!(HealthState::Recovered.is_terminal());
        assert!(HealthState::Vaccinated.is_terminal());
        assert!(!HealthState::Sick.is_terminal());
        assert!(!HealthState::Susceptible.is_terminal());
        assert!(!HealthState::Dead.is_alive());
    }

    #[test]
    fn houses_are_private() {
        assert!(!VenueKind::House.is_shared());
        assert!(VenueKind::SHARED.iter().all(|k| k.is_shared()));
    }

    #[test]
    fn display() {
        assert_eq!(HealthState::Vaccinated.to_string(), "vaccinated");
        assert_eq!(VenueKind::BusStation.to_string(), "bus_station");
    }
}

#[cfg(test)]
mod config {
    use crate::{DiseaseParams, EpiError, SimConfig};

    fn village(houses: u32, per_house: u32) -> SimConfig {
        SimConfig {
            houses,
            agents_per_house: per_house,
            initial_sick_agents: 0,
            percentage_initial_vaccinated_agents: 0.0,
            ..SimConfig::default()
        }
    }

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.population(), 378);
        assert_eq!(cfg.shared_venue_count(), 6);
        assert_eq!(cfg.node_count(), 42 + 6 + 378);
    }

    #[test]
    fn zero_houses_rejected() {
        let err = village(0, 3).validate().unwrap_err();
        assert!(matches!(err, EpiError::InvalidConfiguration(_)));
    }

    #[test]
    fn zero_agents_per_house_rejected() {
        assert!(village(2, 0).validate().is_err());
    }

    #[test]
    fn too_many_sick_rejected() {
        let cfg = SimConfig { initial_sick_agents: 7, ..village(2, 3) };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("initialSickAgents"), "{err}");
    }

    #[test]
    fn sick_equal_to_population_allowed() {
        SimConfig { initial_sick_agents: 6, ..village(2, 3) }.validate().unwrap();
    }

    #[test]
    fn percentage_out_of_range_rejected() {
        for pct in [-1.0, 100.5, f64::NAN, f64::INFINITY] {
            let cfg = SimConfig { percentage_initial_vaccinated_agents: pct, ..village(2, 3) };
            assert!(cfg.validate().is_err(), "pct {pct} should be rejected");
        }
    }

    #[test]
    fn disease_params_checked() {
        let bad = [
            DiseaseParams { p_transmit: 1.5, ..DiseaseParams::default() },
            DiseaseParams { p_fatal: -0.1, ..DiseaseParams::default() },
            DiseaseParams { illness_duration: 0, ..DiseaseParams::default() },
        ];
        for disease in bad {
            let cfg = SimConfig { disease, ..village(1, 1) };
            assert!(cfg.validate().is_err());
        }
    }

    #[test]
    fn vaccinated_count_rounds_half_away_from_zero() {
        // 30 % of 7 = 2.1 → 2
        let cfg = SimConfig { percentage_initial_vaccinated_agents: 30.0, ..village(7, 1) };
        assert_eq!(cfg.initial_vaccinated_agents(), 2);
        // 50 % of 5 = 2.5 → 3
        let cfg = SimConfig { percentage_initial_vaccinated_agents: 50.0, ..village(5, 1) };
        assert_eq!(cfg.initial_vaccinated_agents(), 3);
    }

    #[test]
    fn sick_plus_vaccinated_over_population_rejected() {
        // 2 sick + 100 % of 6 = 8 > 6
        let cfg = SimConfig {
            initial_sick_agents: 2,
            percentage_initial_vaccinated_agents: 100.0,
            ..village(2, 3)
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, EpiError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("exceed the population"), "{err}");
    }

    #[test]
    fn sick_plus_vaccinated_filling_population_allowed() {
        // 2 sick + round(66 % of 6) = 2 + 4 = 6
        let cfg = SimConfig {
            initial_sick_agents: 2,
            percentage_initial_vaccinated_agents: 66.0,
            ..village(2, 3)
        };
        cfg.validate().unwrap();
        assert_eq!(cfg.initial_vaccinated_agents(), 4);
    }

    #[test]
    fn run_config_defaults() {
        let run = crate::RunConfig::default();
        assert_eq!((run.seed, run.max_ticks, run.output_interval_ticks), (42, 100, 1));
        assert_eq!(run.end_tick(), crate::Tick(100));
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.r#gen();
            let b: f64 = r2.r#gen();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_zero_matches_root() {
        let mut root = SimRng::new(9);
        let mut child = SimRng::child(9, 0);
        assert_eq!(root.r#gen::<u64>(), child.r#gen::<u64>());
    }

    #[test]
    fn children_diverge() {
        let mut a = SimRng::child(1, 1);
        let mut b = SimRng::child(1, 2);
        assert_ne!(a.r#gen::<u64>(), b.r#gen::<u64>());
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_config {
    use crate::{HealthState, SimConfig, Tick};

    #[test]
    fn camel_case_fields_with_defaults() {
        let cfg: SimConfig = serde_json::from_str(
            r#"{ "houses": 2, "agentsPerHouse": 3, "percentageInitialVaccinatedAgents": 50 }"#,
        )
        .unwrap();
        assert_eq!(cfg.houses, 2);
        assert_eq!(cfg.agents_per_house, 3);
        assert_eq!(cfg.percentage_initial_vaccinated_agents, 50.0);
        assert_eq!(cfg.initial_sick_agents, SimConfig::default().initial_sick_agents);
        assert_eq!(cfg.tick, Tick::ZERO);
    }

    #[test]
    fn negative_count_rejected_at_parse_time() {
        let parsed = serde_json::from_str::<SimConfig>(r#"{ "hospitals": -1 }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = serde_json::from_str::<SimConfig>(r#"{ "agentPerHouse": 3 }"#).unwrap_err();
        assert!(err.to_string().contains("agentPerHouse"), "{err}");
        assert!(serde_json::from_str::<crate::DiseaseParams>(r#"{ "pFatality": 0.1 }"#).is_err());
        assert!(serde_json::from_str::<crate::RunConfig>(r#"{ "max_ticks": 3 }"#).is_err());
    }

    #[test]
    fn run_config_camel_case() {
        let run: crate::RunConfig =
            serde_json::from_str(r#"{ "maxTicks": 30, "outputIntervalTicks": 5 }"#).unwrap();
        assert_eq!(run.max_ticks, 30);
        assert_eq!(run.output_interval_ticks, 5);
        assert_eq!(run.seed, 42);
    }

    #[test]
    fn health_state_lowercase() {
        assert_eq!(serde_json::to_string(&HealthState::Sick).unwrap(), r#""sick""#);
    }
}
