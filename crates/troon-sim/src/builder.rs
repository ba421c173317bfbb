//! Fluent builder for constructing a [`Simulation`].

use tracing::debug;

use troon_core::{Line, LinkId, SimClock, SimConfig};
use troon_network::{RailNetwork, Scenario};

use crate::sim::SpawnPoint;
use crate::{HoldingArea, Link, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, report window, worker count
/// - [`RailNetwork`] — stations, routes, and segments
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                      |
/// |--------------------|------------------------------|
/// | `.budgets(b)`      | `[0, 0, 0]` (no troons)      |
/// | `.threads(n)`      | `config.num_threads`         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, network)
///     .budgets([10, 4, 4])
///     .threads(Some(8))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    network: RailNetwork,
    budgets: [u32; Line::COUNT],
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, network: RailNetwork) -> Self {
        Self { config, network, budgets: [0; Line::COUNT] }
    }

    /// Take network, run length, report window, and budgets from a loaded
    /// scenario.
    pub fn from_scenario(scenario: Scenario) -> Self {
        let config = scenario.config();
        Self::new(config, scenario.network).budgets(scenario.budgets)
    }

    /// Total troons to spawn per line, indexed by [`Line::index`].
    pub fn budgets(mut self, budgets: [u32; Line::COUNT]) -> Self {
        self.budgets = budgets;
        self
    }

    /// Worker pool size.  `None` lets Rayon choose.
    pub fn threads(mut self, num_threads: Option<usize>) -> Self {
        self.config.num_threads = num_threads;
        self
    }

    /// Validate inputs, allocate per-link state, and return a ready-to-run
    /// [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;

        let links: Vec<Link> = self
            .network
            .segments
            .iter()
            .enumerate()
            .map(|(i, seg)| Link::new(LinkId(i as u32), seg))
            .collect();
        let holding = links.iter().map(|_| HoldingArea::new()).collect();

        let mut spawns = [SpawnPoint::default(); Line::COUNT];
        for (line, spawn) in Line::ALL.into_iter().zip(&mut spawns) {
            let links = self
                .network
                .spawn_links(line)
                .ok_or(SimError::NoSpawnPoint(line))?;
            *spawn = SpawnPoint { links, remaining: self.budgets[line.index()] };
        }

        #[cfg(feature = "parallel")]
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads.unwrap_or(0))
            .thread_name(|i| format!("troon-worker-{i}"))
            .build()?;

        debug!(
            links = links.len(),
            budgets = ?self.budgets,
            total_ticks = self.config.total_ticks,
            "simulation built"
        );

        Ok(Simulation {
            clock:      SimClock::new(),
            config:     self.config,
            network:    self.network,
            links,
            holding,
            spawns,
            next_troon: 0,
            #[cfg(feature = "parallel")]
            pool:       std::sync::Arc::new(pool),
        })
    }
}
