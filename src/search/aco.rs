//! Ant Colony Optimization.
//!
//! Iterative stochastic metaheuristic: per iteration a colony of ants walks
//! from the start, choosing edges with probability proportional to
//! `tau^alpha * eta^beta` where `eta = 1/objective` is the static edge
//! desirability and `tau` the pheromone laid down by earlier iterations.
//! After each iteration all pheromone evaporates and the iteration's best
//! successful walk is reinforced. Correctness is probabilistic: fix `seed`
//! for reproducible runs.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::cost::{CostModel, TransportMode};
use crate::graph::Network;

use super::{resolve_endpoints, RouteQuery, RouteSolver, SearchOutcome};

/// Ant Colony Optimization strategy.
///
/// Defaults match the reference parameterization: 100 ants, 1000
/// iterations, `alpha = 1`, `beta = 2`, 10% evaporation, deposit constant
/// 100, and walks capped at 100 steps. With zero ants or zero iterations no
/// walk ever executes and the outcome is "no route".
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AntColony {
    /// Independent stochastic walks per iteration.
    pub num_ants: usize,
    /// Evaporate/reinforce rounds.
    pub num_iterations: usize,
    /// Pheromone exponent.
    pub alpha: f64,
    /// Desirability exponent.
    pub beta: f64,
    /// Fraction of pheromone lost per iteration, in `[0, 1]`.
    pub evaporation_rate: f64,
    /// Deposit constant: the iteration best receives `deposit / value`.
    pub deposit: f64,
    /// Hop cap per ant walk.
    pub max_steps: usize,
    /// RNG seed; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for AntColony {
    fn default() -> Self {
        Self {
            num_ants: 100,
            num_iterations: 1000,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.1,
            deposit: 100.0,
            max_steps: 100,
            seed: None,
        }
    }
}

impl AntColony {
    /// The default parameterization with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// One outgoing edge with its static desirability and mutable pheromone.
/// The `tau` values form the pheromone table, owned by a single run.
#[derive(Debug, Clone)]
struct AcoEdge {
    to: usize,
    mode: TransportMode,
    value: f64,
    eta: f64,
    tau: f64,
}

/// The best walk of an iteration: nodes, modes, the traversed
/// `(from, adjacency index)` pairs for the deposit pass, and its value.
struct BestWalk {
    path: Vec<usize>,
    modes: Vec<TransportMode>,
    edges: Vec<(usize, usize)>,
    value: f64,
}

impl RouteSolver for AntColony {
    fn name(&self) -> &'static str {
        "aco"
    }

    fn solve(&self, network: &Network, costs: &CostModel, query: &RouteQuery) -> SearchOutcome {
        let (start, goal, priority) = match resolve_endpoints(network, query) {
            Ok(resolved) => resolved,
            Err(trivial) => return trivial,
        };

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let evaporation = self.evaporation_rate.clamp(0.0, 1.0);

        // Per-run adjacency with precomputed edge objectives and an
        // initially uniform pheromone table.
        let initial_tau = 1.0;
        let mut adjacency: Vec<Vec<AcoEdge>> = (0..network.num_locations())
            .map(|node| {
                network
                    .edges_from(node)
                    .map(|edge| {
                        let value = costs.edge_value(edge.distance_km, edge.mode, priority);
                        AcoEdge {
                            to: edge.to,
                            mode: edge.mode,
                            value,
                            eta: if value > 0.0 { 1.0 / value } else { 1.0 },
                            tau: initial_tau,
                        }
                    })
                    .collect()
            })
            .collect();

        let mut best: Option<BestWalk> = None;

        for iteration in 0..self.num_iterations {
            let mut iteration_best: Option<BestWalk> = None;

            for _ in 0..self.num_ants {
                if let Some(walk) = self.walk(&adjacency, start, goal, &mut rng) {
                    if iteration_best
                        .as_ref()
                        .map_or(true, |b| walk.value < b.value)
                    {
                        iteration_best = Some(walk);
                    }
                }
            }

            // Evaporate everywhere, then reinforce the iteration best only.
            for edges in &mut adjacency {
                for edge in edges {
                    edge.tau *= 1.0 - evaporation;
                }
            }
            if let Some(walk) = &iteration_best {
                if walk.value > 0.0 {
                    let amount = self.deposit / walk.value;
                    for &(from, index) in &walk.edges {
                        adjacency[from][index].tau += amount;
                    }
                }
            }

            let improved = match (&iteration_best, &best) {
                (Some(walk), Some(b)) => walk.value < b.value,
                (Some(_), None) => true,
                _ => false,
            };
            if improved {
                debug!(
                    "aco: iteration {iteration}: new best value {}",
                    iteration_best.as_ref().map(|w| w.value).unwrap_or(f64::NAN)
                );
                best = iteration_best;
            }
        }

        match best {
            Some(walk) => SearchOutcome::found(walk.path, walk.modes, walk.value),
            None => {
                debug!(
                    "aco: no ant reached {} from {} in {} iterations",
                    query.goal, query.start, self.num_iterations
                );
                SearchOutcome::not_found()
            }
        }
    }
}

impl AntColony {
    /// Simulates one ant: a stochastic loop-free walk from `start`, capped
    /// at `max_steps` hops. Returns the walk only if it reached `goal`.
    fn walk<R: Rng>(
        &self,
        adjacency: &[Vec<AcoEdge>],
        start: usize,
        goal: usize,
        rng: &mut R,
    ) -> Option<BestWalk> {
        let mut visited = vec![false; adjacency.len()];
        visited[start] = true;
        let mut walk = BestWalk {
            path: vec![start],
            modes: Vec::new(),
            edges: Vec::new(),
            value: 0.0,
        };

        let mut current = start;
        let mut steps = 0;
        while current != goal && steps < self.max_steps {
            let candidates: Vec<usize> = adjacency[current]
                .iter()
                .enumerate()
                .filter(|(_, e)| !visited[e.to])
                .map(|(i, _)| i)
                .collect();
            if candidates.is_empty() {
                return None; // dead end
            }

            let index = self.choose(&adjacency[current], &candidates, rng);
            let edge = &adjacency[current][index];
            walk.edges.push((current, index));
            walk.path.push(edge.to);
            walk.modes.push(edge.mode);
            walk.value += edge.value;
            visited[edge.to] = true;
            current = edge.to;
            steps += 1;
        }

        (current == goal).then_some(walk)
    }

    /// Roulette-wheel selection over candidate edge indices, weighted by
    /// `tau^alpha * eta^beta`. Degenerate weights fall back to uniform.
    fn choose<R: Rng>(&self, edges: &[AcoEdge], candidates: &[usize], rng: &mut R) -> usize {
        let weights: Vec<f64> = candidates
            .iter()
            .map(|&i| edges[i].tau.powf(self.alpha) * edges[i].eta.powf(self.beta))
            .collect();
        let total: f64 = weights.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return candidates[rng.random_range(0..candidates.len())];
        }

        let mut threshold = rng.random_range(0.0..total);
        for (&candidate, &weight) in candidates.iter().zip(&weights) {
            if threshold < weight {
                return candidate;
            }
            threshold -= weight;
        }
        candidates[candidates.len() - 1] // floating-point remainder
    }
}
