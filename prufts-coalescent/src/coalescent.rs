use rand::Rng;
use rand_distr::Exp;
use thiserror::Error;

use prufts_core::Edge;
use prufts_core::NodeLabel;
use prufts_core::PruferSequence;
use prufts_core::Time;
use prufts_core::Topology;
use prufts_core::TopologyError;

/// Error type for coalescent simulation.
#[derive(Error, Debug, PartialEq)]
pub enum CoalescentError {
    /// The sample size must be positive.
    #[error("sample size must be positive")]
    InvalidSampleSize,
    /// The root label `2n - 1` must fit the label space.
    #[error("sample size {found} leaves no room for internal labels")]
    SampleSizeTooLarge {
        /// The requested sample size
        found: u32,
    },
    /// The time scale must be finite and positive.
    #[error("invalid time scale {found:?}")]
    InvalidTimeScale {
        /// The offending value
        found: f64,
    },
    /// A redirection of a [`TopologyError`]
    #[error("{value:?}")]
    TopologyError {
        /// The redirected error
        #[from]
        value: TopologyError,
    },
}

/// Alias for a [`Result`](std::result::Result) whose error
/// type is [`CoalescentError`].
pub type CoalescentResult<T> = std::result::Result<T, CoalescentError>;

/// Coalescence times in event order.
pub type AncestralTimes = Vec<Time>;

/// The pairwise coalescence process.
///
/// With `k` active lineages the waiting time to the next
/// merge is exponential with rate `k(k-1) / (2 s)`, where
/// `s` is this model's time scale.  The default scale of
/// 1.0 gives standard coalescent time units; larger
/// scales stretch every waiting time in proportion, which
/// is how population-size scaling enters.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
///
/// let model = prufts_coalescent::CoalescentModel::new(0.5).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let tree = model.simulate(5, &mut rng).unwrap();
/// assert_eq!(tree.num_coalescences(), 4);
/// assert_eq!(tree.topology().num_edges(), 8);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoalescentModel {
    time_scale: f64,
}

impl Default for CoalescentModel {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl CoalescentModel {
    /// Create a model with the given time scale.
    ///
    /// # Errors
    ///
    /// [`CoalescentError::InvalidTimeScale`] unless
    /// `time_scale` is finite and positive.
    pub fn new(time_scale: f64) -> CoalescentResult<Self> {
        if !time_scale.is_finite() || time_scale <= 0.0 {
            return Err(CoalescentError::InvalidTimeScale { found: time_scale });
        }
        Ok(Self { time_scale })
    }

    /// The configured time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Draw one coalescent tree over `sample_size` leaves.
    ///
    /// Leaves carry labels `1..=n`.  Each merge picks two
    /// active lineages uniformly at random, joins both to
    /// a fresh internal label assigned in creation order
    /// from `n+1`, and records the running clock.  The
    /// last label created, `2n-1`, is the root.  The
    /// returned topology is canonicalized and the times
    /// are strictly increasing with length `n-1`.
    ///
    /// Identical rng state gives identical output.
    ///
    /// # Errors
    ///
    /// [`CoalescentError::InvalidSampleSize`] for zero
    /// samples, [`CoalescentError::SampleSizeTooLarge`]
    /// when `2n-1` overflows the label space.
    pub fn simulate<T: Rng>(
        &self,
        sample_size: u32,
        rng: &mut T,
    ) -> CoalescentResult<CoalescentTree> {
        if sample_size == 0 {
            return Err(CoalescentError::InvalidSampleSize);
        }
        if 2 * u64::from(sample_size) - 1 > u64::from(u32::MAX) {
            return Err(CoalescentError::SampleSizeTooLarge { found: sample_size });
        }
        let mut active: Vec<NodeLabel> = (1..=sample_size).map(NodeLabel::from).collect();
        let mut edges = Vec::with_capacity(2 * (sample_size as usize - 1));
        let mut times = AncestralTimes::with_capacity(sample_size as usize - 1);
        let mut clock = 0.0_f64;
        while active.len() > 1 {
            let k = active.len() as f64;
            let waiting = Exp::new(k * (k - 1.0) / (2.0 * self.time_scale)).map_err(|_| {
                CoalescentError::InvalidTimeScale {
                    found: self.time_scale,
                }
            })?;
            clock += rng.sample(waiting);
            let picked = rand::seq::index::sample(rng, active.len(), 2);
            let (i, j) = (picked.index(0), picked.index(1));
            // internal labels continue on from the leaves in creation order
            let parent = NodeLabel::from(sample_size + times.len() as u32 + 1);
            edges.push(Edge::new(active[i], parent));
            edges.push(Edge::new(active[j], parent));
            active.swap_remove(i.max(j));
            active.swap_remove(i.min(j));
            active.push(parent);
            times.push(Time::from(clock));
        }
        debug_assert_eq!(active[0], NodeLabel::from(sample_size + (sample_size - 1)));
        Ok(CoalescentTree {
            topology: Topology::new(edges).into_canonical(),
            ancestral_times: times,
        })
    }
}

/// One simulated tree: the topology plus the clock value
/// recorded at each merge.
#[derive(Clone, Debug, PartialEq)]
pub struct CoalescentTree {
    topology: Topology,
    ancestral_times: AncestralTimes,
}

impl CoalescentTree {
    /// The canonicalized topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Event times, one per merge, strictly increasing.
    pub fn ancestral_times(&self) -> &[Time] {
        &self.ancestral_times
    }

    /// Number of merge events, `n - 1` for `n` leaves.
    pub fn num_coalescences(&self) -> usize {
        self.ancestral_times.len()
    }

    /// Split into topology and times.
    pub fn into_parts(self) -> (Topology, AncestralTimes) {
        (self.topology, self.ancestral_times)
    }
}

/// Draw one tree with the default model.
pub fn simulate_coalescent<T: Rng>(
    sample_size: u32,
    rng: &mut T,
) -> CoalescentResult<CoalescentTree> {
    CoalescentModel::default().simulate(sample_size, rng)
}

/// Draw one tree with the default model and serialize it.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let sequence = prufts_coalescent::simulate_prufer(6, &mut rng).unwrap();
/// assert_eq!(sequence.len(), 2 * 6 - 3);
/// ```
pub fn simulate_prufer<T: Rng>(sample_size: u32, rng: &mut T) -> CoalescentResult<PruferSequence> {
    let tree = simulate_coalescent(sample_size, rng)?;
    let sequence = prufts_core::encode(tree.topology())?;
    Ok(sequence)
}
