//! The shrink-search driver: evaluate, fail, minimize, report.

use crate::arbitrary::Arbitrary;
use crate::partial::PartialExample;
use crate::random::SplitMix;
use crate::shrinkable::Shrinkable;
use crate::tosser::toss;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Options for one check run.
pub struct CheckConfig<T> {
    /// Replay seed. When absent a process-derived seed is drawn, and the
    /// report carries it so the run can be replayed.
    pub seed: Option<u64>,
    /// Run-count limit: how many candidates are evaluated before the run
    /// passes.
    pub num_runs: usize,
    /// Bound on the shrink search, checked between steps only.
    pub max_shrinks: usize,
    /// Explicit values always tried first and never shrunk.
    pub examples: Vec<T>,
    /// Positional overrides applied from the first generated draw onward.
    pub partial_examples: Vec<PartialExample<T>>,
}

impl<T> Default for CheckConfig<T> {
    fn default() -> Self {
        CheckConfig {
            seed: None,
            num_runs: 100,
            max_shrinks: 1000,
            examples: Vec::new(),
            partial_examples: Vec::new(),
        }
    }
}

impl<T> CheckConfig<T> {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_num_runs(mut self, num_runs: usize) -> Self {
        self.num_runs = num_runs;
        self
    }

    pub fn with_max_shrinks(mut self, max_shrinks: usize) -> Self {
        self.max_shrinks = max_shrinks;
        self
    }

    pub fn with_examples(mut self, examples: Vec<T>) -> Self {
        self.examples = examples;
        self
    }

    pub fn with_partial_examples(mut self, partial_examples: Vec<PartialExample<T>>) -> Self {
        self.partial_examples = partial_examples;
        self
    }
}

/// Outcome of a check run. Immutable once built; no other state survives the
/// run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport<T> {
    /// Whether any evaluated candidate failed the predicate.
    pub failed: bool,
    /// The seed that drove the run; feed it back through
    /// [`CheckConfig::with_seed`] to replay deterministically.
    pub seed: u64,
    /// The locally-minimal failing value, when `failed`.
    pub counterexample: Option<T>,
    /// Candidates evaluated before the run ended.
    pub num_runs: usize,
    /// Shrink steps applied to reach the counterexample.
    pub num_shrinks: usize,
}

impl<T: fmt::Debug> fmt::Display for CheckReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failed {
            writeln!(
                f,
                "✗ failed after {} runs and {} shrinks.",
                self.num_runs, self.num_shrinks
            )?;
            if let Some(counterexample) = &self.counterexample {
                writeln!(f, "    Counterexample: {counterexample:?}")?;
            }
            write!(f, "    Replay seed: {}", self.seed)
        } else {
            write!(f, "✓ passed {} runs (seed: {})", self.num_runs, self.seed)
        }
    }
}

/// Run `predicate` against up to `num_runs` candidates from `arb`; on the
/// first failure, minimize greedily and report.
///
/// A predicate returning `false` is the failure signal; it is data, not an
/// exceptional control path. The shrink search is depth-first and greedy: at
/// each step the current candidate is replaced by the first of its shrink
/// children that still fails, scanning children in the arbitrary's fixed
/// precedence order. It terminates when no child fails, which makes the
/// reported counterexample 1-step-locally minimal — no single shrink step
/// from it still fails — but not necessarily globally minimal.
pub fn check<T, P>(arb: Rc<dyn Arbitrary<T>>, predicate: P, config: CheckConfig<T>) -> CheckReport<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool,
{
    let seed = config.seed.unwrap_or_else(derived_seed);
    let mut producers = toss(
        arb,
        seed,
        SplitMix::from_seed,
        config.examples,
        config.partial_examples,
    );

    let mut num_runs = 0;
    while num_runs < config.num_runs {
        let producer = match producers.next() {
            Some(producer) => producer,
            None => break,
        };
        let candidate = producer();
        num_runs += 1;
        if !predicate(candidate.value_ref()) {
            let (minimal, num_shrinks) = shrink_failure(candidate, &predicate, config.max_shrinks);
            return CheckReport {
                failed: true,
                seed,
                counterexample: Some(minimal.value()),
                num_runs,
                num_shrinks,
            };
        }
    }

    CheckReport {
        failed: false,
        seed,
        counterexample: None,
        num_runs,
        num_shrinks: 0,
    }
}

/// Suspending variant of [`check`] for future-returning predicates.
///
/// At most one evaluation is in flight at a time: each outcome is awaited
/// before the next probe is chosen, since the shrink search needs to observe
/// one verdict before deciding where to step. The limits are checked between
/// steps only; an in-flight evaluation is never preempted.
pub async fn check_async<T, P, Fut>(
    arb: Rc<dyn Arbitrary<T>>,
    predicate: P,
    config: CheckConfig<T>,
) -> CheckReport<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> Fut,
    Fut: Future<Output = bool>,
{
    let seed = config.seed.unwrap_or_else(derived_seed);
    let mut producers = toss(
        arb,
        seed,
        SplitMix::from_seed,
        config.examples,
        config.partial_examples,
    );

    let mut num_runs = 0;
    while num_runs < config.num_runs {
        let producer = match producers.next() {
            Some(producer) => producer,
            None => break,
        };
        let candidate = producer();
        num_runs += 1;
        if !predicate(candidate.value_ref()).await {
            let mut current = candidate;
            let mut num_shrinks = 0;
            'minimize: while num_shrinks < config.max_shrinks {
                for child in current.shrink() {
                    if !predicate(child.value_ref()).await {
                        current = child;
                        num_shrinks += 1;
                        continue 'minimize;
                    }
                }
                break;
            }
            return CheckReport {
                failed: true,
                seed,
                counterexample: Some(current.value()),
                num_runs,
                num_shrinks,
            };
        }
    }

    CheckReport {
        failed: false,
        seed,
        counterexample: None,
        num_runs,
        num_shrinks: 0,
    }
}

/// Greedy first-failing-child descent from a failing candidate.
fn shrink_failure<T, P>(
    mut current: Shrinkable<T>,
    predicate: &P,
    max_shrinks: usize,
) -> (Shrinkable<T>, usize)
where
    T: Clone + 'static,
    P: Fn(&T) -> bool,
{
    let mut num_shrinks = 0;
    while num_shrinks < max_shrinks {
        match current.shrink().find(|child| !predicate(child.value_ref())) {
            Some(child) => {
                current = child;
                num_shrinks += 1;
            }
            None => break,
        }
    }
    (current, num_shrinks)
}

/// Seed for runs that did not supply one.
fn derived_seed() -> u64 {
    use rand::Rng;
    rand::thread_rng().gen()
}
