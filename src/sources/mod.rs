//! Built-in param sources.
//!
//! Four generators over one shared term list:
//! - `pure`: flat `terms` query
//! - `traced`: the pure body plus W3C trace headers
//! - `filtered`: bool query keeping hypsographic features (`feature_class` T)
//! - `prohibited`: bool query excluding the terms from administrative
//!   features (`feature_class` A)

mod filtered;
mod prohibited;
mod pure;
mod traced;

pub use filtered::FilteredTermsQuerySource;
pub use prohibited::ProhibitedTermsQuerySource;
pub use pure::PureTermsQuerySource;
pub use traced::TracedTermsQuerySource;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// RNG for a source: seeded for reproducible workloads, OS entropy otherwise.
fn source_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
