mod types;
mod error;
mod preference;
mod allocation;
mod graph;
mod permutations;
mod sp;
mod ttc;
mod pareto;
mod manipulation;
mod instance;

pub use types::{Agent, Object};
pub use error::{Error, Result, Validated, Warning};
pub use preference::Preference;
pub use allocation::Allocation;
pub use graph::ImprovementGraph;
pub use permutations::Permutations;
pub use sp::sequential_priority;
pub use ttc::top_trading_cycles;
pub use pareto::{is_pareto_efficient, pareto_efficient_allocations, LARGE_PROFILE};
pub use manipulation::{manipulation, AgentRef, ManipulationReport, Manipulations, Mechanism};
pub use instance::{random_allocation, random_preference};
