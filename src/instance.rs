use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::*;

fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(Error::invalid_input("size", "number of agents should be a positive integer"));
    }
    Ok(())
}

fn shuffled(size: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut v: Vec<usize> = (0..size).collect();
    v.shuffle(rng);
    v
}

/// Random rankings for `size` agents, reproducible from `seed`.
pub fn random_preference(size: usize, seed: u64) -> Result<Vec<Vec<Object>>> {
    check_size(size)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..size).map(|_| shuffled(size, &mut rng)).collect())
}

/// A random assignment of `size` objects to `size` agents, reproducible from
/// `seed`. Usable as an allocation, an SP order or a TTC endowment.
pub fn random_allocation(size: usize, seed: u64) -> Result<Vec<Object>> {
    check_size(size)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(shuffled(size, &mut rng))
}
