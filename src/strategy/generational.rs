use super::{BreedStrategy, Rates};
use crate::board::Board;
use crate::error::Result;
use crate::operators::{order_crossover, swap_mutation};
use crate::rng::RandomNumberGenerator;
use crate::selection::{SelectionStrategy, TournamentSelection};

/// # GenerationalStrategy
///
/// Builds every child of the next generation the same way: select two parents,
/// apply order crossover with probability `rates.crossover` (otherwise copy the
/// first parent), then apply swap mutation with probability `rates.mutation`.
/// Parents are never modified; children are owned copies.
#[derive(Debug, Clone)]
pub struct GenerationalStrategy<S = TournamentSelection>
where
    S: SelectionStrategy + Clone,
{
    selection: S,
}

impl<S> GenerationalStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    pub fn new(selection: S) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    fn breed_child(
        &self,
        population: &[Board],
        fitness: &[usize],
        rates: Rates,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Board> {
        let parent1 = self.selection.select(population, fitness, rng)?;
        let parent2 = self.selection.select(population, fitness, rng)?;

        let mut child = if rng.chance(rates.crossover) {
            order_crossover(parent1, parent2, rng)?
        } else {
            parent1.clone()
        };

        if rng.chance(rates.mutation) {
            swap_mutation(&mut child, rng);
        }

        Ok(child)
    }
}

impl Default for GenerationalStrategy<TournamentSelection> {
    fn default() -> Self {
        Self::new(TournamentSelection::default())
    }
}

impl<S> BreedStrategy for GenerationalStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    fn breed(
        &self,
        population: &[Board],
        fitness: &[usize],
        size: usize,
        rates: Rates,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Board>> {
        let mut offspring = Vec::with_capacity(size);
        while offspring.len() < size {
            offspring.push(self.breed_child(population, fitness, rates, rng)?);
        }
        Ok(offspring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;
    use crate::evolution::{Challenge, PairConflicts};

    fn scored(population: &[Board]) -> Vec<usize> {
        population.iter().map(|b| PairConflicts.score(b)).collect()
    }

    #[test]
    fn test_breed_keeps_population_size() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let population: Vec<Board> = (0..30).map(|_| Board::random(6, &mut rng)).collect();
        let fitness = scored(&population);
        let rates = Rates {
            crossover: 0.7,
            mutation: 0.1,
        };

        let strategy = GenerationalStrategy::<TournamentSelection>::default();
        let children = strategy
            .breed(&population, &fitness, population.len(), rates, &mut rng)
            .unwrap();

        assert_eq!(children.len(), 30);
        assert!(children.iter().all(|c| c.size() == 6));
    }

    #[test]
    fn test_no_operators_copies_parents() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        let population: Vec<Board> = (0..10).map(|_| Board::random(5, &mut rng)).collect();
        let snapshot = population.clone();
        let fitness = scored(&population);
        let rates = Rates {
            crossover: 0.0,
            mutation: 0.0,
        };

        let strategy = GenerationalStrategy::new(TournamentSelection::new(1).unwrap());
        let mut children = strategy
            .breed(&population, &fitness, 25, rates, &mut rng)
            .unwrap();

        assert_eq!(children.len(), 25);
        assert!(children.iter().all(|c| population.contains(c)));

        // Children are copies: changing one leaves the population alone.
        for child in children.iter_mut() {
            let shifted = (child.columns()[0] + 1) % child.size();
            child.columns_mut()[0] = shifted;
        }
        assert_eq!(population, snapshot);
    }

    #[test]
    fn test_mutation_only_preserves_column_multiset() {
        let population = vec![Board::from_columns(&[0, 0, 1, 2]).unwrap()];
        let fitness = scored(&population);
        let rates = Rates {
            crossover: 0.0,
            mutation: 1.0,
        };
        let mut rng = RandomNumberGenerator::from_seed(21);

        let strategy = GenerationalStrategy::<TournamentSelection>::default();
        let children = strategy.breed(&population, &fitness, 40, rates, &mut rng).unwrap();
        for child in children {
            let mut columns = child.columns().to_vec();
            columns.sort_unstable();
            assert_eq!(columns, vec![0, 0, 1, 2]);
        }
    }

    #[test]
    fn test_breed_empty_population() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let rates = Rates {
            crossover: 0.5,
            mutation: 0.5,
        };
        let strategy = GenerationalStrategy::<TournamentSelection>::default();
        let result = strategy.breed(&[], &[], 4, rates, &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
