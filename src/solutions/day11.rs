use anyhow::Result;
use memchr::memchr_iter;
use nalgebra::Point2;
use rustc_hash::FxHashSet;

#[derive(Debug)]
struct Universe {
    galaxies: Vec<Point2<i64>>,
    empty_rows: Vec<i64>,
    empty_columns: Vec<i64>,
}

impl Universe {
    fn parse(input: &str) -> Self {
        let mut galaxies = Vec::new();
        let mut width = 0i64;
        let mut height = 0i64;
        for (y, line) in input.lines().enumerate() {
            width = width.max(line.len() as i64);
            height = y as i64 + 1;
            for x in memchr_iter(b'#', line.as_bytes()) {
                galaxies.push(Point2::new(x as i64, y as i64));
            }
        }

        let galaxy_rows: FxHashSet<i64> = galaxies.iter().map(|g| g.y).collect();
        let galaxy_columns: FxHashSet<i64> = galaxies.iter().map(|g| g.x).collect();
        Universe {
            empty_rows: (0..height).filter(|y| !galaxy_rows.contains(y)).collect(),
            empty_columns: (0..width).filter(|x| !galaxy_columns.contains(x)).collect(),
            galaxies,
        }
    }

    /// Sum of manhattan distances over all galaxy pairs, with every empty row
    /// and column in between counting `expansion_factor` times.
    fn distance_sum(&self, expansion_factor: i64) -> i64 {
        let mut sum = 0;
        for (i, a) in self.galaxies.iter().enumerate() {
            for b in &self.galaxies[i + 1..] {
                sum += (a - b).abs().sum();

                let crossed_rows = self
                    .empty_rows
                    .iter()
                    .filter(|&&y| a.y.min(b.y) < y && y < a.y.max(b.y))
                    .count() as i64;
                let crossed_columns = self
                    .empty_columns
                    .iter()
                    .filter(|&&x| a.x.min(b.x) < x && x < a.x.max(b.x))
                    .count() as i64;
                sum += (crossed_rows + crossed_columns) * (expansion_factor - 1);
            }
        }
        sum
    }
}

pub fn day11(input: &str) -> Result<(usize, usize)> {
    let universe = Universe::parse(input);
    Ok((
        universe.distance_sum(2) as usize,
        universe.distance_sum(1_000_000) as usize,
    ))
}
