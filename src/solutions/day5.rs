use anyhow::{ensure, Context, Result};
use regex::Regex;

#[derive(Debug, Clone, Copy)]
struct MapRange {
    destination: usize,
    source: usize,
    length: usize,
}

#[derive(Debug)]
struct Almanac {
    seeds: Vec<usize>,
    // Conversion maps in chain order, seed-to-soil through humidity-to-location.
    maps: Vec<Vec<MapRange>>,
}

impl Almanac {
    fn parse(input: &str) -> Result<Self> {
        let number_regex = Regex::new(r"\d+")?;
        let parse_numbers = |line: &str| -> Result<Vec<usize>> {
            number_regex
                .find_iter(line)
                .map(|m| Ok(m.as_str().parse()?))
                .collect()
        };

        let mut lines = input.lines();
        let seeds = parse_numbers(lines.next().context("missing seeds line")?)?;
        ensure!(!seeds.is_empty(), "no seeds found");

        let mut maps = Vec::new();
        let mut current = Vec::new();
        for line in lines {
            if line.is_empty() || line.contains("map") {
                if !current.is_empty() {
                    maps.push(std::mem::take(&mut current));
                }
                continue;
            }
            let numbers = parse_numbers(line)?;
            ensure!(numbers.len() == 3, "malformed map range: {}", line);
            current.push(MapRange {
                destination: numbers[0],
                source: numbers[1],
                length: numbers[2],
            });
        }
        if !current.is_empty() {
            maps.push(current);
        }

        Ok(Almanac { seeds, maps })
    }

    fn seed_location(&self, seed: usize) -> usize {
        let mut value = seed;
        for map in &self.maps {
            if let Some(range) = map
                .iter()
                .find(|r| (r.source..r.source + r.length).contains(&value))
            {
                value = range.destination + (value - range.source);
            }
        }
        value
    }

    /// Pushes half-open `[start, end)` ranges through the conversion chain,
    /// splitting them at range boundaries instead of walking every seed.
    fn range_locations(&self, seed_ranges: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
        let mut current = seed_ranges;
        for map in &self.maps {
            let mut mapped = Vec::new();
            let mut unmapped = current;
            for range in map {
                let source_end = range.source + range.length;
                let mut rest = Vec::new();
                for (start, end) in unmapped {
                    let overlap_start = start.max(range.source);
                    let overlap_end = end.min(source_end);
                    if overlap_start >= overlap_end {
                        rest.push((start, end));
                        continue;
                    }
                    mapped.push((
                        range.destination + (overlap_start - range.source),
                        range.destination + (overlap_end - range.source),
                    ));
                    if start < overlap_start {
                        rest.push((start, overlap_start));
                    }
                    if overlap_end < end {
                        rest.push((overlap_end, end));
                    }
                }
                unmapped = rest;
            }
            // Values no range covered fall through unchanged.
            mapped.extend(unmapped);
            current = mapped;
        }
        current
    }
}

pub fn day5(input: &str) -> Result<(usize, usize)> {
    let almanac = Almanac::parse(input)?;

    let nearest_location = almanac
        .seeds
        .iter()
        .map(|&seed| almanac.seed_location(seed))
        .min()
        .context("no seeds found")?;

    // Part 2: the seeds line is really (start, length) pairs.
    let seed_ranges = almanac
        .seeds
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[0] + pair[1]))
        .collect();
    let nearest_range_location = almanac
        .range_locations(seed_ranges)
        .into_iter()
        .map(|(start, _)| start)
        .min()
        .context("no seed ranges found")?;

    Ok((nearest_location, nearest_range_location))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        seeds: 79 14 55 13

        seed-to-soil map:
        50 98 2
        52 50 48

        soil-to-fertilizer map:
        0 15 37
        37 52 2
        39 0 15

        fertilizer-to-water map:
        49 53 8
        0 11 42
        42 0 7
        57 7 4

        water-to-light map:
        88 18 7
        18 25 70

        light-to-temperature map:
        45 77 23
        81 45 19
        68 64 13

        temperature-to-humidity map:
        0 69 1
        1 0 69

        humidity-to-location map:
        60 56 37
        56 93 4
    "};

    #[test]
    fn test_seed_locations() -> Result<()> {
        let almanac = Almanac::parse(EXAMPLE)?;
        let locations: Vec<usize> = almanac
            .seeds
            .iter()
            .map(|&seed| almanac.seed_location(seed))
            .collect();
        assert_eq!(locations, [82, 43, 86, 35]);
        Ok(())
    }

    #[test]
    fn test_day5() -> Result<()> {
        assert_eq!(day5(EXAMPLE)?, (35, 46));
        Ok(())
    }
}
