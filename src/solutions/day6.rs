use anyhow::{ensure, Context, Result};
use regex::Regex;

use crate::parse_usize_from_bytes;

#[derive(Debug)]
struct Race {
    time: usize,
    record: usize,
}

impl Race {
    fn winning_hold_count(&self) -> usize {
        // Holding for `t` ms travels t * (time - t) mm.
        (0..self.time)
            .filter(|hold| hold * (self.time - hold) > self.record)
            .count()
    }
}

pub fn day6(input: &str) -> Result<(usize, usize)> {
    let number_regex = Regex::new(r"\d+")?;
    let mut lines = input.lines();
    let time_line = lines.next().context("missing time line")?;
    let distance_line = lines.next().context("missing distance line")?;

    let parse_numbers = |line: &str| -> Result<Vec<usize>> {
        number_regex
            .find_iter(line)
            .map(|m| Ok(m.as_str().parse()?))
            .collect()
    };
    let times = parse_numbers(time_line)?;
    let distances = parse_numbers(distance_line)?;
    ensure!(
        times.len() == distances.len(),
        "mismatched time and distance counts"
    );

    let margin_product = times
        .iter()
        .zip(&distances)
        .map(|(&time, &record)| Race { time, record }.winning_hold_count())
        .product();

    // Part 2: ignore the kerning, both lines hold a single number each.
    let unkern = |line: &str| {
        let digits: Vec<u8> = line.bytes().filter(u8::is_ascii_digit).collect();
        parse_usize_from_bytes(&digits)
    };
    let long_race = Race {
        time: unkern(time_line),
        record: unkern(distance_line),
    };

    Ok((margin_product, long_race.winning_hold_count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Time:      7  15   30
        Distance:  9  40  200
    "};

    #[test]
    fn test_winning_hold_counts() {
        let races = [(7, 9, 4), (15, 40, 8), (30, 200, 9), (71530, 940200, 71503)];
        for (time, record, expected) in races {
            assert_eq!(Race { time, record }.winning_hold_count(), expected);
        }
    }

    #[test]
    fn test_day6() -> Result<()> {
        assert_eq!(day6(EXAMPLE)?, (288, 71503));
        Ok(())
    }
}
