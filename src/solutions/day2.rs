use anyhow::{bail, Context, Result};

#[derive(Debug, Default)]
struct CubeSample {
    red: usize,
    green: usize,
    blue: usize,
}

fn parse_games(input: &str) -> Result<Vec<Vec<CubeSample>>> {
    input.lines().map(parse_game).collect()
}

fn parse_game(line: &str) -> Result<Vec<CubeSample>> {
    let (_, samples) = line.split_once(": ").context("missing game prefix")?;
    samples
        .split("; ")
        .map(|sample| {
            let mut cubes = CubeSample::default();
            for cube in sample.split(", ") {
                let (count, color) = cube.split_once(' ').context("malformed cube count")?;
                let count = count.parse()?;
                match color {
                    "red" => cubes.red = count,
                    "green" => cubes.green = count,
                    "blue" => cubes.blue = count,
                    _ => bail!("unknown cube color: {}", color),
                }
            }
            Ok(cubes)
        })
        .collect()
}

pub fn day2(input: &str) -> Result<(usize, usize)> {
    let games = parse_games(input)?;

    // Part 1: which games are possible with 12 red, 13 green and 14 blue cubes?
    let possible_id_sum = games
        .iter()
        .enumerate()
        .filter(|(_, samples)| {
            samples
                .iter()
                .all(|s| s.red <= 12 && s.green <= 13 && s.blue <= 14)
        })
        .map(|(i, _)| i + 1)
        .sum();

    // Part 2: the minimal bag for a game needs the per-color maximum over its samples.
    let power_sum = games
        .iter()
        .map(|samples| {
            let red = samples.iter().map(|s| s.red).max().unwrap_or(0);
            let green = samples.iter().map(|s| s.green).max().unwrap_or(0);
            let blue = samples.iter().map(|s| s.blue).max().unwrap_or(0);
            red * green * blue
        })
        .sum();

    Ok((possible_id_sum, power_sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day2() -> Result<()> {
        let example = indoc! {"
            Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
            Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
            Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
            Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
            Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
        "};
        assert_eq!(day2(example)?, (8, 2286));
        assert!(day2("Game 1: 3 orange\n").is_err());
        Ok(())
    }
}
