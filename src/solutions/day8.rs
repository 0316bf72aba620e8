use anyhow::{bail, ensure, Context, Result};
use num::integer::lcm;
use regex::Regex;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    Right,
}

type Network<'a> = FxHashMap<&'a str, (&'a str, &'a str)>;

fn parse_map(input: &str) -> Result<(Vec<Direction>, Network)> {
    let mut lines = input.lines();
    let directions = lines
        .next()
        .context("missing directions line")?
        .chars()
        .map(|c| match c {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            _ => bail!("unknown direction: {}", c),
        })
        .collect::<Result<Vec<_>>>()?;
    ensure!(!directions.is_empty(), "empty directions line");

    let node_regex = Regex::new(r"(\w+) = \((\w+), (\w+)\)")?;
    let mut network = Network::default();
    for line in lines.filter(|line| !line.is_empty()) {
        let (_, [node, left, right]) = node_regex
            .captures(line)
            .with_context(|| format!("malformed node line: {}", line))?
            .extract();
        network.insert(node, (left, right));
    }

    Ok((directions, network))
}

fn steps_until(
    start: &str,
    directions: &[Direction],
    network: &Network,
    is_goal: impl Fn(&str) -> bool,
) -> Result<usize> {
    let mut current = start;
    let mut steps = 0;
    while !is_goal(current) {
        let &(left, right) = network
            .get(current)
            .with_context(|| format!("unknown node: {}", current))?;
        current = match directions[steps % directions.len()] {
            Direction::Left => left,
            Direction::Right => right,
        };
        steps += 1;
    }
    Ok(steps)
}

pub fn day8(input: &str) -> Result<(usize, usize)> {
    let (directions, network) = parse_map(input)?;

    let camel_steps = steps_until("AAA", &directions, &network, |node| node == "ZZZ")?;

    // Part 2: every xxA node walks simultaneously until all stand on xxZ at
    // once. Each ghost's path cycles, so the answer is the LCM of the
    // individual path lengths.
    let ghost_steps = network
        .keys()
        .filter(|node| node.ends_with('A'))
        .map(|start| steps_until(start, &directions, &network, |node| node.ends_with('Z')))
        .collect::<Result<Vec<_>>>()?;
    let all_ghosts_steps = ghost_steps.into_iter().fold(1, lcm);

    Ok((camel_steps, all_ghosts_steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day8() -> Result<()> {
        let example1 = indoc! {"
            RL

            AAA = (BBB, CCC)
            BBB = (DDD, EEE)
            CCC = (ZZZ, GGG)
            DDD = (DDD, DDD)
            EEE = (EEE, EEE)
            GGG = (GGG, GGG)
            ZZZ = (ZZZ, ZZZ)
        "};
        assert_eq!(day8(example1)?, (2, 2));

        let example2 = indoc! {"
            LLR

            AAA = (BBB, BBB)
            BBB = (AAA, ZZZ)
            ZZZ = (ZZZ, ZZZ)
        "};
        assert_eq!(day8(example2)?, (6, 6));
        Ok(())
    }

    #[test]
    fn test_ghost_steps() -> Result<()> {
        let example = indoc! {"
            LR

            11A = (11B, XXX)
            11B = (XXX, 11Z)
            11Z = (11B, XXX)
            22A = (22B, XXX)
            22B = (22C, 22C)
            22C = (22Z, 22Z)
            22Z = (22B, 22B)
            XXX = (XXX, XXX)
        "};
        let (directions, network) = parse_map(example)?;
        let steps = |start| steps_until(start, &directions, &network, |node| node.ends_with('Z'));
        assert_eq!(steps("11A")?, 2);
        assert_eq!(steps("22A")?, 3);
        assert_eq!([2, 3].into_iter().fold(1, lcm), 6);
        Ok(())
    }
}
