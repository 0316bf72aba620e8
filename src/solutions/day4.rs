use anyhow::{Context, Result};

#[derive(Debug)]
struct Card {
    winning_numbers: Vec<usize>,
    my_numbers: Vec<usize>,
}

impl Card {
    fn match_count(&self) -> usize {
        self.my_numbers
            .iter()
            .filter(|n| self.winning_numbers.contains(n))
            .count()
    }
}

fn parse_cards(input: &str) -> Result<Vec<Card>> {
    input
        .lines()
        .map(|line| {
            let (_, numbers) = line.split_once(':').context("missing card prefix")?;
            let (winning, mine) = numbers
                .split_once('|')
                .context("missing number separator")?;
            Ok(Card {
                winning_numbers: parse_numbers(winning)?,
                my_numbers: parse_numbers(mine)?,
            })
        })
        .collect()
}

fn parse_numbers(raw: &str) -> Result<Vec<usize>> {
    Ok(raw
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()?)
}

pub fn day4(input: &str) -> Result<(usize, usize)> {
    let cards = parse_cards(input)?;
    let match_counts: Vec<usize> = cards.iter().map(Card::match_count).collect();

    let score: usize = match_counts
        .iter()
        .map(|&matches| if matches == 0 { 0 } else { 1 << (matches - 1) })
        .sum();

    // Part 2: card i wins one copy each of the next `matches` cards, copies
    // included. Never extends past the table.
    let mut copies = vec![1; match_counts.len()];
    for i in 0..copies.len() {
        for j in i + 1..(i + 1 + match_counts[i]).min(copies.len()) {
            copies[j] += copies[i];
        }
    }
    let total_cards = copies.iter().sum();

    Ok((score, total_cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day4() -> Result<()> {
        let example = indoc! {"
            Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
            Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
            Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
            Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
            Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
            Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
        "};
        assert_eq!(day4(example)?, (13, 30));
        Ok(())
    }
}
