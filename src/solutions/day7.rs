use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Debug)]
struct Hand {
    cards: [u8; 5],
    bid: usize,
}

fn parse_hands(input: &str) -> Result<Vec<Hand>> {
    input
        .lines()
        .map(|line| {
            let (cards, bid) = line.split_once(' ').context("missing bid")?;
            Ok(Hand {
                cards: cards.as_bytes().try_into()?,
                bid: bid.parse()?,
            })
        })
        .collect()
}

fn hand_type(cards: [u8; 5], jokers_wild: bool) -> HandType {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    for card in cards {
        *counts.entry(card).or_default() += 1;
    }
    let jokers = if jokers_wild {
        counts.remove(&b'J').unwrap_or(0)
    } else {
        0
    };

    let mut occurrences: Vec<usize> = counts.values().copied().collect();
    occurrences.sort_unstable_by(|a, b| b.cmp(a));
    // Jokers always join the largest group. Five jokers leave nothing else.
    let best = occurrences.first().copied().unwrap_or(0) + jokers;
    let second = occurrences.get(1).copied().unwrap_or(0);

    match (best, second) {
        (5, _) => HandType::FiveOfAKind,
        (4, _) => HandType::FourOfAKind,
        (3, 2) => HandType::FullHouse,
        (3, _) => HandType::ThreeOfAKind,
        (2, 2) => HandType::TwoPair,
        (2, _) => HandType::OnePair,
        _ => HandType::HighCard,
    }
}

fn card_strength(card: u8, jokers_wild: bool) -> Result<usize> {
    Ok(match card {
        b'A' => 13,
        b'K' => 12,
        b'Q' => 11,
        b'J' => {
            if jokers_wild {
                0
            } else {
                10
            }
        }
        b'T' => 9,
        b'2'..=b'9' => (card - b'1') as usize,
        _ => bail!("unknown card: {}", card as char),
    })
}

fn total_winnings(hands: &[Hand], jokers_wild: bool) -> Result<usize> {
    let mut ranked: Vec<((HandType, [usize; 5]), usize)> = hands
        .iter()
        .map(|hand| {
            let mut strengths = [0; 5];
            for (strength, &card) in strengths.iter_mut().zip(&hand.cards) {
                *strength = card_strength(card, jokers_wild)?;
            }
            Ok(((hand_type(hand.cards, jokers_wild), strengths), hand.bid))
        })
        .collect::<Result<_>>()?;

    ranked.sort();
    Ok(ranked
        .iter()
        .enumerate()
        .map(|(i, (_, bid))| (i + 1) * bid)
        .sum())
}

pub fn day7(input: &str) -> Result<(usize, usize)> {
    let hands = parse_hands(input)?;
    Ok((
        total_winnings(&hands, false)?,
        total_winnings(&hands, true)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_hand_types() {
        assert_eq!(hand_type(*b"AAAAA", false), HandType::FiveOfAKind);
        assert_eq!(hand_type(*b"AA8AA", false), HandType::FourOfAKind);
        assert_eq!(hand_type(*b"23332", false), HandType::FullHouse);
        assert_eq!(hand_type(*b"TTT98", false), HandType::ThreeOfAKind);
        assert_eq!(hand_type(*b"23432", false), HandType::TwoPair);
        assert_eq!(hand_type(*b"A23A4", false), HandType::OnePair);
        assert_eq!(hand_type(*b"23456", false), HandType::HighCard);
    }

    #[test]
    fn test_jokers_promote_hands() {
        assert_eq!(hand_type(*b"T55J5", true), HandType::FourOfAKind);
        assert_eq!(hand_type(*b"KTJJT", true), HandType::FourOfAKind);
        assert_eq!(hand_type(*b"T3T3J", true), HandType::FullHouse);
        assert_eq!(hand_type(*b"Q2KJJ", true), HandType::ThreeOfAKind);
        assert_eq!(hand_type(*b"JJJJJ", true), HandType::FiveOfAKind);
        assert_eq!(hand_type(*b"JJJJJ", false), HandType::FiveOfAKind);
    }

    #[test]
    fn test_day7() -> Result<()> {
        let example = indoc! {"
            32T3K 765
            T55J5 684
            KK677 28
            KTJJT 220
            QQQJA 483
        "};
        assert_eq!(day7(example)?, (6440, 5905));
        Ok(())
    }
}
