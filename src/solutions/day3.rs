use anyhow::Result;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Coord {
    x: i32,
    y: i32,
}

#[derive(Debug)]
struct Number {
    value: usize,
    digits: Vec<Coord>,
}

impl Number {
    fn adjacent_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        // Includes the number's own digit cells; those never hold a symbol.
        self.digits.iter().flat_map(|digit| {
            (-1..=1).flat_map(move |dy| {
                (-1..=1).map(move |dx| Coord {
                    x: digit.x + dx,
                    y: digit.y + dy,
                })
            })
        })
    }
}

#[derive(Debug)]
struct Schematic {
    numbers: Vec<Number>,
    symbols: FxHashMap<Coord, char>,
}

fn parse_schematic(input: &str) -> Schematic {
    let mut numbers = Vec::new();
    let mut symbols = FxHashMap::default();

    for (y, line) in input.lines().enumerate() {
        let y = y as i32;
        let mut current: Option<Number> = None;
        for (x, c) in line.chars().enumerate() {
            let x = x as i32;
            if let Some(digit) = c.to_digit(10) {
                let number = current.get_or_insert_with(|| Number {
                    value: 0,
                    digits: Vec::new(),
                });
                number.value = number.value * 10 + digit as usize;
                number.digits.push(Coord { x, y });
            } else {
                if let Some(number) = current.take() {
                    numbers.push(number);
                }
                if c != '.' {
                    symbols.insert(Coord { x, y }, c);
                }
            }
        }
        if let Some(number) = current.take() {
            numbers.push(number);
        }
    }

    Schematic { numbers, symbols }
}

pub fn day3(input: &str) -> Result<(usize, usize)> {
    let schematic = parse_schematic(input);

    let part_number_sum = schematic
        .numbers
        .iter()
        .filter(|number| {
            number
                .adjacent_coords()
                .any(|coord| schematic.symbols.contains_key(&coord))
        })
        .map(|number| number.value)
        .sum();

    // Part 2: a gear is a '*' adjacent to exactly two numbers. Deduplicate the
    // stars per number so multi-digit neighbors only count once.
    let mut gears: FxHashMap<Coord, Vec<usize>> = FxHashMap::default();
    for number in &schematic.numbers {
        let stars: FxHashSet<Coord> = number
            .adjacent_coords()
            .filter(|coord| schematic.symbols.get(coord) == Some(&'*'))
            .collect();
        for star in stars {
            gears.entry(star).or_default().push(number.value);
        }
    }
    let gear_ratio_sum = gears
        .values()
        .filter(|values| values.len() == 2)
        .map(|values| values[0] * values[1])
        .sum();

    Ok((part_number_sum, gear_ratio_sum))
}
