use aho_corasick::AhoCorasick;
use anyhow::Result;

pub fn day1(input: &str) -> Result<(usize, usize)> {
    // NOTE: regex doesn't work since it doesn't support overlapping matches (look-around)
    let patterns = &[
        "\n", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "zero", "one", "two", "three",
        "four", "five", "six", "seven", "eight", "nine",
    ];
    let ac = AhoCorasick::new(patterns)?;

    let mut sum_part1 = 0;
    let mut sum_part2 = 0;

    let mut digits_part1 = None;
    let mut digits_part2 = None;

    for mat in ac.find_overlapping_iter(input) {
        let (digit, real_digit) = match mat.pattern().as_usize() {
            0 => {
                sum_part1 += calibration_value(digits_part1.take());
                sum_part2 += calibration_value(digits_part2.take());
                continue;
            }
            d @ 1..=10 => (d - 1, true),
            d => (d - 11, false),
        };

        if real_digit {
            push_digit(&mut digits_part1, digit);
        }
        push_digit(&mut digits_part2, digit);
    }
    // Flush once more in case the last line has no trailing newline.
    sum_part1 += calibration_value(digits_part1);
    sum_part2 += calibration_value(digits_part2);

    Ok((sum_part1, sum_part2))
}

fn push_digit(digits: &mut Option<(usize, usize)>, digit: usize) {
    match digits {
        None => *digits = Some((digit, digit)),
        Some((_, last)) => *last = digit,
    }
}

fn calibration_value(digits: Option<(usize, usize)>) -> usize {
    match digits {
        Some((first, last)) => first * 10 + last,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day1() -> Result<()> {
        let example_part1 = indoc! {"
            1abc2
            pqr3stu8vwx
            a1b2c3d4e5f
            treb7uchet
        "};
        assert_eq!(day1(example_part1)?, (142, 142));

        let example_part2 = indoc! {"
            two1nine
            eightwothree
            abcone2threexyz
            xtwone3four
            4nineeightseven2
            zoneight234
            7pqrstsixteen
        "};
        assert_eq!(day1(example_part2)?.1, 281);
        assert_eq!(day1("twone\n")?.1, 21);
        assert_eq!(day1("twone")?.1, 21);
        Ok(())
    }
}
