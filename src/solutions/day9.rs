use anyhow::{Context, Result};

fn parse_report(input: &str) -> Result<Vec<Vec<i64>>> {
    input
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|value| Ok(value.parse()?))
                .collect()
        })
        .collect()
}

/// Extrapolates the value after the last one by stacking difference sequences
/// until they flatten out. The next value is the sum of all the last values.
fn next_value(history: &[i64]) -> i64 {
    let mut extrapolated = 0;
    let mut current = history.to_vec();
    loop {
        extrapolated += current.last().copied().unwrap_or(0);
        let deltas: Vec<i64> = current.windows(2).map(|pair| pair[1] - pair[0]).collect();
        if deltas.iter().all(|&delta| delta == 0) {
            break;
        }
        current = deltas;
    }
    extrapolated
}

fn previous_value(history: &[i64]) -> i64 {
    let reversed: Vec<i64> = history.iter().rev().copied().collect();
    next_value(&reversed)
}

pub fn day9(input: &str) -> Result<(usize, usize)> {
    let report = parse_report(input)?;

    let next_sum: i64 = report.iter().map(|history| next_value(history)).sum();
    let previous_sum: i64 = report.iter().map(|history| previous_value(history)).sum();

    // Intermediate values go negative, the sums shouldn't.
    Ok((
        usize::try_from(next_sum).context("negative extrapolation sum")?,
        usize::try_from(previous_sum).context("negative extrapolation sum")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_extrapolation() {
        assert_eq!(next_value(&[0, 3, 6, 9, 12, 15]), 18);
        assert_eq!(next_value(&[1, 3, 6, 10, 15, 21]), 28);
        assert_eq!(next_value(&[10, 13, 16, 21, 30, 45]), 68);
        assert_eq!(previous_value(&[10, 13, 16, 21, 30, 45]), 5);
        assert_eq!(previous_value(&[0, 3, 6, 9, 12, 15]), -3);
    }

    #[test]
    fn test_day9() -> Result<()> {
        let example = indoc! {"
            0 3 6 9 12 15
            1 3 6 10 15 21
            10 13 16 21 30 45
        "};
        assert_eq!(day9(example)?, (114, 2));
        Ok(())
    }
}
