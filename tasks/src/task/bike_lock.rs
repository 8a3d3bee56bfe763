use crate::prelude::*;

pub const DEFAULT_INPUT: &str = "DISTANCE.INP";
pub const DEFAULT_OUTPUT: &str = "DISTANCE.OUT";

/// Fewest wheel clicks between the two codes on the first two non-blank
/// input lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Answer {
    pub policy: LengthPolicy,
}

impl Answer {
    #[must_use]
    pub fn new(policy: LengthPolicy) -> Self {
        Self { policy }
    }
}

impl Solver for Answer {
    type Input = (NumericCode, NumericCode);
    type Output = u64;

    fn name(&self) -> &'static str {
        "bike-lock"
    }

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        let mut lines = read_lines(r)
            .map_ok(|line| line.trim().to_owned())
            .filter_ok(|line| !line.is_empty());

        let mut next_code = |line: usize| -> Result<NumericCode> {
            let text = lines.next().ok_or(InputError::MissingLine { line })??;
            text.parse::<NumericCode>()
                .with_context(|| format!("line {}", line))
        };

        let first = next_code(1)?;
        let second = next_code(2)?;
        if lines.next().is_some() {
            warn!("ignoring input after the second code");
        }
        debug!(%first, %second, "read codes");

        Ok((first, second))
    }

    /// `9218` to `2574`: `14`
    fn solve(&self, input: &Self::Input) -> Result<Self::Output> {
        let (first, second) = input;
        if first.len() != second.len() {
            info!(
                left = first.len(),
                right = second.len(),
                policy = ?self.policy,
                "codes differ in length"
            );
        }

        Ok(total_distance_with(first, second, self.policy)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<(NumericCode, NumericCode)> {
        Answer::default().parse_input(Cursor::new(text))
    }

    #[test]
    fn example_codes() {
        let input = parse("9218\n2574\n").unwrap();
        assert_eq!(Answer::default().solve(&input).unwrap(), 14);
    }

    #[test]
    fn blank_lines_and_padding() {
        let input = parse("\n  1234 \n\n34\n").unwrap();
        assert_eq!(input.1.to_string(), "34");
        assert_eq!(Answer::default().solve(&input).unwrap(), 3);
    }

    #[test]
    fn strict_rejects_unequal_lengths() {
        let input = parse("1234\n34\n").unwrap();
        let err = Answer::new(LengthPolicy::Strict).solve(&input).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::LengthMismatch { left: 4, right: 2 })
        );
    }

    #[test]
    fn missing_second_code() {
        let err = parse("9218\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::MissingLine { line: 2 })
        );
    }

    #[test]
    fn bad_digit_names_line() {
        let err = parse("9218\n25x4\n").unwrap_err();
        assert!(format!("{:#}", err).starts_with("line 2: invalid input"));
        assert!(err.downcast_ref::<InputError>().is_some());
    }
}
