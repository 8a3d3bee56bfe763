use crate::prelude::*;

pub const PROMPT: &str = "Enter spreadsheet number: ";

/// A resolved date, printed the way the prompt's answer line reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved(pub CalendarDate);

impl Display for Resolved {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Date (DD/MM/YYYY): {}", self.0)
    }
}

/// Calendar date of a day offset counted from 1 January 1990.
pub struct Answer;

impl Solver for Answer {
    type Input = i64;
    type Output = Resolved;

    fn name(&self) -> &'static str {
        "number-to-date"
    }

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        let line = nth_line(r, 1)?.ok_or(InputError::MissingLine { line: 1 })?;
        Ok(parse_offset(&line)?)
    }

    /// `149808`: `29/02/2400`
    fn solve(&self, input: &Self::Input) -> Result<Self::Output> {
        let date = resolve(*input)?;
        debug!(offset = input, %date, "resolved");
        Ok(Resolved(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(text: &str) -> Result<String> {
        let mut sink = vec![];
        Answer.run(Cursor::new(text), &mut sink, false)?;
        Ok(String::from_utf8(sink)?)
    }

    #[test]
    fn epoch() {
        assert_eq!(run("0\n").unwrap(), "Date (DD/MM/YYYY): 01/01/1990\n");
    }

    #[test]
    fn leap_day_2400() {
        assert_eq!(run("149808").unwrap(), "Date (DD/MM/YYYY): 29/02/2400\n");
    }

    #[test]
    fn negative_offset() {
        let err = run("-1\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::NegativeOffset { offset: -1 })
        );
    }

    #[test]
    fn not_a_number() {
        let err = run("soon\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn empty_input() {
        let err = run("\n\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::MissingLine { line: 1 })
        );
    }
}
