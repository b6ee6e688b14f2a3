//! Choosing which outline beats survive into the draft.

use crate::{Beat, renumber};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use vellum_error::{NarrativeError, NarrativeErrorKind, VellumError, VellumResult};

/// Operator decision for one beat.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Decision {
    Keep,
    Drop,
    Edit,
    Quit,
}

impl Decision {
    fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "" | "k" | "keep" => Some(Decision::Keep),
            "d" | "drop" => Some(Decision::Drop),
            "e" | "edit" => Some(Decision::Edit),
            "q" | "quit" => Some(Decision::Quit),
            _ => None,
        }
    }
}

fn interaction(e: std::io::Error) -> VellumError {
    NarrativeError::new(NarrativeErrorKind::Interaction(e.to_string())).into()
}

/// Read one line; `None` on end of input.
fn read_answer<R: BufRead>(input: &mut R) -> VellumResult<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(interaction)?;
    Ok((read > 0).then_some(line))
}

/// Walk the operator through each beat: keep, drop, edit or quit.
///
/// An empty answer keeps the beat, and an empty edit keeps the original
/// text. Quitting, or reaching end of input, stops the review with the
/// beats kept so far. Kept beats are renumbered `1..=k`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use vellum_narrative::{Beat, curate_interactive};
///
/// let beats = vec![Beat::new(1, "One"), Beat::new(2, "Two"), Beat::new(3, "Three")];
/// let mut transcript = Vec::new();
/// let kept = curate_interactive(&beats, Cursor::new("d\nk\ne\nThree, revised\n"), &mut transcript).unwrap();
///
/// assert_eq!(kept, vec![Beat::new(1, "Two"), Beat::new(2, "Three, revised")]);
/// ```
pub fn curate_interactive<R: BufRead, W: Write>(
    beats: &[Beat],
    mut input: R,
    mut output: W,
) -> VellumResult<Vec<Beat>> {
    let mut kept = Vec::new();

    'beats: for beat in beats {
        writeln!(output, "\nBeat {}:\n{}\n", beat.index(), beat.text()).map_err(interaction)?;

        loop {
            write!(output, "[k]eep / [d]rop / [e]dit / [q]uit (default keep): ")
                .map_err(interaction)?;
            output.flush().map_err(interaction)?;

            let Some(answer) = read_answer(&mut input)? else {
                break 'beats;
            };
            match Decision::parse(&answer) {
                Some(Decision::Keep) => {
                    kept.push(beat.clone());
                    break;
                }
                Some(Decision::Drop) => break,
                Some(Decision::Edit) => {
                    write!(output, "New text for beat {}: ", beat.index()).map_err(interaction)?;
                    output.flush().map_err(interaction)?;
                    let edited = read_answer(&mut input)?.unwrap_or_default();
                    let edited = edited.trim();
                    if edited.is_empty() {
                        kept.push(beat.clone());
                    } else {
                        kept.push(Beat::new(*beat.index(), edited));
                    }
                    break;
                }
                Some(Decision::Quit) => break 'beats,
                None => {
                    writeln!(output, "Please answer k, d, e or q.").map_err(interaction)?;
                }
            }
        }
    }

    Ok(renumber(kept))
}

/// Parse a selection such as `1,3, 5` into beat numbers.
///
/// # Examples
///
/// ```
/// use vellum_narrative::parse_selection;
///
/// assert_eq!(parse_selection("3, 1,3").unwrap(), vec![1, 3]);
/// assert!(parse_selection("1,x").is_err());
/// ```
pub fn parse_selection(selection: &str) -> VellumResult<Vec<u32>> {
    let mut numbers = BTreeSet::new();
    for part in selection.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let number = part.parse::<u32>().map_err(|_| {
            VellumError::from(NarrativeError::new(NarrativeErrorKind::EmptyInput(format!(
                "selection '{}' must be comma-separated beat numbers such as 1,3,5",
                selection
            ))))
        })?;
        numbers.insert(number);
    }
    if numbers.is_empty() {
        return Err(NarrativeError::new(NarrativeErrorKind::EmptyInput(
            "selection names no beats".to_string(),
        ))
        .into());
    }
    Ok(numbers.into_iter().collect())
}

/// Keep the beats with the given numbers, in document order, renumbered.
///
/// # Errors
///
/// Returns [`NarrativeErrorKind::BeatNotFound`] for a number with no beat.
pub fn select_beats(beats: &[Beat], numbers: &[u32]) -> VellumResult<Vec<Beat>> {
    if let Some(&missing) = numbers
        .iter()
        .find(|&&n| !beats.iter().any(|b| *b.index() == n))
    {
        return Err(NarrativeError::new(NarrativeErrorKind::BeatNotFound {
            number: missing,
            available: beats.len(),
        })
        .into());
    }

    let selected = beats
        .iter()
        .filter(|b| numbers.contains(b.index()))
        .cloned()
        .collect();
    Ok(renumber(selected))
}
