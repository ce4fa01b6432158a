//! The round state machine: one target letter, checked one dot tap at a time.
//!
//! A round only ever counts correct taps. Wrong taps report a
//! [`Signal::Mistake`] but take nothing away, so a learner always converges
//! on the pattern. Marks are never removed until the next round starts.

use serde::{Deserialize, Serialize};

use crate::alphabet::{DotPosition, DotSet, Letter};
use crate::error::RulesError;

/// Outcome of a single dot selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// A required dot was marked (or re-tapped) and more remain.
    Progress,
    /// The dot is not part of the target pattern.
    Mistake,
    /// The last required dot was marked. Emitted once per round.
    Complete,
    /// The round had already completed; the tap changed nothing.
    Ignored,
}

/// Whether the round still accepts taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Active,
    Complete,
}

/// Progress through a single target letter.
///
/// Deserializing rejects marks outside the target pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundRepr")]
pub struct Round {
    target: Letter,
    marked: DotSet,
}

/// Unchecked wire form of a [`Round`].
#[derive(Deserialize)]
struct RoundRepr {
    target: Letter,
    marked: DotSet,
}

impl TryFrom<RoundRepr> for Round {
    type Error = RulesError;

    fn try_from(repr: RoundRepr) -> Result<Self, Self::Error> {
        if !repr.marked.is_subset(repr.target.pattern()) {
            return Err(RulesError::MarksOutsidePattern {
                target: repr.target,
                marked: repr.marked,
            });
        }
        Ok(Self {
            target: repr.target,
            marked: repr.marked,
        })
    }
}

impl Round {
    /// Start a round for `target` with nothing marked.
    pub fn new(target: Letter) -> Self {
        Self {
            target,
            marked: DotSet::EMPTY,
        }
    }

    /// Reset in place for a new target.
    pub fn start(&mut self, target: Letter) {
        *self = Self::new(target);
    }

    pub fn target(&self) -> Letter {
        self.target
    }

    /// The dots the target letter needs.
    pub fn pattern(&self) -> DotSet {
        self.target.pattern()
    }

    /// Dots marked correct so far.
    pub fn current_marks(&self) -> DotSet {
        self.marked
    }

    pub fn required_count(&self) -> usize {
        self.pattern().len()
    }

    /// Required dots not yet marked.
    pub fn remaining(&self) -> DotSet {
        self.pattern().difference(self.marked)
    }

    pub fn state(&self) -> RoundState {
        if self.marked == self.pattern() {
            RoundState::Complete
        } else {
            RoundState::Active
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == RoundState::Complete
    }

    /// Apply one tap.
    pub fn select_dot(&mut self, position: DotPosition) -> Signal {
        if self.is_complete() {
            return Signal::Ignored;
        }

        if !self.pattern().contains(position) {
            return Signal::Mistake;
        }

        self.marked.insert(position);
        if self.is_complete() {
            Signal::Complete
        } else {
            Signal::Progress
        }
    }

    /// Apply a tap given as a raw index, rejecting indices outside the cell.
    pub fn select_raw(&mut self, index: u8) -> Result<Signal, RulesError> {
        let position = DotPosition::new(index)?;
        Ok(self.select_dot(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn pos(index: u8) -> DotPosition {
        DotPosition::new(index).unwrap()
    }

    fn permutations(items: &[DotPosition]) -> Vec<Vec<DotPosition>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_new_round() {
        let round = Round::new(letter('z'));
        assert_eq!(round.current_marks(), DotSet::EMPTY);
        assert_eq!(round.required_count(), 4);
        assert_eq!(round.state(), RoundState::Active);
        assert_eq!(round.remaining(), round.pattern());
    }

    #[test]
    fn test_letter_a_completes_in_one_tap() {
        let mut round = Round::new(letter('a'));
        assert_eq!(round.select_dot(pos(0)), Signal::Complete);
        assert!(round.is_complete());
    }

    #[test]
    fn test_letter_b_mistake_then_progress_then_complete() {
        let mut round = Round::new(letter('b'));

        assert_eq!(round.select_dot(pos(1)), Signal::Mistake);
        assert_eq!(round.current_marks(), DotSet::EMPTY);

        assert_eq!(round.select_dot(pos(0)), Signal::Progress);
        assert_eq!(round.select_dot(pos(2)), Signal::Complete);
    }

    #[test]
    fn test_letter_z_in_reverse_order() {
        let mut round = Round::new(letter('z'));
        let signals: Vec<_> = [5, 4, 3, 0]
            .into_iter()
            .map(|i| round.select_dot(pos(i)))
            .collect();

        assert_eq!(
            signals,
            vec![
                Signal::Progress,
                Signal::Progress,
                Signal::Progress,
                Signal::Complete
            ]
        );
    }

    #[test]
    fn test_every_letter_completes_in_any_order() {
        for target in Letter::all() {
            let required: Vec<_> = target.pattern().iter().collect();
            for order in permutations(&required) {
                let mut round = Round::new(target);
                let signals: Vec<_> = order.iter().map(|p| round.select_dot(*p)).collect();

                let completes = signals.iter().filter(|s| **s == Signal::Complete).count();
                assert_eq!(completes, 1, "{target} via {order:?}");
                assert!(!signals.contains(&Signal::Mistake));
                assert_eq!(signals.last(), Some(&Signal::Complete));
                assert_eq!(round.current_marks(), target.pattern());
            }
        }
    }

    #[test]
    fn test_wrong_dot_keeps_marks_for_every_letter() {
        for target in Letter::all() {
            for position in DotPosition::ALL {
                if target.pattern().contains(position) {
                    continue;
                }
                let mut round = Round::new(target);
                let first = target.pattern().iter().next().unwrap();
                round.select_dot(first);
                let before = round.current_marks();

                if round.is_complete() {
                    assert_eq!(round.select_dot(position), Signal::Ignored);
                } else {
                    assert_eq!(round.select_dot(position), Signal::Mistake);
                    assert_eq!(round.state(), RoundState::Active);
                }
                assert_eq!(round.current_marks(), before);

                let mut fresh = Round::new(target);
                assert_eq!(fresh.select_dot(position), Signal::Mistake);
                assert_eq!(fresh.current_marks(), DotSet::EMPTY);
            }
        }
    }

    #[test]
    fn test_retap_does_not_double_count() {
        let mut round = Round::new(letter('g'));

        assert_eq!(round.select_dot(pos(0)), Signal::Progress);
        assert_eq!(round.select_dot(pos(0)), Signal::Progress);
        assert_eq!(round.select_dot(pos(0)), Signal::Progress);
        assert_eq!(round.current_marks().len(), 1);
        assert_eq!(round.state(), RoundState::Active);

        round.select_dot(pos(1));
        round.select_dot(pos(2));
        assert_eq!(round.select_dot(pos(3)), Signal::Complete);
    }

    #[test]
    fn test_complete_is_not_reemitted() {
        let mut round = Round::new(letter('c'));
        round.select_dot(pos(0));
        assert_eq!(round.select_dot(pos(1)), Signal::Complete);

        let marks = round.current_marks();
        assert_eq!(round.select_dot(pos(1)), Signal::Ignored);
        assert_eq!(round.select_dot(pos(5)), Signal::Ignored);
        assert_eq!(round.current_marks(), marks);
    }

    #[test]
    fn test_mistakes_do_not_lose_progress() {
        let mut round = Round::new(letter('y'));
        round.select_dot(pos(0));
        round.select_dot(pos(1));

        for _ in 0..10 {
            assert_eq!(round.select_dot(pos(2)), Signal::Mistake);
        }
        assert_eq!(round.current_marks().len(), 2);
        assert_eq!(round.remaining().len(), 3);
    }

    #[test]
    fn test_start_resets_for_new_letter() {
        let mut round = Round::new(letter('a'));
        round.select_dot(pos(0));
        assert!(round.is_complete());

        round.start(letter('q'));
        assert_eq!(round.target(), letter('q'));
        assert_eq!(round.current_marks(), DotSet::EMPTY);
        assert_eq!(round.required_count(), 5);
        assert_eq!(round.state(), RoundState::Active);
    }

    #[test]
    fn test_select_raw_rejects_out_of_range() {
        let mut round = Round::new(letter('b'));
        assert_eq!(round.select_raw(6), Err(RulesError::InvalidDotPosition(6)));
        assert_eq!(round.current_marks(), DotSet::EMPTY);
        assert_eq!(round.select_raw(0), Ok(Signal::Progress));
    }

    #[test]
    fn test_deserialize_keeps_valid_progress() {
        let mut round: Round =
            serde_json::from_str(r#"{"target":"z","marked":[0,5]}"#).unwrap();
        assert_eq!(round.state(), RoundState::Active);
        assert_eq!(round.select_dot(pos(3)), Signal::Progress);
        assert_eq!(round.select_dot(pos(4)), Signal::Complete);

        let json = serde_json::to_string(&round).unwrap();
        let back: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(back, round);
        assert!(back.is_complete());
    }

    #[test]
    fn test_deserialize_rejects_marks_outside_pattern() {
        // 'b' needs {0, 2}; 1, 3 and 5 could never be marked by taps.
        assert!(serde_json::from_str::<Round>(r#"{"target":"b","marked":[1,3,5]}"#).is_err());
        // Same count as 'a' needs, wrong dot.
        assert!(serde_json::from_str::<Round>(r#"{"target":"a","marked":[5]}"#).is_err());

        let repr = RoundRepr {
            target: letter('a'),
            marked: DotSet::try_from_indices(&[5]).unwrap(),
        };
        assert_eq!(
            Round::try_from(repr),
            Err(RulesError::MarksOutsidePattern {
                target: letter('a'),
                marked: DotSet::try_from_indices(&[5]).unwrap(),
            })
        );
    }

    #[test]
    fn test_complete_means_exactly_the_pattern() {
        for target in Letter::all() {
            let mut round = Round::new(target);
            for position in target.pattern().iter() {
                assert!(!round.is_complete());
                round.select_dot(position);
            }
            assert!(round.is_complete());
            assert_eq!(round.current_marks(), round.pattern());
            assert!(round.remaining().is_empty());
        }
    }
}
