//! Derived statistics
//!
//! Bill James' Pythagorean expectation: estimate expected wins/losses from
//! a run differential.

use serde::Serialize;

/// Conventional refinement of the original exponent of 2
pub const DEFAULT_EXPONENT: f64 = 1.83;

/// Expected wins/losses derived from runs scored and allowed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PythagoreanExpectation {
    pub pythagorean_wins: u32,
    pub pythagorean_losses: u32,
    pub pythagorean_win_pct: f64,
}

impl PythagoreanExpectation {
    /// The zeroed result returned for degenerate inputs
    pub fn zeroed() -> Self {
        Self {
            pythagorean_wins: 0,
            pythagorean_losses: 0,
            pythagorean_win_pct: 0.0,
        }
    }
}

/// Compute the Pythagorean expectation for a run differential.
///
/// `win_pct = rs^exp / (rs^exp + ra^exp)`, wins rounded, losses the exact
/// complement of `games_played`. Non-positive runs or games yield the
/// zeroed result rather than an error.
pub fn pythagorean_expectation(
    runs_scored: i64,
    runs_allowed: i64,
    games_played: i64,
    exponent: f64,
) -> PythagoreanExpectation {
    if runs_scored <= 0 || runs_allowed <= 0 || games_played <= 0 {
        return PythagoreanExpectation::zeroed();
    }

    let rs_exp = (runs_scored as f64).powf(exponent);
    let ra_exp = (runs_allowed as f64).powf(exponent);
    let win_pct = rs_exp / (rs_exp + ra_exp);

    let wins = (win_pct * games_played as f64).round() as u32;
    let losses = games_played as u32 - wins;

    PythagoreanExpectation {
        pythagorean_wins: wins,
        pythagorean_losses: losses,
        pythagorean_win_pct: win_pct,
    }
}
