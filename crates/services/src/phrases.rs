//! Fixed pools of encouragement phrases, used as the instant response and as
//! the fallback whenever the generative service is unavailable.

use rand::Rng;

pub const POSITIVE: [&str; 6] = [
    "Wow! That's exactly right! You really get this! 🎉",
    "Correct! You must be a math genius! 🌟",
    "Great job! The next one will be a piece of cake! 💪",
    "Wonderful! Nom-Nom the fraction is cheering for you! 🍊",
    "Clap clap clap! Spot on! You're the best! 👍",
    "Amazing! You're getting better every problem! ✨",
];

pub const RETRY: [&str; 5] = [
    "So close! Take your time and think it through again! 🧐",
    "It's okay! Look closely at the picture and you'll see it! 💪",
    "Almost there! Try counting the groups one more time! 🔍",
    "Mistakes are how we learn! Give it another go! ✨",
    "Think just a little longer and you'll find it! 🍀",
];

/// Uniform draw from the matching pool.
pub fn pick_local_feedback<R: Rng + ?Sized>(rng: &mut R, is_correct: bool) -> String {
    let pool: &[&str] = if is_correct { &POSITIVE } else { &RETRY };
    pool[rng.random_range(0..pool.len())].to_string()
}
