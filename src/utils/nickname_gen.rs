//! # 닉네임 생성기
//!
//! `{형용사}_{동물}_{0-999}` 형태의 URL-safe 닉네임을 생성합니다.
//! 후보가 엄격한 닉네임 문법에 맞고, 호출자가 제공한 고유성 검사를 통과할 때까지
//! 다시 뽑습니다.
//!
//! 조합 수는 5 × 5 × 1000 = 25,000개입니다. [`generate_unique_nickname`]은 재시도
//! 상한이 없으므로 고유성 검사가 끝내 `true`를 반환하지 않으면 반환하지 않습니다.
//! 상한이 필요한 호출자는 [`try_generate_unique_nickname`]을 사용합니다.
//!
//! ```rust,ignore
//! use user_profile_schemas::utils::nickname_gen::{generate_nickname, generate_unique_nickname};
//!
//! let nickname = generate_nickname();              // 예: "jolly_koala_417"
//! let taken = ["brave_fox_1".to_string()];
//! let unique = generate_unique_nickname(|n| !taken.iter().any(|t| t == n));
//! ```

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::errors::{AppError, AppResult};
use crate::utils::validators::is_strict_nickname;

/// 닉네임 앞부분에 쓰이는 형용사 목록
pub const ADJECTIVES: [&str; 5] = ["clever", "jolly", "brave", "sly", "gentle"];

/// 닉네임 가운데에 쓰이는 동물 목록
pub const ANIMALS: [&str; 5] = ["panda", "fox", "raccoon", "koala", "lion"];

/// 닉네임 끝 숫자의 최댓값 (포함)
pub const MAX_SUFFIX: u16 = 999;

/// 생성 가능한 서로 다른 닉네임의 수 (5 × 5 × 1000)
pub const NICKNAME_SPACE: usize = ADJECTIVES.len() * ANIMALS.len() * (MAX_SUFFIX as usize + 1);

/// 고유성 검사 없이 닉네임 하나를 생성합니다.
pub fn generate_nickname() -> String {
    generate_unique_nickname(|_| true)
}

/// 고유성 검사를 통과하는 닉네임을 생성합니다.
///
/// 재시도 횟수에 상한이 없습니다. `is_unique`가 항상 `false`를 반환하면
/// 이 함수는 반환하지 않습니다.
pub fn generate_unique_nickname<F>(is_unique: F) -> String
where
    F: FnMut(&str) -> bool,
{
    generate_nickname_with(&mut rand::thread_rng(), is_unique)
}

/// 주어진 난수 생성기로 고유성 검사를 통과하는 닉네임을 생성합니다.
///
/// 시드를 고정한 RNG로 결정적인 결과가 필요할 때 사용합니다.
pub fn generate_nickname_with<R, F>(rng: &mut R, mut is_unique: F) -> String
where
    R: Rng + ?Sized,
    F: FnMut(&str) -> bool,
{
    loop {
        if let Some(nickname) = next_candidate(rng, &mut is_unique) {
            return nickname;
        }
    }
}

/// 최대 `max_attempts`개의 후보만 시도하는 닉네임 생성
///
/// # Errors
///
/// * `AppError::ConflictError` - 모든 후보가 거절된 경우
pub fn try_generate_unique_nickname<F>(is_unique: F, max_attempts: usize) -> AppResult<String>
where
    F: FnMut(&str) -> bool,
{
    try_generate_nickname_with(&mut rand::thread_rng(), is_unique, max_attempts)
}

/// [`try_generate_unique_nickname`]의 RNG 주입 버전
pub fn try_generate_nickname_with<R, F>(
    rng: &mut R,
    mut is_unique: F,
    max_attempts: usize,
) -> AppResult<String>
where
    R: Rng + ?Sized,
    F: FnMut(&str) -> bool,
{
    for _ in 0..max_attempts {
        if let Some(nickname) = next_candidate(rng, &mut is_unique) {
            return Ok(nickname);
        }
    }

    log::warn!("No unique nickname found after {} attempts", max_attempts);
    Err(AppError::ConflictError(format!(
        "Could not generate a unique nickname after {} attempts",
        max_attempts
    )))
}

/// 후보 하나를 뽑아 문법과 고유성 검사를 통과하면 반환합니다.
fn next_candidate<R, F>(rng: &mut R, is_unique: &mut F) -> Option<String>
where
    R: Rng + ?Sized,
    F: FnMut(&str) -> bool,
{
    let adjective = ADJECTIVES.choose(rng)?;
    let animal = ANIMALS.choose(rng)?;
    let number = rng.gen_range(0..=MAX_SUFFIX);
    let nickname = format!("{}_{}_{}", adjective, animal, number);

    if !is_strict_nickname(&nickname) {
        log::debug!("Nickname candidate rejected by grammar: {}", nickname);
        return None;
    }

    if !is_unique(&nickname) {
        log::debug!("Nickname candidate already taken: {}", nickname);
        return None;
    }

    Some(nickname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn assert_shape(nickname: &str) {
        let parts: Vec<&str> = nickname.split('_').collect();
        assert_eq!(parts.len(), 3, "unexpected shape: {}", nickname);
        assert!(ADJECTIVES.contains(&parts[0]));
        assert!(ANIMALS.contains(&parts[1]));
        let number: u16 = parts[2].parse().unwrap();
        assert!(number <= MAX_SUFFIX);
        assert!(is_strict_nickname(nickname));
    }

    #[test]
    fn test_generate_nickname_shape() {
        for _ in 0..200 {
            assert_shape(&generate_nickname());
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let first = generate_nickname_with(&mut StdRng::seed_from_u64(42), |_| true);
        let second = generate_nickname_with(&mut StdRng::seed_from_u64(42), |_| true);

        assert_eq!(first, second);
        assert_shape(&first);
    }

    #[test]
    fn test_uniqueness_predicate_is_respected() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..100 {
            let nickname = generate_nickname_with(&mut rng, |n| !seen.contains(n));
            assert!(seen.insert(nickname));
        }
    }

    #[test]
    fn test_predicate_sees_every_rejected_candidate() {
        let mut calls = 0;
        let nickname = generate_unique_nickname(|_| {
            calls += 1;
            calls > 3
        });

        assert_eq!(calls, 4);
        assert_shape(&nickname);
    }

    #[test]
    fn test_bounded_generation_gives_up() {
        let mut calls = 0;
        let result = try_generate_unique_nickname(
            |_| {
                calls += 1;
                false
            },
            25,
        );

        assert_eq!(calls, 25);
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[test]
    fn test_bounded_generation_with_zero_attempts() {
        let result = try_generate_unique_nickname(|_| true, 0);

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[test]
    fn test_nickname_space_size() {
        assert_eq!(NICKNAME_SPACE, 25_000);
    }

    #[test]
    fn test_bounded_generation_succeeds() {
        let mut rng = StdRng::seed_from_u64(1);
        let nickname = try_generate_nickname_with(&mut rng, |n| n.contains('_'), 10).unwrap();

        assert_shape(&nickname);
    }
}
