//! 사용자 프로필 스키마 명령행 도구
//!
//! JSON 페이로드를 특정 표현으로 검증하거나 무작위 닉네임을 생성합니다.
//!
//! ```bash
//! # 닉네임 5개 생성 (실행 내 중복 없음)
//! user_profile_schemas nickname 5
//!
//! # 파일 또는 표준 입력의 JSON을 수정 요청으로 검증
//! user_profile_schemas validate update payload.json
//! echo '{"bio": "hi"}' | user_profile_schemas validate update
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::process::ExitCode;

use dotenv::dotenv;
use env_logger::Env;
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use user_profile_schemas::config::{Environment, NicknameConfig};
use user_profile_schemas::core::errors::{AppError, AppResult, ErrorContext};
use user_profile_schemas::domain::dto::users::request::{
    CreateUserRequest, LoginRequest, UpdateUserRequest,
};
use user_profile_schemas::domain::dto::users::response::{
    ErrorResponse, UserListResponse, UserResponse,
};
use user_profile_schemas::domain::dto::{ValidateRequest, parse_request};
use user_profile_schemas::utils::nickname_gen::{NICKNAME_SPACE, try_generate_unique_nickname};

const USAGE: &str = "usage: user_profile_schemas nickname [COUNT] | \
                     user_profile_schemas validate <create|update|login|response|list> [FILE]";

fn main() -> ExitCode {
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(msg) => info!("{}", msg),
        Err(msg) => debug!("{}", msg),
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            info!("명령 실패: {}", e);
            match serde_json::to_string_pretty(&ErrorResponse::from(&e)) {
                Ok(body) => println!("{}", body),
                Err(_) => eprintln!("{}", e),
            }
            ExitCode::FAILURE
        }
    }
}

/// 하위 명령을 실행하고 표준 출력에 쓸 문자열을 반환합니다.
fn run(args: &[String]) -> AppResult<String> {
    match args.first().map(String::as_str) {
        Some("nickname") => generate_nicknames(args.get(1).map(String::as_str)),
        Some("validate") => {
            let kind = args
                .get(1)
                .ok_or_else(|| AppError::ValidationError(USAGE.to_string()))?;
            let input = read_input(args.get(2).map(String::as_str))?;
            validate_payload(kind, &input)
        }
        _ => Err(AppError::ValidationError(USAGE.to_string())),
    }
}

/// 실행 내에서 서로 겹치지 않는 닉네임을 `count`개 생성합니다.
fn generate_nicknames(count: Option<&str>) -> AppResult<String> {
    let count = match count {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|e| AppError::ValidationError(format!("Invalid COUNT {:?}: {}", raw, e)))?,
        None => 1,
    };

    if count > NICKNAME_SPACE {
        return Err(AppError::ValidationError(format!(
            "COUNT must not exceed {} (number of distinct nicknames)",
            NICKNAME_SPACE
        )));
    }

    let max_attempts = NicknameConfig::max_attempts();
    let mut issued: HashSet<String> = HashSet::new();
    let mut nicknames = Vec::new();

    for _ in 0..count {
        let nickname = try_generate_unique_nickname(|n| !issued.contains(n), max_attempts)?;
        issued.insert(nickname.clone());
        nicknames.push(nickname);
    }

    info!("닉네임 {}개 생성 완료", nicknames.len());
    Ok(nicknames.join("\n"))
}

/// 표현 이름에 맞춰 페이로드를 검증합니다.
fn validate_payload(kind: &str, input: &str) -> AppResult<String> {
    match kind {
        "create" => validate_as::<CreateUserRequest>(input),
        "update" => validate_as::<UpdateUserRequest>(input),
        "login" => validate_as::<LoginRequest>(input),
        "response" => validate_as::<UserResponse>(input),
        "list" => validate_as::<UserListResponse>(input),
        other => Err(AppError::ValidationError(format!(
            "Unknown representation {:?}. {}",
            other, USAGE
        ))),
    }
}

fn validate_as<T>(input: &str) -> AppResult<String>
where
    T: DeserializeOwned + ValidateRequest + Serialize,
{
    let payload = parse_request::<T>(input)?;
    serde_json::to_string_pretty(&payload).context("Failed to serialize payload")
}

/// 파일 경로가 주어지면 파일을, 아니면 표준 입력을 읽습니다.
fn read_input(path: Option<&str>) -> AppResult<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            Ok(buffer)
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과 메시지를 반환하고, 기록은 호출자가 합니다.
fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let (file, result) = match profile.as_str() {
        "prod" => (".env.prod", dotenv::from_filename(".env.prod").map(|_| ())),
        "dev" => (".env.dev", dotenv::from_filename(".env.dev").map(|_| ())),
        _ => (".env", dotenv().map(|_| ())),
    };

    match result {
        Ok(()) => Ok(format!("{} 파일 로드 됨 (profile: {})", file, profile)),
        Err(e) => Err(format!("{} 파일 로드 실패 (profile: {}): {}", file, profile, e)),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경에 따른 기본 필터를 사용합니다.
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
    debug!("실행 환경: {:?}", environment);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_nickname_count_above_space_is_rejected() {
        let result = run(&args(&["nickname", "100000000000000000"]));

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_nickname_count_just_above_space_is_rejected() {
        let count = (NICKNAME_SPACE + 1).to_string();
        let result = run(&args(&["nickname", &count]));

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_nickname_count_must_be_a_number() {
        assert!(matches!(
            run(&args(&["nickname", "many"])),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_nickname_generates_distinct_lines() {
        let output = run(&args(&["nickname", "20"])).unwrap();
        let lines: HashSet<&str> = output.lines().collect();

        assert_eq!(lines.len(), 20);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(matches!(run(&args(&["frobnicate"])), Err(AppError::ValidationError(_))));
        assert!(matches!(run(&[]), Err(AppError::ValidationError(_))));
    }
}
